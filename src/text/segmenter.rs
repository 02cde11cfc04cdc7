//! Break-aware text segmentation.
//!
//! All lengths are counted in `char`s (Unicode scalar values), never bytes,
//! because the gateway limits request text by character count.

use std::ops::Range;

use log::debug;

/// Maximum characters per chunk.
pub const MAX_CHUNK_LEN: usize = 300;

/// Break characters in priority order.
///
/// The first character type that occurs anywhere in the remaining text wins,
/// even if a lower-priority type occurs earlier.
pub const BREAK_SET: &[char] = &['。', '！', '？', '”', '.', '!', '?', ',', '"'];

/// Markers that make a whole line a comment.
const COMMENT_MARKERS: &[char] = &['#', ';'];

/// UTF-8 byte order mark, which `str::trim` leaves in place.
const BOM: char = '\u{feff}';

/// Chunk length budget and break characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakPolicy {
    pub max_len: usize,
    pub break_set: &'static [char],
}

impl Default for BreakPolicy {
    fn default() -> Self {
        Self {
            max_len: MAX_CHUNK_LEN,
            break_set: BREAK_SET,
        }
    }
}

impl BreakPolicy {
    /// End (exclusive) of the next segment starting at `from`, using the
    /// priority-ranked search. `None` when no break character remains.
    pub fn next_break(&self, line: &[char], from: usize) -> Option<usize> {
        let rest = &line[from..];
        self.break_set
            .iter()
            .find_map(|b| rest.iter().position(|c| c == b))
            .map(|pos| from + pos + 1)
    }

    /// True when `line` contains any break character.
    pub fn has_break(&self, line: &[char]) -> bool {
        line.iter().any(|c| self.break_set.contains(c))
    }

    /// End (exclusive) of the rightmost break character of any type within
    /// the budget window starting at `from`.
    fn last_break_in_window(&self, line: &[char], from: usize) -> Option<usize> {
        let end = (from + self.max_len).min(line.len());
        line[from..end]
            .iter()
            .rposition(|c| self.break_set.contains(c))
            .map(|pos| from + pos + 1)
    }
}

/// Scan position within one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// End of the last accumulated segment.
    pub cursor: usize,
    /// Characters accumulated since `chunk_start`.
    pub run_len: usize,
    /// Start of the chunk being built.
    pub chunk_start: usize,
}

/// Result of one scan step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Segment absorbed into the current run.
    Extend(ScanState),
    /// Chunk complete; scanning continues from the new state.
    Emit(Range<usize>, ScanState),
    /// Final chunk of the line.
    Finish(Range<usize>),
    /// Nothing left.
    Done,
}

impl ScanState {
    fn restart_at(pos: usize) -> Self {
        Self {
            cursor: pos,
            run_len: 0,
            chunk_start: pos,
        }
    }

    /// Advance the scan by one segment.
    pub fn step(&self, line: &[char], policy: &BreakPolicy) -> Transition {
        let len = line.len();
        let remaining = len - self.chunk_start;

        if remaining == 0 {
            return Transition::Done;
        }
        if remaining <= policy.max_len {
            return Transition::Finish(self.chunk_start..len);
        }

        let next_break = policy.next_break(line, self.cursor);
        let seg_end = next_break.unwrap_or(len);
        let seg_len = seg_end - self.cursor;

        if self.run_len + seg_len < policy.max_len {
            return Transition::Extend(ScanState {
                cursor: seg_end,
                run_len: self.run_len + seg_len,
                chunk_start: self.chunk_start,
            });
        }

        if self.run_len > 0 {
            return Transition::Emit(
                self.chunk_start..self.cursor,
                Self::restart_at(self.cursor),
            );
        }

        // A single segment overflows an empty run. Only a line with no break
        // character at all may produce an oversized chunk.
        if !policy.has_break(line) {
            return Transition::Finish(self.chunk_start..len);
        }
        let cut = policy
            .last_break_in_window(line, self.cursor)
            .unwrap_or(self.cursor + policy.max_len.max(1));
        Transition::Emit(self.chunk_start..cut, Self::restart_at(cut))
    }
}

/// Split one trimmed line into chunks.
pub fn segment_line(line: &str, policy: &BreakPolicy) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();

    if chars.is_empty() {
        return Vec::new();
    }
    if chars.len() < policy.max_len {
        return vec![line.to_string()];
    }

    let mut chunks = Vec::new();
    let mut state = ScanState::default();

    loop {
        match state.step(&chars, policy) {
            Transition::Extend(next) => state = next,
            Transition::Emit(range, next) => {
                chunks.push(chars[range].iter().collect());
                state = next;
            }
            Transition::Finish(range) => {
                chunks.push(chars[range].iter().collect());
                break;
            }
            Transition::Done => break,
        }
    }

    chunks
}

fn is_speakable(line: &str) -> bool {
    !line.is_empty() && !line.starts_with(COMMENT_MARKERS)
}

/// Split raw text into chunks using the given policy.
pub fn segment_with(raw: &str, policy: &BreakPolicy) -> Vec<String> {
    let raw = raw.strip_prefix(BOM).unwrap_or(raw);
    let mut chunks = Vec::new();

    for (i, line) in raw.lines().map(str::trim).enumerate() {
        if !is_speakable(line) {
            continue;
        }
        let line_chunks = segment_line(line, policy);
        debug!("line {}: {} chunk(s)", i + 1, line_chunks.len());
        chunks.extend(line_chunks);
    }

    chunks
}

/// Split raw text into chunks of at most [`MAX_CHUNK_LEN`] characters.
pub fn segment(raw: &str) -> Vec<String> {
    segment_with(raw, &BreakPolicy::default())
}
