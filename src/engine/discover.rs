//! Input discovery and output naming.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::VoiceConfig;

/// Extension of narration input files.
pub const INPUT_EXTENSION: &str = "txt";

/// List the `.txt` files directly inside `dir`, sorted by name.
pub fn discover_inputs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(INPUT_EXTENSION) {
            inputs.push(path);
        }
    }

    inputs.sort();
    Ok(inputs)
}

/// Output path for `input`: same directory, stem plus the audio format.
pub fn output_path_for(input: &Path, voice: &VoiceConfig) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    input.with_file_name(format!("{stem}.{}", voice.extension()))
}
