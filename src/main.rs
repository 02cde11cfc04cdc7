//! txt2speech CLI entry point.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use txt2speech::backend::{HttpSynthesizer, create_synthesizer};
use txt2speech::cli::Args;
use txt2speech::config::{VoiceConfig, load_config};
use txt2speech::engine::{Assembler, discover_inputs, output_path_for};
use txt2speech::text::segment;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_filter())).init();

    let voice = load_config(&args.config).context("Failed to load voice configuration")?;
    info!("Loaded config from {}: {:?}", args.config.display(), voice);

    let inputs = discover_inputs(&args.dir)
        .with_context(|| format!("Failed to scan directory: {}", args.dir.display()))?;

    if inputs.is_empty() {
        println!("No .txt files found in {}", args.dir.display());
        return Ok(());
    }

    let synthesizer = create_synthesizer(&args.endpoint);
    info!(
        "Gateway {} (delay {:?}, on error: {})",
        synthesizer.endpoint(),
        synthesizer.delay(),
        args.on_error.as_str()
    );
    let assembler = Assembler::new(synthesizer).with_policy(args.on_error.into());

    for input in &inputs {
        synthesize_file(&assembler, &voice, input)?;
    }

    Ok(())
}

fn synthesize_file(
    assembler: &Assembler<HttpSynthesizer>,
    voice: &VoiceConfig,
    input: &Path,
) -> Result<()> {
    let name = input.display();

    println!("Analyzing {name}...");
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {name}"))?;
    let chunks = segment(&text);
    println!("Done analyzing {name} ({} chunks)", chunks.len());

    let output = output_path_for(input, voice);

    let pb = ProgressBar::new(chunks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{prefix} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .context("Invalid progress template")?
            .progress_chars("#>-"),
    );
    pb.set_prefix(format!("Synthesizing {}", output.display()));

    let report = assembler
        .write_file(&chunks, voice, &output, |job| {
            pb.set_position((job.index + 1) as u64);
            pb.set_message(format!("{:5.2}%", job.progress_percent()));
        })
        .with_context(|| format!("Failed to synthesize: {}", output.display()))?;

    pb.finish_and_clear();

    if report.is_complete() {
        println!("Synthesized {}", output.display());
    } else {
        println!(
            "Synthesized {} ({} of {} chunks failed and were skipped)",
            output.display(),
            report.failed.len(),
            report.chunks_total
        );
    }
    println!("  Size: {} bytes", report.bytes_written);

    Ok(())
}
