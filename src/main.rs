use std::io::Read;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ragchunk::config::{Cli, OutputFormat};
use ragchunk::{ChunkOutput, Chunker};

fn setup_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input: {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_text(output: &ChunkOutput) {
    for (i, chunk) in output.chunks.iter().enumerate() {
        println!(
            "--- chunk {} [{} tokens, {:?}{}] ---",
            i + 1,
            chunk.token_estimate,
            chunk.origin,
            if chunk.overlap_bytes > 0 {
                format!(", {} bytes overlap", chunk.overlap_bytes)
            } else {
                String::new()
            }
        );
        println!("{}", chunk.text);
    }

    let count = output.chunks.len();
    println!(
        "=== {} chunks, {} tokens total, avg {:.1} tokens/chunk ===",
        count,
        output.total_tokens(),
        if count > 0 {
            output.total_tokens() as f64 / count as f64
        } else {
            0.0
        }
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = cli.chunking_config()?;
    let chunker = Chunker::new(config)
        .context("Invalid chunking configuration")?
        .with_estimator(cli.estimator.build());

    let text = read_input(cli.input.as_deref())?;

    let start = Instant::now();
    let output = chunker.chunk(&text);
    info!(
        chunks = output.chunks.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "chunking complete"
    );

    for notice in &output.notices {
        eprintln!("notice: {}", notice);
    }

    match cli.format {
        OutputFormat::Text => print_text(&output),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize chunks")?
        ),
    }

    Ok(())
}
