//! Blaster Expand binary.

use std::process::ExitCode;

use anyhow::Context;
use blaster_expand::{Cli, Settings, expand_all, load_build_config, module_context, render};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli).context("failed to load settings")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&settings.log).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_build_config(&settings, &cli.defines)
        .await
        .context("failed to load vendor variables")?;
    let mut ctx = module_context(&settings, config);

    let inputs = if cli.inputs.is_empty() {
        read_stdin_lines().await?
    } else {
        cli.inputs.clone()
    };

    let records = expand_all(&mut ctx, &settings.namespace, &inputs);
    let rendered = render(&records, cli.json)?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(rendered.as_bytes()).await?;
    stdout.flush().await?;

    let mut failed = false;
    for error in records.iter().filter_map(|record| record.error.as_deref()) {
        eprintln!("error: {error}");
        failed = true;
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut inputs = Vec::new();
    while let Some(line) = lines.next_line().await? {
        inputs.push(line);
    }
    Ok(inputs)
}
