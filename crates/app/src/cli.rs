//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Expand blaster vendor variables in build property strings.
///
/// Bound `$(NAME)` placeholders are replaced by their vendor values; unbound
/// ones are left as `$(NAME)` for the build system's own expansion pass.
#[derive(Debug, Clone, Parser)]
#[command(name = "blaster-expand", version)]
pub struct Cli {
    /// Settings file (defaults to ./blaster-expand.{toml,yaml,json} when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Vendor variables file (JSON or YAML)
    #[arg(short = 'f', long, value_name = "FILE")]
    pub vendor_vars: Option<PathBuf>,

    /// Vendor namespace to expand against
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Module name used in diagnostics
    #[arg(short, long)]
    pub module: Option<String>,

    /// Additional binding in the selected namespace
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_define)]
    pub defines: Vec<(String, String)>,

    /// Print a JSON report instead of one expansion per line
    #[arg(long)]
    pub json: bool,

    /// Property strings to expand; read one per line from stdin when omitted
    pub inputs: Vec<String>,
}

fn parse_define(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {raw:?}"))
}
