//! Mock catalogue CLI
//!
//! # Usage
//!
//! ```bash
//! # Generate catalogue.jsonld from offerings.json in the current directory
//! mock-catalogue
//!
//! # Reproducible run with explicit paths
//! mock-catalogue generate --input data/offerings.json --output out/catalogue.jsonld --seed 42
//!
//! # List offerings in a generated catalogue
//! mock-catalogue list --catalogue out/catalogue.jsonld --json
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, FromArgMatches, Parser, Subcommand};

use sedimark_mock_catalogue::{list_offerings, logging, Catalogue, GenerateOptions, GeneratorConfig};

#[derive(Parser)]
#[command(name = "mock-catalogue")]
#[command(version)]
#[command(about = "Generate a mock SEDIMARK JSON-LD catalogue from offering records")]
struct Cli {
    /// Defaults to `generate` with default flags
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the catalogue from an offerings listing (default)
    Generate(GenerateArgs),

    /// List the offerings contained in a generated catalogue
    List {
        /// Catalogue file to read
        #[arg(short, long, default_value = "catalogue.jsonld")]
        catalogue: PathBuf,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Input offerings JSON (default: offerings.json)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSON-LD file (default: catalogue.jsonld)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for reproducible provider/image choices
    #[arg(long, env = "MOCK_CATALOGUE_SEED")]
    seed: Option<u64>,

    /// Base IRI for generated asset and offering ids
    #[arg(long, env = "MOCK_CATALOGUE_BASE_URL")]
    base_url: Option<String>,

    /// Pretty-print the output
    #[arg(long, overrides_with = "compact")]
    pretty: bool,

    /// Write compact JSON even when the config file sets `pretty: true`
    #[arg(long, overrides_with = "pretty")]
    compact: bool,
}

impl GenerateArgs {
    /// Arguments for a bare invocation: defaults plus environment variables
    fn from_env() -> Result<Self> {
        let matches = Self::augment_args(clap::Command::new("generate"))
            .try_get_matches_from(["generate"])?;
        Ok(Self::from_arg_matches(&matches)?)
    }

    /// CLI/env values over config file values over defaults
    fn resolve(self) -> Result<GenerateOptions> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        if self.input.is_some() {
            config.input = self.input;
        }
        if self.output.is_some() {
            config.output = self.output;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.base_url.is_some() {
            config.base_url = self.base_url;
        }
        if self.pretty {
            config.pretty = true;
        }
        if self.compact {
            config.pretty = false;
        }
        Ok(GenerateOptions::from(&config))
    }
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Some(Commands::Generate(args)) => cmd_generate(args),
        Some(Commands::List { catalogue, json }) => {
            cmd_list(catalogue, json, &mut std::io::stdout().lock())
        }
        None => GenerateArgs::from_env().and_then(cmd_generate),
    };

    ExitCode::from(exit_status(&result))
}

/// 0 on success, 1 (with the error chain on stderr) otherwise
fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    }
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let options = args.resolve()?;
    let report = options
        .run()
        .with_context(|| format!("generating catalogue from {}", options.input.display()))?;

    println!(
        "Wrote {} ({} records: {} assets, {} offerings, {} participants)",
        report.output.display(),
        report.records,
        report.summary.assets,
        report.summary.offerings,
        report.summary.participants
    );
    Ok(())
}

fn cmd_list(path: PathBuf, json: bool, out: &mut impl Write) -> Result<()> {
    let catalogue = Catalogue::from_file(&path)
        .with_context(|| format!("reading catalogue {}", path.display()))?;
    let entries = list_offerings(&catalogue);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }

    for entry in &entries {
        writeln!(out, "{}", entry.id)?;
        writeln!(out, "  title:    {}", entry.title.as_deref().unwrap_or("-"))?;
        writeln!(out, "  provider: {}", entry.provider.as_deref().unwrap_or("-"))?;
        writeln!(out, "  asset:    {}", entry.asset.as_deref().unwrap_or("-"))?;
        writeln!(out, "  created:  {}", entry.created.as_deref().unwrap_or("-"))?;
    }
    writeln!(out, "{} offering(s)", entries.len())?;
    Ok(())
}
