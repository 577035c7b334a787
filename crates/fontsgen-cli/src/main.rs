//! `fontsgen`: writes font accessor modules at build time.
//!
//! This is the explicit code-generation counterpart of the
//! `#[fonts_generator]` attribute, for projects that prefer checked-in or
//! build-script generated source over proc macros.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

mod generate;
mod manifest;

#[derive(Parser)]
#[command(name = "fontsgen", author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Renders font accessors as a Rust module
    Generate(GenerateArgs),
    /// Lists the built-in text style table
    Styles,
}

#[derive(Args)]
struct GenerateArgs {
    /// YAML manifest listing the font families
    #[arg(long, short, conflicts_with_all = ["type_name", "font_name"])]
    manifest: Option<PathBuf>,
    /// Name of the generated enum, for a single family
    #[arg(long)]
    type_name: Option<String>,
    /// Font family name, for a single family
    #[arg(long)]
    font_name: Option<String>,
    /// Path of the crate providing `Font` and `TextStyle`
    #[arg(long)]
    crate_path: Option<String>,
    /// Output file; writes to stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => {
            let source = generate::source_from_args(args.manifest, args.type_name, args.font_name)?;
            let output = generate::render(&source, args.crate_path.as_deref())?;
            match args.output {
                Some(path) => {
                    generate::write_if_changed(&path, &output)?;
                }
                None => std::io::stdout().write_all(output.as_bytes())?,
            }
        }
        Commands::Styles => print!("{}", generate::styles_listing()),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = execute(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
