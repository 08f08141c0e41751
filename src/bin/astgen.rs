//! AST Generator CLI
//!
//! Writes the AST declarations for the configured grammar into a directory.
//!
//! Usage:
//!   astgen <output directory>
//!   astgen --check src/
//!   astgen --config grammar.toml --target rust src/

use std::path::PathBuf;
use std::process;

use astgen::{Drift, GenError, GeneratorConfig, Target, EXIT_USAGE};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "astgen")]
#[command(about = "Generate AST node declarations from a grammar table")]
#[command(version)]
struct Cli {
    /// Directory the declaration file is written to
    output_dir: PathBuf,

    /// Grammar configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target language, overriding the configuration
    #[arg(short, long, value_enum)]
    target: Option<Target>,

    /// Compare against the existing file instead of writing
    #[arg(long)]
    check: bool,

    /// Print the effective configuration and exit
    #[arg(long, conflicts_with = "check")]
    print_config: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            process::exit(0);
        }
        Err(e) => {
            let err = GenError::Usage(e.render().to_string());
            eprint!("{}", err);
            process::exit(err.exit_code());
        }
    };

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> astgen::Result<i32> {
    let mut config = GeneratorConfig::load_from(cli.config.as_deref())?;
    if let Some(target) = cli.target {
        config.output.target = target;
    }

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(0);
    }

    let output = astgen::generate_from_config(&config)?;

    if cli.check {
        return match astgen::check_output(&cli.output_dir, &output)? {
            Drift::UpToDate => {
                println!("✅ {} is up to date", cli.output_dir.join(&output.file_name).display());
                Ok(0)
            }
            Drift::Missing { diff } => {
                eprint!("{}", diff);
                eprintln!("❌ {} does not exist", cli.output_dir.join(&output.file_name).display());
                Ok(1)
            }
            Drift::Changed { diff } => {
                eprint!("{}", diff);
                eprintln!("❌ {} is out of date - rerun astgen", cli.output_dir.join(&output.file_name).display());
                Ok(1)
            }
        };
    }

    let path = astgen::write_output(&cli.output_dir, &output)?;
    println!("✅ Wrote {} ({} types)", path.display(), output.type_count);
    Ok(0)
}
