mod args;
mod commands;
mod config;
pub mod defaults;
mod logging;
mod printing;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use args::{DecodeArgs, DemoArgs, EncodeArgs};
use commands::{decode, demo, encode, schemes};
use config::CliConfig;

/// Linecode: NRZ, NRZI and Manchester line coding
///
/// Encodes bit strings into two-level (H/L) baseband signals and decodes
/// them back.
#[derive(Parser, Debug)]
#[command(name = "linecode")]
#[command(author, version, about = "Encodes and decodes bits with NRZ, NRZI and Manchester line codes", long_about = None)]
struct Cli {
    /// Number of threads to use when converting several inputs
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file with default scheme and NRZI reference level
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode bit strings into signals.
    Encode(EncodeArgs),

    /// Decode signals back into bit strings.
    Decode(DecodeArgs),

    /// Run one bit string through every line code.
    Demo(DemoArgs),

    /// List the available line codes.
    Schemes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    match cli.command {
        Commands::Encode(args) => {
            let strategy = config.resolve(args.scheme, args.initial);
            encode::encode_inputs(&args.inputs, strategy, args.output)?;
        }
        Commands::Decode(args) => {
            let strategy = config.resolve(args.scheme, None);
            decode::decode_inputs(&args.inputs, strategy, args.output)?;
        }
        Commands::Demo(args) => {
            let initial = config.initial_level(args.initial);
            let unit_width = usize::from(defaults::UNIT_WIDTH);
            demo::run_demo(&args.bits, initial, args.plot, unit_width)?;
        }
        Commands::Schemes => {
            schemes::list_schemes();
        }
    }

    Ok(())
}
