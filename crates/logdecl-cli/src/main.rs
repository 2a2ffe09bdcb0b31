use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use log::{LevelFilter, info};
use logdecl::generate::check_duplicates;
use logdecl::{GenerateOptions, SCHEMA_VERSION, generate, read_catalog};

#[derive(Parser)]
#[command(name = "logdecl")]
#[command(about = "Generate C++ log declarations from a log-message catalog", long_about = None)]
struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the message declarations header and, optionally, the log client interface
    Generate {
        /// Path to the catalog (.in) file
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,
        /// Output path for the MESSAGE_* declarations
        #[arg(value_name = "DECLARATIONS")]
        declarations: PathBuf,
        /// Output path for the LogClient interface
        #[arg(value_name = "INTERFACE")]
        interface: Option<PathBuf>,
        /// Fail when an identifier is defined more than once
        #[arg(long)]
        deny_duplicates: bool,
        /// Emit `Type argN` formal parameters in the interface
        #[arg(long)]
        named_parameters: bool,
    },
    /// Validate a catalog without writing anything
    Check {
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,
        #[arg(long)]
        deny_duplicates: bool,
    },
    /// Parse a catalog and emit JSON IR
    Parse {
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()))
        .format_timestamp(None)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            catalog,
            declarations,
            interface,
            deny_duplicates,
            named_parameters,
        } => {
            let mut options = GenerateOptions::new(&catalog, declarations);
            options.interface = interface;
            options.deny_duplicates = deny_duplicates;
            options.interface_options.named_parameters = named_parameters;

            let summary = generate(&options)
                .with_context(|| format!("failed to generate from {}", catalog.display()))?;
            info!("{}", summary.summary());
        }
        Commands::Check {
            catalog,
            deny_duplicates,
        } => {
            let records = read_catalog(&catalog)
                .with_context(|| format!("failed to check {}", catalog.display()))?;
            check_duplicates(&records, deny_duplicates)
                .with_context(|| format!("failed to check {}", catalog.display()))?;
            println!("{}: {} log messages", catalog.display(), records.len());
        }
        Commands::Parse { catalog } => {
            let records = read_catalog(&catalog)
                .with_context(|| format!("failed to parse {}", catalog.display()))?;
            let document = serde_json::json!({
                "schema_version": SCHEMA_VERSION,
                "messages": records,
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }
    Ok(())
}
