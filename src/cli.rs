//! Command line interface for the test reporter

use clap::{Args, Parser, Subcommand};

use crate::config::{self, UploadFlags};
use crate::errors::AppResult;
use crate::version;

#[derive(Parser, Debug)]
#[command(name = "cc-test-reporter")]
#[command(about = "Report information about your CI builds to Code Climate")]
#[command(version)]
pub struct Cli {
    /// Run in debug mode
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload pre-formatted coverage payloads to Code Climate servers.
    UploadCoverage(UploadCoverageArgs),

    /// Show the test reporter version
    Version,
}

#[derive(Args, Debug, Default)]
pub struct UploadCoverageArgs {
    /// Input path, or "-" for standard input [default: coverage/codeclimate.json]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Reporter identifier [default: $CC_TEST_REPORTER_ID]
    #[arg(short = 'r', long = "id")]
    pub id: Option<String>,

    /// Endpoint to upload coverage information to
    /// [default: $CC_TEST_REPORTER_COVERAGE_ENDPOINT or https://codeclimate.com/test_reports]
    #[arg(short, long)]
    pub endpoint: Option<String>,
}

impl From<UploadCoverageArgs> for UploadFlags {
    fn from(args: UploadCoverageArgs) -> Self {
        UploadFlags {
            input: args.input,
            id: args.id,
            endpoint: args.endpoint,
        }
    }
}

pub fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Commands::UploadCoverage(args) => {
            let uploader = config::resolve(args.into(), config::process_env);
            let receipt = uploader.upload()?;
            println!("{}", receipt);
        }
        Commands::Version => println!("{}", version::formatted()),
    }
    Ok(())
}
