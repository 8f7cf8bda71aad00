use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "credit-rater",
    version,
    about = "Weighted scorecard credit rating estimation"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one industry scorecard against a value file
    Score(ScoreCommand),
    /// List the industries in the loaded registry
    Industries(DataArgs),
    /// Print an industry's factor tree
    Factors(FactorsCommand),
    /// Check the data files for inconsistencies
    Check(DataArgs),
}

impl Commands {
    pub fn data_args(&self) -> &DataArgs {
        match self {
            Commands::Score(cmd) => &cmd.data,
            Commands::Industries(args) | Commands::Check(args) => args,
            Commands::Factors(cmd) => &cmd.data,
        }
    }
}

#[derive(Args)]
pub struct DataArgs {
    /// Directory holding credit-rater.toml and the default data/ folder
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Data directory, overriding environment and config
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub industry: String,

    /// TOML or JSON file mapping leaf ids to values
    #[arg(long)]
    pub values: PathBuf,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args)]
pub struct FactorsCommand {
    pub industry: String,

    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
