use clap::{Parser, Subcommand, ValueEnum};
use sqlquiz_core::questions::Group;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sqlquiz",
    version,
    about = "SQL practice quiz: write SELECT queries against a sample database and check them"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Quiz config (YAML). Defaults to the built-in question bank.
    #[arg(long, global = true, env = "SQLQUIZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List questions
    List(ListArgs),
    /// Show one question with a preview of its reference result
    Show(ShowArgs),
    /// Check one query against a question's reference result
    Check(CheckArgs),
    /// Run a query against the sample database without checking it
    Run(RunArgs),
    /// Interactive practice session on stdin/stdout
    Play(PlayArgs),
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupArg {
    Easy,
    Advanced,
    Mock,
}

impl From<GroupArg> for Group {
    fn from(g: GroupArg) -> Self {
        match g {
            GroupArg::Easy => Group::Easy,
            GroupArg::Advanced => Group::Advanced,
            GroupArg::Mock => Group::Mock,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SqlSource {
    /// Query text
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub sql: Option<String>,

    /// Read the query from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(long, value_enum)]
    pub group: Option<GroupArg>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Question id, e.g. E1
    pub id: String,

    /// Also print the reference query (hint)
    #[arg(long)]
    pub reference: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Question id, e.g. E1
    pub id: String,

    #[command(flatten)]
    pub source: SqlSource,

    /// Compare rows position by position
    #[arg(long)]
    pub enforce_order: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SqlSource,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PlayArgs {
    #[arg(long, value_enum)]
    pub group: Option<GroupArg>,

    /// Start at this question instead of the first one
    #[arg(long)]
    pub start: Option<String>,

    /// Compare rows position by position (toggle later with `:order`)
    #[arg(long)]
    pub enforce_order: bool,
}
