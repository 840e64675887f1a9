use super::args::*;
use anyhow::Context;
use sqlquiz_core::config::load_config;
use sqlquiz_core::{Quiz, QuizConfig};

pub mod check;
pub mod list;
pub mod play;
pub mod run;
pub mod show;

use crate::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::List(args) => list::run(&cli.global, args),
        Command::Show(args) => show::run(&cli.global, args),
        Command::Check(args) => check::run(&cli.global, args),
        Command::Run(args) => run::run(&cli.global, args),
        Command::Play(args) => play::run(&cli.global, args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}

pub(crate) fn load_quiz(global: &GlobalArgs) -> anyhow::Result<Quiz> {
    let config = match &global.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => QuizConfig::default(),
    };
    Quiz::setup(config).context("failed to set up the sample database")
}

impl SqlSource {
    pub fn read(&self) -> anyhow::Result<String> {
        match (&self.sql, &self.file) {
            (Some(sql), _) => Ok(sql.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read query file {}", path.display())),
            (None, None) => anyhow::bail!("no query given (use --sql or --file)"),
        }
    }
}
