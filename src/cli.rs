//! Command-line options shared by both executables.
//!
//! Without any option, the tools work in the current directory with the default [`Config`].

use std::path::PathBuf;

use clap::Args;
use env_logger::{Env, Logger};

use crate::config::Config;
use crate::error::Result;

#[derive(Debug, Default, Args)]
pub struct CommonOptions {
    #[arg(long = "config", help = "YAML file overriding default file names and programs")]
    pub config_path : Option<PathBuf>,

    #[arg(short = 'C', long = "directory", help = "Directory holding the symbol lists (default: current directory)")]
    pub work_dir : Option<PathBuf>,

    #[arg(short, long, default_value_t = false, conflicts_with("quiet"), help = "Also log debug messages")]
    pub verbose : bool,

    #[arg(short, long, default_value_t = false, help = "Only log errors")]
    pub quiet : bool,
}

impl CommonOptions {
    pub fn config(&self) -> Result<Config> {
        let mut config = match &self.config_path {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(work_dir) = &self.work_dir {
            config.work_dir = work_dir.clone();
        }
        Ok(config)
    }

    /// `RUST_LOG`, if set, takes precedence over `--verbose` and `--quiet`.
    pub fn logger(&self) -> Logger {
        let level =
            if self.verbose    { "debug" }
            else if self.quiet { "error" }
            else               { "info"  };
        env_logger::Builder::from_env(Env::default().default_filter_or(level)).build()
    }
}
