//! Command-line interface.
//!
//! ```bash
//! # Run with the config from ~/.config/reactive-counter/config.toml
//! reactive-counter
//!
//! # Wrap around at u64::MAX instead of saturating
//! reactive-counter --overflow wrap
//!
//! # Show the effective configuration and exit
//! reactive-counter --print-config
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::ui::counter::OverflowPolicy;

/// Terminal counter driven by an observable store.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "reactive-counter", version, about)]
pub struct Cli {
    /// Path to the config file
    ///
    /// Defaults to ~/.config/reactive-counter/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// What to do when the counter reaches its maximum
    #[arg(long, value_enum)]
    pub overflow: Option<OverflowPolicy>,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Path the config was (or would be) read from.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Fold command-line overrides into a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(policy) = self.overflow {
            config.counter.overflow = policy;
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
    }
}
