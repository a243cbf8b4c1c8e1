pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "hospital-queue")]
#[command(about = "Hospital queue management: register, serve and list waiting patients")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read form commands from a file instead of the terminal
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines, overriding logging.format
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file if one was given and applies command-line overrides.
    pub fn load_app_config(&self) -> crate::Result<AppConfig> {
        let mut app = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        if self.json_logs {
            app.logging.format = "json".to_string();
        }
        if self.verbose {
            app.logging.level = "debug".to_string();
        }
        Ok(app)
    }
}
