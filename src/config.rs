//! Configuration for Roster
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Main configuration for a roster instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// Flat file holding one `roll,name,email,course,marks` line per student
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Loader Configuration
    // -------------------------------------------------------------------------
    /// Run the cosmetic loading ticker before mutating commands
    pub show_loading: bool,

    /// Number of dots printed by the loading ticker
    pub loading_steps: u32,

    /// Delay between two dots (milliseconds)
    pub loading_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("students.txt"),
            show_loading: false,
            loading_steps: 3,
            loading_interval_ms: 500,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Loading interval as a `Duration`
    pub fn loading_interval(&self) -> Duration {
        Duration::from_millis(self.loading_interval_ms)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable the loading ticker
    pub fn show_loading(mut self, enabled: bool) -> Self {
        self.config.show_loading = enabled;
        self
    }

    /// Set the number of loading dots
    pub fn loading_steps(mut self, steps: u32) -> Self {
        self.config.loading_steps = steps;
        self
    }

    /// Set the delay between loading dots (in milliseconds)
    pub fn loading_interval_ms(mut self, ms: u64) -> Self {
        self.config.loading_interval_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
