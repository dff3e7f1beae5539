//! Loading ticker
//!
//! Cosmetic "Loading..." progress printed before an operation. It only
//! receives an output sink, never the roster, and is joined before the
//! caller continues.

use std::io::{self, Write};
use std::time::Duration;

use crossbeam::channel;

use crate::config::Config;
use crate::error::{Result, RosterError};

/// Prints `Loading` followed by one dot per tick
#[derive(Debug, Clone, Copy)]
pub struct Loader {
    steps: u32,
    interval: Duration,
}

impl Loader {
    pub fn new(steps: u32, interval: Duration) -> Self {
        Self { steps, interval }
    }

    /// A loader that prints nothing and returns immediately
    pub fn disabled() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Build from config; disabled unless `show_loading` is set
    pub fn from_config(config: &Config) -> Self {
        if config.show_loading {
            Self::new(config.loading_steps, config.loading_interval())
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.steps > 0
    }

    /// Run the ticker on a scoped worker thread and wait for it
    pub fn run<W: Write + Send>(&self, out: &mut W) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let outcome = crossbeam::scope(|scope| scope.spawn(|_| self.tick(out)).join());

        match outcome {
            Ok(Ok(result)) => result.map_err(RosterError::from),
            _ => Err(RosterError::Io(io::Error::other("loader thread panicked"))),
        }
    }

    fn tick<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let ticker = channel::tick(self.interval);

        write!(out, "Loading")?;
        out.flush()?;
        for _ in 0..self.steps {
            ticker.recv().map_err(io::Error::other)?;
            write!(out, ".")?;
            out.flush()?;
        }
        writeln!(out)?;
        out.flush()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
