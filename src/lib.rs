//! # Roster
//!
//! A small student roster manager with:
//! - One record per roll number, in insertion order until sorted
//! - Grades derived from marks, never stored
//! - Case-insensitive name search and delete
//! - Stable sort by marks, kept as the roster's standing order
//! - Flat-file persistence, one `roll,name,email,course,marks` line per student
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Caller (CLI / library)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    RosterManager                             │
//! │        (add / delete / update / search / list / sort)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Roster    │          │   Storage   │
//!   │ (Vec+index) │          │ (line file) │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │   Student   │
//!   │  + Grade    │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod roster;
pub mod storage;
pub mod command;
pub mod loader;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RosterError, Result};
pub use config::Config;
pub use record::{Grade, RollNumber, Student};
pub use roster::{Listing, Roster, RosterManager, SharedRoster};
pub use command::{Command, Outcome};
pub use loader::Loader;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Roster
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
