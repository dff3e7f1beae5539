//! Roster Module
//!
//! The in-memory collection of students and the manager that owns it.
//!
//! ## Responsibilities
//! - Keep exactly one record per roll number
//! - Preserve insertion order until a sort reorders the roster
//! - CRUD, name search and marks sort over the collection
//! - Load/save the collection through the storage module
//!
//! ## Concurrency
//! `RosterManager` is single-threaded (`&mut self` for every mutation).
//! Callers sharing one manager between threads wrap it in `SharedRoster`,
//! which serializes every operation behind one mutex.

mod table;
mod manager;
mod shared;

pub use table::Roster;
pub use manager::{Listing, RosterManager};
pub use shared::SharedRoster;
