//! # Scout Common
//!
//! Models, errors and configuration shared by every ServerScout crate.
//!
//! * **[`inventory`]**: servers, host facts, source sets and the row store contract.
//! * **[`compare`]**: comparison modes, partitions and the comparison report.
//! * **[`config`]**: run settings built by the command line.
//! * **[`error`]**: the error taxonomy surfaced by the core.
//! * **[`utils`]**: address helpers and input validation.

pub mod compare;
pub mod config;
pub mod error;
pub mod inventory;
pub mod utils;
