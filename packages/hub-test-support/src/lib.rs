//! Test support for the hub
//!
//! Shared logging setup plus a scratch directory for writing deck files and
//! throwaway player programs.

pub mod logging;
pub mod table;

pub use table::Table;
