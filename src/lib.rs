// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod file;
pub mod log;
pub mod progress;
pub mod runner;
pub mod sources;
pub mod store;

pub use error::{Result, ScrapeError};
