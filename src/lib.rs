// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod directory;
pub mod error;
pub mod file;
pub mod geocode;
pub mod log;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;

pub use data::{Category, Position, Restaurant};
pub use directory::{aggregate, Directory};
pub use error::{Error, Result};
pub use geocode::Geocoder;
