pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::FixtureOracle;
pub use core::engine::ProfileEngine;
pub use domain::model::{BaziProfile, BirthInput, CalendarSystem, Gender};
pub use domain::ports::CalendarOracle;
pub use utils::error::{Result, SajuError};
