pub mod dst;
pub mod engine;
pub mod resolver;
pub mod solar_time;
pub mod wuxing;

pub use crate::domain::model::{BaziProfile, BirthInput, CivilMoment, FourPillars, Pillar};
pub use crate::domain::ports::{CalendarOracle, OracleChart};
pub use crate::utils::error::Result;
