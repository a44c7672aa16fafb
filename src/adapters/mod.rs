// Adapters layer: concrete implementations of the domain ports.

pub mod fixture;

pub use fixture::FixtureOracle;
