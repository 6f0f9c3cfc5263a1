//! Census-tract housing affordability and percentile-ranking engine.
//!
//! `afford-core` converts piecewise income-bracket histograms into continuous
//! affordability estimates, derives income thresholds from fair-market rents,
//! and ranks a tract's affordability against every other tract in its
//! metropolitan region. Region datasets are served through bounded
//! insertion-order caches so repeated queries against the same region stay
//! cheap.
//!
//! Geocoding, upstream data retrieval, and map rendering live outside this
//! crate; the engine consumes pre-built read-only datasets and returns plain
//! value types for callers to adapt to their own wire formats.

pub mod cache;
pub mod income;
pub mod lookup;
pub mod ranking;
pub mod types;
