//! Core library for the Jeju weather comparison tool.
//!
//! This crate defines:
//! - The synthetic daily weather series generator and its climate tables
//! - Merging of per-region series into one comparison table
//! - Abstraction over the analysis service and its Gemini implementation
//! - Configuration & credentials handling
//!
//! It is used by `jeju-weather-cli`, but can also be reused by other binaries or services.

pub mod analysis;
pub mod config;
pub mod generator;
pub mod merge;
pub mod model;
pub mod profile;

pub use analysis::{AnalysisClient, AnalysisError, AnalysisRequest, GeminiAnalysisClient};
pub use config::Config;
pub use generator::SeriesGenerator;
pub use merge::{MergedRow, MergedTable, merge_series};
pub use model::{MAX_REGIONS, Metric, Region, RegionSeries, Series, SeriesPoint};
pub use profile::{MetricProfile, RegionProfile};
