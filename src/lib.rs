#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
/// The view coordinator and its read-only surface for the presentation layer
pub mod dashboard;
/// The searchable, selectable customer directory
pub mod directory;
/// Error handling and custom [`Error`](std::error::Error) types
pub mod errors;
/// Functions for loading the source datasets and writing reports
pub mod io;
/// Pure aggregation functions over the loaded record sets
pub mod ops;
/// Data types used throughout the Customer360 core
pub mod types;

pub use dashboard::Dashboard;
pub use io::DataSources;
