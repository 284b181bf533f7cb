//! # Comparison Models
//!
//! * [`mode::CompareMode`]: which sources a comparison request covers.
//! * [`partition::Partition`]: hosts sharing one source-membership signature.
//! * [`report::ComparisonReport`]: the immutable result handed to renderers and exporters.

pub mod mode;
pub mod partition;
pub mod report;
