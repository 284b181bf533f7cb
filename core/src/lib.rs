//! # Scout Core
//!
//! The reconciliation engine and the inventory services around it.
//!
//! Comparison pipeline, leaf to root:
//!
//! 1. [`normalizer`]: raw host token to comparison key.
//! 2. [`parser`]: one parser per source turns a raw payload into a `SourceSet`.
//! 3. [`reconciler`]: N-way set algebra into membership partitions.
//! 4. [`report`]: partitions and counts into a `ComparisonReport`.
//!
//! [`compare::ComparisonService`] drives the pipeline for one request and
//! [`export`] renders a finished report. [`probe`], [`inventory`] and [`store`]
//! cover liveness scanning of the managed servers.

pub mod compare;
pub mod export;
pub mod inventory;
pub mod network;
pub mod normalizer;
pub mod parser;
pub mod probe;
pub mod reconciler;
pub mod report;
pub mod store;
