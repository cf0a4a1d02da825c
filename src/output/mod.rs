//! # Output Module
//!
//! Persistence for simulation results.
//!
//! The single supported format is the newline-delimited snapshot log:
//! a mesh header line followed by one `[[temperatures...], elapsed]`
//! record per snapshot. [`log::SnapshotLog`] writes it incrementally
//! during a run and [`log::RecordedRun`] reads it back with a strict
//! parser.

pub mod log;

pub use log::{LogError, RecordedRun, SnapshotFrame, SnapshotLog};
