//! Skill demand pipeline for entry-level job postings.
//!
//! Collection drives a page session over the listing site, runs the hybrid
//! skill extractor on every detail page, and persists the surviving postings
//! as CSV. Analysis re-reads that file, collapses skill variants onto the
//! canonical vocabulary, and ranks per-role demand for the visualization
//! hand-off.

pub mod analysis;
pub mod collect;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod telemetry;
