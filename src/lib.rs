//! # Rozklad Rust Backend
//!
//! Timetable normalization engine and service for the NLTU class
//! schedule.
//!
//! The source of truth is a human-curated Google Sheets workbook:
//! rows are (day, time slot) pairs with separate odd-week and
//! even-week sub-rows, columns are student sub-groups (or teachers in
//! the transposed workbook), and cells hold free-text event
//! descriptions. This crate fetches the CSV export, parses every cell
//! into a structured record, reconciles the odd/even variants of each
//! slot into a single shape, aggregates sub-group columns into their
//! logical groups, and serves the result as JSON.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: fixed day/slot tables, the loader grid, and the
//!   output document types
//! - [`engine`]: the pure normalization engine (cell parser, slot
//!   reconciler, group resolver, schedule builder, root assembler)
//! - [`source`]: sheet URL validation, HTTP fetching, and CSV loading
//! - [`http`]: axum-based HTTP server exposing the engine
//! - [`sync`]: file-sync job writing both documents to disk

pub mod engine;

pub mod error;

pub mod models;

pub mod source;

pub mod sync;

#[cfg(feature = "http-server")]
pub mod http;
