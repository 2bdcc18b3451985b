// src/lib.rs

//! shopscrape Library
//!
//! Fetches paginated shop search results, extracts product cards and
//! writes them to a flat file. The binary in `src/bin/cli.rs` is a thin
//! wrapper around [`pipeline::run`].

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
