//! Utility functions for conversion runs.
//!
//! ## Components
//!
//! - **Summary**: bookkeeping of the collections written during a run

pub mod summary;
