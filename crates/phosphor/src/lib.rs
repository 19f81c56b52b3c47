//! Command-line front end for Phosphor.
//!
//! `phosphor play` runs a content document in the terminal; `phosphor
//! validate` parses it and reports records that were dropped.

pub mod cli;
pub mod logging;
