//! Remote model catalog
//!
//! This module handles fetching and parsing of the remote catalog table.

pub mod fetch;
pub mod parse;
