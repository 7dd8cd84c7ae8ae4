//! Shared type definitions
//!
//! This module contains all shared data types used across the tool.

pub mod config;
pub mod model;
