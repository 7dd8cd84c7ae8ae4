//! System utilities
//!
//! This module provides system-level functionality like hardware detection.

pub mod resources;
