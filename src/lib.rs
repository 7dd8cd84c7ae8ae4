//! Modelpick Library
//!
//! Core library for the modelpick catalog selection tool.

pub mod app;
pub mod catalog;
pub mod identifier;
pub mod selection;
pub mod system;
pub mod types;
