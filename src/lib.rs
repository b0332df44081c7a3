//! Krishi Roadmap - Farmer Advisory Roadmap Engine
//!
//! This crate turns free-text language-model output into a structured
//! ten-year farm-business roadmap. The model is asked for a fixed markdown
//! template; `parse_roadmap` tolerantly extracts whatever the response
//! actually contains, degrading to empty fields rather than failing.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::roadmap::parse_roadmap;
pub use domain::roadmap::{RoadmapDocument, YearEntry};
