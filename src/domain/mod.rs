//! Domain layer - value objects and pure business rules.
//!
//! Everything here is side-effect free; I/O lives in adapters behind ports.

pub mod catalog;
pub mod profile;
pub mod roadmap;

pub use catalog::{BusinessCatalog, BusinessOption, BUSINESS_OPTIONS};
pub use profile::FarmerProfile;
pub use roadmap::{roadmap_prompt, RoadmapDocument, YearEntry};
