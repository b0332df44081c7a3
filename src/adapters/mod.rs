//! Adapters - concrete implementations of the ports.

pub mod ai;
pub mod roadmap;
