//! Service layer for tournament research
//!
//! Orchestrates the research source and the extraction engine into the
//! bracket and matchup responses consumed by the prediction flow.

pub mod research_service;

pub use research_service::ResearchService;
