//! Core types for tournament research
//!
//! This crate defines the shared data structures used across the workspace:
//! brackets, citations, recommendations, and the request/response envelopes.

pub mod bracket;
pub mod citation;
pub mod error;
pub mod recommendation;
pub mod request;

pub use bracket::{Bracket, Matchup, Round};
pub use citation::Citation;
pub use error::{TourneyError, TourneyResult};
pub use recommendation::Recommendation;
pub use request::{BracketResponse, MatchupRequest, MatchupResponse, TournamentRequest};
