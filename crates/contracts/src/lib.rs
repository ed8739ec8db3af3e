//! Typed request/response schemas for the TilesTrack API.
//!
//! Every endpoint the frontend calls has its shapes declared here, so the
//! API client can validate responses at the boundary instead of letting
//! loose JSON drift into the views.

pub mod domain;
pub mod system;
