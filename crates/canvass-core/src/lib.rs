//! Canvass Core - Fundamental types for the two-candidate tally
//!
//! This crate defines the core types used throughout the canvass:
//! - Identifiers (OfficialId)
//! - The candidate enumeration and its stable integer coding
//! - Per-state result records
//! - Journal events
//! - The error taxonomy

pub mod candidate;
pub mod error;
pub mod event;
pub mod id;
pub mod result;

pub use candidate::*;
pub use error::*;
pub use event::*;
pub use id::*;
pub use result::*;
