//! Mythweaver Forge - Character creation client core
//!
//! The Forge is the client-side core of the Mythweaver campaign manager's
//! character creation flow:
//! - Drives the three-step wizard (essence, gameplay, review)
//! - Enforces point-buy attribute allocation and class skill choices
//! - Mirrors every edit into the campaign draft store, debounced
//! - Consumes the hosted suggestion functions for AI-assisted fields
//!
//! All game adjudication lives in the remote game-master service; this crate
//! is presentation-agnostic state and synchronization.

pub mod application;
pub mod domain;
pub mod infrastructure;
