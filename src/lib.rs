//! PetLife Match - match review client for the PetLife pet dating app
//!
//! A pet owner picks one of their pets, walks the queue of candidate matches
//! the backend proposes for it one at a time, and accepts or rejects each.
//! The controller owns the queue; the presenter turns its state into a view.

pub mod config;
pub mod core;
pub mod models;
pub mod presenter;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchController, MatchQueue, Outcome, ReviewError, ReviewState, SessionSnapshot};
pub use crate::models::{Candidate, Decision, Pet, PetId};
pub use crate::presenter::{render, ReviewPresenter, ReviewView};
pub use crate::services::{HttpMatchService, MatchService, ServiceError};
