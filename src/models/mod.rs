// Model exports
pub mod domain;
pub mod responses;

pub use domain::{Candidate, Decision, Pet, PetId, PetSex};
pub use responses::{DecisionResponse, DecisionStatus};
