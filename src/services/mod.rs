// Service exports
pub mod match_api;

pub use match_api::{HttpMatchService, MatchService, ServiceError};
