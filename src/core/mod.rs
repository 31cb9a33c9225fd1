// Core review workflow exports
pub mod controller;
pub mod queue;
pub mod session;

pub use controller::{MatchController, Outcome, ReviewError};
pub use queue::MatchQueue;
pub use session::{ReviewSession, ReviewState, SelectionTicket, SessionSnapshot};
