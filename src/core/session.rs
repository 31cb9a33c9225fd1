use crate::core::queue::MatchQueue;
use crate::models::{Candidate, Pet, PetId};
use std::fmt;

/// Review session state machine for the selected pet
///
/// `Idle -> Loading -> Reviewing -> Exhausted`, `Loading -> Exhausted` when no
/// candidates come back, and any failed fetch ends the load in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewState {
    #[default]
    Idle,
    Loading,
    Reviewing,
    Exhausted,
    Failed,
}

impl fmt::Display for ReviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReviewState::Idle => "idle",
            ReviewState::Loading => "loading",
            ReviewState::Reviewing => "reviewing",
            ReviewState::Exhausted => "exhausted",
            ReviewState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Tags work issued for one selection so late responses can be recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    pet_id: PetId,
}

impl SelectionTicket {
    pub fn pet_id(&self) -> &PetId {
        &self.pet_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// All state derived from the selected pet
#[derive(Debug, Default)]
pub struct ReviewSession {
    generation: u64,
    selected: Option<PetId>,
    state: ReviewState,
    pet: Option<Pet>,
    queue: MatchQueue,
    accepted: Vec<Pet>,
    last_error: Option<String>,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the selection and everything derived from it
    pub fn clear(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.state = ReviewState::Idle;
        self.discard_derived();
    }

    /// Start a new selection. Previous derived state is discarded, not merged.
    pub fn begin(&mut self, pet_id: PetId) -> SelectionTicket {
        self.generation += 1;
        self.selected = Some(pet_id.clone());
        self.state = ReviewState::Loading;
        self.discard_derived();

        SelectionTicket {
            generation: self.generation,
            pet_id,
        }
    }

    fn discard_derived(&mut self) {
        self.pet = None;
        self.queue.clear();
        self.accepted.clear();
        self.last_error = None;
    }

    /// The ticket for the current selection, if a pet is selected
    pub fn ticket(&self) -> Option<SelectionTicket> {
        self.selected.as_ref().map(|pet_id| SelectionTicket {
            generation: self.generation,
            pet_id: pet_id.clone(),
        })
    }

    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        self.generation == ticket.generation && self.selected.as_ref() == Some(&ticket.pet_id)
    }

    pub fn set_profile(&mut self, pet: Pet) {
        self.pet = Some(pet);
    }

    pub fn set_accepted(&mut self, accepted: Vec<Pet>) {
        self.accepted = accepted;
    }

    /// Install freshly fetched candidates and enter `Reviewing` or `Exhausted`
    pub fn load_candidates(&mut self, candidates: Vec<Candidate>) {
        self.queue.reset(candidates);
        self.state = if self.queue.is_exhausted() {
            ReviewState::Exhausted
        } else {
            ReviewState::Reviewing
        };
    }

    pub fn fail(&mut self, message: String) {
        self.state = ReviewState::Failed;
        self.last_error = Some(message);
    }

    /// Note a failure that does not end the session
    pub fn record_error(&mut self, message: String) {
        self.last_error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn push_accepted(&mut self, pet: Pet) {
        self.accepted.push(pet);
    }

    pub fn advance(&mut self) {
        self.queue.advance();
        if self.state == ReviewState::Reviewing && self.queue.is_exhausted() {
            self.state = ReviewState::Exhausted;
        }
    }

    pub fn selected(&self) -> Option<&PetId> {
        self.selected.as_ref()
    }

    pub fn state(&self) -> ReviewState {
        self.state
    }

    pub fn queue(&self) -> &MatchQueue {
        &self.queue
    }

    pub fn current_candidate(&self) -> Option<&Candidate> {
        match self.state {
            ReviewState::Reviewing => self.queue.current(),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            selected: self.selected.clone(),
            state: self.state,
            pet: self.pet.clone(),
            current: self.current_candidate().cloned(),
            queue_len: self.queue.len(),
            cursor: self.queue.cursor(),
            accepted: self.accepted.clone(),
            last_error: self.last_error.clone(),
        }
    }
}

/// Read-only copy of a session, the only thing the presenter renders from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub selected: Option<PetId>,
    pub state: ReviewState,
    pub pet: Option<Pet>,
    pub current: Option<Candidate>,
    pub queue_len: usize,
    pub cursor: usize,
    pub accepted: Vec<Pet>,
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> PetId {
        PetId::parse(raw).unwrap()
    }

    #[test]
    fn test_begin_discards_previous_selection() {
        let mut session = ReviewSession::new();
        let first = session.begin(id("1"));
        session.set_profile(Pet::new(id("1")));
        session.set_accepted(vec![Pet::new(id("5"))]);
        session.load_candidates(vec![Candidate::new(Pet::new(id("2")))]);

        let second = session.begin(id("1"));

        assert!(!session.is_current(&first));
        assert!(session.is_current(&second));
        assert_eq!(session.state(), ReviewState::Loading);
        let snapshot = session.snapshot();
        assert!(snapshot.pet.is_none());
        assert!(snapshot.accepted.is_empty());
        assert_eq!(snapshot.queue_len, 0);
    }

    #[test]
    fn test_empty_candidate_list_is_exhausted() {
        let mut session = ReviewSession::new();
        session.begin(id("1"));
        session.load_candidates(Vec::new());

        assert_eq!(session.state(), ReviewState::Exhausted);
        assert!(session.current_candidate().is_none());
    }

    #[test]
    fn test_advance_to_end_exhausts() {
        let mut session = ReviewSession::new();
        session.begin(id("1"));
        session.load_candidates(vec![Candidate::new(Pet::new(id("2")))]);
        assert_eq!(session.state(), ReviewState::Reviewing);

        session.advance();

        assert_eq!(session.state(), ReviewState::Exhausted);
        assert_eq!(session.queue().cursor(), 1);
    }

    #[test]
    fn test_clear_invalidates_tickets() {
        let mut session = ReviewSession::new();
        let ticket = session.begin(id("1"));
        session.clear();

        assert!(!session.is_current(&ticket));
        assert!(session.ticket().is_none());
        assert_eq!(session.state(), ReviewState::Idle);
    }
}
