use crate::core::session::{ReviewSession, ReviewState, SelectionTicket, SessionSnapshot};
use crate::models::{Candidate, Decision, PetId};
use crate::services::{MatchService, ServiceError};
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors surfaced by review operations
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("No pet selected")]
    NoSelection,

    #[error("Pet {0} is not the candidate under review")]
    NotCurrent(PetId),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// What happened to the session as a result of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The selection was emptied and all derived state cleared
    Cleared,
    /// Results were applied to the current selection
    Applied,
    /// The selection changed while the request was in flight; results were discarded
    Superseded,
}

/// Match queue controller
///
/// Owns the review session for the selected pet and is the only thing that
/// mutates it. The session lock is never held across a service call, so a new
/// selection can start while an older one is still loading; tickets decide
/// whose responses are applied.
pub struct MatchController<S> {
    service: S,
    session: Mutex<ReviewSession>,
}

impl<S: MatchService> MatchController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            session: Mutex::new(ReviewSession::new()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Select a pet and load its review session
    ///
    /// An empty id clears the selection. Otherwise the profile and accepted
    /// matches are fetched concurrently, then the candidate list.
    pub async fn select_pet(&self, pet_id: &str) -> Result<Outcome, ReviewError> {
        let Some(pet_id) = PetId::parse(pet_id) else {
            self.session.lock().await.clear();
            tracing::info!("Pet selection cleared");
            return Ok(Outcome::Cleared);
        };

        let ticket = self.session.lock().await.begin(pet_id);
        let pet_id = ticket.pet_id();

        tracing::info!("Loading review session for pet {}", pet_id);

        let (profile, accepted) = tokio::join!(
            self.service.pet_details(pet_id),
            self.service.accepted_matches(pet_id),
        );

        {
            let mut session = self.session.lock().await;
            if !session.is_current(&ticket) {
                return Ok(superseded(&ticket, "profile"));
            }

            let mut first_error = None;
            match profile {
                Ok(pet) => session.set_profile(pet),
                Err(e) => first_error = Some(e),
            }
            match accepted {
                Ok(accepted) => session.set_accepted(accepted),
                Err(e) => first_error = first_error.or(Some(e)),
            }

            if let Some(e) = first_error {
                tracing::error!("Failed to load pet {}: {}", pet_id, e);
                session.fail(format!("Could not load pet: {}", e));
                return Err(e.into());
            }
        }

        let candidates = self.service.potential_matches(pet_id).await;

        let mut session = self.session.lock().await;
        if !session.is_current(&ticket) {
            return Ok(superseded(&ticket, "candidates"));
        }

        match candidates {
            Ok(candidates) => {
                tracing::info!("Pet {} has {} candidates to review", pet_id, candidates.len());
                session.load_candidates(candidates);
                Ok(Outcome::Applied)
            }
            Err(e) => {
                tracing::error!("Failed to fetch candidates for pet {}: {}", pet_id, e);
                session.fail(format!("An error occurred while fetching matches: {}", e));
                Err(e.into())
            }
        }
    }

    /// The candidate under the cursor, or `None` when the queue is exhausted
    pub async fn current_candidate(&self) -> Option<Candidate> {
        self.session.lock().await.current_candidate().cloned()
    }

    /// Move past the current candidate. No-op once exhausted.
    pub async fn advance(&self) {
        self.session.lock().await.advance();
    }

    /// Send a decision for `candidate_id` on behalf of the selected pet
    ///
    /// Only the candidate under the cursor can be decided on. On success an
    /// accepted candidate is appended to the accepted list and the cursor
    /// advances. On failure nothing moves, so the same candidate stays up.
    pub async fn decide(&self, candidate_id: &PetId, decision: Decision) -> Result<Outcome, ReviewError> {
        let ticket = {
            let session = self.session.lock().await;
            let Some(ticket) = session.ticket() else {
                return Err(ReviewError::NoSelection);
            };
            if !matches!(session.state(), ReviewState::Reviewing | ReviewState::Exhausted) {
                return Err(ReviewError::NoSelection);
            }
            let is_current = session
                .current_candidate()
                .is_some_and(|current| current.id() == candidate_id);
            if !is_current {
                tracing::warn!("Refusing {} for {}: not the current candidate", decision, candidate_id);
                return Err(ReviewError::NotCurrent(candidate_id.clone()));
            }
            ticket
        };

        tracing::info!("Sending {} for {} -> {}", decision, ticket.pet_id(), candidate_id);

        let result = self.service.decide(ticket.pet_id(), candidate_id, decision).await;

        let mut session = self.session.lock().await;
        if !session.is_current(&ticket) {
            return Ok(superseded(&ticket, "decision"));
        }

        if let Err(e) = result {
            tracing::error!("Error {}ing match {}: {}", decision, candidate_id, e);
            session.record_error(format!("Could not {} match: {}", decision, e));
            return Err(e.into());
        }

        session.clear_error();

        if decision == Decision::Accept {
            if let Some(candidate) = session.queue().find(candidate_id).cloned() {
                session.push_accepted(candidate.into_pet());
            }
        }

        session.advance();

        Ok(Outcome::Applied)
    }

    pub async fn accept(&self, candidate_id: &PetId) -> Result<Outcome, ReviewError> {
        self.decide(candidate_id, Decision::Accept).await
    }

    pub async fn reject(&self, candidate_id: &PetId) -> Result<Outcome, ReviewError> {
        self.decide(candidate_id, Decision::Reject).await
    }

    pub async fn selected_pet(&self) -> Option<PetId> {
        self.session.lock().await.selected().cloned()
    }

    pub async fn state(&self) -> ReviewState {
        self.session.lock().await.state()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }
}

fn superseded(ticket: &SelectionTicket, stage: &str) -> Outcome {
    tracing::warn!(
        "Discarding {} response for pet {} (selection {} is stale)",
        stage,
        ticket.pet_id(),
        ticket.generation()
    );
    Outcome::Superseded
}
