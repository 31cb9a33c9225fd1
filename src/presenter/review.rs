use crate::config::PresenterSettings;
use crate::core::{MatchController, Outcome, ReviewError};
use crate::models::{Decision, PetId};
use crate::presenter::view::{render, ReviewView};
use crate::services::MatchService;

/// Review presenter
///
/// Drives the controller in response to user actions and re-renders from the
/// resulting state. Failures are logged and shown as notices, never returned.
pub struct ReviewPresenter<S> {
    controller: MatchController<S>,
    settings: PresenterSettings,
}

impl<S: MatchService> ReviewPresenter<S> {
    pub fn new(controller: MatchController<S>, settings: PresenterSettings) -> Self {
        Self {
            controller,
            settings,
        }
    }

    pub fn controller(&self) -> &MatchController<S> {
        &self.controller
    }

    /// Handle a change of the pet-selection control
    pub async fn select_pet(&self, pet_id: &str) -> ReviewView {
        let result = self.controller.select_pet(pet_id).await;
        self.report("select pet", result);
        self.view().await
    }

    /// Handle a click on one of the candidate's decision controls
    pub async fn decide(&self, candidate_id: &PetId, decision: Decision) -> ReviewView {
        let result = self.controller.decide(candidate_id, decision).await;
        self.report("decision", result);
        self.view().await
    }

    pub async fn accept(&self, candidate_id: &PetId) -> ReviewView {
        self.decide(candidate_id, Decision::Accept).await
    }

    pub async fn reject(&self, candidate_id: &PetId) -> ReviewView {
        self.decide(candidate_id, Decision::Reject).await
    }

    /// Render the current controller state
    pub async fn view(&self) -> ReviewView {
        let snapshot = self.controller.snapshot().await;
        render(&snapshot, &self.settings)
    }

    fn report(&self, action: &str, result: Result<Outcome, ReviewError>) {
        match result {
            Ok(Outcome::Superseded) => tracing::debug!("{} superseded by a newer selection", action),
            Ok(_) => {}
            Err(e) => tracing::error!("{} failed: {}", action, e),
        }
    }
}
