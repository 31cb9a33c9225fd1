use serde::{Deserialize, Serialize};

/// Outcome reported by the backend for a decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DecisionStatus {
    Success,
    Failure(String),
}

impl From<String> for DecisionStatus {
    fn from(raw: String) -> Self {
        if raw == "success" {
            DecisionStatus::Success
        } else {
            DecisionStatus::Failure(raw)
        }
    }
}

impl From<DecisionStatus> for String {
    fn from(status: DecisionStatus) -> Self {
        match status {
            DecisionStatus::Success => "success".to_string(),
            DecisionStatus::Failure(raw) => raw,
        }
    }
}

/// Response body of the accept/reject endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub status: DecisionStatus,
    #[serde(default)]
    pub message: Option<String>,
}

impl DecisionResponse {
    pub fn is_success(&self) -> bool {
        self.status == DecisionStatus::Success
    }
}
