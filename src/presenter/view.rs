use crate::config::PresenterSettings;
use crate::core::{ReviewState, SessionSnapshot};
use crate::models::{Decision, Pet, PetId};

pub const NO_MATCH_FOUND: &str = "No match found";
pub const NO_MORE_MATCHES: &str = "No more matches";

/// Everything the host page shows for the review workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewView {
    pub selected_pet: Option<PetCard>,
    pub candidate: CandidateSlot,
    pub matches: MatchesGrid,
    pub notice: Option<Notice>,
}

/// Profile card with every field filled in, falling back where the data is missing
#[derive(Debug, Clone, PartialEq)]
pub struct PetCard {
    pub pet_id: PetId,
    pub name: String,
    pub sex: String,
    pub breed: String,
    pub date_of_birth: String,
    pub photo_url: String,
}

/// The single current-candidate region
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateSlot {
    /// Nothing to show: no pet selected, still loading, or the load failed
    Empty,
    Card {
        card: PetCard,
        controls: [DecisionControl; 2],
    },
    /// Terminal card once the queue is exhausted. Carries no decision controls.
    Placeholder { title: String, photo_url: String },
}

impl CandidateSlot {
    pub fn controls(&self) -> &[DecisionControl] {
        match self {
            CandidateSlot::Card { controls, .. } => controls.as_slice(),
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionControl {
    pub decision: Decision,
    pub candidate_id: PetId,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchesGrid {
    pub title_visible: bool,
    pub tiles: Vec<MatchTile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchTile {
    pub pet_id: PetId,
    pub name: String,
    pub photo_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// User-visible message. Blocking notices must be acknowledged before continuing.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub blocking: bool,
}

impl Notice {
    fn info(message: &str) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.to_string(),
            blocking: false,
        }
    }

    fn error(message: &str, blocking: bool) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.to_string(),
            blocking,
        }
    }
}

/// Render a session snapshot. Pure: the same snapshot always yields the same view.
pub fn render(snapshot: &SessionSnapshot, settings: &PresenterSettings) -> ReviewView {
    let selected_pet = snapshot.pet.as_ref().map(|pet| pet_card(pet, settings));

    let candidate = match (&snapshot.current, snapshot.state) {
        (Some(candidate), ReviewState::Reviewing) => {
            let id = candidate.id().clone();
            CandidateSlot::Card {
                card: pet_card(candidate.pet(), settings),
                controls: [
                    DecisionControl {
                        decision: Decision::Reject,
                        candidate_id: id.clone(),
                        label: "NO",
                    },
                    DecisionControl {
                        decision: Decision::Accept,
                        candidate_id: id,
                        label: "YES",
                    },
                ],
            }
        }
        (_, ReviewState::Exhausted) => CandidateSlot::Placeholder {
            title: settings.placeholder_title.clone(),
            photo_url: placeholder_url(settings),
        },
        _ => CandidateSlot::Empty,
    };

    let tiles: Vec<MatchTile> = snapshot
        .accepted
        .iter()
        .map(|pet| MatchTile {
            pet_id: pet.id.clone(),
            name: text_or(&pet.name, &settings.unknown_text),
            photo_url: photo_url(pet, settings),
        })
        .collect();

    let notice = match snapshot.state {
        ReviewState::Failed => snapshot
            .last_error
            .as_deref()
            .map(|message| Notice::error(message, true)),
        ReviewState::Exhausted if snapshot.queue_len == 0 => Some(Notice::info(NO_MATCH_FOUND)),
        ReviewState::Exhausted => snapshot
            .last_error
            .as_deref()
            .map(|message| Notice::error(message, false))
            .or_else(|| Some(Notice::info(NO_MORE_MATCHES))),
        _ => snapshot
            .last_error
            .as_deref()
            .map(|message| Notice::error(message, false)),
    };

    ReviewView {
        selected_pet,
        candidate,
        matches: MatchesGrid {
            title_visible: !tiles.is_empty(),
            tiles,
        },
        notice,
    }
}

pub fn pet_card(pet: &Pet, settings: &PresenterSettings) -> PetCard {
    let date_of_birth = match pet.birth_date() {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => text_or(&pet.date_of_birth, &settings.missing_text),
    };

    PetCard {
        pet_id: pet.id.clone(),
        name: text_or(&pet.name, &settings.unknown_text),
        sex: pet
            .sex_kind()
            .map(|sex| sex.to_string())
            .unwrap_or_else(|| settings.unknown_text.clone()),
        breed: text_or(&pet.breed, &settings.unknown_text),
        date_of_birth,
        photo_url: photo_url(pet, settings),
    }
}

fn text_or(value: &Option<String>, fallback: &str) -> String {
    value.clone().unwrap_or_else(|| fallback.to_string())
}

/// Resolve a photo reference against the static prefix; absolute URLs pass through
pub fn photo_url(pet: &Pet, settings: &PresenterSettings) -> String {
    match pet.photo.as_deref() {
        Some(path) => asset_url(path, settings),
        None => placeholder_url(settings),
    }
}

fn placeholder_url(settings: &PresenterSettings) -> String {
    asset_url(&settings.placeholder_image, settings)
}

fn asset_url(path: &str, settings: &PresenterSettings) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        settings.static_prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
