// Presentation exports
pub mod review;
pub mod text;
pub mod view;

pub use review::ReviewPresenter;
pub use view::{
    render, CandidateSlot, DecisionControl, MatchTile, MatchesGrid, Notice, NoticeLevel, PetCard,
    ReviewView, NO_MATCH_FOUND, NO_MORE_MATCHES,
};
