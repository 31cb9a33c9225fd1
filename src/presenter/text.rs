use crate::presenter::view::{CandidateSlot, MatchesGrid, NoticeLevel, PetCard, ReviewView};
use std::fmt;

const RULE: &str = "----------------------------------------";

impl fmt::Display for ReviewView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(notice) = &self.notice {
            let tag = match (notice.level, notice.blocking) {
                (NoticeLevel::Error, true) => "ERROR",
                (NoticeLevel::Error, false) => "error",
                (NoticeLevel::Info, _) => "info",
            };
            writeln!(f, "[{}] {}", tag, notice.message)?;
        }

        match &self.selected_pet {
            Some(card) => {
                writeln!(f, "Selected pet")?;
                write_card(f, card)?;
            }
            None => writeln!(f, "No pet selected")?,
        }

        match &self.candidate {
            CandidateSlot::Empty => {}
            CandidateSlot::Card { card, controls } => {
                writeln!(f, "Potential match")?;
                write_card(f, card)?;
                let labels: Vec<String> = controls
                    .iter()
                    .map(|c| format!("{} ({})", c.label, c.decision))
                    .collect();
                writeln!(f, "  {}", labels.join("   "))?;
            }
            CandidateSlot::Placeholder { title, photo_url } => {
                writeln!(f, "{}", RULE)?;
                writeln!(f, "  {}", title)?;
                writeln!(f, "  Photo: {}", photo_url)?;
                writeln!(f, "{}", RULE)?;
            }
        }

        write_grid(f, &self.matches)
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, card: &PetCard) -> fmt::Result {
    writeln!(f, "{}", RULE)?;
    writeln!(f, "  {} (#{})", card.name, card.pet_id)?;
    writeln!(f, "  Sex: {}", card.sex)?;
    writeln!(f, "  Breed: {}", card.breed)?;
    writeln!(f, "  Date of Birth: {}", card.date_of_birth)?;
    writeln!(f, "  Photo: {}", card.photo_url)?;
    writeln!(f, "{}", RULE)
}

fn write_grid(f: &mut fmt::Formatter<'_>, grid: &MatchesGrid) -> fmt::Result {
    if !grid.title_visible {
        return Ok(());
    }
    writeln!(f, "Matches")?;
    for tile in &grid.tiles {
        writeln!(f, "  * {} ({})", tile.name, tile.photo_url)?;
    }
    Ok(())
}
