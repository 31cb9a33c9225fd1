use crate::models::{Candidate, PetId};

/// Ordered candidates for the selected pet plus a cursor to the next unreviewed one
///
/// Invariant: `0 <= cursor <= len`. `cursor == len` means the queue is exhausted.
#[derive(Debug, Clone, Default)]
pub struct MatchQueue {
    candidates: Vec<Candidate>,
    cursor: usize,
}

impl MatchQueue {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            cursor: 0,
        }
    }

    /// Replace the whole list and rewind to the first candidate
    pub fn reset(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.cursor = 0;
    }

    pub fn clear(&mut self) {
        self.reset(Vec::new());
    }

    pub fn current(&self) -> Option<&Candidate> {
        self.candidates.get(self.cursor)
    }

    /// Move to the next candidate. Clamped at exhaustion.
    pub fn advance(&mut self) {
        if self.cursor < self.candidates.len() {
            self.cursor += 1;
        }
    }

    pub fn find(&self, candidate_id: &PetId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id() == candidate_id)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    pub fn remaining(&self) -> usize {
        self.candidates.len() - self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pet;

    fn candidates(ids: &[&str]) -> Vec<Candidate> {
        ids.iter()
            .map(|id| Candidate::new(Pet::new(PetId::parse(id).unwrap())))
            .collect()
    }

    #[test]
    fn test_walks_in_insertion_order() {
        let mut queue = MatchQueue::new(candidates(&["3", "1", "2"]));

        let mut seen = Vec::new();
        while let Some(candidate) = queue.current() {
            seen.push(candidate.id().to_string());
            queue.advance();
        }

        assert_eq!(seen, vec!["3", "1", "2"]);
        assert!(queue.is_exhausted());
        assert_eq!(queue.cursor(), 3);
    }

    #[test]
    fn test_advance_is_clamped() {
        let mut queue = MatchQueue::new(candidates(&["1"]));
        queue.advance();
        queue.advance();
        queue.advance();

        assert_eq!(queue.cursor(), 1);
        assert_eq!(queue.remaining(), 0);
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_empty_queue_starts_exhausted() {
        let mut queue = MatchQueue::default();
        assert!(queue.is_exhausted());
        queue.advance();
        assert_eq!(queue.cursor(), 0);
    }

    #[test]
    fn test_reset_replaces_list_and_rewinds() {
        let mut queue = MatchQueue::new(candidates(&["1", "2"]));
        queue.advance();

        queue.reset(candidates(&["8", "9", "10"]));

        assert_eq!(queue.cursor(), 0);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.current().unwrap().id().as_str(), "8");
        assert!(queue.find(&PetId::parse("1").unwrap()).is_none());
    }
}
