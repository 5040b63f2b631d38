use crate::error::{GameError, GameResult};
use crate::types::*;
use std::collections::HashMap;

/// Per-author, append-only phrase and image logs.
///
/// Ordering within one author's log is strictly chronological; the index of
/// an entry is its sequence number, which thread reconstruction relies on.
/// Appending never touches player status; that is the state machine's job.
#[derive(Debug, Clone, Default)]
pub struct SubmissionLog {
    phrases: HashMap<PlayerName, Vec<Submission>>,
    images: HashMap<PlayerName, Vec<Submission>>,
}

impl SubmissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_phrase(&mut self, author: &str, text: impl Into<String>) {
        self.phrases
            .entry(author.to_string())
            .or_default()
            .push(Submission::new(author, text));
    }

    pub fn append_image(&mut self, author: &str, image: impl Into<String>) {
        self.images
            .entry(author.to_string())
            .or_default()
            .push(Submission::new(author, image));
    }

    pub fn phrase_count_for(&self, author: &str) -> usize {
        self.phrases.get(author).map_or(0, Vec::len)
    }

    pub fn image_count_for(&self, author: &str) -> usize {
        self.images.get(author).map_or(0, Vec::len)
    }

    pub fn total_phrases(&self) -> usize {
        self.phrases.values().map(Vec::len).sum()
    }

    pub fn total_images(&self) -> usize {
        self.images.values().map(Vec::len).sum()
    }

    pub fn last_phrase_by(&self, author: &str) -> GameResult<&Submission> {
        self.phrases
            .get(author)
            .and_then(|log| log.last())
            .ok_or_else(|| GameError::NoSubmission(author.to_string()))
    }

    pub fn last_image_by(&self, author: &str) -> GameResult<&Submission> {
        self.images
            .get(author)
            .and_then(|log| log.last())
            .ok_or_else(|| GameError::NoSubmission(author.to_string()))
    }

    /// Nth phrase by an author (0-based sequence index)
    pub fn phrase_at(&self, author: &str, index: usize) -> GameResult<&Submission> {
        self.phrases
            .get(author)
            .and_then(|log| log.get(index))
            .ok_or_else(|| GameError::NoSubmission(author.to_string()))
    }

    /// Nth image by an author (0-based sequence index)
    pub fn image_at(&self, author: &str, index: usize) -> GameResult<&Submission> {
        self.images
            .get(author)
            .and_then(|log| log.get(index))
            .ok_or_else(|| GameError::NoSubmission(author.to_string()))
    }

    /// Phrase count of the least-submitted author among `authors`.
    ///
    /// The minimum is what gates round advancement: stragglers hold the
    /// whole table at the current round.
    pub fn min_phrase_count<'a>(&self, authors: impl Iterator<Item = &'a str>) -> usize {
        authors
            .map(|a| self.phrase_count_for(a))
            .min()
            .unwrap_or(0)
    }

    /// Image count of the least-submitted author among `authors`
    pub fn min_image_count<'a>(&self, authors: impl Iterator<Item = &'a str>) -> usize {
        authors.map(|a| self.image_count_for(a)).min().unwrap_or(0)
    }
}
