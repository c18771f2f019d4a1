//! Generation result types.

use std::path::PathBuf;
use std::time::Duration;

use crate::characters::Character;

/// Files written for one character.
#[derive(Debug, Clone)]
pub struct CharacterResult {
    pub character: Character,
    /// Written paths, poses in output order then the icon
    pub outputs: Vec<PathBuf>,
    pub duration: Duration,
}

/// Result of a complete run.
#[derive(Debug, Default)]
pub struct BuildResult {
    /// Results for each character, in generation order
    pub characters: Vec<CharacterResult>,
    pub total_duration: Duration,
}

impl BuildResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: CharacterResult) {
        self.characters.push(result);
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.total_duration = duration;
        self
    }

    /// Total number of files written.
    pub fn file_count(&self) -> usize {
        self.characters.iter().map(|c| c.outputs.len()).sum()
    }

    /// All written files, in generation order.
    pub fn all_outputs(&self) -> Vec<&PathBuf> {
        self.characters.iter().flat_map(|c| c.outputs.iter()).collect()
    }

    /// Result for one character, if it was generated.
    pub fn get(&self, character: Character) -> Option<&CharacterResult> {
        self.characters.iter().find(|c| c.character == character)
    }
}
