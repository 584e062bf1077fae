//! Roster input for the command line: loading, demo data and the checks the
//! engine leaves to its caller.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::grid::Index;
use crate::model::condition::Condition;
use crate::model::entity::{Name, Person};
use crate::model::relation::RelationMap;
use crate::shuffle::{Params, SeatingShuffler, DEFAULT_MAX_ATTEMPTS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse roster: {0}")]
    Json(#[from] serde_json::Error),
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: Index, cols: Index },
    #[error("duplicate name in roster: {0}")]
    DuplicateName(Name),
    #[error("{people} people do not fit in {capacity} seats")]
    TooManyPeople { people: usize, capacity: usize },
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    pub rows: Index,
    pub cols: Index,
    pub people: Vec<Name>,
    #[serde(default)]
    pub friends: RelationMap,
    #[serde(default)]
    pub flagged: RelationMap,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub max_attempts: Option<usize>,
}

impl RosterConfig {
    pub fn from_json(text: &str) -> Result<RosterConfig, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<RosterConfig, ConfigError> {
        RosterConfig::from_json(&std::fs::read_to_string(path)?)
    }

    /// Eight people on a 3x3 grid.
    pub fn demo() -> RosterConfig {
        let people = ["Alice", "Bob", "Charlie", "Dave", "Eve", "Frank", "Grace", "Henry"];
        RosterConfig {
            rows: 3,
            cols: 3,
            people: people.iter().map(|name| name.to_string()).collect(),
            friends: RelationMap::new()
                .with("Alice", &["Bob", "Charlie"])
                .with("Bob", &["Alice", "Dave"])
                .with("Charlie", &["Alice", "Eve"])
                .with("Dave", &["Bob"]),
            flagged: RelationMap::new()
                .with("Alice", &["Eve"])
                .with("Bob", &["Frank"])
                .with("Eve", &["Alice", "Grace"])
                .with("Grace", &["Henry"]),
            seed: None,
            max_attempts: None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid { rows: self.rows, cols: self.cols });
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.people.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(ConfigError::DuplicateName(dup.clone()));
        }
        let capacity = self.rows * self.cols;
        if self.people.len() > capacity {
            return Err(ConfigError::TooManyPeople { people: self.people.len(), capacity });
        }
        for name in self.unknown_names() {
            warn!(name = %name, "relation names someone outside the roster");
        }
        Ok(())
    }

    /// Names used by either relation map that are not on the roster.
    pub fn unknown_names(&self) -> Vec<&Name> {
        let roster: HashSet<&str> = self.people.iter().map(String::as_str).collect();
        let mut unknown: Vec<&Name> = [&self.friends, &self.flagged]
            .into_iter()
            .flat_map(|map| map.iter().flat_map(|(name, others)| std::iter::once(name).chain(others)))
            .filter(|name| !roster.contains(name.as_str()))
            .collect();
        unknown.sort();
        unknown.dedup();
        unknown
    }

    pub fn build(self) -> Result<SeatingShuffler, ConfigError> {
        self.validate()?;
        let params = Params {
            rows: self.rows,
            cols: self.cols,
            max_attempts: self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            seed: self.seed,
        };
        let people = self.people.into_iter().map(Person::new).collect();
        Ok(SeatingShuffler::new(params, people, Condition::new(self.friends, self.flagged)))
    }
}
