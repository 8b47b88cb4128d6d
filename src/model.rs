// src/model.rs

use std::collections::HashMap;
use std::fmt;

pub const CREATE_EVENT: &str = "createevent";
pub const PUSH_EVENT: &str = "pushevent";
pub const WATCH_EVENT: &str = "watchevent";

/// Which of the three input files a record or error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRole {
    Actor,
    Repo,
    Event,
}

impl fmt::Display for SourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceRole::Actor => "actor",
            SourceRole::Repo => "repo",
            SourceRole::Event => "event",
        })
    }
}

/// A user account, with the counts filled in during aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub username: String,
    pub create_count: u64,
    pub commit_count: u64,
}

/// A repository, with its event count filled in during aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repo {
    pub id: String,
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    /// Lowercased, e.g. `pushevent`
    pub kind: String,
    pub actor_id: String,
    pub repo_id: String,
}

/// Groups records by a natural key, keeping insertion order within each key.
///
/// Built once while parsing and only read afterwards. Duplicate rows are kept,
/// but consumers resolve names from the first record only.
#[derive(Debug, Clone)]
pub struct Lookup<T> {
    groups: HashMap<String, Vec<T>>,
}

impl<T> Default for Lookup<T> {
    fn default() -> Self {
        Self { groups: HashMap::new() }
    }
}

impl<T> Lookup<T> {
    pub fn insert(&mut self, key: String, record: T) {
        self.groups.entry(key).or_default().push(record);
    }

    pub fn get(&self, key: &str) -> Option<&[T]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn first(&self, key: &str) -> Option<&T> {
        self.get(key).and_then(<[T]>::first)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub type ActorTable = Lookup<Actor>;
pub type RepoTable = Lookup<Repo>;

/// Events grouped by their lowercased type
pub type EventIndex = Lookup<Event>;

impl EventIndex {
    /// All events of one type, empty if none were seen
    pub fn of_kind(&self, kind: &str) -> &[Event] {
        self.get(kind).unwrap_or(&[])
    }
}

/// The three parsed sources, ready for aggregation
#[derive(Debug, Default)]
pub struct Dataset {
    pub actors: ActorTable,
    pub repos: RepoTable,
    pub events: EventIndex,
}

/// The three ranked lists the report is rendered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub active_actors: Vec<Actor>,
    pub pushed_repos: Vec<Repo>,
    pub watched_repos: Vec<Repo>,
}
