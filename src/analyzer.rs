// src/analyzer.rs

use crate::model::*;
use crate::rank::{outranks, rank_by_count, stable_sort_by_less};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Builds the three ranked lists from the parsed sources.
pub fn analyze(data: &Dataset) -> Report {
    let creates = data.events.of_kind(CREATE_EVENT);
    let pushes = data.events.of_kind(PUSH_EVENT);
    let watches = data.events.of_kind(WATCH_EVENT);
    debug!(
        creates = creates.len(),
        pushes = pushes.len(),
        watches = watches.len(),
        "aggregating events"
    );

    Report {
        active_actors: aggregate_actors(creates, pushes, &data.actors),
        pushed_repos: aggregate_repos(pushes, &data.repos),
        watched_repos: aggregate_repos(watches, &data.repos),
    }
}

/// Counts create and push events per actor.
///
/// Only actors with at least one create event are listed. The list is ranked
/// by create count, then re-ranked with [`outranks`], which moves an actor
/// ahead only when both of its counts are strictly higher.
pub fn aggregate_actors(creates: &[Event], pushes: &[Event], actors: &ActorTable) -> Vec<Actor> {
    // Indices into `touched`, so the list keeps first-touch order.
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut touched: Vec<Actor> = Vec::new();

    for event in creates {
        let slot = *slots.entry(event.actor_id.as_str()).or_insert_with(|| {
            let username = match actors.first(&event.actor_id) {
                Some(known) => known.username.clone(),
                None => {
                    trace!(event = %event.id, actor = %event.actor_id, "unknown actor");
                    String::new()
                }
            };
            touched.push(Actor {
                id: event.actor_id.clone(),
                username,
                ..Actor::default()
            });
            touched.len() - 1
        });
        touched[slot].create_count += 1;
    }
    rank_by_count(&mut touched, |a| a.create_count);

    let mut push_counts: HashMap<&str, u64> = HashMap::new();
    for event in pushes {
        *push_counts.entry(event.actor_id.as_str()).or_default() += 1;
    }
    for actor in &mut touched {
        actor.commit_count = push_counts.get(actor.id.as_str()).copied().unwrap_or(0);
    }

    stable_sort_by_less(&mut touched, &outranks);
    touched
}

/// Counts events per repository, ranked by count with first-touch order on ties.
pub fn aggregate_repos(events: &[Event], repos: &RepoTable) -> Vec<Repo> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut touched: Vec<Repo> = Vec::new();

    for event in events {
        let slot = *slots.entry(event.repo_id.as_str()).or_insert_with(|| {
            let name = match repos.first(&event.repo_id) {
                Some(known) => known.name.clone(),
                None => {
                    trace!(event = %event.id, repo = %event.repo_id, "unknown repo");
                    String::new()
                }
            };
            touched.push(Repo {
                id: event.repo_id.clone(),
                name,
                count: 0,
            });
            touched.len() - 1
        });
        touched[slot].count += 1;
    }

    rank_by_count(&mut touched, |r| r.count);
    touched
}
