// src/ingest.rs

use crate::cli::SourcePaths;
use crate::error::SourceError;
use crate::model::*;
use crate::parser::{self, Parsed, Record};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Opens and parses the three sources in parallel.
///
/// Each source is parsed on its own rayon task into its own table. Results are
/// taken in the order actors, repos, events; the first failure in that order
/// is returned and everything else is dropped.
pub fn load(paths: &SourcePaths, show_progress: bool) -> Result<Dataset, SourceError> {
    let bars = if show_progress {
        MultiProgress::new()
    } else {
        MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
    };
    let actor_bar = bars.add(source_bar(SourceRole::Actor));
    let repo_bar = bars.add(source_bar(SourceRole::Repo));
    let event_bar = bars.add(source_bar(SourceRole::Event));

    let (actors, (repos, events)) = rayon::join(
        || load_one::<Actor>(&paths.actors, &actor_bar),
        || {
            rayon::join(
                || load_one::<Repo>(&paths.repos, &repo_bar),
                || load_one::<Event>(&paths.events, &event_bar),
            )
        },
    );

    Ok(Dataset {
        actors: actors?,
        repos: repos?,
        events: events?,
    })
}

fn source_bar(role: SourceRole) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(format!("{} rows", role));
    if let Ok(style) = ProgressStyle::with_template("{spinner} {pos:>9} {msg}") {
        bar.set_style(style);
    }
    bar
}

fn load_one<R: Record>(path: &Path, bar: &ProgressBar) -> Result<Lookup<R>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        role: R::ROLE,
        path: path.to_path_buf(),
        source,
    })?;

    let Parsed { table, rows, issues } =
        parser::parse::<R>(file, bar).map_err(|source| SourceError::Read {
            role: R::ROLE,
            path: path.to_path_buf(),
            source,
        })?;

    bar.finish_with_message(format!("{} rows", R::ROLE));
    debug!(
        role = %R::ROLE,
        path = %path.display(),
        rows,
        skipped = issues.len(),
        "loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fs;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        paths: SourcePaths,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let paths = SourcePaths {
            actors: dir.path().join("actors.csv"),
            repos: dir.path().join("repos.csv"),
            events: dir.path().join("events.csv"),
        };
        fs::write(&paths.actors, "id,login\n1,Alice\n2,bob\n").unwrap();
        fs::write(&paths.repos, "id,name\n10,Tokio\n").unwrap();
        fs::write(
            &paths.events,
            "id,type,actor_id,repo_id\n\
             100,CreateEvent,1,10\n\
             101,PushEvent,1,10\n\
             102,broken-row\n\
             103,WatchEvent,2,10\n",
        )
        .unwrap();
        Fixture { _dir: dir, paths }
    }

    #[test]
    fn loads_all_three_sources() {
        let fx = fixture();
        let data = load(&fx.paths, false).unwrap();

        assert_eq!(data.actors.first("1").unwrap().username, "alice");
        assert_eq!(data.repos.first("10").unwrap().name, "tokio");
        assert_eq!(data.events.of_kind(CREATE_EVENT).len(), 1);
        assert_eq!(data.events.of_kind(PUSH_EVENT).len(), 1);
        assert_eq!(data.events.of_kind(WATCH_EVENT).len(), 1);
    }

    fn assert_missing(mut paths: SourcePaths, role: SourceRole) {
        let missing = paths.actors.with_file_name("nope.csv");
        match role {
            SourceRole::Actor => paths.actors = missing,
            SourceRole::Repo => paths.repos = missing,
            SourceRole::Event => paths.events = missing,
        }

        let err = load(&paths, false).unwrap_err();
        assert!(matches!(err, SourceError::Open { .. }));
        assert_eq!(err.role(), role);
        assert_eq!(err.io_error().kind(), ErrorKind::NotFound);
        assert!(err.source().is_some());

        let message = err.to_string();
        assert!(
            message.starts_with(&format!("could not read {} file content: ", role)),
            "{message}"
        );
        assert!(message.contains("nope.csv"), "{message}");
        assert!(!message.contains(&err.io_error().to_string()), "{message}");
    }

    #[test]
    fn missing_actors_file_is_fatal() {
        let fx = fixture();
        assert_missing(fx.paths.clone(), SourceRole::Actor);
    }

    #[test]
    fn missing_repos_file_is_fatal() {
        let fx = fixture();
        assert_missing(fx.paths.clone(), SourceRole::Repo);
    }

    #[test]
    fn missing_events_file_is_fatal() {
        let fx = fixture();
        assert_missing(fx.paths.clone(), SourceRole::Event);
    }

    #[test]
    fn first_failure_in_join_order_wins() {
        let fx = fixture();
        let mut paths = fx.paths.clone();
        paths.events = paths.events.with_file_name("gone-events.csv");
        paths.actors = paths.actors.with_file_name("gone-actors.csv");

        let err = load(&paths, false).unwrap_err();
        assert_eq!(err.role(), SourceRole::Actor);
    }
}
