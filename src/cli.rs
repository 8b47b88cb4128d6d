// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Top 10 actors and repositories from event dumps", long_about = None)]
pub struct Args {
    /// Actors file to process (id,login)
    #[arg(long, default_value = "actors.csv")]
    pub actors: PathBuf,

    /// Events file to process (id,type,actor_id,repo_id)
    #[arg(long, default_value = "events.csv")]
    pub events: PathBuf,

    /// Repositories file to process (id,name)
    #[arg(long, default_value = "repos.csv")]
    pub repos: PathBuf,

    /// Commits file. Reserved: accepted but not read by any report
    #[arg(long, default_value = "commits.csv")]
    pub commits: PathBuf,

    /// Maximum number of entries per report
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Hide the ingestion progress bars
    #[arg(long)]
    pub no_progress: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The three files the pipeline reads
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub actors: PathBuf,
    pub repos: PathBuf,
    pub events: PathBuf,
}

impl Args {
    pub fn sources(&self) -> SourcePaths {
        SourcePaths {
            actors: self.actors.clone(),
            repos: self.repos.clone(),
            events: self.events.clone(),
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_usual_file_names() {
        let args = Args::parse_from(["topten"]);

        assert_eq!(args.actors, PathBuf::from("actors.csv"));
        assert_eq!(args.events, PathBuf::from("events.csv"));
        assert_eq!(args.repos, PathBuf::from("repos.csv"));
        assert_eq!(args.commits, PathBuf::from("commits.csv"));
        assert_eq!(args.top, 10);
        assert_eq!(args.log_level(), "info");
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "topten", "--actors", "a.csv", "--events", "e.csv", "--repos", "r.csv", "--top", "3",
            "-vv",
        ]);

        let sources = args.sources();
        assert_eq!(sources.actors, PathBuf::from("a.csv"));
        assert_eq!(sources.events, PathBuf::from("e.csv"));
        assert_eq!(sources.repos, PathBuf::from("r.csv"));
        assert_eq!(args.top, 3);
        assert_eq!(args.log_level(), "trace");
    }

    #[test]
    fn args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
