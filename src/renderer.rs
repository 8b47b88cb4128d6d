// src/renderer.rs

use crate::model::*;
use std::io::{self, Write};

const SEPARATOR: &str = "-----------------";

/// Writes the three ranked blocks, each cut to at most `top` entries.
///
/// Shorter lists are printed in full rather than padded or rejected.
pub fn render_report(out: &mut impl Write, report: &Report, top: usize) -> io::Result<()> {
    write_title(out, &format!("Top {} active users", top))?;
    for actor in report.active_actors.iter().take(top) {
        writeln!(out, "Username: {}", actor.username)?;
        writeln!(out, "Created Count: {}", actor.create_count)?;
        writeln!(out, "Committed count: {}", actor.commit_count)?;
    }

    render_repos(out, &format!("Top {} commits pushed", top), &report.pushed_repos, top)?;
    render_repos(out, &format!("Top {} events watched", top), &report.watched_repos, top)?;
    out.flush()
}

fn render_repos(out: &mut impl Write, title: &str, repos: &[Repo], top: usize) -> io::Result<()> {
    write_title(out, title)?;
    for repo in repos.iter().take(top) {
        writeln!(out, "Name: {}", repo.name)?;
        writeln!(out, "Count: {}", repo.count)?;
    }
    Ok(())
}

fn write_title(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, count: u64) -> Repo {
        Repo {
            id: name.to_string(),
            name: name.to_string(),
            count,
        }
    }

    fn render(report: &Report, top: usize) -> String {
        let mut out = Vec::new();
        render_report(&mut out, report, top).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn short_lists_are_printed_in_full() {
        let report = Report {
            active_actors: vec![Actor {
                id: "1".to_string(),
                username: "alice".to_string(),
                create_count: 1,
                commit_count: 1,
            }],
            pushed_repos: vec![repo("tokio", 3), repo("serde", 1)],
            watched_repos: Vec::new(),
        };

        let text = render(&report, 10);

        assert_eq!(
            text,
            "\nTop 10 active users\n-----------------\n\
             Username: alice\nCreated Count: 1\nCommitted count: 1\n\
             \nTop 10 commits pushed\n-----------------\n\
             Name: tokio\nCount: 3\nName: serde\nCount: 1\n\
             \nTop 10 events watched\n-----------------\n"
        );
    }

    #[test]
    fn long_lists_are_cut_at_top() {
        let repos: Vec<Repo> = (0..25).map(|i| repo(&format!("r{}", i), 25 - i)).collect();
        let report = Report {
            active_actors: Vec::new(),
            pushed_repos: repos.clone(),
            watched_repos: repos,
        };

        let text = render(&report, 10);
        assert_eq!(text.matches("Name: ").count(), 20);
        assert!(text.contains("Name: r9\n"));
        assert!(!text.contains("Name: r10\n"));
    }
}
