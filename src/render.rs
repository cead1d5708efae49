//! Presentation of traversal results.
//!
//! The graph engine only returns labels; this module turns them into text
//! (or a serialisable report) for whoever is showing them to a user.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Separator placed between consecutive labels.
pub const ARROW: &str = " -> ";

/// Joins a visitation order into one line.
pub fn format_order<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .map(|label| label.as_ref())
        .collect::<Vec<&str>>()
        .join(ARROW)
}

/// Formats one path from source to destination.
pub fn format_path<S: AsRef<str>>(path: &[S]) -> String {
    format_order(path)
}

/// Every path found between two labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathReport {
    /// Where the paths start.
    pub src: String,
    /// Where the paths end.
    pub dest: String,
    /// The paths, in discovery order.
    pub paths: Vec<Vec<String>>,
    /// `true` if enumeration stopped at a caller-imposed limit.
    #[serde(default)]
    pub truncated: bool,
}

impl PathReport {
    /// Collects up to `limit` paths from `paths` (all of them when `None`).
    pub fn collect<I>(src: &str, dest: &str, paths: I, limit: Option<usize>) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut paths = paths.into_iter();
        let mut collected = Vec::new();
        let mut truncated = false;
        loop {
            if limit.is_some_and(|max| collected.len() >= max) {
                truncated = paths.next().is_some();
                break;
            }
            match paths.next() {
                Some(path) => collected.push(path),
                None => break,
            }
        }

        Self {
            src: src.to_owned(),
            dest: dest.to_owned(),
            paths: collected,
            truncated,
        }
    }

    /// Numbered, human readable lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "All trade paths from {} to {}", self.src, self.dest);
        if self.paths.is_empty() {
            let _ = writeln!(out, "  (no trade paths)");
        }
        for (i, path) in self.paths.iter().enumerate() {
            let _ = writeln!(out, "  {:>3}. {}", i + 1, format_path(path));
        }
        if self.truncated {
            let _ = writeln!(out, "  ... stopped after {} paths", self.paths.len());
        }
        out
    }
}
