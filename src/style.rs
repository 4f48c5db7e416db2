//! Console styling for progress lines and the change summary.

use colored::{ColoredString, Colorize};

pub const FETCH: &str = "🔍";
pub const DONE: &str = "✅";
pub const ALERT: &str = "⚠️";

/// A value about to be replaced.
pub fn before(s: &str) -> ColoredString {
    s.dimmed()
}

/// The value written in its place.
pub fn after(s: &str) -> ColoredString {
    s.green()
}

/// Formula paths and download URLs.
pub fn location(s: &str) -> ColoredString {
    s.cyan()
}

pub fn notice(s: &str) -> ColoredString {
    s.yellow()
}

/// `<old> -> <new>`, with a missing old value rendered empty.
pub fn transition(old: Option<&str>, new: &str) -> String {
    format!("{} -> {}", before(old.unwrap_or("")), after(new))
}
