// src/filter.rs

//! Glob-to-regex filter compilation.
//!
//! The supported syntax is the small wildcard subset used by the walker:
//!
//! - `**` matches any number of characters, including `/` (descends into
//!   subdirectories).
//! - `*` matches any number of characters except `/` (stays within one
//!   path segment).
//! - `?` matches zero or one character except `/`. The zero-or-one semantic
//!   is deliberate: `*.t?t` matches both `abc.txt` and `abc.tt`.
//!
//! Candidate paths are relative to the walk root and normalised with a
//! leading `/` before matching; each compiled alternative therefore starts
//! with an optional `/`. Matching is case-insensitive.

use regex::{Regex, RegexBuilder};

use crate::errors::Result;

/// Compile a filter specification into a single matcher.
///
/// Patterns are independent alternatives: a path matches if it matches any
/// one of them. An empty specification means "no filter" and yields `None`.
pub fn build_filter(patterns: &[String]) -> Result<Option<Regex>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let alternatives: Vec<String> = patterns.iter().map(|p| translate(p)).collect();
    let source = format!("^(?:{})$", alternatives.join("|"));

    let regex = RegexBuilder::new(&source).case_insensitive(true).build()?;
    Ok(Some(regex))
}

/// Translate one glob pattern into a regex alternative.
///
/// Only `.`, `\`, `-`, `+` and `|` are escaped; any other regex
/// metacharacter in a pattern is passed through and, if invalid, surfaces
/// as a [`crate::WalkError::Pattern`] at compile time.
fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push_str("/?");

    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                // Collapse a run of stars: two or more cross separators.
                let mut run = 1;
                while chars.peek() == Some(&'*') {
                    chars.next();
                    run += 1;
                }
                if run >= 2 {
                    out.push_str(".*");
                } else {
                    out.push_str("[^/]*");
                }
            }
            '?' => out.push_str("[^/]?"),
            '.' | '\\' | '-' | '+' | '|' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}
