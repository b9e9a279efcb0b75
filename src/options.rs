// src/options.rs

use std::str::FromStr;

use serde::Deserialize;

/// Shape of the path string reported for a matched file.
///
/// - `Relative`: path relative to the walk root, `/`-separated (default).
/// - `FullPath`: the root path joined with the relative path.
/// - `Filename`: the bare entry name, no directory part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilenameFormat {
    Relative,
    FullPath,
    Filename,
}

impl Default for FilenameFormat {
    fn default() -> Self {
        FilenameFormat::Relative
    }
}

impl FromStr for FilenameFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relative" => Ok(FilenameFormat::Relative),
            "full_path" | "fullpath" => Ok(FilenameFormat::FullPath),
            "filename" => Ok(FilenameFormat::Filename),
            other => Err(format!(
                "invalid filename_format: {other} (expected \"relative\", \"full_path\" or \"filename\")"
            )),
        }
    }
}

/// Decoding applied to file bytes before they reach the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Decode as UTF-8 text, replacing invalid sequences (default).
    Utf8,
    /// Deliver the raw bytes untouched.
    Raw,
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Utf8
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "raw" | "none" => Ok(Encoding::Raw),
            other => Err(format!(
                "invalid encoding: {other} (expected \"utf8\" or \"raw\")"
            )),
        }
    }
}

/// Options for one traversal.
///
/// `filter` holds glob patterns combined as alternatives (see
/// [`crate::filter::build_filter`]); an empty list means every file matches.
/// `depth` is the maximum number of directory levels to descend below the
/// root; `None` means unlimited. With `reject_on_error` (the default) any
/// single I/O error aborts the whole traversal.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkOptions {
    pub filter: Vec<String>,
    pub reverse: bool,
    pub hidden: bool,
    pub depth: Option<usize>,
    pub filename_format: FilenameFormat,
    pub read_contents: bool,
    pub encoding: Encoding,
    pub reject_on_error: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        WalkOptions {
            filter: Vec::new(),
            reverse: false,
            hidden: false,
            depth: None,
            filename_format: FilenameFormat::default(),
            read_contents: true,
            encoding: Encoding::default(),
            reject_on_error: true,
        }
    }
}

impl WalkOptions {
    /// Convenience constructor for the common "just filter" case.
    pub fn filtered<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WalkOptions {
            filter: patterns.into_iter().map(Into::into).collect(),
            ..WalkOptions::default()
        }
    }
}
