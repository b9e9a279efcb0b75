// src/walker.rs

//! Depth-first, pre-order directory traversal.
//!
//! One traversal is strictly sequential: directory listings, status lookups,
//! content reads and handler continuations are awaited one at a time, so the
//! order of per-file notifications and of the returned list is deterministic
//! and the ancestor stack is never observed mid-update. Independent
//! traversals share no state and may run concurrently.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use regex::Regex;
use tracing::{debug, trace};

use crate::errors::{Result, WalkError};
use crate::filter::build_filter;
use crate::fs::{FileKind, FileSystem};
use crate::options::{Encoding, FilenameFormat, WalkOptions};

/// Decoded content delivered to the per-file handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Raw(Vec<u8>),
}

impl FileContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(s) => Some(s),
            FileContent::Raw(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Text(s) => s.as_bytes(),
            FileContent::Raw(b) => b,
        }
    }
}

/// One per-file notification.
///
/// Either `error` is set and `content` is absent, or the file was matched
/// and `content` carries its decoded bytes (absent when `read_contents`
/// is off).
#[derive(Debug)]
pub struct FileVisit<'a> {
    pub error: Option<&'a WalkError>,
    pub name: &'a str,
    pub content: Option<&'a FileContent>,
    pub status: Option<FileKind>,
}

/// A continuation the engine awaits before moving to the next entry.
///
/// Caller obligation: the future must complete, otherwise the traversal
/// never advances.
pub type Deferred = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Handler verdict after a notification.
pub enum Flow {
    Continue,
    Defer(Deferred),
}

/// Walk the tree under `root`, notifying `on_file` for every matched file
/// (and for per-entry errors), and return the ordered list of matched
/// output names.
pub async fn traverse_with<F, H>(
    fs: &F,
    root: &Path,
    options: &WalkOptions,
    on_file: &mut H,
) -> Result<Vec<String>>
where
    F: FileSystem,
    H: FnMut(FileVisit<'_>) -> Flow,
{
    // Compile the filter before the first directory read.
    let filter = build_filter(&options.filter)?;

    debug!(
        root = %root.display(),
        filters = options.filter.len(),
        reverse = options.reverse,
        hidden = options.hidden,
        depth = ?options.depth,
        "starting traversal"
    );

    let mut traversal = Traversal {
        fs,
        options,
        filter,
        on_file,
        matched: Vec::new(),
        ancestors: Vec::new(),
    };
    traversal.visit_dir(root.to_path_buf()).await?;

    debug!(matched = traversal.matched.len(), "traversal complete");
    Ok(traversal.matched)
}

/// Result-only variant of [`traverse_with`]: no per-file notifications,
/// just the ordered list of matched names.
pub async fn traverse<F: FileSystem>(
    fs: &F,
    root: &Path,
    options: &WalkOptions,
) -> Result<Vec<String>> {
    traverse_with(fs, root, options, &mut discard).await
}

fn discard(_visit: FileVisit<'_>) -> Flow {
    Flow::Continue
}

struct Traversal<'a, F, H> {
    fs: &'a F,
    options: &'a WalkOptions,
    filter: Option<Regex>,
    on_file: &'a mut H,
    matched: Vec<String>,
    ancestors: Vec<String>,
}

impl<F, H> Traversal<'_, F, H>
where
    F: FileSystem,
    H: FnMut(FileVisit<'_>) -> Flow,
{
    fn visit_dir<'s>(
        &'s mut self,
        dir: PathBuf,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + 's>> {
        Box::pin(async move {
            let mut names = match self.fs.read_dir(&dir).await {
                Ok(names) => names,
                Err(source) => {
                    if self.options.reject_on_error {
                        return Err(WalkError::Listing { path: dir, source });
                    }
                    debug!(dir = %dir.display(), error = %source, "skipping unlistable directory");
                    return Ok(());
                }
            };

            if self.options.reverse {
                names.reverse();
            }

            for name in names {
                if !self.options.hidden && name.starts_with('.') {
                    trace!(%name, "skipping hidden entry");
                    continue;
                }

                let full = dir.join(&name);
                let rel = self.relative_name(&name);

                let kind = match self.fs.status(&full).await {
                    Ok(kind) => kind,
                    Err(source) => {
                        let err = WalkError::Status { path: full, source };
                        // Errors are delivered inline with the entry they
                        // concern; continuations are ignored on errors.
                        (self.on_file)(FileVisit {
                            error: Some(&err),
                            name: &rel,
                            content: None,
                            status: None,
                        });
                        if self.options.reject_on_error {
                            return Err(err);
                        }
                        continue;
                    }
                };

                match kind {
                    FileKind::Directory => {
                        if let Some(limit) = self.options.depth {
                            if self.ancestors.len() + 1 > limit {
                                trace!(%name, "depth limit reached, not descending");
                                continue;
                            }
                        }
                        self.ancestors.push(name);
                        let descended = self.visit_dir(full).await;
                        self.ancestors.pop();
                        descended?;
                    }
                    FileKind::File => {
                        self.visit_file(full, name, rel).await?;
                    }
                    FileKind::Other => {
                        trace!(%name, "skipping non-regular entry");
                    }
                }
            }

            Ok(())
        })
    }

    async fn visit_file(&mut self, full: PathBuf, name: String, rel: String) -> Result<()> {
        if let Some(filter) = &self.filter {
            if !filter.is_match(&format!("/{rel}")) {
                trace!(%rel, "filtered out");
                return Ok(());
            }
        }

        let output = match self.options.filename_format {
            FilenameFormat::Relative => rel,
            FilenameFormat::FullPath => full.to_string_lossy().into_owned(),
            FilenameFormat::Filename => name,
        };
        self.matched.push(output.clone());

        if !self.options.read_contents {
            let flow = (self.on_file)(FileVisit {
                error: None,
                name: &output,
                content: None,
                status: Some(FileKind::File),
            });
            if let Flow::Defer(continuation) = flow {
                continuation.await;
            }
            return Ok(());
        }

        match self.fs.read(&full).await {
            Ok(bytes) => {
                let content = decode(bytes, self.options.encoding);
                let flow = (self.on_file)(FileVisit {
                    error: None,
                    name: &output,
                    content: Some(&content),
                    status: Some(FileKind::File),
                });
                if let Flow::Defer(continuation) = flow {
                    continuation.await;
                }
            }
            Err(source) => {
                let err = WalkError::Read { path: full, source };
                (self.on_file)(FileVisit {
                    error: Some(&err),
                    name: &output,
                    content: None,
                    status: Some(FileKind::File),
                });
                if self.options.reject_on_error {
                    return Err(err);
                }
            }
        }

        Ok(())
    }

    fn relative_name(&self, name: &str) -> String {
        if self.ancestors.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.ancestors.join("/"), name)
        }
    }
}

fn decode(bytes: Vec<u8>, encoding: Encoding) -> FileContent {
    match encoding {
        Encoding::Utf8 => FileContent::Text(String::from_utf8_lossy(&bytes).into_owned()),
        Encoding::Raw => FileContent::Raw(bytes),
    }
}
