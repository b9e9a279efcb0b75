#![allow(dead_code)]

//! Handler that records every per-file notification for assertions.

use walkfiles::{FileContent, FileKind, FileVisit, Flow};

/// One recorded notification, with the error flattened to its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub name: String,
    pub content: Option<FileContent>,
    pub error: Option<String>,
    pub status: Option<FileKind>,
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub visits: Vec<VisitRecord>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, visit: FileVisit<'_>) -> Flow {
        self.visits.push(VisitRecord {
            name: visit.name.to_string(),
            content: visit.content.cloned(),
            error: visit.error.map(|e| e.to_string()),
            status: visit.status,
        });
        Flow::Continue
    }

    /// Names of all notifications, in order.
    pub fn names(&self) -> Vec<&str> {
        self.visits.iter().map(|v| v.name.as_str()).collect()
    }

    /// Text contents of successful notifications, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.visits
            .iter()
            .filter_map(|v| v.content.as_ref().and_then(FileContent::as_text))
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.visits.iter().filter(|v| v.error.is_some()).count()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.visits
            .iter()
            .filter_map(|v| v.error.as_deref())
            .collect()
    }
}
