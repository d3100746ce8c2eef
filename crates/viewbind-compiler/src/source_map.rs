//! Source storage for a generation round.
//!
//! Stores sources as owned strings, providing a simple interface for
//! multi-file rounds.

use std::ops::Range;

/// Lightweight handle to a source in a round.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct SourceId(pub(crate) u32);

/// Byte range inside one source.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Span {
    pub source: SourceId,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(source: SourceId, range: Range<usize>) -> Self {
        Self {
            source,
            start: range.start,
            end: range.end,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Describes the origin of a source.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SourceKind {
    /// Text passed directly (CLI `-s` argument, tests).
    Inline,
    /// Input read from stdin.
    Stdin,
    /// A file with its path.
    File(String),
}

impl SourceKind {
    /// Returns the display name for diagnostics.
    pub fn display_name(&self) -> &str {
        match self {
            SourceKind::Inline => "<source>",
            SourceKind::Stdin => "<stdin>",
            SourceKind::File(path) => path,
        }
    }
}

/// A borrowed view of a source: id, kind, and content.
#[derive(Clone, Debug)]
pub struct Source<'s> {
    pub id: SourceId,
    pub kind: &'s SourceKind,
    pub content: &'s str,
}

#[derive(Clone, Debug)]
struct SourceEntry {
    kind: SourceKind,
    content: String,
}

/// Registry of all sources in a round.
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    entries: Vec<SourceEntry>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_inline(&mut self, content: &str) -> SourceId {
        self.push_entry(SourceKind::Inline, content)
    }

    pub fn add_stdin(&mut self, content: &str) -> SourceId {
        self.push_entry(SourceKind::Stdin, content)
    }

    pub fn add_file(&mut self, path: &str, content: &str) -> SourceId {
        self.push_entry(SourceKind::File(path.to_owned()), content)
    }

    /// Create a SourceMap with a single inline source.
    pub fn inline(content: &str) -> Self {
        let mut map = Self::new();
        map.add_inline(content);
        map
    }

    /// Get a source by ID. `None` for ids from another map.
    pub fn get(&self, id: SourceId) -> Option<Source<'_>> {
        let entry = self.entries.get(id.0 as usize)?;
        Some(Source {
            id,
            kind: &entry.kind,
            content: &entry.content,
        })
    }

    /// Content of a source, empty for unknown ids.
    pub fn content(&self, id: SourceId) -> &str {
        self.get(id).map(|s| s.content).unwrap_or_default()
    }

    /// Display name of a source, `<unknown>` for unknown ids.
    pub fn display_name(&self, id: SourceId) -> &str {
        self.get(id)
            .map(|s| s.kind.display_name())
            .unwrap_or("<unknown>")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Source<'_>> {
        self.entries.iter().enumerate().map(|(idx, entry)| Source {
            id: SourceId(idx as u32),
            kind: &entry.kind,
            content: &entry.content,
        })
    }

    fn push_entry(&mut self, kind: SourceKind, content: &str) -> SourceId {
        let id = SourceId(self.entries.len() as u32);
        self.entries.push(SourceEntry {
            kind,
            content: content.to_owned(),
        });
        id
    }
}
