//! Persisting rendered units.
//!
//! A `Filer` receives each rendered unit. The first failed write aborts
//! emission with `Error::Emit`; units already written stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::render::{Config, render_with_config};
use crate::synth::GeneratedUnit;
use crate::{Error, Result};

/// Destination for generated units.
pub trait Filer {
    /// Store `contents` for `unit`, returning where it went.
    fn write_unit(&mut self, unit: &GeneratedUnit, contents: &str) -> Result<PathBuf>;
}

/// Writes units below a root directory as `package/path/Name.java`.
#[derive(Debug, Clone)]
pub struct DirFiler {
    root: PathBuf,
}

impl DirFiler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Filer for DirFiler {
    fn write_unit(&mut self, unit: &GeneratedUnit, contents: &str) -> Result<PathBuf> {
        let path = self.root.join(unit.relative_path());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Emit {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, contents).map_err(|source| Error::Emit {
            path: path.clone(),
            source,
        })?;

        tracing::info!(unit = %unit.qualified_name(), path = %path.display(), "wrote unit");
        Ok(path)
    }
}

/// Keeps rendered units in memory, keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFiler {
    files: IndexMap<PathBuf, String>,
}

impl MemoryFiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Files in write order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files
            .iter()
            .map(|(path, contents)| (path.as_path(), contents.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Filer for MemoryFiler {
    fn write_unit(&mut self, unit: &GeneratedUnit, contents: &str) -> Result<PathBuf> {
        let path = unit.relative_path();
        self.files.insert(path.clone(), contents.to_owned());
        Ok(path)
    }
}

/// Render and store every unit, stopping at the first failure.
#[tracing::instrument(level = "debug", skip_all, fields(units = units.len()))]
pub fn emit_units(
    units: &[GeneratedUnit],
    config: &Config,
    filer: &mut impl Filer,
) -> Result<Vec<PathBuf>> {
    units
        .iter()
        .map(|unit| filer.write_unit(unit, &render_with_config(unit, config)))
        .collect()
}
