//! One generation round, threaded through its stages as explicit values.
//!
//! ```text
//! RoundBuilder ──scan──▶ RoundScanned ──synthesize──▶ Round ──emit──▶ files
//! ```
//!
//! Nothing outlives the round: every stage consumes the previous one.

use std::path::PathBuf;

use crate::diagnostics::Diagnostics;
use crate::emit::{Filer, emit_units};
use crate::index::GroupingIndex;
use crate::model::AnnotatedField;
use crate::render::Config;
use crate::scan::{JavaScanner, ManifestScanner, Scanner};
use crate::source_map::SourceMap;
use crate::synth::{GeneratedUnit, synthesize};
use crate::{Error, Result};

/// Inputs of a round: Java sources, manifests and the failure policy.
#[derive(Debug, Default)]
pub struct RoundBuilder {
    sources: SourceMap,
    manifests: SourceMap,
    strict: bool,
}

impl RoundBuilder {
    pub fn new(sources: SourceMap) -> Self {
        Self {
            sources,
            manifests: SourceMap::new(),
            strict: false,
        }
    }

    /// A round over a single inline Java source.
    pub fn one_liner(src: &str) -> Self {
        Self::new(SourceMap::inline(src))
    }

    /// JSON manifests scanned after the Java sources.
    pub fn with_manifests(mut self, manifests: SourceMap) -> Self {
        self.manifests = manifests;
        self
    }

    /// In strict mode warnings fail the round.
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }

    #[tracing::instrument(level = "debug", skip_all, fields(sources = self.sources.len(), manifests = self.manifests.len()))]
    pub fn scan(self) -> Result<RoundScanned> {
        let (mut fields, mut diag) = JavaScanner::new().scan(&self.sources)?;
        let (manifest_fields, manifest_diag) = ManifestScanner::new().scan(&self.manifests)?;
        fields.extend(manifest_fields);
        diag.extend(manifest_diag);

        tracing::debug!(fields = fields.len(), diagnostics = diag.len(), "scan finished");

        Ok(RoundScanned {
            sources: self.sources,
            fields,
            diag,
            strict: self.strict,
        })
    }
}

/// A round whose fields have been collected.
#[derive(Debug)]
pub struct RoundScanned {
    sources: SourceMap,
    fields: Vec<AnnotatedField>,
    diag: Diagnostics,
    strict: bool,
}

impl RoundScanned {
    pub fn fields(&self) -> &[AnnotatedField] {
        &self.fields
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diag
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.sources
    }

    /// Group the fields and synthesize one unit per declaring type.
    pub fn synthesize(mut self) -> Round {
        let scan_failed = self.diag.is_failure(self.strict);

        let index = GroupingIndex::build(self.fields, &mut self.diag);
        let units = synthesize(&index, &mut self.diag);

        Round {
            sources: self.sources,
            index,
            units,
            diag: self.diag,
            scan_failed,
            strict: self.strict,
        }
    }
}

/// A synthesized round.
#[derive(Debug)]
pub struct Round {
    sources: SourceMap,
    index: GroupingIndex,
    units: Vec<GeneratedUnit>,
    diag: Diagnostics,
    scan_failed: bool,
    strict: bool,
}

impl Round {
    /// No errors, and no warnings in strict mode.
    pub fn is_valid(&self) -> bool {
        !self.diag.is_failure(self.strict)
    }

    pub fn units(&self) -> &[GeneratedUnit] {
        &self.units
    }

    pub fn index(&self) -> &GroupingIndex {
        &self.index
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diag
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.sources
    }

    /// The generated units, or the stage that failed the round.
    pub fn into_units(self) -> Result<Vec<GeneratedUnit>> {
        if let Some(error) = self.failure() {
            return Err(error);
        }
        Ok(self.units)
    }

    /// Render and store every unit. An invalid round writes nothing.
    pub fn emit(&self, config: &Config, filer: &mut impl Filer) -> Result<Vec<PathBuf>> {
        if let Some(error) = self.failure() {
            return Err(error);
        }
        emit_units(&self.units, config, filer)
    }

    fn failure(&self) -> Option<Error> {
        if self.scan_failed {
            return Some(Error::ScanFailed(self.diag.clone()));
        }
        if !self.is_valid() {
            return Some(Error::SynthesisFailed(self.diag.clone()));
        }
        None
    }
}
