//! Run reports: one outcome per executed plan step.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{ArtifactKind, StubId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DirectoryOutcome {
    Created,
    AlreadyExisted,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArtifactOutcome {
    Created,
    Replaced,
    /// Existing file kept (declined overwrite, or create-only artifact).
    Skipped,
    Failed { reason: String },
    StubMissing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BindingOutcome {
    AlreadyPresent,
    Inserted,
    /// The statement the user has to add by hand.
    MethodNotFound { statement: String },
    ProviderMissing,
    /// Reading or writing the provider failed.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryReport {
    pub path: PathBuf,
    pub outcome: DirectoryOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactReport {
    pub kind: ArtifactKind,
    pub stub: StubId,
    pub path: PathBuf,
    pub outcome: ArtifactOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingReport {
    pub provider: PathBuf,
    pub signature: String,
    pub outcome: BindingOutcome,
}

/// Everything that happened during one generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub title: String,
    pub directories: Vec<DirectoryReport>,
    pub artifacts: Vec<ArtifactReport>,
    pub bindings: Vec<BindingReport>,
}

impl GenerationReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn artifact(&self, kind: ArtifactKind) -> Option<&ArtifactReport> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for dir in &self.directories {
            match dir.outcome {
                DirectoryOutcome::Created => summary.directories_created += 1,
                DirectoryOutcome::AlreadyExisted => {}
                DirectoryOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        for artifact in &self.artifacts {
            match artifact.outcome {
                ArtifactOutcome::Created => summary.created += 1,
                ArtifactOutcome::Replaced => summary.replaced += 1,
                ArtifactOutcome::Skipped => summary.skipped += 1,
                ArtifactOutcome::Failed { .. } => summary.failed += 1,
                ArtifactOutcome::StubMissing => summary.stubs_missing += 1,
            }
        }
        for binding in &self.bindings {
            match binding.outcome {
                BindingOutcome::Inserted => summary.bindings_added += 1,
                BindingOutcome::AlreadyPresent => {}
                _ => summary.bindings_pending += 1,
            }
        }
        summary
    }

    /// True when nothing was skipped, missing or failed.
    pub fn is_clean(&self) -> bool {
        let s = self.summary();
        s.skipped == 0 && s.failed == 0 && s.stubs_missing == 0 && s.bindings_pending == 0
    }
}

/// Outcome counts for the closing summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub directories_created: usize,
    pub created: usize,
    pub replaced: usize,
    pub skipped: usize,
    pub failed: usize,
    pub stubs_missing: usize,
    pub bindings_added: usize,
    pub bindings_pending: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} replaced, {} skipped, {} failed",
            self.created, self.replaced, self.skipped, self.failed
        )?;
        if self.stubs_missing > 0 {
            write!(f, ", {} stub(s) missing", self.stubs_missing)?;
        }
        if self.bindings_added > 0 {
            write!(f, ", {} binding(s) added", self.bindings_added)?;
        }
        if self.bindings_pending > 0 {
            write!(f, ", {} binding(s) need attention", self.bindings_pending)?;
        }
        Ok(())
    }
}
