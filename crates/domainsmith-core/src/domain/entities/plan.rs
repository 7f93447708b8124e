//! Generation plans: the ordered list of side effects one request decomposes into.
//!
//! A plan is pure data. The application layer either executes it or, for a
//! dry run, only displays it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::binding::BindingRecord;
use super::placeholders::PlaceholderMap;
use crate::domain::value_objects::{ArtifactKind, StubId};

/// When an artifact may be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Create, or overwrite subject to force/confirmation.
    #[default]
    Standard,
    /// Create only; an existing file is left alone without asking.
    OnlyIfAbsent,
}

/// One file to render and materialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub kind: ArtifactKind,
    pub stub: StubId,
    pub destination: PathBuf,
    pub placeholders: Arc<PlaceholderMap>,
    pub policy: WritePolicy,
}

impl ArtifactSpec {
    pub fn new(
        kind: ArtifactKind,
        stub: StubId,
        destination: impl Into<PathBuf>,
        placeholders: Arc<PlaceholderMap>,
    ) -> Self {
        Self {
            kind,
            stub,
            destination: destination.into(),
            placeholders,
            policy: WritePolicy::Standard,
        }
    }

    pub fn only_if_absent(mut self) -> Self {
        self.policy = WritePolicy::OnlyIfAbsent;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    EnsureDirectory(PathBuf),
    Materialize(ArtifactSpec),
    Bind {
        provider: PathBuf,
        record: BindingRecord,
    },
}

impl fmt::Display for PlanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnsureDirectory(path) => write!(f, "mkdir  {}", path.display()),
            Self::Materialize(target) => write!(
                f,
                "write  {} ({}, from {})",
                target.destination.display(),
                target.kind,
                target.stub
            ),
            Self::Bind { provider, record } => write!(
                f,
                "bind   {} -> {} in {}",
                record.interface(),
                record.implementation(),
                provider.display()
            ),
        }
    }
}

/// Ordered steps for one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    title: String,
    force: bool,
    steps: Vec<PlanStep>,
}

impl GenerationPlan {
    pub fn new(title: impl Into<String>, force: bool) -> Self {
        Self {
            title: title.into(),
            force,
            steps: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Add a directory step; a directory already in the plan is not repeated.
    pub fn ensure_directory(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let already_planned = self
            .steps
            .iter()
            .any(|s| matches!(s, PlanStep::EnsureDirectory(p) if *p == path));
        if !already_planned {
            self.steps.push(PlanStep::EnsureDirectory(path));
        }
    }

    pub fn materialize(&mut self, target: ArtifactSpec) {
        self.steps.push(PlanStep::Materialize(target));
    }

    pub fn bind(&mut self, provider: impl Into<PathBuf>, record: BindingRecord) {
        self.steps.push(PlanStep::Bind {
            provider: provider.into(),
            record,
        });
    }

    /// Destinations of every planned file, in order.
    pub fn destinations(&self) -> impl Iterator<Item = &Path> {
        self.steps.iter().filter_map(|s| match s {
            PlanStep::Materialize(target) => Some(target.destination.as_path()),
            _ => None,
        })
    }
}

impl fmt::Display for GenerationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for step in &self.steps {
            writeln!(f, "  {step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(dest: &str) -> ArtifactSpec {
        ArtifactSpec::new(
            ArtifactKind::Entity,
            StubId::Entity,
            dest,
            Arc::new(PlaceholderMap::default()),
        )
    }

    #[test]
    fn directories_are_not_planned_twice() {
        let mut plan = GenerationPlan::new("t", false);
        plan.ensure_directory("/a");
        plan.ensure_directory("/b");
        plan.ensure_directory("/a");
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn steps_keep_insertion_order() {
        let mut plan = GenerationPlan::new("t", true);
        plan.ensure_directory("/a");
        plan.materialize(target("/a/One.php"));
        plan.bind("/p.php", BindingRecord::new("A", "B"));
        plan.materialize(target("/a/Two.php"));

        assert!(matches!(plan.steps()[0], PlanStep::EnsureDirectory(_)));
        assert!(matches!(plan.steps()[2], PlanStep::Bind { .. }));
        let dests: Vec<_> = plan.destinations().collect();
        assert_eq!(dests, vec![Path::new("/a/One.php"), Path::new("/a/Two.php")]);
        assert!(plan.force());
    }

    #[test]
    fn only_if_absent_sets_policy() {
        assert_eq!(target("/x").policy, WritePolicy::Standard);
        assert_eq!(target("/x").only_if_absent().policy, WritePolicy::OnlyIfAbsent);
    }

    #[test]
    fn display_lists_every_step() {
        let mut plan = GenerationPlan::new("Domain Users", false);
        plan.ensure_directory("/a");
        plan.materialize(target("/a/User.php"));
        let text = plan.to_string();
        assert!(text.starts_with("Domain Users\n"));
        assert!(text.contains("mkdir  /a"));
        assert!(text.contains("write  /a/User.php (entity, from domain/Entity.stub)"));
    }
}
