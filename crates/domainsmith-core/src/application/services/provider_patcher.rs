//! Registration-file patching: add one container binding to the service provider.
//!
//! The provider is never parsed. Two insertion points are recognised:
//!
//! 1. A `// domainsmith:bindings` marker line. The statement goes directly
//!    above it, indented like the marker.
//! 2. Otherwise the body of `public function register()` (an optional
//!    `: void` style return type is tolerated). The statement goes right
//!    before the closing brace. The body must not contain `{`; a body with
//!    nested braces is reported as `MethodNotFound` and left untouched.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, instrument, warn};

use super::report::BindingOutcome;
use crate::application::ports::{Console, Filesystem, ProviderScaffolder};
use crate::domain::BindingRecord;

/// Explicit insertion point for bindings.
pub const BINDING_MARKER: &str = "// domainsmith:bindings";

/// Indentation used when echoing a statement for manual application.
const MANUAL_INDENT: &str = "        ";

static REGISTER_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(public\s+function\s+register\s*\(\s*\)(?:\s*:\s*\w+)?\s*\{)([^}]*)(\})")
        .expect("register() pattern must compile")
});

/// Result of a pure, in-memory patch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchResult {
    AlreadyPresent,
    Patched(String),
    MethodNotFound,
}

/// Insert `record` into provider `source` without touching anything else.
pub fn insert_binding(source: &str, record: &BindingRecord) -> PatchResult {
    if source.contains(&record.signature()) {
        return PatchResult::AlreadyPresent;
    }

    if let Some(patched) = insert_at_marker(source, record) {
        return PatchResult::Patched(patched);
    }

    insert_in_register_body(source, record).map_or(PatchResult::MethodNotFound, PatchResult::Patched)
}

fn insert_at_marker(source: &str, record: &BindingRecord) -> Option<String> {
    let marker_at = source.find(BINDING_MARKER)?;
    let line_start = line_start(source, marker_at);
    let indent = leading_whitespace(&source[line_start..marker_at]);

    let mut patched = String::with_capacity(source.len() + 256);
    patched.push_str(&source[..line_start]);
    patched.push_str(&record.statement(indent));
    patched.push('\n');
    patched.push_str(&source[line_start..]);
    Some(patched)
}

fn insert_in_register_body(source: &str, record: &BindingRecord) -> Option<String> {
    let caps = REGISTER_BODY.captures(source)?;
    let signature = caps.get(1)?;
    let body = caps.get(2)?;

    if body.as_str().contains('{') {
        debug!("register() body contains nested braces");
        return None;
    }

    let method_indent = leading_whitespace(&source[line_start(source, signature.start())..signature.start()]);
    let statement = record.statement(&format!("{method_indent}    "));

    let text = body.as_str();
    let kept = text.trim_end();
    let trailing = &text[kept.len()..];

    let mut new_body = String::with_capacity(text.len() + statement.len() + 8);
    new_body.push_str(kept);
    new_body.push('\n');
    new_body.push_str(&statement);
    if trailing.contains('\n') {
        new_body.push_str(trailing);
    } else {
        new_body.push('\n');
        new_body.push_str(method_indent);
    }

    let mut patched = String::with_capacity(source.len() + statement.len() + 8);
    patched.push_str(&source[..body.start()]);
    patched.push_str(&new_body);
    patched.push_str(&source[body.end()..]);
    Some(patched)
}

fn line_start(source: &str, at: usize) -> usize {
    source[..at].rfind('\n').map_or(0, |i| i + 1)
}

fn leading_whitespace(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, c)| !matches!(c, ' ' | '\t'))
        .map_or(line.len(), |(i, _)| i);
    &line[..end]
}

pub struct ProviderPatcher<'a> {
    fs: &'a dyn Filesystem,
    scaffolder: &'a dyn ProviderScaffolder,
    console: &'a dyn Console,
}

impl<'a> ProviderPatcher<'a> {
    pub fn new(
        fs: &'a dyn Filesystem,
        scaffolder: &'a dyn ProviderScaffolder,
        console: &'a dyn Console,
    ) -> Self {
        Self {
            fs,
            scaffolder,
            console,
        }
    }

    /// Make sure `provider` contains `record`, creating the provider if needed.
    #[instrument(skip(self, record), fields(provider = %provider.display(), binding = %record.interface()))]
    pub fn ensure_binding(&self, provider: &Path, record: &BindingRecord) -> BindingOutcome {
        if !self.fs.exists(provider) {
            info!("Provider missing, creating it");
            if let Err(e) = self.scaffolder.make_provider(provider) {
                warn!(error = %e, "Provider creation failed");
            }
            if !self.fs.exists(provider) {
                self.console.warn(&format!(
                    "Provider not found and could not be created: {}",
                    provider.display()
                ));
                return BindingOutcome::ProviderMissing;
            }
            self.console
                .info(&format!("Created provider: {}", provider.display()));
        }

        let source = match self.fs.read_to_string(provider) {
            Ok(source) => source,
            Err(e) => return self.failed(provider, &e.to_string()),
        };

        match insert_binding(&source, record) {
            PatchResult::AlreadyPresent => {
                debug!("Binding already present");
                self.console.info("Repository binding already exists.");
                BindingOutcome::AlreadyPresent
            }
            PatchResult::Patched(patched) => match self.fs.write_file(provider, &patched) {
                Ok(()) => {
                    info!("Binding inserted");
                    self.console.info(&format!(
                        "Added repository binding to {}",
                        provider.display()
                    ));
                    BindingOutcome::Inserted
                }
                Err(e) => self.failed(provider, &e.to_string()),
            },
            PatchResult::MethodNotFound => {
                let statement = record.statement(MANUAL_INDENT);
                warn!("register() method not found");
                self.console.warn(&format!(
                    "Could not locate register() method in {}. Please add manually:\n{statement}",
                    provider.display()
                ));
                BindingOutcome::MethodNotFound { statement }
            }
        }
    }

    fn failed(&self, provider: &Path, reason: &str) -> BindingOutcome {
        warn!(reason, "Provider update failed");
        self.console.warn(&format!(
            "Failed to update provider {}: {reason}",
            provider.display()
        ));
        BindingOutcome::Failed {
            reason: reason.to_string(),
        }
    }
}
