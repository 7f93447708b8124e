//! Placeholder maps: the token -> value table a stub is rendered with.
//!
//! Tokens are literal strings of the form `{{ name }}` (single spaces inside
//! the braces). Rendering is plain, case-sensitive text replacement in
//! insertion order; tokens without an entry are left untouched.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use super::names::DerivedNames;

/// The token literals understood by the built-in stubs.
pub mod tokens {
    pub const ROOT_NAMESPACE: &str = "{{ rootNamespace }}";
    pub const DOMAIN_NAMESPACE: &str = "{{ domainNamespace }}";
    pub const ACTIONS_NAMESPACE: &str = "{{ actionsNamespace }}";
    pub const DOMAIN: &str = "{{ domain }}";
    pub const DOMAIN_LOWER: &str = "{{ domainLower }}";
    pub const TABLE: &str = "{{ table }}";
    pub const PARENT_DIR_NAME: &str = "{{ parentDirName }}";
    pub const PARENT_DOMAIN: &str = "{{ parentDomain }}";
    pub const SUBDOMAIN_DIR_NAME: &str = "{{ subdomainDirName }}";
    pub const VALUE_OBJECT_NAMESPACE: &str = "{{ valueObjectNamespace }}";
    pub const NAME: &str = "{{ name }}";
}

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{ [A-Za-z][A-Za-z0-9]* \}\}").expect("token pattern must compile")
});

/// Ordered token -> value table.
///
/// Built once per generation request and shared, read-only, by every
/// artifact of that request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: IndexMap<String, String>,
}

impl PlaceholderMap {
    pub fn builder() -> PlaceholderMapBuilder {
        PlaceholderMapBuilder::default()
    }

    /// Map for a top-level domain, or for a subdomain when `parent` is set.
    ///
    /// | token | top-level `Users` | subdomain `Users/Profiles` |
    /// |-------|-------------------|----------------------------|
    /// | `domainNamespace` | `App\Domains\Users` | `App\Domains\Users\Profiles` |
    /// | `actionsNamespace` | `App\Actions\Users` | `App\Actions\Users\Profiles` |
    /// | `domain` | `User` | `Profile` |
    /// | `domainLower` | `user` | `profile` |
    /// | `table` | `users` | `profiles` |
    ///
    /// Subdomains additionally get `parentDirName`, `parentDomain` and
    /// `subdomainDirName`.
    pub fn for_domain(
        names: &DerivedNames,
        parent: Option<&DerivedNames>,
        namespace_root: &str,
    ) -> Self {
        let mut builder = Self::builder()
            .insert(tokens::ROOT_NAMESPACE, namespace_root)
            .insert(
                tokens::DOMAIN_NAMESPACE,
                Self::domain_namespace(names, parent, namespace_root),
            )
            .insert(
                tokens::ACTIONS_NAMESPACE,
                format!(
                    "{namespace_root}\\Actions\\{}",
                    namespace_path(names, parent)
                ),
            )
            .insert(tokens::DOMAIN, names.class())
            .insert(tokens::DOMAIN_LOWER, names.variable())
            .insert(tokens::TABLE, names.table());

        if let Some(parent) = parent {
            builder = builder
                .insert(tokens::PARENT_DIR_NAME, parent.directory())
                .insert(tokens::PARENT_DOMAIN, parent.class())
                .insert(tokens::SUBDOMAIN_DIR_NAME, names.directory());
        }

        builder.build()
    }

    /// `<root>\Domains\<Dir>` or `<root>\Domains\<ParentDir>\<Dir>`.
    pub fn domain_namespace(
        names: &DerivedNames,
        parent: Option<&DerivedNames>,
        namespace_root: &str,
    ) -> String {
        format!(
            "{namespace_root}\\Domains\\{}",
            namespace_path(names, parent)
        )
    }

    /// Map for a value-object stub.
    pub fn for_value_object(class: &str, namespace: &str, namespace_root: &str) -> Self {
        Self::builder()
            .insert(tokens::ROOT_NAMESPACE, namespace_root)
            .insert(tokens::VALUE_OBJECT_NAMESPACE, namespace)
            .insert(tokens::NAME, class)
            .build()
    }

    /// Map carrying only the root namespace (base model, provider bootstrap).
    pub fn for_root(namespace_root: &str) -> Self {
        Self::builder()
            .insert(tokens::ROOT_NAMESPACE, namespace_root)
            .build()
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every occurrence of every token, in insertion order.
    pub fn render(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (token, value)| {
                acc.replace(token.as_str(), value)
            })
    }

    /// Tokens that still appear in `text`, in order of first appearance.
    pub fn unresolved_tokens(text: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for m in TOKEN_PATTERN.find_iter(text) {
            if !found.iter().any(|t| t == m.as_str()) {
                found.push(m.as_str().to_string());
            }
        }
        found
    }
}

fn namespace_path(names: &DerivedNames, parent: Option<&DerivedNames>) -> String {
    match parent {
        Some(parent) => format!("{}\\{}", parent.directory(), names.directory()),
        None => names.directory().to_string(),
    }
}

#[derive(Debug, Default)]
pub struct PlaceholderMapBuilder {
    entries: IndexMap<String, String>,
}

impl PlaceholderMapBuilder {
    /// Add (or overwrite) a token. Overwriting keeps the original position.
    pub fn insert(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(token.into(), value.into());
        self
    }

    pub fn build(self) -> PlaceholderMap {
        PlaceholderMap {
            entries: self.entries,
        }
    }
}
