//! Name derivation: raw user input -> every name form a generated unit needs.
//!
//! ```text
//! raw "blog_posts"
//!   ├── directory  "BlogPosts"    studly(raw), plurality untouched
//!   ├── class      "BlogPost"     singular(directory)
//!   ├── variable   "blogPost"     class with a lowercase first letter
//!   └── table      "blog_posts"   snake(plural(class))
//! ```
//!
//! Derivation is total over any non-empty string. Input validation happens
//! earlier, in `DomainValidator`.

use convert_case::{Boundary, Case, Casing};
use serde::Serialize;

use crate::domain::inflector::{pluralize, singularize};

/// Every name form derived from one raw domain (or subdomain) name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNames {
    raw: String,
    directory: String,
    class: String,
    variable: String,
    table: String,
}

impl DerivedNames {
    /// Derive all name forms from a raw name.
    ///
    /// # Examples
    ///
    /// ```
    /// use domainsmith_core::domain::DerivedNames;
    ///
    /// let names = DerivedNames::derive("Users");
    /// assert_eq!(names.directory(), "Users");
    /// assert_eq!(names.class(), "User");
    /// assert_eq!(names.variable(), "user");
    /// assert_eq!(names.table(), "users");
    /// ```
    pub fn derive(raw: &str) -> Self {
        let directory = studly(raw);
        let class = singularize(&directory);
        let variable = lower_first(&class);
        let table = snake(&pluralize(&class));

        Self {
            raw: raw.to_string(),
            directory,
            class,
            variable,
            table,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Directory (and namespace segment) name.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Singular class name.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// camelCase variable name.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Plural snake_case table name.
    pub fn table(&self) -> &str {
        &self.table
    }
}

/// Class name for a value object: studly-cased, with a single `ValueObject` suffix.
///
/// ```
/// use domainsmith_core::domain::value_object_class;
///
/// assert_eq!(value_object_class("email"), "EmailValueObject");
/// assert_eq!(value_object_class("EmailValueObject"), "EmailValueObject");
/// ```
pub fn value_object_class(raw: &str) -> String {
    const SUFFIX: &str = "ValueObject";

    let class = studly(raw);
    if class.ends_with(SUFFIX) {
        class
    } else {
        format!("{class}{SUFFIX}")
    }
}

// ── Casing helpers ───────────────────────────────────────────────────────────

/// `order-items` / `order_items` / `order items` -> `OrderItems`.
///
/// Only the first letter of each word is touched; interior casing survives
/// (`blogPosts` -> `BlogPosts`, `HTTPRequests` stays as is).
pub fn studly(raw: &str) -> String {
    raw.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(upper_first)
        .collect()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `BlogPosts` -> `blog_posts`. Digits never start a new word (`Users2` -> `users2`).
fn snake(word: &str) -> String {
    word.with_boundaries(&[
        Boundary::Underscore,
        Boundary::Hyphen,
        Boundary::Space,
        Boundary::LowerUpper,
        Boundary::Acronym,
    ])
    .to_case(Case::Snake)
}
