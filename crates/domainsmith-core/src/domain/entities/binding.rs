//! Interface -> implementation bindings written into the service provider.

use serde::Serialize;

/// A container binding, identified by its interface reference.
///
/// Presence in the provider file is tested by substring containment of
/// [`BindingRecord::signature`], never by parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingRecord {
    interface: String,
    implementation: String,
}

impl BindingRecord {
    /// Both arguments are fully-qualified class names, with or without a
    /// leading backslash.
    pub fn new(interface: impl AsRef<str>, implementation: impl AsRef<str>) -> Self {
        Self {
            interface: qualify(interface.as_ref()),
            implementation: qualify(implementation.as_ref()),
        }
    }

    /// Binding of `<domainNamespace>\Repositories\<Class>RepositoryInterface`
    /// to `<root>\Infrastructure\Persistence\Repositories\<Class>Repository`.
    pub fn repository(domain_namespace: &str, namespace_root: &str, class: &str) -> Self {
        Self::new(
            format!("{domain_namespace}\\Repositories\\{class}RepositoryInterface"),
            format!("{namespace_root}\\Infrastructure\\Persistence\\Repositories\\{class}Repository"),
        )
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn implementation(&self) -> &str {
        &self.implementation
    }

    /// `\App\...\UserRepositoryInterface::class`
    pub fn signature(&self) -> String {
        format!("{}::class", self.interface)
    }

    /// The bind statement, every line prefixed with `indent`.
    pub fn statement(&self, indent: &str) -> String {
        format!(
            "{indent}$this->app->bind(\n\
             {indent}    {}::class,\n\
             {indent}    {}::class\n\
             {indent});",
            self.interface, self.implementation
        )
    }
}

fn qualify(class: &str) -> String {
    format!("\\{}", class.trim_start_matches('\\'))
}
