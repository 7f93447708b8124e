pub mod binding;
pub mod layout;
pub mod names;
pub mod placeholders;
pub mod plan;

pub use binding::BindingRecord;
pub use layout::ProjectLayout;
pub use names::DerivedNames;
pub use placeholders::PlaceholderMap;
pub use plan::{ArtifactSpec, GenerationPlan, PlanStep, WritePolicy};
