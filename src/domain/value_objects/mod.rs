//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod exclude_patterns;
mod rule_set;
mod severity_order;
mod status;

pub use exclude_patterns::ExcludePatterns;
pub use rule_set::{ClassificationRule, RuleSet};
pub use severity_order::SeverityOrder;
pub use status::Status;
