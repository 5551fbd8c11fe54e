// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Wingforge.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns (filesystem writes, pipeline registration, rendering to
//! a concrete CI syntax) are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod artifact;
pub mod common;
pub mod error;
pub mod name;
pub mod pipeline;
pub mod workspace;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use artifact::{
    ArtifactContent, AuthorRef, GeneratedArtifact, PackageManifest, RepositoryRef, WingSection,
};
pub use common::{RelativePath, WritePolicy};
pub use error::{DomainError, ErrorCategory};
pub use name::LibName;
pub use pipeline::{
    PathFilter, PermissionScope, PipelineDefinition, Step, StepAction, StepValue, Trigger,
};
pub use validation::DomainValidator;
pub use workspace::{SubLibrary, Workspace};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn lib_name_parses_correctly() {
        assert_eq!(LibName::from_str("dynamodb").unwrap().as_str(), "dynamodb");
        assert!(LibName::from_str("../escape").is_err());
        assert!(LibName::from_str("").is_err());
    }

    #[test]
    fn write_policy_partition() {
        assert!(WritePolicy::Always.overwrites());
        assert!(!WritePolicy::Once.overwrites());
    }

    // ========================================================================
    // SubLibrary Tests
    // ========================================================================

    #[test]
    fn sublibrary_is_scoped_to_its_own_directory() {
        let ws = Workspace::new("winglibs", "https://github.com/winglibs/winglibs.git");
        let dynamodb = SubLibrary::new(LibName::new("dynamodb").unwrap(), &ws);
        let checks = SubLibrary::new(LibName::new("checks").unwrap(), &ws);

        assert_eq!(dynamodb.scoped_name(), "@winglibs/dynamodb");
        assert_eq!(checks.scoped_name(), "@winglibs/checks");
        assert_ne!(dynamodb.dir(), checks.dir());
    }

    // ========================================================================
    // Pipeline Entity Tests
    // ========================================================================

    #[test]
    fn trigger_exposes_its_path_filter() {
        let trigger = Trigger::Push {
            branches: vec!["main".into()],
            paths: PathFilter::new()
                .include("checks/**")
                .exclude("checks/package-lock.json"),
        };
        assert_eq!(trigger.paths().includes(), ["checks/**".to_string()]);
        assert_eq!(
            trigger.paths().excludes(),
            ["checks/package-lock.json".to_string()]
        );
    }

    #[test]
    fn step_value_reports_consumed_binding() {
        assert_eq!(StepValue::literal("x").consumed_binding(), None);
        assert_eq!(StepValue::secret("NPM_TOKEN").consumed_binding(), None);
        assert_eq!(
            StepValue::binding("WINGLIB_VERSION").consumed_binding(),
            Some("WINGLIB_VERSION")
        );
        assert_eq!(
            StepValue::prefixed("lib-v", "WINGLIB_VERSION").consumed_binding(),
            Some("WINGLIB_VERSION")
        );
    }
}
