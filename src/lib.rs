//! Rule engine that validates project descriptors (POMs, model version
//! `4.0.0`) before they drive a build.
//!
//! Validation runs at two points of model building:
//!
//! ```text
//! parse(yaml) → Model ─ validate_raw ─→ (inheritance, interpolation) → Model ─ validate_effective
//! ```
//!
//! Each entry point runs an ordered catalog of rules and reports every
//! violation it finds into a [`DiagnosticSink`]. The requested
//! [`ValidationLevel`] decides, per check, whether a violation is fatal, an
//! error, a warning, or suppressed.
//!
//! # Quick Start
//!
//! ```rust
//! use pomcheck::{ValidationRequest, parse, validate};
//!
//! let yaml = r#"
//! modelVersion: 4.0.0
//! groupId: org.example
//! artifactId: app
//! version: 1.0
//! dependencies:
//!   - groupId: org.example
//!     artifactId: lib
//! "#;
//!
//! let model = parse(yaml).expect("well-formed descriptor");
//! let result = validate::effective_result(&model, &ValidationRequest::strict());
//! assert_eq!(
//!     result.errors(),
//!     ["'dependencies.dependency.version' for org.example:lib:jar is missing."]
//! );
//! ```

pub mod enums;
pub mod error;
pub mod format;
pub mod parse;
pub mod policy;
pub mod request;
pub mod types;
pub mod validate;

pub(crate) mod checks;
pub(crate) mod effective;
pub(crate) mod raw;

pub use enums::*;
pub use error::*;
pub use request::ValidationRequest;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use checks::{has_expression, is_absolute_path, is_valid_id, is_well_formed_version};
pub use parse::parse;
pub use validate::{validate_effective, validate_raw};

/// Result of the [`load`] convenience entry point.
#[derive(Clone, Debug)]
pub struct LoadResult {
    /// The model as authored.
    pub model: Model,
    /// Warnings produced by raw validation.
    pub warnings: Vec<Diagnostic>,
}

/// Convenience entry point composing parse → raw validation.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] when the descriptor cannot be read and
/// [`LoadError::Invalid`] when raw validation records a fatal or an error.
///
/// # Example
///
/// ```rust
/// use pomcheck::{LoadError, ValidationRequest};
///
/// let yaml = "parent:\n  artifactId: base\n";
/// match pomcheck::load(yaml, &ValidationRequest::strict()) {
///     Err(LoadError::Invalid(result)) => assert_eq!(result.fatals().len(), 2),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
pub fn load(input: &str, request: &ValidationRequest) -> Result<LoadResult, LoadError> {
    let model = parse::parse(input)?;

    let result = validate::raw_result(&model, request);
    if !result.is_valid() {
        return Err(LoadError::Invalid(result));
    }

    Ok(LoadResult {
        model,
        warnings: result.diagnostics,
    })
}
