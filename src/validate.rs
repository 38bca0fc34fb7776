//! Validation entry points for the raw and the effective model.
//!
//! Both run a fixed, ordered catalog of rules and report **every** violation
//! they find; nothing short-circuits. The model is never modified. Which
//! violations surface, and at which severity, depends only on the requested
//! [`ValidationLevel`](crate::ValidationLevel).

use tracing::{debug, debug_span, trace};

use crate::checks::Problems;
use crate::effective;
use crate::error::{DiagnosticSink, Severity, ValidationResult};
use crate::raw;
use crate::request::ValidationRequest;
use crate::types::Model;

/// One named check function, scoped to a sub-tree of the model.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub(crate) check: fn(&Model, &mut Problems<'_>),
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}

/// An ordered rule catalog. Diagnostics appear in catalog order, and within a
/// rule in model order.
#[derive(Debug)]
pub struct RuleSet {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

// ─── Catalogs ───────────────────────────────────────────────────────────────

pub static RAW: RuleSet = RuleSet {
    name: "raw",
    rules: &[
        Rule {
            name: "parent",
            check: raw::parent,
        },
        Rule {
            name: "model-version",
            check: raw::model_version,
        },
        Rule {
            name: "constant-coordinates",
            check: raw::constant_coordinates,
        },
        Rule {
            name: "dependencies",
            check: raw::dependencies,
        },
        Rule {
            name: "repositories",
            check: raw::repositories,
        },
        Rule {
            name: "plugins",
            check: raw::plugins,
        },
        Rule {
            name: "profiles",
            check: raw::profiles,
        },
    ],
};

pub static EFFECTIVE: RuleSet = RuleSet {
    name: "effective",
    rules: &[
        Rule {
            name: "identity",
            check: effective::identity,
        },
        Rule {
            name: "aggregator",
            check: effective::aggregator,
        },
        Rule {
            name: "modules",
            check: effective::modules,
        },
        Rule {
            name: "dependencies",
            check: effective::dependencies,
        },
        Rule {
            name: "dependency-management",
            check: effective::dependency_management,
        },
        Rule {
            name: "profile-dependencies",
            check: effective::profile_dependencies,
        },
        Rule {
            name: "build",
            check: effective::build,
        },
        Rule {
            name: "reporting",
            check: effective::reporting,
        },
        Rule {
            name: "repositories",
            check: effective::repositories,
        },
        Rule {
            name: "distribution-management",
            check: effective::distribution_management,
        },
    ],
};

impl RuleSet {
    /// Names of the rules, in execution order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    /// Runs every rule against `model`, reporting into `sink`.
    pub fn run(&self, model: &Model, request: &ValidationRequest, sink: &mut dyn DiagnosticSink) {
        let span = debug_span!("validate", rules = self.name, level = %request.level);
        let _guard = span.enter();

        let mut problems = Problems::new(request.level, sink);
        for rule in self.rules {
            let before = problems.recorded();
            (rule.check)(model, &mut problems);
            trace!(
                rule = rule.name,
                reported = problems.recorded() - before,
                "rule finished"
            );
        }

        debug!(
            fatals = problems.count(Severity::Fatal),
            errors = problems.count(Severity::Error),
            warnings = problems.count(Severity::Warning),
            "validation finished"
        );
    }
}

// ─── Entry points ───────────────────────────────────────────────────────────

/// Checks the model as authored, before inheritance and interpolation.
pub fn validate_raw(model: &Model, request: &ValidationRequest, sink: &mut dyn DiagnosticSink) {
    RAW.run(model, request, sink);
}

/// Checks the model after inheritance, profile activation and interpolation.
pub fn validate_effective(
    model: &Model,
    request: &ValidationRequest,
    sink: &mut dyn DiagnosticSink,
) {
    EFFECTIVE.run(model, request, sink);
}

/// [`validate_raw`] into a fresh [`ValidationResult`].
pub fn raw_result(model: &Model, request: &ValidationRequest) -> ValidationResult {
    let mut result = ValidationResult::new();
    validate_raw(model, request, &mut result);
    result
}

/// [`validate_effective`] into a fresh [`ValidationResult`].
pub fn effective_result(model: &Model, request: &ValidationRequest) -> ValidationResult {
    let mut result = ValidationResult::new();
    validate_effective(model, request, &mut result);
    result
}
