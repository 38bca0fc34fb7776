//! Severity policy: maps a check and the requested level to a severity.
//!
//! Rule bodies never look at the validation level. They report a [`Check`]
//! and this table decides whether the violation is fatal, an error, a
//! warning, or suppressed.

use crate::enums::ValidationLevel;
use crate::error::Severity;

/// How a check's severity depends on the validation level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityPolicy {
    /// Reported at this severity regardless of level.
    Fixed(Severity),
    /// Reported at `severity` from `min` up; suppressed below.
    From {
        min: ValidationLevel,
        severity: Severity,
    },
    /// Suppressed below `min`, a warning from `min`, an error from
    /// `error_from` up.
    Escalating {
        min: ValidationLevel,
        error_from: ValidationLevel,
    },
}

impl SeverityPolicy {
    pub fn resolve(self, level: ValidationLevel) -> Option<Severity> {
        match self {
            SeverityPolicy::Fixed(severity) => Some(severity),
            SeverityPolicy::From { min, severity } => (level >= min).then_some(severity),
            SeverityPolicy::Escalating { min, error_from } => {
                if level < min {
                    None
                } else if level < error_from {
                    Some(Severity::Warning)
                } else {
                    Some(Severity::Error)
                }
            }
        }
    }
}

/// Every violation the engine can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Check {
    // raw model
    ParentCoordinate,
    ParentSelfReference,
    ModelVersionValue,
    ConstantCoordinate,
    ImportType,
    ImportClassifier,
    HardCodedSystemPath,
    ProjectSystemPath,
    DuplicateDependency,
    DuplicateRepository,
    DuplicatePlugin,
    DuplicateExecution,
    DuplicateProfile,
    // effective model
    RequiredField,
    Identifier,
    AggregatorPackaging,
    BlankModule,
    DuplicateModule,
    BannedCharacters,
    SnapshotVersion,
    SystemPath,
    ExclusionId,
    BooleanValue,
    DependencyVersion,
    DependencyScope,
    PluginDependency,
    PluginDependencyScope,
    PluginCoordinate,
    PluginVersion,
    ResourceDirectory,
    ReportPluginCoordinate,
    ReportPluginVersion,
    RepositoryCoordinate,
    ReservedRepositoryId,
    LegacyLayout,
    DistributionStatus,
}

use ValidationLevel::{Maven20, Maven30, Maven31, Minimal};

const fn fixed(severity: Severity) -> SeverityPolicy {
    SeverityPolicy::Fixed(severity)
}

const fn from(min: ValidationLevel, severity: Severity) -> SeverityPolicy {
    SeverityPolicy::From { min, severity }
}

/// Warning on legacy models, error from `error_from`, off at `Minimal`.
const fn error_on(error_from: ValidationLevel) -> SeverityPolicy {
    SeverityPolicy::Escalating {
        min: Maven20,
        error_from,
    }
}

impl Check {
    pub const fn policy(self) -> SeverityPolicy {
        use Severity::{Error, Fatal, Warning};
        match self {
            Check::ParentCoordinate | Check::ParentSelfReference => fixed(Fatal),
            Check::ModelVersionValue => fixed(Error),
            Check::ConstantCoordinate => from(Maven20, Warning),
            Check::ImportType => from(Maven20, Warning),
            Check::ImportClassifier => error_on(Maven30),
            Check::HardCodedSystemPath | Check::ProjectSystemPath => from(Maven20, Warning),
            Check::DuplicateDependency => error_on(Maven31),
            Check::DuplicateRepository => error_on(Maven30),
            Check::DuplicatePlugin => error_on(Maven31),
            Check::DuplicateExecution => fixed(Error),
            Check::DuplicateProfile => error_on(Maven30),

            Check::RequiredField | Check::Identifier => fixed(Error),
            Check::AggregatorPackaging => fixed(Error),
            Check::BlankModule => fixed(Warning),
            Check::DuplicateModule => fixed(Error),
            Check::BannedCharacters | Check::SnapshotVersion => error_on(Maven31),
            Check::SystemPath => fixed(Error),
            Check::ExclusionId => from(Maven20, Warning),
            Check::BooleanValue => error_on(Maven30),
            Check::DependencyVersion => error_on(Maven30),
            Check::DependencyScope => from(Maven20, Warning),
            Check::PluginDependency => from(Maven20, Error),
            Check::PluginDependencyScope => error_on(Maven30),
            Check::PluginCoordinate => fixed(Error),
            Check::PluginVersion => error_on(Maven30),
            Check::ResourceDirectory => fixed(Error),
            Check::ReportPluginCoordinate => fixed(Error),
            Check::ReportPluginVersion => error_on(Maven31),
            Check::RepositoryCoordinate => fixed(Error),
            Check::ReservedRepositoryId => error_on(Maven31),
            Check::LegacyLayout => from(Maven20, Warning),
            Check::DistributionStatus => fixed(Error),
        }
    }

    pub const ALL: [Check; 36] = [
        Check::ParentCoordinate,
        Check::ParentSelfReference,
        Check::ModelVersionValue,
        Check::ConstantCoordinate,
        Check::ImportType,
        Check::ImportClassifier,
        Check::HardCodedSystemPath,
        Check::ProjectSystemPath,
        Check::DuplicateDependency,
        Check::DuplicateRepository,
        Check::DuplicatePlugin,
        Check::DuplicateExecution,
        Check::DuplicateProfile,
        Check::RequiredField,
        Check::Identifier,
        Check::AggregatorPackaging,
        Check::BlankModule,
        Check::DuplicateModule,
        Check::BannedCharacters,
        Check::SnapshotVersion,
        Check::SystemPath,
        Check::ExclusionId,
        Check::BooleanValue,
        Check::DependencyVersion,
        Check::DependencyScope,
        Check::PluginDependency,
        Check::PluginDependencyScope,
        Check::PluginCoordinate,
        Check::PluginVersion,
        Check::ResourceDirectory,
        Check::ReportPluginCoordinate,
        Check::ReportPluginVersion,
        Check::RepositoryCoordinate,
        Check::ReservedRepositoryId,
        Check::LegacyLayout,
        Check::DistributionStatus,
    ];
}

/// The severity `check` is reported at under `level`, or `None` when the
/// check is suppressed at that level.
pub fn severity(check: Check, level: ValidationLevel) -> Option<Severity> {
    check.policy().resolve(level)
}

/// `true` when every level sees the same outcome for `check`.
pub fn is_level_independent(check: Check) -> bool {
    let first = severity(check, Minimal);
    ValidationLevel::ALL
        .iter()
        .all(|&level| severity(check, level) == first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_checks_are_fatal_everywhere() {
        for level in ValidationLevel::ALL {
            assert_eq!(severity(Check::ParentCoordinate, level), Some(Severity::Fatal));
        }
    }

    #[test]
    fn escalating_checks_follow_the_tiers() {
        let check = Check::DuplicatePlugin;
        assert_eq!(severity(check, Minimal), None);
        assert_eq!(severity(check, Maven20), Some(Severity::Warning));
        assert_eq!(severity(check, Maven30), Some(Severity::Warning));
        assert_eq!(severity(check, Maven31), Some(Severity::Error));

        let check = Check::PluginVersion;
        assert_eq!(severity(check, Maven20), Some(Severity::Warning));
        assert_eq!(severity(check, ValidationLevel::STRICT), Some(Severity::Error));
    }

    #[test]
    fn gated_checks_are_suppressed_at_minimal() {
        assert_eq!(severity(Check::PluginDependency, Minimal), None);
        assert_eq!(
            severity(Check::PluginDependency, Maven20),
            Some(Severity::Error)
        );
        assert_eq!(severity(Check::ExclusionId, Minimal), None);
    }

    #[test]
    fn structural_errors_apply_at_every_level() {
        for check in [
            Check::ModelVersionValue,
            Check::DuplicateModule,
            Check::DuplicateExecution,
            Check::PluginCoordinate,
            Check::ResourceDirectory,
            Check::RepositoryCoordinate,
            Check::DistributionStatus,
        ] {
            assert!(is_level_independent(check), "{:?}", check);
            assert_eq!(severity(check, Minimal), Some(Severity::Error));
        }
    }

    #[test]
    fn severity_never_decreases_with_level() {
        fn rank(s: Option<Severity>) -> u8 {
            match s {
                None => 0,
                Some(Severity::Warning) => 1,
                Some(Severity::Error) => 2,
                Some(Severity::Fatal) => 3,
            }
        }
        for check in Check::ALL {
            let ranks: Vec<u8> = ValidationLevel::ALL
                .iter()
                .map(|&l| rank(severity(check, l)))
                .collect();
            assert!(
                ranks.windows(2).all(|w| w[0] <= w[1]),
                "{:?} is not monotonic: {:?}",
                check,
                ranks
            );
        }
    }

    #[test]
    fn required_fields_do_not_depend_on_level() {
        assert!(is_level_independent(Check::RequiredField));
        assert!(is_level_independent(Check::AggregatorPackaging));
        assert!(!is_level_independent(Check::BannedCharacters));
    }
}
