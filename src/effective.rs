//! Rules for the effective model: inheritance, profile activation and
//! interpolation have already run, so every identity field is expected to be
//! resolved.

use crate::checks::{
    FirstSeen, ILLEGAL_REPO_ID_CHARS, ILLEGAL_VERSION_CHARS, Problems, has_expression,
    is_absolute_path, is_well_formed_version,
};
use crate::format::{is_blank, keyed, or_placeholder};
use crate::policy::Check;
use crate::raw::{check_executions, check_repository_coordinates};
use crate::types::*;

/// Packaging required of projects that list modules.
pub const AGGREGATOR_PACKAGING: &str = "pom";

/// Scopes accepted on project dependencies.
pub const DEPENDENCY_SCOPES: &[&str] = &["provided", "compile", "runtime", "test", "system"];

/// Scopes accepted on plugin dependencies.
pub const PLUGIN_DEPENDENCY_SCOPES: &[&str] = &["compile", "runtime", "system"];

/// Id the local repository is known by.
pub const RESERVED_REPOSITORY_ID: &str = "local";

// ─── identity ───────────────────────────────────────────────────────────────

pub(crate) fn identity(model: &Model, problems: &mut Problems<'_>) {
    problems.not_blank(
        Check::RequiredField,
        "modelVersion",
        None,
        model.model_version.as_deref(),
    );
    problems.id(Check::Identifier, "groupId", None, model.group_id.as_deref());
    problems.id(
        Check::Identifier,
        "artifactId",
        None,
        model.artifact_id.as_deref(),
    );

    let version = model.version.as_deref();
    if problems.not_blank(Check::RequiredField, "version", None, version) {
        problems.banned_characters(
            Check::BannedCharacters,
            "version",
            None,
            version,
            ILLEGAL_VERSION_CHARS,
        );
        if let Some(version) = version
            && version.ends_with("SNAPSHOT")
            && !version.ends_with("-SNAPSHOT")
        {
            problems.add(
                Check::SnapshotVersion,
                "version",
                None,
                "uses an unsupported snapshot version format, should be '*-SNAPSHOT' instead.",
            );
        }
    }

    problems.not_blank(
        Check::RequiredField,
        "packaging",
        None,
        Some(model.packaging()),
    );
}

// ─── aggregator ─────────────────────────────────────────────────────────────

pub(crate) fn aggregator(model: &Model, problems: &mut Problems<'_>) {
    if !model.modules.is_empty() && model.packaging() != AGGREGATOR_PACKAGING {
        problems.add(
            Check::AggregatorPackaging,
            "packaging",
            None,
            &format!(
                "with value '{}' is invalid. Aggregator projects require '{}' as packaging.",
                model.packaging(),
                AGGREGATOR_PACKAGING
            ),
        );
    }
}

// ─── modules ────────────────────────────────────────────────────────────────

pub(crate) fn modules(model: &Model, problems: &mut Problems<'_>) {
    let mut seen = FirstSeen::new();
    for (i, module) in model.modules.iter().enumerate() {
        let field = keyed("modules.module", &i.to_string());
        if is_blank(Some(module)) {
            problems.add(
                Check::BlankModule,
                &field,
                None,
                "has been specified without a path to the project directory.",
            );
        } else if seen.insert(module.as_str(), i).is_some() {
            problems.add(
                Check::DuplicateModule,
                &field,
                None,
                &format!("specifies duplicate child module {}", module),
            );
        }
    }
}

// ─── dependencies ───────────────────────────────────────────────────────────

pub(crate) fn dependencies(model: &Model, problems: &mut Problems<'_>) {
    check_dependencies(problems, &model.dependencies, "dependencies.dependency.");
}

pub(crate) fn dependency_management(model: &Model, problems: &mut Problems<'_>) {
    if let Some(management) = &model.dependency_management {
        check_managed_dependencies(
            problems,
            &management.dependencies,
            "dependencyManagement.dependencies.dependency.",
        );
    }
}

/// Dependencies and managed dependencies declared inside profiles.
pub(crate) fn profile_dependencies(model: &Model, problems: &mut Problems<'_>) {
    for profile in &model.profiles {
        let prefix = keyed("profiles.profile", profile.id());
        check_dependencies(
            problems,
            &profile.dependencies,
            &format!("{}.dependencies.dependency.", prefix),
        );
        if let Some(management) = &profile.dependency_management {
            check_managed_dependencies(
                problems,
                &management.dependencies,
                &format!("{}.dependencyManagement.dependencies.dependency.", prefix),
            );
        }
    }
}

/// Where a dependency is declared. Decides which of the dependency checks
/// apply and how they are gated.
#[derive(Clone, Copy, PartialEq, Eq)]
enum DependencyKind {
    Project,
    Managed,
    Plugin,
}

impl DependencyKind {
    /// Plugin dependencies are only inspected from the legacy tier up.
    fn gate(self, check: Check) -> Check {
        match self {
            DependencyKind::Plugin => Check::PluginDependency,
            _ => check,
        }
    }
}

fn check_dependencies(problems: &mut Problems<'_>, dependencies: &[Dependency], prefix: &str) {
    for dependency in dependencies {
        let key = dependency.management_key();
        check_dependency(problems, dependency, &key, prefix, DependencyKind::Project);
        check_dependency_version(problems, dependency, &key, prefix);
        problems.one_of(
            Check::DependencyScope,
            &format!("{}scope", prefix),
            Some(&key),
            dependency.scope.as_deref(),
            DEPENDENCY_SCOPES,
        );
    }
}

/// Managed entries need an identity. Type, version and scope are optional.
fn check_managed_dependencies(
    problems: &mut Problems<'_>,
    dependencies: &[Dependency],
    prefix: &str,
) {
    for dependency in dependencies {
        let key = dependency.management_key();
        check_dependency(problems, dependency, &key, prefix, DependencyKind::Managed);
    }
}

fn check_dependency(
    problems: &mut Problems<'_>,
    dependency: &Dependency,
    key: &str,
    prefix: &str,
    kind: DependencyKind,
) {
    let hint = Some(key);
    problems.id(
        kind.gate(Check::Identifier),
        &format!("{}groupId", prefix),
        hint,
        dependency.group_id.as_deref(),
    );
    problems.id(
        kind.gate(Check::Identifier),
        &format!("{}artifactId", prefix),
        hint,
        dependency.artifact_id.as_deref(),
    );

    if kind != DependencyKind::Managed {
        problems.not_blank(
            kind.gate(Check::RequiredField),
            &format!("{}type", prefix),
            hint,
            Some(dependency.dependency_type()),
        );
        problems.not_blank(
            kind.gate(Check::RequiredField),
            &format!("{}version", prefix),
            hint,
            dependency.version.as_deref(),
        );
    }

    let system_path = dependency.system_path.as_deref();
    let system_path_check = kind.gate(Check::SystemPath);
    if dependency.scope.as_deref() == Some("system") {
        match system_path.filter(|p| !p.trim().is_empty()) {
            None => problems.add(
                system_path_check,
                &format!("{}systemPath", prefix),
                hint,
                "is missing.",
            ),
            Some(path) if !is_absolute_path(path) => problems.add(
                system_path_check,
                &format!("{}systemPath", prefix),
                hint,
                &format!("must specify an absolute path but is {}", path),
            ),
            Some(_) => {}
        }
    } else if !is_blank(system_path) {
        problems.add(
            system_path_check,
            &format!("{}systemPath", prefix),
            hint,
            "must be omitted. This field may only be specified for a dependency with system scope.",
        );
    }

    for exclusion in &dependency.exclusions {
        problems.id(
            Check::ExclusionId,
            &format!("{}exclusions.exclusion.groupId", prefix),
            hint,
            exclusion.group_id.as_deref(),
        );
        problems.id(
            Check::ExclusionId,
            &format!("{}exclusions.exclusion.artifactId", prefix),
            hint,
            exclusion.artifact_id.as_deref(),
        );
    }

    problems.boolean(
        &format!("{}optional", prefix),
        hint,
        dependency.optional.as_deref(),
    );
}

/// Expressions and broken ranges fail validity; banned characters are reported
/// only for otherwise valid versions.
fn check_dependency_version(
    problems: &mut Problems<'_>,
    dependency: &Dependency,
    key: &str,
    prefix: &str,
) {
    let Some(version) = dependency.version.as_deref().filter(|v| !v.is_empty()) else {
        return;
    };
    let field = format!("{}version", prefix);
    if !is_well_formed_version(version) {
        problems.add(
            Check::DependencyVersion,
            &field,
            Some(key),
            &format!("must be a valid version but is '{}'.", version),
        );
        return;
    }
    problems.banned_characters(
        Check::BannedCharacters,
        &field,
        Some(key),
        Some(version),
        ILLEGAL_VERSION_CHARS,
    );
}

// ─── build ──────────────────────────────────────────────────────────────────

/// Plugins and resources of the main build, then of each profile's build.
pub(crate) fn build(model: &Model, problems: &mut Problems<'_>) {
    if let Some(build) = &model.build {
        check_build(problems, build, "build");
    }
    for profile in &model.profiles {
        if let Some(build) = &profile.build {
            let prefix = format!("{}.build", keyed("profiles.profile", profile.id()));
            check_build(problems, build, &prefix);
        }
    }
}

fn check_build(problems: &mut Problems<'_>, build: &Build, prefix: &str) {
    let plugins = format!("{}.plugins.plugin", prefix);
    for plugin in &build.plugins {
        let key = plugin.key();
        problems.not_blank(
            Check::PluginCoordinate,
            &format!("{}.artifactId", plugins),
            None,
            plugin.artifact_id.as_deref(),
        );
        problems.not_blank(
            Check::PluginCoordinate,
            &format!("{}.groupId", plugins),
            None,
            Some(plugin.group_id()),
        );
        check_plugin_version(problems, plugin, &key, &format!("{}.version", plugins));
        problems.boolean(
            &format!("{}.inherited", plugins),
            Some(&key),
            plugin.inherited.as_deref(),
        );
        problems.boolean(
            &format!("{}.extensions", plugins),
            Some(&key),
            plugin.extensions.as_deref(),
        );

        let plugin_path = keyed(&plugins, &key);
        check_plugin_dependencies(
            problems,
            &plugin.dependencies,
            &format!("{}.dependencies.dependency.", plugin_path),
        );
        check_executions(problems, plugin, &plugin_path);
    }

    check_resources(
        problems,
        &build.resources,
        &format!("{}.resources.resource", prefix),
    );
    check_resources(
        problems,
        &build.test_resources,
        &format!("{}.testResources.testResource", prefix),
    );
}

/// Checked only when declared. A declared version must name a single concrete
/// release.
fn check_plugin_version(problems: &mut Problems<'_>, plugin: &Plugin, key: &str, field: &str) {
    let Some(version) = plugin.version.as_deref() else {
        return;
    };
    let trimmed = version.trim();
    let invalid = trimmed.is_empty()
        || trimmed == "RELEASE"
        || trimmed == "LATEST"
        || trimmed.starts_with(['[', '('])
        || has_expression(trimmed);
    if invalid {
        problems.add(
            Check::PluginVersion,
            field,
            Some(key),
            &format!("must be a valid version but is '{}'.", version),
        );
    }
}

fn check_plugin_dependencies(
    problems: &mut Problems<'_>,
    dependencies: &[Dependency],
    prefix: &str,
) {
    for dependency in dependencies {
        let key = dependency.management_key();
        check_dependency(problems, dependency, &key, prefix, DependencyKind::Plugin);
        check_dependency_version(problems, dependency, &key, prefix);
        problems.one_of(
            Check::PluginDependencyScope,
            &format!("{}scope", prefix),
            Some(&key),
            dependency.scope.as_deref(),
            PLUGIN_DEPENDENCY_SCOPES,
        );
    }
}

fn check_resources(problems: &mut Problems<'_>, resources: &[Resource], prefix: &str) {
    for resource in resources {
        problems.not_blank(
            Check::ResourceDirectory,
            &format!("{}.directory", prefix),
            None,
            resource.directory.as_deref(),
        );
        problems.boolean(
            &format!("{}.filtering", prefix),
            resource.directory.as_deref(),
            resource.filtering.as_deref(),
        );
    }
}

// ─── reporting ──────────────────────────────────────────────────────────────

pub(crate) fn reporting(model: &Model, problems: &mut Problems<'_>) {
    let Some(reporting) = &model.reporting else {
        return;
    };
    for plugin in &reporting.plugins {
        problems.not_blank(
            Check::ReportPluginCoordinate,
            "reporting.plugins.plugin.artifactId",
            None,
            plugin.artifact_id.as_deref(),
        );
        problems.not_blank(
            Check::ReportPluginCoordinate,
            "reporting.plugins.plugin.groupId",
            None,
            Some(plugin.group_id()),
        );
        problems.not_blank(
            Check::ReportPluginVersion,
            "reporting.plugins.plugin.version",
            Some(&plugin.key()),
            plugin.version.as_deref(),
        );
    }
}

// ─── repositories ───────────────────────────────────────────────────────────

pub(crate) fn repositories(model: &Model, problems: &mut Problems<'_>) {
    check_repositories(problems, &model.repositories, "repositories.repository");
    check_repositories(
        problems,
        &model.plugin_repositories,
        "pluginRepositories.pluginRepository",
    );
    for profile in &model.profiles {
        let prefix = keyed("profiles.profile", profile.id());
        check_repositories(
            problems,
            &profile.repositories,
            &format!("{}.repositories.repository", prefix),
        );
        check_repositories(
            problems,
            &profile.plugin_repositories,
            &format!("{}.pluginRepositories.pluginRepository", prefix),
        );
    }
}

fn check_repositories(problems: &mut Problems<'_>, repositories: &[Repository], prefix: &str) {
    for repository in repositories {
        check_repository_coordinates(problems, repository, prefix);
        check_repository(problems, repository, prefix);
    }
}

fn check_repository(problems: &mut Problems<'_>, repository: &Repository, prefix: &str) {
    let id_field = format!("{}.id", prefix);
    problems.banned_characters(
        Check::BannedCharacters,
        &id_field,
        None,
        repository.id.as_deref(),
        ILLEGAL_REPO_ID_CHARS,
    );
    if repository.id.as_deref() == Some(RESERVED_REPOSITORY_ID) {
        problems.add(
            Check::ReservedRepositoryId,
            &id_field,
            None,
            &format!(
                "must not be '{}', this identifier is reserved for the local repository, using it for other repositories will corrupt the embedder's cache",
                RESERVED_REPOSITORY_ID
            ),
        );
    }
    if repository.layout.as_deref() == Some("legacy") {
        problems.add(
            Check::LegacyLayout,
            &format!("{}.layout", prefix),
            Some(or_placeholder(repository.id.as_deref())),
            "uses the unsupported value 'legacy', artifact resolution might fail.",
        );
    }
}

// ─── distribution management ────────────────────────────────────────────────

pub(crate) fn distribution_management(model: &Model, problems: &mut Problems<'_>) {
    let Some(distribution) = &model.distribution_management else {
        return;
    };
    // status is computed by the repository, never declared
    if distribution.status.is_some() {
        problems.add(
            Check::DistributionStatus,
            "distributionManagement.status",
            None,
            "must not be specified.",
        );
    }
    if let Some(repository) = &distribution.repository {
        check_repository(problems, repository, "distributionManagement.repository");
    }
    if let Some(repository) = &distribution.snapshot_repository {
        check_repository(
            problems,
            repository,
            "distributionManagement.snapshotRepository",
        );
    }
}
