//! Rules that only make sense on the model as authored, before parent
//! inheritance and interpolation have run.

use crate::checks::{FirstSeen, Problems, has_expression};
use crate::format::{is_blank, keyed, or_placeholder};
use crate::policy::Check;
use crate::types::*;

// ─── parent ─────────────────────────────────────────────────────────────────

/// Parent coordinates are fatal and reported together.
pub(crate) fn parent(model: &Model, problems: &mut Problems<'_>) {
    let Some(parent) = &model.parent else {
        return;
    };

    let group = problems.not_blank(
        Check::ParentCoordinate,
        "parent.groupId",
        None,
        parent.group_id.as_deref(),
    );
    let artifact = problems.not_blank(
        Check::ParentCoordinate,
        "parent.artifactId",
        None,
        parent.artifact_id.as_deref(),
    );
    problems.not_blank(
        Check::ParentCoordinate,
        "parent.version",
        None,
        parent.version.as_deref(),
    );

    if group
        && artifact
        && parent.group_id == model.group_id
        && parent.artifact_id == model.artifact_id
    {
        problems.add(
            Check::ParentSelfReference,
            "parent.artifactId",
            None,
            "must be changed, the parent element cannot have the same groupId:artifactId as the project.",
        );
    }
}

// ─── modelVersion ───────────────────────────────────────────────────────────

/// Model versions this rule set understands.
pub const SUPPORTED_MODEL_VERSIONS: &[&str] = &["4.0.0"];

pub(crate) fn model_version(model: &Model, problems: &mut Problems<'_>) {
    problems.one_of(
        Check::ModelVersionValue,
        "modelVersion",
        None,
        model.model_version.as_deref(),
        SUPPORTED_MODEL_VERSIONS,
    );
}

// ─── constant coordinates ───────────────────────────────────────────────────

pub(crate) fn constant_coordinates(model: &Model, problems: &mut Problems<'_>) {
    problems.no_expression(
        Check::ConstantCoordinate,
        "groupId",
        model.group_id.as_deref(),
    );
    problems.no_expression(
        Check::ConstantCoordinate,
        "artifactId",
        model.artifact_id.as_deref(),
    );
    problems.no_expression(
        Check::ConstantCoordinate,
        "version",
        model.version.as_deref(),
    );
}

// ─── dependencies ───────────────────────────────────────────────────────────

pub(crate) fn dependencies(model: &Model, problems: &mut Problems<'_>) {
    check_dependencies(problems, &model.dependencies, "dependencies.dependency");
    if let Some(management) = &model.dependency_management {
        check_dependencies(
            problems,
            &management.dependencies,
            "dependencyManagement.dependencies.dependency",
        );
    }
}

fn check_dependencies(problems: &mut Problems<'_>, dependencies: &[Dependency], prefix: &str) {
    let mut seen = FirstSeen::new();
    for (i, dependency) in dependencies.iter().enumerate() {
        let key = dependency.management_key();

        match dependency.scope.as_deref() {
            Some("import") => {
                if dependency.dependency_type() != "pom" {
                    problems.add(
                        Check::ImportType,
                        &format!("{}.type", prefix),
                        Some(&key),
                        "must be 'pom' to import the managed dependencies.",
                    );
                } else if !is_blank(dependency.classifier.as_deref()) {
                    problems.add(
                        Check::ImportClassifier,
                        &format!("{}.classifier", prefix),
                        Some(&key),
                        "must be empty, imported POM cannot have a classifier.",
                    );
                }
            }
            Some("system") => {
                if let Some(path) = dependency.system_path.as_deref()
                    && !path.trim().is_empty()
                {
                    check_system_path(problems, prefix, &key, path);
                }
            }
            _ => {}
        }

        if let Some(first) = seen.insert(key.clone(), i) {
            let existing = &dependencies[first];
            let detail = if existing.version == dependency.version {
                format!(
                    "duplicate declaration of version {}",
                    dependency.version.as_deref().unwrap_or("(?)")
                )
            } else {
                format!(
                    "version {} vs {}",
                    existing.version.as_deref().unwrap_or("(?)"),
                    dependency.version.as_deref().unwrap_or("(?)")
                )
            };
            problems.add(
                Check::DuplicateDependency,
                &format!("{}.(groupId:artifactId:type:classifier)", prefix),
                None,
                &format!("must be unique: {} -> {}", key, detail),
            );
        }
    }
}

/// Hard-coded paths and paths into the project directory.
fn check_system_path(problems: &mut Problems<'_>, prefix: &str, key: &str, path: &str) {
    let field = format!("{}.systemPath", prefix);
    if !has_expression(path) {
        problems.add(
            Check::HardCodedSystemPath,
            &field,
            Some(key),
            &format!("should use a variable instead of a hard-coded path {}", path),
        );
    } else if path.contains("${basedir}") || path.contains("${project.basedir}") {
        problems.add(
            Check::ProjectSystemPath,
            &field,
            Some(key),
            &format!(
                "should not point at files within the project directory, {} will be unresolvable by dependent projects",
                path
            ),
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
}

/// Id and url presence. Shared with the effective rule set, which reports
/// the same requirement on the resolved model.
pub(crate) fn check_repository_coordinates(
    problems: &mut Problems<'_>,
    repository: &Repository,
    prefix: &str,
) {
    problems.not_blank(
        Check::RepositoryCoordinate,
        &format!("{}.id", prefix),
        None,
        repository.id.as_deref(),
    );
    problems.not_blank(
        Check::RepositoryCoordinate,
        &format!("{}.url", keyed(prefix, or_placeholder(repository.id.as_deref()))),
        None,
        repository.url.as_deref(),
    );
}

fn check_repositories(problems: &mut Problems<'_>, repositories: &[Repository], prefix: &str) {
    let mut seen = FirstSeen::new();
    for (i, repository) in repositories.iter().enumerate() {
        check_repository_coordinates(problems, repository, prefix);

        let Some(id) = repository.id.as_deref().filter(|id| !id.trim().is_empty()) else {
            continue;
        };
        if let Some(first) = seen.insert(id, i) {
            problems.add(
                Check::DuplicateRepository,
                &format!("{}.id", prefix),
                None,
                &format!(
                    "must be unique: {} -> {} vs {}",
                    id,
                    or_placeholder(repositories[first].url.as_deref()),
                    or_placeholder(repository.url.as_deref())
                ),
            );
        }
    }
}

// ─── plugins ────────────────────────────────────────────────────────────────

pub(crate) fn plugins(model: &Model, problems: &mut Problems<'_>) {
    let Some(build) = &model.build else {
        return;
    };
    check_plugins(problems, &build.plugins, "build.plugins.plugin");
    if let Some(management) = &build.plugin_management {
        check_plugins(
            problems,
            &management.plugins,
            "build.pluginManagement.plugins.plugin",
        );
    }
}

fn check_plugins(problems: &mut Problems<'_>, plugins: &[Plugin], prefix: &str) {
    let mut seen = FirstSeen::new();
    for (i, plugin) in plugins.iter().enumerate() {
        let key = plugin.key();
        if seen.insert(key.clone(), i).is_some() {
            problems.add(
                Check::DuplicatePlugin,
                &format!("{}.(groupId:artifactId)", prefix),
                None,
                &format!("must be unique but found duplicate declaration of plugin {}", key),
            );
        }
        check_executions(problems, plugin, &keyed(prefix, &key));
    }
}

/// Execution ids must be unique within one plugin. Shared with the effective
/// rule set.
pub(crate) fn check_executions(problems: &mut Problems<'_>, plugin: &Plugin, plugin_path: &str) {
    let mut seen = FirstSeen::new();
    for (i, execution) in plugin.executions.iter().enumerate() {
        if seen.insert(execution.id(), i).is_some() {
            problems.add(
                Check::DuplicateExecution,
                &format!("{}.executions.execution.id", plugin_path),
                None,
                &format!(
                    "must be unique but found duplicate execution with id {}",
                    execution.id()
                ),
            );
        }
    }
}

// ─── profiles ───────────────────────────────────────────────────────────────

pub(crate) fn profiles(model: &Model, problems: &mut Problems<'_>) {
    let mut seen = FirstSeen::new();
    for (i, profile) in model.profiles.iter().enumerate() {
        let id = profile.id();
        if seen.insert(id, i).is_some() {
            problems.add(
                Check::DuplicateProfile,
                "profiles.profile.id",
                None,
                &format!("must be unique but found duplicate profile with id {}", id),
            );
        }

        let prefix = keyed("profiles.profile", id);
        check_dependencies(
            problems,
            &profile.dependencies,
            &format!("{}.dependencies.dependency", prefix),
        );
        if let Some(management) = &profile.dependency_management {
            check_dependencies(
                problems,
                &management.dependencies,
                &format!("{}.dependencyManagement.dependencies.dependency", prefix),
            );
        }
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
        if let Some(build) = &profile.build {
            check_plugins(problems, &build.plugins, &format!("{}.plugins.plugin", prefix));
            if let Some(management) = &build.plugin_management {
                check_plugins(
                    problems,
                    &management.plugins,
                    &format!("{}.pluginManagement.plugins.plugin", prefix),
                );
            }
        }
    }
}
