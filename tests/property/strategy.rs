use pomcheck::*;
use proptest::prelude::*;

/// Scalar values the rules care about: absent, blank, plain, an unresolved
/// expression, or text with file-system characters in it.
pub fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some(String::new())),
        4 => "[a-z][a-z0-9.]{0,6}".prop_map(Some),
        1 => Just(Some("${missing}".to_string())),
        1 => "[a-z0-9/:$.]{1,8}".prop_map(Some),
    ]
}

pub fn arb_scope() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("compile".to_string())),
        Just(Some("test".to_string())),
        Just(Some("system".to_string())),
        Just(Some("import".to_string())),
        Just(Some("bogus".to_string())),
    ]
}

pub fn arb_dependency() -> impl Strategy<Value = Dependency> {
    (
        arb_text(),
        arb_text(),
        arb_text(),
        arb_scope(),
        arb_text(),
        prop::collection::vec((arb_text(), arb_text()), 0..2),
    )
        .prop_map(
            |(group_id, artifact_id, version, scope, system_path, exclusions)| Dependency {
                group_id,
                artifact_id,
                version,
                scope,
                system_path,
                exclusions: exclusions
                    .into_iter()
                    .map(|(group_id, artifact_id)| Exclusion {
                        group_id,
                        artifact_id,
                    })
                    .collect(),
                ..Dependency::default()
            },
        )
}

pub fn arb_plugin() -> impl Strategy<Value = Plugin> {
    (
        prop_oneof![Just(None), Just(Some("test".to_string()))],
        prop_oneof![
            Just(None),
            Just(Some("a".to_string())),
            Just(Some("b".to_string()))
        ],
        arb_text(),
        prop::collection::vec(arb_text(), 0..3),
        prop::collection::vec(arb_dependency(), 0..2),
    )
        .prop_map(
            |(group_id, artifact_id, version, execution_ids, dependencies)| Plugin {
                group_id,
                artifact_id,
                version,
                executions: execution_ids
                    .into_iter()
                    .map(|id| PluginExecution {
                        id,
                        ..PluginExecution::default()
                    })
                    .collect(),
                dependencies,
                ..Plugin::default()
            },
        )
}

pub fn arb_repository() -> impl Strategy<Value = Repository> {
    (
        prop_oneof![
            2 => arb_text(),
            1 => Just(Some("local".to_string())),
        ],
        arb_text(),
    )
        .prop_map(|(id, url)| Repository {
            id,
            url,
            ..Repository::default()
        })
}

pub fn arb_profile() -> impl Strategy<Value = Profile> {
    (
        prop_oneof![Just(Some("p".to_string())), Just(Some("q".to_string())), Just(None)],
        prop::collection::vec(arb_dependency(), 0..2),
        prop::collection::vec(arb_repository(), 0..2),
        prop::collection::vec(arb_plugin(), 0..2),
    )
        .prop_map(|(id, dependencies, repositories, plugins)| Profile {
            id,
            dependencies,
            repositories,
            build: Some(Build {
                plugins,
                ..Build::default()
            }),
            ..Profile::default()
        })
}

pub fn arb_model() -> impl Strategy<Value = Model> {
    (
        (
            prop_oneof![Just(Some("4.0.0".to_string())), arb_text()],
            arb_text(),
            arb_text(),
            arb_text(),
            prop_oneof![Just(None), Just(Some("pom".to_string())), arb_text()],
            proptest::option::of((arb_text(), arb_text(), arb_text())),
        ),
        (
            prop::collection::vec(prop_oneof![Just(String::new()), "[a-c]"], 0..4),
            prop::collection::vec(arb_dependency(), 0..4),
            prop::collection::vec(arb_plugin(), 0..4),
            prop::collection::vec(arb_repository(), 0..3),
            prop::collection::vec(arb_profile(), 0..3),
            proptest::option::of(arb_text()),
        ),
    )
        .prop_map(
            |(
                (model_version, group_id, artifact_id, version, packaging, parent),
                (modules, dependencies, plugins, repositories, profiles, status),
            )| Model {
                model_version,
                group_id,
                artifact_id,
                version,
                packaging,
                parent: parent.map(|(group_id, artifact_id, version)| Parent {
                    group_id,
                    artifact_id,
                    version,
                    ..Parent::default()
                }),
                modules,
                dependencies,
                build: Some(Build {
                    plugins,
                    ..Build::default()
                }),
                repositories,
                profiles,
                distribution_management: status.map(|status| DistributionManagement {
                    status,
                    ..DistributionManagement::default()
                }),
                ..Model::default()
            },
        )
}
