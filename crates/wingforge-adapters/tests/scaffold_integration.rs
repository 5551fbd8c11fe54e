//! End-to-end scaffolding scenarios against the in-memory adapters.

use std::path::Path;

use wingforge_adapters::{GithubWorkflowRegistry, InMemoryRegistry, MemoryFilesystem};
use wingforge_core::{
    application::{Filesystem, ScaffoldService},
    domain::{PermissionScope, Trigger, Workspace},
};

fn workspace() -> Workspace {
    Workspace::new("winglibs", "https://github.com/winglibs/winglibs.git")
        .with_author("Wing Maintainers", "maintainers@winglang.io")
}

fn service_over(fs: &MemoryFilesystem, registry: &InMemoryRegistry) -> ScaffoldService {
    ScaffoldService::new(Box::new(fs.clone()), Box::new(registry.clone()))
}

#[test]
fn generates_two_independent_sublibrary_directories() {
    let fs = MemoryFilesystem::new();
    let registry = InMemoryRegistry::new();
    let service = service_over(&fs, &registry);

    service
        .generate(&workspace(), ["dynamodb", "checks"])
        .unwrap();

    for name in ["dynamodb", "checks"] {
        for file in ["package.json", "LICENSE", "README.md"] {
            assert!(
                fs.exists(&Path::new(name).join(file)),
                "{name}/{file} missing"
            );
        }
        assert!(fs.exists(&Path::new(name).join(format!("{name}.w"))));
        assert!(fs.exists(&Path::new(name).join(format!("tests/{name}.test.w"))));
    }

    // Each manifest addresses its own directory, never the other's.
    let dynamodb: serde_json::Value =
        serde_json::from_str(&fs.read_file(Path::new("dynamodb/package.json")).unwrap()).unwrap();
    let checks: serde_json::Value =
        serde_json::from_str(&fs.read_file(Path::new("checks/package.json")).unwrap()).unwrap();
    assert_eq!(dynamodb["repository"]["directory"], "dynamodb");
    assert_eq!(dynamodb["name"], "@winglibs/dynamodb");
    assert_eq!(checks["repository"]["directory"], "checks");
    assert_eq!(checks["name"], "@winglibs/checks");
}

#[test]
fn registers_two_pipelines_per_sublibrary_scoped_to_their_own_directory() {
    let fs = MemoryFilesystem::new();
    let registry = InMemoryRegistry::new();
    let service = service_over(&fs, &registry);

    service
        .generate(&workspace(), ["dynamodb", "checks"])
        .unwrap();

    let pipelines = registry.pipelines();
    assert_eq!(pipelines.len(), 4);

    for pipeline in &pipelines {
        let own = pipeline.name().split('-').next().unwrap();
        for entry in pipeline.trigger().paths().entries() {
            let entry = entry.trim_start_matches('!');
            assert!(
                entry.starts_with(&format!("{own}/")),
                "{} filter '{entry}' escapes {own}/",
                pipeline.name()
            );
        }
    }
}

#[test]
fn release_pipeline_excludes_the_lock_file_and_extracts_version_first() {
    let fs = MemoryFilesystem::new();
    let registry = InMemoryRegistry::new();
    let service = service_over(&fs, &registry);

    service.generate(&workspace(), ["dynamodb"]).unwrap();

    let pipelines = registry.pipelines();
    let release = pipelines
        .iter()
        .find(|p| p.name() == "dynamodb-release")
        .unwrap();

    assert_eq!(release.permissions(), PermissionScope::Write);
    match release.trigger() {
        Trigger::Push { branches, paths } => {
            assert_eq!(branches, &["main".to_string()]);
            assert_eq!(paths.excludes(), ["dynamodb/package-lock.json".to_string()]);
        }
        other => panic!("expected push trigger, got {other:?}"),
    }

    let capture = release.step_index("Get package version").unwrap();
    assert!(capture < release.step_index("Tag commit").unwrap());
    assert!(capture < release.step_index("Github release").unwrap());

    let validation = pipelines
        .iter()
        .find(|p| p.name() == "dynamodb-pull")
        .unwrap();
    assert_eq!(validation.permissions(), PermissionScope::None);
}

#[test]
fn rerun_preserves_hand_edited_stubs_but_regenerates_the_manifest() {
    let fs = MemoryFilesystem::new();
    let registry = InMemoryRegistry::new();
    let service = service_over(&fs, &registry);
    let ws = workspace();

    service.generate(&ws, ["dynamodb"]).unwrap();

    // Developer edits the source stub and, mistakenly, the manifest.
    fs.write_file(Path::new("dynamodb/dynamodb.w"), "pub class Mine {}\n")
        .unwrap();
    fs.write_file(Path::new("dynamodb/package.json"), "{ \"name\": \"mine\" }\n")
        .unwrap();

    service.generate(&ws, ["dynamodb"]).unwrap();

    // Write-once: the stub edit survives regeneration.
    assert_eq!(
        fs.read_file(Path::new("dynamodb/dynamodb.w")).unwrap(),
        "pub class Mine {}\n"
    );
    // Write-always: the manifest is restored from the template.
    let manifest = fs.read_file(Path::new("dynamodb/package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"@winglibs/dynamodb\""));
}

#[test]
fn reruns_are_idempotent_for_untouched_workspaces() {
    let fs = MemoryFilesystem::new();
    let registry = InMemoryRegistry::new();
    let service = service_over(&fs, &registry);
    let ws = workspace();

    service.generate(&ws, ["checks"]).unwrap();
    let before: Vec<_> = {
        let mut files = fs.list_files();
        files.sort();
        files
            .iter()
            .map(|p| (p.clone(), fs.read_file(p).unwrap()))
            .collect()
    };

    service.generate(&ws, ["checks"]).unwrap();
    let after: Vec<_> = {
        let mut files = fs.list_files();
        files.sort();
        files
            .iter()
            .map(|p| (p.clone(), fs.read_file(p).unwrap()))
            .collect()
    };

    assert_eq!(before, after);
}

#[test]
fn invalid_name_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let registry = InMemoryRegistry::new();
    let service = service_over(&fs, &registry);

    assert!(service.generate(&workspace(), ["not/a/name"]).is_err());
    assert!(fs.list_files().is_empty());
    assert!(registry.is_empty());
}

#[test]
fn github_registry_projects_workflow_files() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(GithubWorkflowRegistry::new(Box::new(fs.clone()))),
    );

    service
        .generate(&workspace(), ["dynamodb", "checks"])
        .unwrap();

    for file in [
        ".github/workflows/dynamodb-pull.yml",
        ".github/workflows/dynamodb-release.yml",
        ".github/workflows/checks-pull.yml",
        ".github/workflows/checks-release.yml",
    ] {
        assert!(fs.exists(Path::new(file)), "{file} missing");
    }

    let release = fs
        .read_file(Path::new(".github/workflows/dynamodb-release.yml"))
        .unwrap();
    assert!(release.contains("contents: write"));
    assert!(release.contains("dynamodb/**"));
    assert!(release.contains("!dynamodb/package-lock.json"));
    assert!(!release.contains("checks"));
}
