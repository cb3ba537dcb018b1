//! End-to-end generation through the real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use stencil_adapters::{JsonTemplateLoader, LocalFilesystem, MemoryFilesystem, ReactRenderer, parse_template};
use stencil_core::prelude::*;

const CARD_TEMPLATE: &str = r#"{
  "card": {
    "name": "custom-card",
    "class": "card-base",
    "props": { "title": "string", "variant": ["a", "b"] }
  }
}"#;

fn local_generator(root: &Path) -> Generator {
    Generator::new(
        Box::new(ReactRenderer::new()),
        Box::new(LocalFilesystem::new()),
        root.join("components"),
    )
}

fn read_tree(dir: &Path) -> Vec<(String, String)> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .map(|p| {
            (
                p.file_name().unwrap().to_string_lossy().into_owned(),
                fs::read_to_string(&p).unwrap(),
            )
        })
        .collect();
    entries.sort();
    entries
}

#[test]
fn card_example_produces_four_files() {
    let tmp = tempfile::tempdir().unwrap();
    let template = parse_template(CARD_TEMPLATE).unwrap();

    let report = local_generator(tmp.path()).run(&template).unwrap();

    let dir = tmp.path().join("components/custom-card");
    let names: Vec<_> = read_tree(&dir).into_iter().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        ["CustomCard.stories.tsx", "index.tsx", "model.ts", "style.scss"]
    );

    assert_eq!(report.components.len(), 1);
    assert_eq!(report.components[0].identifier.as_str(), "CustomCard");

    let model = fs::read_to_string(dir.join("model.ts")).unwrap();
    assert!(model.contains("title: string;"));
    assert!(model.contains("variant: 'a' | 'b';"));

    let style = fs::read_to_string(dir.join("style.scss")).unwrap();
    assert!(style.starts_with(".card-base {"));

    for file in ["index.tsx", "model.ts", "CustomCard.stories.tsx"] {
        let content = fs::read_to_string(dir.join(file)).unwrap();
        assert!(content.contains("CustomCard"), "{file}");
    }
}

#[test]
fn second_run_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let template = parse_template(CARD_TEMPLATE).unwrap();
    let generator = local_generator(tmp.path());
    let dir = tmp.path().join("components/custom-card");

    generator.run(&template).unwrap();
    let first = read_tree(&dir);
    generator.run(&template).unwrap();
    let second = read_tree(&dir);

    assert_eq!(first, second);
}

#[test]
fn existing_directory_is_overwritten() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("components/custom-card");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("style.scss"), "stale").unwrap();

    local_generator(tmp.path())
        .run(&parse_template(CARD_TEMPLATE).unwrap())
        .unwrap();

    assert_eq!(
        fs::read_to_string(dir.join("style.scss")).unwrap(),
        ".card-base {}\n"
    );
}

#[test]
fn loads_from_disk_and_generates_in_memory() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("template.json");
    fs::write(
        &path,
        r#"{
          "button": {"name": "primary-button", "class": "btn", "props": {"label": "string", "disabled?": "boolean"}},
          "card":   {"name": "custom-card", "class": "card-base", "props": {}}
        }"#,
    )
    .unwrap();

    let template = JsonTemplateLoader::new(&path).load().unwrap();
    let fs = MemoryFilesystem::new();
    let generator = Generator::new(Box::new(ReactRenderer::new()), Box::new(fs.clone()), "components");

    let report = generator.run(&template).unwrap();

    assert_eq!(report.file_count(), 8);
    assert_eq!(fs.file_count(), 8);
    assert_eq!(
        fs.list_files(),
        [
            "components/custom-card/CustomCard.stories.tsx",
            "components/custom-card/index.tsx",
            "components/custom-card/model.ts",
            "components/custom-card/style.scss",
            "components/primary-button/PrimaryButton.stories.tsx",
            "components/primary-button/index.tsx",
            "components/primary-button/model.ts",
            "components/primary-button/style.scss",
        ]
        .map(PathBuf::from)
    );
    let model = fs
        .read_file(Path::new("components/primary-button/model.ts"))
        .unwrap();
    assert!(model.contains("export interface PrimaryButtonProps {"));
    assert!(model.contains("  disabled?: boolean;"));

    let component = fs
        .read_file(Path::new("components/primary-button/index.tsx"))
        .unwrap();
    assert!(component.contains("  label,\n  disabled\n"));
}

#[test]
fn object_types_are_written_verbatim() {
    let template = parse_template(
        r#"{"list": {"name": "item-list", "class": "list",
            "props": {"items": "{ id: number; label: string }[]", "meta?": "Record<string, { a: string }>"}}}"#,
    )
    .unwrap();
    let fs = MemoryFilesystem::new();
    Generator::new(Box::new(ReactRenderer::new()), Box::new(fs.clone()), "components")
        .run(&template)
        .unwrap();

    let model = fs
        .read_file(Path::new("components/item-list/model.ts"))
        .unwrap();
    assert!(model.contains("  items: { id: number; label: string }[];\n"));
    assert!(model.contains("  meta?: Record<string, { a: string }>;\n"));
}

#[test]
fn failure_keeps_earlier_components() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("components");
    fs::create_dir_all(&root).unwrap();
    // A plain file where the second component's directory should go.
    fs::write(root.join("blocked"), "").unwrap();

    let template = parse_template(
        r#"{
          "first":  {"name": "first",   "class": "a", "props": {}},
          "second": {"name": "blocked", "class": "b", "props": {}}
        }"#,
    )
    .unwrap();

    let err = local_generator(tmp.path()).run(&template).unwrap_err();

    assert_eq!(err.component_key(), Some("second"));
    assert!(root.join("first/index.tsx").exists());
}

#[test]
fn invalid_descriptor_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let fs = MemoryFilesystem::new();
    let generator = Generator::new(Box::new(ReactRenderer::new()), Box::new(fs.clone()), tmp.path());

    let template = parse_template(
        r#"{
          "ok":  {"name": "ok",   "class": "a", "props": {}},
          "dup": {"name": "ok",   "class": "b", "props": {}}
        }"#,
    )
    .unwrap();

    let err = generator.run(&template).unwrap_err();
    assert!(matches!(err, StencilError::Component { .. }));
    assert_eq!(fs.file_count(), 0);
}
