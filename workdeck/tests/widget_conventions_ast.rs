use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const FORBIDDEN_SIDE_EFFECTS: [&str; 8] = [
    "log::",
    "std::fs::",
    "std::env::",
    "Task::",
    "iced::Task",
    "iced::window",
    ".refresh(",
    "load_initial_config",
];

const FORBIDDEN_COUPLING: [(&str, &str); 3] = [
    ("crate::app::", "widgets must not depend on the app root"),
    ("crate::features::", "widgets must not reach into feature state"),
    ("crate::ui::widgets::", "widgets must not compose sibling widgets"),
];

#[test]
fn given_ui_widgets_when_validating_conventions_then_all_modules_comply() {
    let widgets_dir = src_dir().join("ui/widgets");
    let mut violations: Vec<String> = Vec::new();

    let declared_modules =
        declared_modules(&widgets_dir.join("mod.rs"), &mut violations);
    let fs_modules = file_modules(&widgets_dir, &mut violations);

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match file modules {:?}",
            widgets_dir.join("mod.rs").display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        let file_path = widgets_dir.join(format!("{module}.rs"));
        validate_widget_file(&file_path, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_ui_components_when_validating_conventions_then_each_exposes_a_view() {
    let components_dir = src_dir().join("ui/components");
    let mut violations: Vec<String> = Vec::new();

    let declared_modules =
        declared_modules(&components_dir.join("mod.rs"), &mut violations);

    for module in &declared_modules {
        let file_path = components_dir.join(format!("{module}.rs"));
        let file = parse(&file_path);
        let has_view = file.items.iter().any(|item| {
            matches!(
                item,
                Item::Fn(item_fn)
                    if item_fn.sig.ident == "view" && is_pub_crate(&item_fn.vis)
            )
        });
        if !has_view {
            violations.push(format!(
                "{}: component must expose pub(crate) fn view",
                file_path.display()
            ));
        }

        let source = read(&file_path);
        if contains_pattern(&source, "crate::ui::widgets::") {
            violations.push(format!(
                "{}: components must not depend on widgets",
                file_path.display()
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "component convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_module_paths_when_scanning_for_side_effects_then_only_whole_paths_match()
 {
    assert!(!contains_pattern("use crate::catalog::Workspace;", "log::"));
    assert!(!contains_pattern("use crate::ui::dialog::open;", "log::"));
    assert!(contains_pattern("    log::info!(\"tick\");", "log::"));
    assert!(contains_pattern("use std::fs::read;", "std::fs::"));
    assert!(contains_pattern("catalog.refresh()", ".refresh("));
    assert!(!contains_pattern("FileTask::none()", "Task::"));
    assert!(contains_pattern("iced::Task::none()", "Task::"));
}

fn validate_widget_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = read(file_path);
    let file = parse(file_path);
    let expected_prefix = file_stem_pascal_case(file_path);

    for forbidden in FORBIDDEN_SIDE_EFFECTS {
        if contains_pattern(&source, forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }
    for (pattern, reason) in FORBIDDEN_COUPLING {
        if contains_pattern(&source, pattern) {
            violations.push(format!("{}: {reason}", file_path.display()));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();
    let mut event_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Enum(item_enum) => {
                let name = item_enum.ident.to_string();
                if name.ends_with("Event") {
                    event_names.push(name);
                }
            },
            Item::Type(item_type) => {
                let name = item_type.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                } else if name.ends_with("Event") {
                    event_names.push(name);
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    let expected_props = format!("{expected_prefix}Props");
    if props_names != [expected_props.as_str()] {
        violations.push(format!(
            "{}: expected a single props type '{expected_props}', found {props_names:?}",
            file_path.display()
        ));
    }

    let expected_event = format!("{expected_prefix}Event");
    if event_names != [expected_event.as_str()] {
        violations.push(format!(
            "{}: expected a single event contract '{expected_event}', found {event_names:?}",
            file_path.display()
        ));
    }
}

fn declared_modules(
    mod_rs: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let mut declared = BTreeSet::new();

    for item in parse(mod_rs).items {
        match item {
            Item::Mod(item_mod)
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() =>
            {
                declared.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: module declaration '{}' must be pub(crate) mod <name>;",
                mod_rs.display(),
                item_mod.ident
            )),
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    declared
}

fn file_modules(dir: &Path, violations: &mut Vec<String>) -> BTreeSet<String> {
    let mut modules = BTreeSet::new();
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    for entry in entries {
        let path = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
            .path();

        if path.is_dir() {
            violations.push(format!(
                "{}: nested widget directories are forbidden in the flat layout",
                path.display()
            ));
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let stem = file_stem(&path);
        if stem != "mod" {
            modules.insert(stem);
        }
    }

    modules
}

fn src_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn read(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()))
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn file_stem_pascal_case(path: &Path) -> String {
    file_stem(path)
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            first.to_uppercase().chain(chars).collect::<String>()
        })
        .collect()
}

/// Find `pattern` where it is not the tail of a longer identifier, so that
/// `log::` does not match inside `crate::catalog::`.
fn contains_pattern(source: &str, pattern: &str) -> bool {
    let starts_with_ident = pattern
        .chars()
        .next()
        .is_some_and(|ch| ch.is_alphanumeric() || ch == '_');

    source.match_indices(pattern).any(|(index, _)| {
        !starts_with_ident
            || source[..index]
                .chars()
                .next_back()
                .is_none_or(|ch| !(ch.is_alphanumeric() || ch == '_'))
    })
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
