//! Hygiene: enforces coding standards at test time
//!
//! Scans the app crate's production sources (everything under `src/` except
//! `*_test.rs`) for patterns that crash or silently drop errors.

use std::fs;
use std::path::Path;

const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn production_sources_stay_within_budgets() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");

    let mut report = Vec::new();
    for (pattern, budget) in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|(path, content)| {
                let count = content.lines().filter(|line| line.contains(pattern)).count();
                (path.clone(), count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();
        let found: usize = hits.iter().map(|(_, count)| count).sum();
        if found > *budget {
            let detail = hits
                .iter()
                .map(|(path, count)| format!("    {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            report.push(format!("  `{pattern}` found {found}, max {budget}\n{detail}"));
        }
    }

    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}

#[test]
fn browser_glue_is_feature_gated() {
    let content = fs::read_to_string("src/util/mod.rs").unwrap_or_default();
    let gated = content
        .lines()
        .zip(content.lines().skip(1))
        .any(|(attr, item)| attr.trim() == "#[cfg(feature = \"csr\")]" && item.trim() == "pub mod dom_validity;");
    assert!(gated, "dom_validity must only compile with the csr feature");
}

#[test]
fn price_inputs_are_seeded_once() {
    let content = fs::read_to_string("src/components/price_form.rs").unwrap_or_default();
    assert!(content.contains("initial_text("), "price inputs lost their seed value");
    assert!(
        !content.contains("prop:value"),
        "price inputs must not be value-controlled: writing state back clears a partial entry"
    );
}
