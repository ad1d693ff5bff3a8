//! Import rewriter over real source trees.
//!
//! Source: ImportRewriter, MigrationStats in uplift-transform/src/imports/

use std::fs;
use std::path::Path;

use proptest::prelude::*;
use tempfile::TempDir;
use uplift_core::config::{ImportConfig, NamespaceMapping, UpliftConfig};
use uplift_core::errors::RewriteError;
use uplift_core::WalkEnumerator;
use uplift_transform::imports::ImportRewriter;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn rewriter() -> ImportRewriter {
    ImportRewriter::new(&UpliftConfig::default()).unwrap()
}

#[test]
fn rewrites_single_import() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "com/acme/User.java", "package com.acme;\n\nimport javax.persistence.Entity;\n\n@Entity\nclass User {}\n");

    let stats = rewriter().rewrite(dir.path(), false).unwrap();

    let content = fs::read_to_string(dir.path().join("com/acme/User.java")).unwrap();
    assert!(content.contains("import jakarta.persistence.Entity;"));
    assert!(!content.contains("javax"));
    assert_eq!(stats.total_files, 1);
    assert_eq!(stats.modified_files, 1);
    assert_eq!(stats.by_package.get("javax.persistence"), Some(&1));
    assert_eq!(stats.by_package.len(), 1);
    assert_eq!(stats.changed_files[0].path, "com/acme/User.java");
}

#[test]
fn dry_run_counts_without_writing() {
    let dir = TempDir::new().unwrap();
    let sources = [
        ("a/A.java", "import javax.servlet.Filter;\nclass A {}\n"),
        ("b/B.java", "import javax.validation.Valid;\nclass B {}\n"),
        ("c/C.java", "import javax.inject.Inject;\nclass C {}\n"),
    ];
    for (rel, content) in sources {
        write(dir.path(), rel, content);
    }

    let stats = rewriter().rewrite(dir.path(), true).unwrap();

    assert!(stats.dry_run);
    assert_eq!(stats.total_replacements, 3);
    assert_eq!(stats.modified_files, 3);
    for (rel, content) in sources {
        assert_eq!(fs::read_to_string(dir.path().join(rel)).unwrap(), content);
    }
}

#[test]
fn second_run_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "Svc.java",
        "import javax.servlet.http.HttpServletRequest;\nimport javax.transaction.Transactional;\nimport javax.ws.rs.GET;\n",
    );

    let first = rewriter().rewrite(dir.path(), false).unwrap();
    assert_eq!(first.total_replacements, 3);
    let after_first = fs::read_to_string(dir.path().join("Svc.java")).unwrap();

    let second = rewriter().rewrite(dir.path(), false).unwrap();
    assert_eq!(second.total_replacements, 0);
    assert_eq!(second.modified_files, 0);
    assert!(second.by_package.is_empty());
    assert_eq!(fs::read_to_string(dir.path().join("Svc.java")).unwrap(), after_first);
}

#[test]
fn unreadable_file_becomes_warning() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Bad.java"), [0xffu8, 0xfe, 0x00]).unwrap();
    write(dir.path(), "Good.java", "import javax.mail.Session;\n");

    let stats = rewriter().rewrite(dir.path(), false).unwrap();
    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.modified_files, 1);
    assert_eq!(stats.warnings.len(), 1);
    assert!(stats.warnings[0].path.ends_with("Bad.java"));
}

#[test]
fn oversized_file_is_skipped_with_warning() {
    let dir = TempDir::new().unwrap();
    let big = format!("import javax.mail.Session;\n{}", "// filler\n".repeat(1_000));
    write(dir.path(), "Big.java", &big);
    write(dir.path(), "Good.java", "import javax.mail.Session;\n");

    let mut config = UpliftConfig::default();
    config.scan.max_file_size = Some(512);
    let stats = ImportRewriter::new(&config).unwrap().rewrite(dir.path(), false).unwrap();

    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.modified_files, 1);
    assert_eq!(stats.warnings.len(), 1);
    assert!(stats.warnings[0].path.ends_with("Big.java"));
    assert_eq!(fs::read_to_string(dir.path().join("Big.java")).unwrap(), big);
}

#[test]
fn large_file_rewritten_without_limit() {
    let dir = TempDir::new().unwrap();
    let big = format!("import javax.mail.Session;\n{}", "// filler line\n".repeat(350_000));
    write(dir.path(), "Big.java", &big);

    let stats = rewriter().rewrite(dir.path(), false).unwrap();
    assert_eq!(stats.modified_files, 1);
    assert!(stats.warnings.is_empty());
    assert!(fs::read_to_string(dir.path().join("Big.java"))
        .unwrap()
        .starts_with("import jakarta.mail.Session;\n"));
}

#[test]
fn non_source_files_untouched() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "notes.txt", "import javax.servlet.Filter;\n");
    let stats = rewriter().rewrite(dir.path(), false).unwrap();
    assert_eq!(stats.total_files, 0);
    assert_eq!(
        fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
        "import javax.servlet.Filter;\n"
    );
}

#[test]
fn missing_root_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = rewriter().rewrite(&dir.path().join("src"), false).unwrap_err();
    assert!(matches!(err, RewriteError::RootNotFound(_)));
}

#[test]
fn stats_json_shape() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "A.java", "import javax.el.ELContext;\nimport javax.el.ExpressionFactory;\n");
    let stats = rewriter().rewrite(dir.path(), false).unwrap();

    let json: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
    assert_eq!(json["total_files"], 1);
    assert_eq!(json["modified_files"], 1);
    assert_eq!(json["total_replacements"], 2);
    assert_eq!(json["by_package"]["javax.el"], 2);
}

// ─── Properties ────────────────────────────────────────────────────────────

const PACKAGES: &[&str] = &["servlet", "persistence", "validation", "mail", "jms", "swing", "sql"];
const SEPARATORS: &[&str] = &[" ", "  ", "\t"];

fn import_line() -> impl Strategy<Value = String> {
    (
        prop::sample::select(PACKAGES),
        "[A-Z][a-z]{1,8}",
        prop::sample::select(SEPARATORS),
        any::<bool>(),
    )
        .prop_map(|(pkg, class, ws, wildcard)| {
            let name = if wildcard { "*".to_string() } else { class };
            format!("import{ws}javax.{pkg}.{name};")
        })
}

fn source_file() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![import_line(), Just("class X {}".to_string()), Just("// javax.servlet".to_string())],
        0..20,
    )
    .prop_map(|lines| lines.join("\n"))
}

fn pure_rewriter(mappings: &[NamespaceMapping]) -> ImportRewriter {
    ImportRewriter::with_enumerator(mappings, Box::new(WalkEnumerator::default())).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rewrite_is_idempotent(src in source_file()) {
        let r = pure_rewriter(&ImportConfig::default().mappings);
        let once = r.rewrite_content(&src);
        let twice = r.rewrite_content(&once.content);
        prop_assert_eq!(twice.total_replacements(), 0);
        prop_assert!(!twice.modified);
        prop_assert_eq!(twice.content, once.content);
    }

    #[test]
    fn per_mapping_counts_add_up(src in source_file()) {
        // Disjoint prefixes: no mapping's `from` is a prefix of another's.
        let mappings: Vec<NamespaceMapping> = ["servlet", "persistence", "validation", "mail", "jms"]
            .iter()
            .map(|p| NamespaceMapping::new(&format!("javax.{p}"), &format!("jakarta.{p}")))
            .collect();
        let r = pure_rewriter(&mappings);
        let out = r.rewrite_content(&src);

        let expected = src
            .lines()
            .filter(|l| l.starts_with("import") && !l.contains(".swing.") && !l.contains(".sql."))
            .count();
        prop_assert_eq!(out.total_replacements(), expected);
        let sum: usize = out.replacements.iter().map(|(_, n)| *n).sum();
        prop_assert_eq!(sum, out.total_replacements());
        prop_assert_eq!(out.modified, expected > 0);
    }
}
