//! Pattern-based import rewriting.
//!
//! Each mapping compiles to one regex matching a complete single-type or
//! on-demand import whose package starts with the mapping's `from` prefix
//! followed by a dot. The rewritten line is always `import <to>.<rest>;`
//! with a single space after `import`; the remainder of the name is carried
//! over unchanged. Static imports are not touched.

use std::path::Path;

use regex::Regex;
use uplift_core::config::{NamespaceMapping, UpliftConfig};
use uplift_core::errors::RewriteError;
use uplift_core::walker::{read_source, relative_display, FileMatcher};
use uplift_core::{FileWarning, SourceEnumerator, WalkEnumerator};

use super::stats::MigrationStats;

struct RewriteRule {
    from: String,
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    fn compile(mapping: &NamespaceMapping) -> Result<Self, RewriteError> {
        let source = format!(r"\bimport\s+{}\.([A-Za-z0-9_.*]+);", regex::escape(&mapping.from));
        let pattern = Regex::new(&source).map_err(|source| RewriteError::Pattern {
            from: mapping.from.clone(),
            source,
        })?;
        Ok(Self {
            from: mapping.from.clone(),
            pattern,
            replacement: format!("import {}.${{1}};", mapping.to.replace('$', "$$")),
        })
    }
}

/// Result of rewriting one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub content: String,
    /// `(from, count)` for every mapping that matched, in table order.
    pub replacements: Vec<(String, usize)>,
    pub modified: bool,
}

impl RewriteOutcome {
    pub fn total_replacements(&self) -> usize {
        self.replacements.iter().map(|(_, n)| n).sum()
    }
}

pub struct ImportRewriter {
    rules: Vec<RewriteRule>,
    enumerator: Box<dyn SourceEnumerator>,
    max_file_size: Option<u64>,
}

impl ImportRewriter {
    pub fn new(config: &UpliftConfig) -> Result<Self, RewriteError> {
        let rewriter = Self::with_enumerator(
            &config.imports.mappings,
            Box::new(WalkEnumerator::new(config.scan.clone())),
        )?;
        Ok(rewriter.with_max_file_size(config.scan.effective_max_file_size()))
    }

    pub fn with_enumerator(
        mappings: &[NamespaceMapping],
        enumerator: Box<dyn SourceEnumerator>,
    ) -> Result<Self, RewriteError> {
        let rules = mappings
            .iter()
            .map(RewriteRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rules,
            enumerator,
            max_file_size: None,
        })
    }

    /// Skip, with a warning, files larger than `limit` bytes.
    pub fn with_max_file_size(mut self, limit: Option<u64>) -> Self {
        self.max_file_size = limit;
        self
    }

    /// Apply every mapping, in table order, to `content`.
    pub fn rewrite_content(&self, content: &str) -> RewriteOutcome {
        let mut current = content.to_string();
        let mut replacements = Vec::new();

        for rule in &self.rules {
            let count = rule.pattern.find_iter(&current).count();
            if count == 0 {
                continue;
            }
            current = rule
                .pattern
                .replace_all(&current, rule.replacement.as_str())
                .into_owned();
            replacements.push((rule.from.clone(), count));
        }

        let modified = current != content;
        RewriteOutcome {
            content: current,
            replacements,
            modified,
        }
    }

    /// Rewrite every source file under `root`. With `dry_run` the counts are
    /// gathered but nothing is written.
    pub fn rewrite(&self, root: &Path, dry_run: bool) -> Result<MigrationStats, RewriteError> {
        if !root.exists() {
            return Err(RewriteError::RootNotFound(root.display().to_string()));
        }

        let files = self.enumerator.enumerate(root, &FileMatcher::sources())?;
        let mut stats = MigrationStats::new(dry_run);
        stats.total_files = files.len();
        tracing::info!(root = %root.display(), files = files.len(), dry_run, "rewriting imports");

        for path in &files {
            let original = match read_source(path, self.max_file_size) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable source file");
                    stats.warnings.push(FileWarning::new(path, format!("read failed: {e}")));
                    continue;
                }
            };

            let outcome = self.rewrite_content(&original);
            if !outcome.modified {
                continue;
            }

            let rel = relative_display(root, path);
            tracing::debug!(path = %rel, replacements = outcome.total_replacements(), "rewrote imports");
            stats.record(rel, &outcome.replacements);

            if !dry_run {
                if let Err(e) = std::fs::write(path, &outcome.content) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to write rewritten file");
                    stats.warnings.push(FileWarning::new(path, format!("write failed: {e}")));
                }
            }
        }

        tracing::info!(
            modified = stats.modified_files,
            replacements = stats.total_replacements,
            "import rewrite complete"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uplift_core::config::ImportConfig;

    fn rewriter() -> ImportRewriter {
        ImportRewriter::with_enumerator(
            &ImportConfig::default().mappings,
            Box::new(WalkEnumerator::default()),
        )
        .unwrap()
    }

    #[test]
    fn test_normalises_whitespace_keeps_wildcards() {
        let out = rewriter().rewrite_content("import\tjavax.servlet.*;\nimport  javax.persistence.Entity;\n");
        assert_eq!(out.content, "import jakarta.servlet.*;\nimport jakarta.persistence.Entity;\n");
        assert_eq!(out.total_replacements(), 2);
    }

    #[test]
    fn test_untouched_lines_keep_their_whitespace() {
        let src = "import  java.util.List;\nimport\tjavax.swing.JFrame;\n";
        let out = rewriter().rewrite_content(src);
        assert!(!out.modified);
        assert_eq!(out.content, src);
    }

    #[test]
    fn test_dot_boundary() {
        let src = "import javax.servletx.Foo;\nimport javax.persistencex.Bar;\n";
        let out = rewriter().rewrite_content(src);
        assert!(!out.modified);
        assert_eq!(out.content, src);
    }

    #[test]
    fn test_static_and_other_javax_untouched() {
        let src = "import static javax.persistence.CascadeType.ALL;\nimport javax.swing.JFrame;\n";
        let out = rewriter().rewrite_content(src);
        assert!(!out.modified);
    }

    #[test]
    fn test_nested_namespace_counts_under_first_mapping() {
        let out = rewriter().rewrite_content("import javax.servlet.jsp.PageContext;\n");
        assert_eq!(out.content, "import jakarta.servlet.jsp.PageContext;\n");
        assert_eq!(out.replacements, vec![("javax.servlet".to_string(), 1)]);
    }

    #[test]
    fn test_dollar_in_target_is_literal() {
        let mappings = vec![NamespaceMapping::new("javax.foo", "jakarta.$1")];
        let r = ImportRewriter::with_enumerator(&mappings, Box::new(WalkEnumerator::default())).unwrap();
        assert_eq!(r.rewrite_content("import javax.foo.A;").content, "import jakarta.$1.A;");
    }
}
