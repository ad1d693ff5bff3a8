//! Per-file import detection.
//!
//! Both tables compile into one `RegexSet` each, so a file is matched in a
//! single pass per table and each pattern contributes at most once per file.

use regex::RegexSet;
use uplift_core::config::DetectionConfig;
use uplift_core::errors::ScanError;

/// Indices into the namespace and deprecated-API tables that matched one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHits {
    pub namespaces: Vec<usize>,
    pub deprecated: Vec<usize>,
}

impl FileHits {
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty() && self.deprecated.is_empty()
    }
}

pub struct ImportDetector {
    namespaces: RegexSet,
    deprecated: RegexSet,
}

impl ImportDetector {
    pub fn new(config: &DetectionConfig) -> Result<Self, ScanError> {
        let namespace_patterns: Vec<String> = config
            .namespaces
            .iter()
            .map(|ns| format!(r"\bimport\s+{}\.", regex::escape(ns)))
            .collect();
        let deprecated_patterns: Vec<String> = config
            .deprecated_apis
            .iter()
            .map(|api| format!(r"\bimport\s+{}", regex::escape(&api.prefix)))
            .collect();

        Ok(Self {
            namespaces: compile(&namespace_patterns)?,
            deprecated: compile(&deprecated_patterns)?,
        })
    }

    pub fn detect(&self, content: &str) -> FileHits {
        FileHits {
            namespaces: self.namespaces.matches(content).into_iter().collect(),
            deprecated: self.deprecated.matches(content).into_iter().collect(),
        }
    }
}

fn compile(patterns: &[String]) -> Result<RegexSet, ScanError> {
    RegexSet::new(patterns).map_err(|source| ScanError::Pattern {
        pattern: patterns.join(" | "),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> ImportDetector {
        ImportDetector::new(&DetectionConfig::default()).unwrap()
    }

    #[test]
    fn test_counts_namespace_once_per_file() {
        let src = "import javax.servlet.http.HttpServletRequest;\n\
                   import javax.servlet.Filter;\n\
                   import javax.persistence.Entity;\n";
        let hits = detector().detect(src);
        // javax.servlet is index 0, javax.persistence index 1
        assert_eq!(hits.namespaces, vec![0, 1]);
        assert!(hits.deprecated.is_empty());
    }

    #[test]
    fn test_requires_dot_boundary() {
        let hits = detector().detect("import javax.servletx.Foo;\nimport javax.ws.rsx.Bar;\n");
        assert!(hits.namespaces.is_empty());
    }

    #[test]
    fn test_ignores_non_import_mentions() {
        let hits = detector().detect("// see javax.servlet.Filter\nString s = \"com.sun.x\";\n");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_deprecated_apis() {
        let hits = detector().detect("import sun.misc.Unsafe;\nimport com.sun.net.httpserver.HttpServer;\n");
        assert_eq!(hits.deprecated, vec![0, 1]);
    }
}
