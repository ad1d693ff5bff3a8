//! Namespace mapping table for the import rewriter.

use serde::{Deserialize, Serialize};

/// One `from` → `to` package-prefix rename.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamespaceMapping {
    pub from: String,
    pub to: String,
}

impl NamespaceMapping {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Ordered mapping table. Entries are applied in table order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImportConfig {
    pub mappings: Vec<NamespaceMapping>,
}

/// Packages moved from `javax.*` to `jakarta.*` by Jakarta EE 9.
const JAKARTA_PACKAGES: &[&str] = &[
    "servlet",
    "persistence",
    "validation",
    "annotation",
    "transaction",
    "websocket",
    "ws.rs",
    "json",
    "json.bind",
    "xml.bind",
    "mail",
    "activation",
    "ejb",
    "jms",
    "security.auth",
    "security.enterprise",
    "inject",
    "interceptor",
    "decorator",
    "el",
    "faces",
    "servlet.jsp",
];

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            mappings: JAKARTA_PACKAGES
                .iter()
                .map(|pkg| NamespaceMapping {
                    from: format!("javax.{pkg}"),
                    to: format!("jakarta.{pkg}"),
                })
                .collect(),
        }
    }
}
