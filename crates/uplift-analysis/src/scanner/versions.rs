use std::path::Path;

use uplift_core::config::DetectionConfig;
use uplift_core::descriptor::read_document;
use uplift_core::errors::DescriptorError;

use super::types::DeclaredVersions;

/// Framework version reported when the framework parent declares none.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Read the versions declared by the descriptor at `path`.
///
/// The JDK and extension versions come from the first matching property
/// anywhere in the tree. The framework version comes from the first `parent`
/// in the tree, and only when its artifactId carries the framework marker.
pub fn read_declared_versions(
    path: &Path,
    detection: &DetectionConfig,
) -> Result<DeclaredVersions, DescriptorError> {
    let doc = read_document(path)?;
    let root = &doc.root;

    let property = |name: &str| {
        root.find_descendant(&["properties", name])
            .and_then(|e| e.text())
            .map(str::to_string)
    };

    let spring_boot = root.find_descendant(&["parent"]).and_then(|parent| {
        let artifact = parent.child_text("artifactId")?;
        if !artifact.contains(detection.framework_marker.as_str()) {
            return None;
        }
        Some(
            parent
                .child_text("version")
                .unwrap_or(UNKNOWN_VERSION)
                .to_string(),
        )
    });

    Ok(DeclaredVersions {
        java: property(&detection.platform_version_property),
        spring_boot,
        spring_cloud: property(&detection.extension_version_property),
    })
}
