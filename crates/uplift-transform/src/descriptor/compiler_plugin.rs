//! The compiler plugin block installed by the bom-import strategy.

use uplift_core::config::DescriptorConfig;
use uplift_core::descriptor::Element;
use uplift_core::errors::DescriptorError;

/// Resolved `(groupId, artifactId, version)` for each annotation processor.
pub fn processor_paths(config: &DescriptorConfig) -> Result<Vec<(String, String, String)>, DescriptorError> {
    config
        .compiler_plugin
        .annotation_processors
        .iter()
        .map(|processor| {
            let version = config
                .upgrade_version_by_key(&processor.version_from)
                .ok_or_else(|| DescriptorError::MissingVersion {
                    coordinate: processor.version_from.clone(),
                })?;
            Ok((
                processor.group_id.clone(),
                processor.artifact_id.clone(),
                version.to_string(),
            ))
        })
        .collect()
}

/// Build the `plugin` element as a child of `plugins`, inheriting its prefix.
pub fn build_plugin(
    plugins: &Element,
    config: &DescriptorConfig,
    processors: &[(String, String, String)],
) -> Element {
    let settings = &config.compiler_plugin;
    let target = config.target_java_version.as_str();

    let mut plugin = plugins.new_child("plugin");
    plugin.set_child_text("groupId", &settings.group_id);
    plugin.set_child_text("artifactId", &settings.artifact_id);
    plugin.set_child_text("version", &settings.version);

    let configuration = plugin.get_or_create_child("configuration");
    configuration.set_child_text("source", target);
    configuration.set_child_text("target", target);
    configuration.set_child_text("release", target);
    configuration.set_child_text("fork", if settings.fork { "true" } else { "false" });

    let paths = configuration.get_or_create_child("annotationProcessorPaths");
    for (group_id, artifact_id, version) in processors {
        let mut path = paths.new_child("path");
        path.set_child_text("groupId", group_id);
        path.set_child_text("artifactId", artifact_id);
        path.set_child_text("version", version);
        paths.push_child(path);
    }

    let args = configuration.get_or_create_child("compilerArgs");
    for arg in &settings.compiler_args {
        let element = args.new_text_child("arg", arg);
        args.push_child(element);
    }

    plugin
}

/// Whether `plugin` is the configured compiler plugin.
pub fn is_compiler_plugin(plugin: &Element, config: &DescriptorConfig) -> bool {
    plugin.is("plugin")
        && plugin.child_text("artifactId") == Some(config.compiler_plugin.artifact_id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_shape() {
        let config = DescriptorConfig::default();
        let processors = processor_paths(&config).unwrap();
        let plugin = build_plugin(&Element::new("plugins"), &config, &processors);

        assert_eq!(plugin.child_text("version"), Some("3.11.0"));
        let configuration = plugin.child("configuration").unwrap();
        assert_eq!(configuration.child_text("release"), Some("21"));
        assert_eq!(configuration.child_text("fork"), Some("true"));

        let paths = configuration.child("annotationProcessorPaths").unwrap();
        let versions: Vec<_> = paths.children_named("path").map(|p| p.child_text("version")).collect();
        assert_eq!(versions, vec![Some("1.18.36"), Some("1.5.5.Final")]);
        assert_eq!(configuration.child("compilerArgs").unwrap().children_named("arg").count(), 4);
    }

    #[test]
    fn test_missing_processor_version() {
        let mut config = DescriptorConfig::default();
        config.dependency_upgrades.retain(|c| c.artifact_id != "mapstruct");
        let err = processor_paths(&config).unwrap_err();
        assert!(matches!(err, DescriptorError::MissingVersion { .. }));
    }
}
