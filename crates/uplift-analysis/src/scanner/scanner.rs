//! Project scanner: walks a project once and builds a [`ProjectSnapshot`].

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use uplift_core::config::UpliftConfig;
use uplift_core::constants::DESCRIPTOR_FILE_NAME;
use uplift_core::errors::ScanError;
use uplift_core::walker::{read_source, relative_display, FileMatcher};
use uplift_core::{FileWarning, SourceEnumerator, WalkEnumerator};

use super::detect::{FileHits, ImportDetector};
use super::types::{DeclaredVersions, DeprecatedApiUsage, ProjectSnapshot, ProjectStructure, Topology};
use super::versions::read_declared_versions;

pub struct Scanner {
    config: UpliftConfig,
    detector: ImportDetector,
    enumerator: Box<dyn SourceEnumerator>,
}

impl Scanner {
    /// Scanner walking the file system with the config's scan settings.
    pub fn new(config: UpliftConfig) -> Result<Self, ScanError> {
        let enumerator = Box::new(WalkEnumerator::new(config.scan.clone()));
        Self::with_enumerator(config, enumerator)
    }

    pub fn with_enumerator(
        config: UpliftConfig,
        enumerator: Box<dyn SourceEnumerator>,
    ) -> Result<Self, ScanError> {
        let detector = ImportDetector::new(&config.detection)?;
        Ok(Self {
            config,
            detector,
            enumerator,
        })
    }

    pub fn scan(&self, root: &Path) -> Result<ProjectSnapshot, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::RootNotFound(root.display().to_string()));
        }

        let mut warnings = Vec::new();
        let descriptors = self.enumerator.enumerate(root, &FileMatcher::descriptors())?;
        let sources = self.enumerator.enumerate(root, &FileMatcher::sources())?;
        tracing::info!(
            root = %root.display(),
            descriptors = descriptors.len(),
            sources = sources.len(),
            "scanning project"
        );

        let structure = self.structure(root, &descriptors, sources.len(), &mut warnings);
        let versions = self.root_versions(root, &mut warnings);

        let limit = self.config.scan.effective_max_file_size();
        let file_hits: Vec<(&PathBuf, std::io::Result<FileHits>)> = sources
            .par_iter()
            .map(|path| {
                let hits = read_source(path, limit).map(|content| self.detector.detect(&content));
                (path, hits)
            })
            .collect();

        let detection = &self.config.detection;
        let mut namespace_usage: BTreeMap<String, usize> = BTreeMap::new();
        let mut namespace_files: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut deprecated_files: Vec<BTreeSet<String>> = vec![BTreeSet::new(); detection.deprecated_apis.len()];

        for (path, hits) in file_hits {
            let hits = match hits {
                Ok(hits) => hits,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable source file");
                    warnings.push(FileWarning::new(path, format!("unreadable source file: {e}")));
                    continue;
                }
            };
            if hits.is_empty() {
                continue;
            }
            let rel = relative_display(root, path);
            tracing::debug!(path = %rel, namespaces = hits.namespaces.len(), deprecated = hits.deprecated.len(), "detected imports");

            for index in hits.namespaces {
                let namespace = &detection.namespaces[index];
                *namespace_usage.entry(namespace.clone()).or_insert(0) += 1;
                namespace_files
                    .entry(namespace.clone())
                    .or_default()
                    .insert(rel.clone());
            }
            for index in hits.deprecated {
                deprecated_files[index].insert(rel.clone());
            }
        }

        let deprecated_apis = detection
            .deprecated_apis
            .iter()
            .zip(deprecated_files)
            .filter(|(_, files)| !files.is_empty())
            .map(|(api, files)| DeprecatedApiUsage {
                api: api.api.clone(),
                files: files.into_iter().collect(),
            })
            .collect();

        Ok(ProjectSnapshot {
            project_name: project_name(root),
            structure,
            versions,
            namespace_usage,
            namespace_files,
            deprecated_apis,
            warnings,
        })
    }

    fn structure(
        &self,
        root: &Path,
        descriptors: &[PathBuf],
        source_count: usize,
        warnings: &mut Vec<FileWarning>,
    ) -> ProjectStructure {
        let topology = if descriptors.len() > 1 {
            Topology::MultiModule
        } else {
            Topology::SingleModule
        };

        let modules = match topology {
            Topology::SingleModule => Vec::new(),
            Topology::MultiModule => descriptors
                .iter()
                .map(|pom| relative_display(root, pom.parent().unwrap_or(root)))
                .collect(),
        };

        let marker = self.config.detection.framework_marker.as_str();
        let mut is_spring_boot = false;
        for pom in descriptors {
            match std::fs::read_to_string(pom) {
                Ok(content) => is_spring_boot |= content.contains(marker),
                Err(e) => {
                    tracing::warn!(path = %pom.display(), error = %e, "skipping unreadable descriptor");
                    warnings.push(FileWarning::new(pom, format!("unreadable descriptor: {e}")));
                }
            }
        }

        ProjectStructure {
            topology,
            is_spring_boot,
            pom_count: descriptors.len(),
            java_files_count: source_count,
            modules,
        }
    }

    fn root_versions(&self, root: &Path, warnings: &mut Vec<FileWarning>) -> DeclaredVersions {
        let path = root.join(DESCRIPTOR_FILE_NAME);
        match read_declared_versions(&path, &self.config.detection) {
            Ok(versions) => versions,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "root descriptor not usable, versions unknown");
                warnings.push(FileWarning::new(&path, format!("root descriptor not usable: {e}")));
                DeclaredVersions::default()
            }
        }
    }
}

fn project_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    match resolved.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => root.display().to_string(),
    }
}
