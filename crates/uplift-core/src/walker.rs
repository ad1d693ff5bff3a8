//! Parallel file enumeration using the `ignore` crate's `WalkParallel`.
//!
//! Passes never walk the tree themselves; they ask a [`SourceEnumerator`]
//! for the files they care about. [`WalkEnumerator`] is the default one.

use std::io;
use std::path::{Path, PathBuf};

use crossbeam_channel as channel;

use crate::config::ScanConfig;
use crate::constants::{DESCRIPTOR_FILE_NAME, SOURCE_EXTENSION};
use crate::errors::WalkError;

/// Directories skipped by every walk.
pub const DEFAULT_IGNORES: &[&str] = &[".git", "target", "node_modules", ".idea"];

/// Which files an enumeration should yield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileMatcher {
    /// Exact file name, e.g. `pom.xml`.
    Named(String),
    /// File extension without the dot, e.g. `java`.
    Extension(String),
}

impl FileMatcher {
    pub fn descriptors() -> Self {
        Self::Named(DESCRIPTOR_FILE_NAME.to_string())
    }

    pub fn sources() -> Self {
        Self::Extension(SOURCE_EXTENSION.to_string())
    }

    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Self::Named(name) => path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n == name),
            Self::Extension(ext) => path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == ext),
        }
    }
}

/// Supplies the files a pass operates on.
pub trait SourceEnumerator: Send + Sync {
    /// Every regular file under `root` accepted by `matcher`, sorted by path.
    fn enumerate(&self, root: &Path, matcher: &FileMatcher) -> Result<Vec<PathBuf>, WalkError>;
}

/// Default enumerator: a parallel directory walk honouring the scan config.
#[derive(Debug, Clone, Default)]
pub struct WalkEnumerator {
    config: ScanConfig,
}

impl WalkEnumerator {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }
}

impl SourceEnumerator for WalkEnumerator {
    fn enumerate(&self, root: &Path, matcher: &FileMatcher) -> Result<Vec<PathBuf>, WalkError> {
        walk_directory(root, &self.config, matcher)
    }
}

/// Walk a directory tree in parallel, collecting files accepted by `matcher`.
///
/// Hidden files are included. `.gitignore` is only honoured when
/// `respect_gitignore` is set. Returns files sorted by path for
/// deterministic output.
pub fn walk_directory(
    root: &Path,
    config: &ScanConfig,
    matcher: &FileMatcher,
) -> Result<Vec<PathBuf>, WalkError> {
    if !root.exists() {
        return Err(WalkError::RootNotFound(root.display().to_string()));
    }

    let (tx, rx) = channel::unbounded();
    let respect_gitignore = config.effective_respect_gitignore();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .parents(respect_gitignore)
        .ignore(respect_gitignore)
        .git_ignore(respect_gitignore)
        .git_global(respect_gitignore)
        .git_exclude(respect_gitignore)
        .follow_links(config.follow_symlinks.unwrap_or(false));

    let threads = config.effective_threads();
    if threads > 0 {
        builder.threads(threads);
    }

    // Negated override globs act as a blacklist; with no positive globs
    // everything else stays included.
    let mut overrides = ignore::overrides::OverrideBuilder::new(root);
    let ignores = DEFAULT_IGNORES
        .iter()
        .map(|p| p.to_string())
        .chain(config.extra_ignore.iter().cloned());
    for pattern in ignores {
        for glob in [format!("!{pattern}/**"), format!("!{pattern}")] {
            overrides
                .add(&glob)
                .map_err(|e| WalkError::IgnorePattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
        }
    }
    let built = overrides.build().map_err(|e| WalkError::IgnorePattern {
        pattern: "<overrides>".to_string(),
        message: e.to_string(),
    })?;
    builder.overrides(built);

    builder.build_parallel().run(|| {
        let tx = tx.clone();
        let matcher = matcher.clone();
        Box::new(move |entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(error = %e, "walk entry skipped");
                    return ignore::WalkState::Continue;
                }
            };

            // Only regular files
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return ignore::WalkState::Continue;
            }

            if matcher.matches(entry.path()) {
                let _ = tx.send(entry.into_path());
            }
            ignore::WalkState::Continue
        })
    });

    drop(tx);
    let mut files: Vec<PathBuf> = rx.into_iter().collect();
    files.sort();
    Ok(files)
}

/// Read `path` as UTF-8 text. Files above `limit` bytes are refused with an
/// error, never silently dropped from the enumeration.
pub fn read_source(path: &Path, limit: Option<u64>) -> io::Result<String> {
    if let Some(limit) = limit {
        let len = std::fs::metadata(path)?.len();
        if len > limit {
            return Err(io::Error::other(format!(
                "file is {len} bytes, above the {limit}-byte limit"
            )));
        }
    }
    std::fs::read_to_string(path)
}

/// `path` relative to `root`, with `/` separators. The root itself is `.`.
pub fn relative_display(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    if rel.as_os_str().is_empty() {
        return ".".to_string();
    }
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
