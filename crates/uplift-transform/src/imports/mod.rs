//! Import namespace rewriter.

pub mod rewriter;
pub mod stats;

pub use rewriter::{ImportRewriter, RewriteOutcome};
pub use stats::{FileChange, MigrationStats};
