//! Run configuration.
//!
//! A [`RunConfig`] is built once from the command line and handed down to the
//! dispatcher by reference. Nothing below `main` reads flags from anywhere
//! else, so the walk and the per-file pipeline can be exercised directly in
//! tests with whatever settings they need.

/// Settings that stay fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    /// Directory levels below the root to descend into. `0` processes only the
    /// root directory's own entries.
    pub max_depth: usize,
    /// Print both checksums and the chosen encode parameters for every file.
    pub verbose: bool,
}

impl RunConfig {
    pub fn new(max_depth: usize, verbose: bool) -> Self {
        Self { max_depth, verbose }
    }

    /// Depth limit in `walkdir` terms, where the root itself is depth 0 and
    /// its immediate entries are depth 1.
    pub fn walk_depth(&self) -> usize {
        self.max_depth.saturating_add(1)
    }

    /// Default log filter directive when `RUST_LOG` is unset.
    pub fn default_log_directive(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }
}
