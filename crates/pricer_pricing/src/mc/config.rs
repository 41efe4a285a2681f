//! Monte Carlo simulation configuration.
//!
//! This module provides [`MonteCarloConfig`] and its builder. Values are
//! validated once in [`MonteCarloConfigBuilder::build`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum number of simulated paths.
pub const MAX_PATHS: usize = 10_000_000;

/// Default number of simulated paths.
pub const DEFAULT_PATHS: usize = 100_000;

/// Paths per RNG stream.
///
/// Fixed so that the stream assigned to each path does not depend on the
/// thread count.
pub const CHUNK_SIZE: usize = 8_192;

/// Monte Carlo configuration.
///
/// # Examples
/// ```
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .seed(42)
///     .antithetic(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.seed(), Some(42));
/// assert!(config.antithetic());
/// assert!(!config.parallel());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    n_paths: usize,
    seed: Option<u64>,
    antithetic: bool,
    parallel: bool,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            seed: None,
            antithetic: false,
            parallel: false,
        }
    }
}

impl MonteCarloConfig {
    /// Starts a builder initialised with the defaults.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Number of random draws.
    ///
    /// With antithetic sampling each draw is evaluated twice (`Z` and `-Z`)
    /// and counts as one averaged sample.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Fixed seed, or `None` for fresh entropy on every call.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether antithetic variates are used.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Whether chunks run on the rayon thread pool.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Number of RNG chunks the paths are split into.
    #[inline]
    pub fn n_chunks(&self) -> usize {
        self.n_paths.div_ceil(CHUNK_SIZE)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPathCount` if `n_paths` is outside `[1, MAX_PATHS]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    antithetic: bool,
    parallel: bool,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of paths (default 100_000).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Fixes the seed for reproducible results.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed; `None` draws fresh entropy per call.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables antithetic variates.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Runs chunks in parallel.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPathCount` if the path count is out of range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            n_paths: self.n_paths.unwrap_or(DEFAULT_PATHS),
            seed: self.seed,
            antithetic: self.antithetic,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}
