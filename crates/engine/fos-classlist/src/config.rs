//! Class List Configuration
//!
//! Resolves, once per process, which strategy backs the class helpers.

use std::sync::OnceLock;

use crate::{ClassListError, ClassListResult};

/// Implementation strategy for class operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Delegate to the element's DOMTokenList
    NativeTokenList,
    /// Parse and rewrite the class attribute string
    AttributeParsing,
}

/// Class list configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassListConfig {
    /// Host elements expose a native DOMTokenList
    pub native_token_list: bool,

    /// Use the native path even if the host reports no token list
    pub force_native: bool,
}

impl Default for ClassListConfig {
    fn default() -> Self {
        Self {
            native_token_list: true,
            force_native: cfg!(feature = "force-native"),
        }
    }
}

impl ClassListConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the host capability probe result
    pub fn with_native_token_list(mut self, available: bool) -> Self {
        self.native_token_list = available;
        self
    }

    /// Force the native path
    pub fn with_force_native(mut self, force: bool) -> Self {
        self.force_native = force;
        self
    }

    /// Strategy this configuration selects
    pub fn strategy(&self) -> Strategy {
        if self.force_native || self.native_token_list {
            Strategy::NativeTokenList
        } else {
            Strategy::AttributeParsing
        }
    }
}

static STRATEGY: OnceLock<Strategy> = OnceLock::new();

/// Install the process-wide strategy
///
/// Must run before the first class operation that uses the global
/// accessor; afterwards the strategy is fixed.
pub fn init(config: ClassListConfig) -> ClassListResult<Strategy> {
    let selected = config.strategy();
    match STRATEGY.set(selected) {
        Ok(()) => {
            tracing::debug!("Class list strategy: {:?} ({:?})", selected, config);
            Ok(selected)
        }
        Err(_) => {
            let current = strategy();
            tracing::warn!("Class list strategy already resolved as {:?}", current);
            Err(ClassListError::AlreadyInitialized(current))
        }
    }
}

/// Get the process-wide strategy, resolving the default config on first use
pub fn strategy() -> Strategy {
    *STRATEGY.get_or_init(|| {
        let config = ClassListConfig::default();
        let selected = config.strategy();
        tracing::debug!("Class list strategy: {:?} ({:?}, default)", selected, config);
        selected
    })
}
