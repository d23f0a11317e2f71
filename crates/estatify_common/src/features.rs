//! Feature flag handling for the Estatify application.
//!
//! Feature flags are used in two ways in the Estatify application:
//!
//! 1. Compile-time feature flags using `#[cfg(feature = "...")]` (e.g. `openapi`)
//! 2. Runtime feature flags using configuration values (`use_appointments`,
//!    `use_directory`)
//!
//! This module provides helper functions for checking if features are enabled
//! at runtime based on configuration values.

use estatify_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `use_feature` - The configuration flag that enables the feature
/// * `feature_config` - The configuration section for the feature
///
/// # Returns
///
/// `true` if the feature is enabled, `false` otherwise
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the appointments feature is enabled at runtime.
pub fn is_appointments_enabled(config: &Arc<AppConfig>) -> bool {
    // The appointments section is optional with sensible defaults, so the
    // runtime flag alone decides.
    config.use_appointments
}

/// Check if the directory resolver is enabled at runtime.
pub fn is_directory_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_directory, config.directory.as_ref())
}
