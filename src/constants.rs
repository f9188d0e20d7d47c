//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Asset Prep";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "assetprep";

/// Directory name under the platform config directory.
pub const APP_DATA_DIR: &str = "assetprep";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ASSETPREP_CONFIG_DIR";
