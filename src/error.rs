//! Error types for ad-toolkit
//!
//! Components never fail. Only preset configuration loading can.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Color literal that is neither a role name nor a hex color
    #[snafu(display("Invalid color: {value}"))]
    InvalidColor { value: String },

    /// Background literal that is neither a material name nor a color
    #[snafu(display("Invalid background: {value}"))]
    InvalidBackground { value: String },

    /// A preset field holds a value outside its vocabulary
    #[snafu(display("Invalid value for {field}: {value}"))]
    InvalidValue { field: String, value: String },

    /// A preset extends a name the registry does not know
    #[snafu(display("Unknown preset: {name}"))]
    UnknownPreset { name: String },

    /// Presets in one file extend each other in a loop
    #[snafu(display("Preset extension cycle at: {name}"))]
    PresetCycle { name: String },

    /// IO error while reading a preset file
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
