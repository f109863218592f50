use std::path::PathBuf;

/// Errors surfaced by the presentation layer and the launcher
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid colour '{value}' for palette entry '{name}': expected #RRGGBB")]
    InvalidColor { name: &'static str, value: String },
    #[error("Only a standalone calendar can open its own window")]
    NotStandalone,
    #[error("Failed to launch calendar window: {0}")]
    Launch(String),
}
