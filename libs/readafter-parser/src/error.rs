#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config io error ({path}): {source}")]
    Io { path: String, source: std::io::Error },

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
