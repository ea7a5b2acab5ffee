use std::fmt;

/// Errors that can occur while loading configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found at expected path
    NotFound(String),
    /// Failed to parse config file (YAML syntax error)
    ParseError(String),
    /// IO error reading config
    IoError(std::io::Error),
    /// Environment override carries a value we cannot interpret
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::ParseError(msg) => write!(f, "Config parse error: {msg}"),
            ConfigError::IoError(err) => write!(f, "Config IO error: {err}"),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {key}: '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound("/path/to/sharedconf.config.yaml".to_string());
        assert!(err.to_string().contains("/path/to/sharedconf.config.yaml"));

        let err = ConfigError::ParseError("invalid YAML".to_string());
        assert!(err.to_string().contains("invalid YAML"));

        let err = ConfigError::InvalidValue {
            key: "SHAREDCONF_MODE".to_string(),
            value: "dirs".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("SHAREDCONF_MODE"));
        assert!(display.contains("dirs"));
    }

    #[test]
    fn test_config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::IoError(_)));
        assert!(std::error::Error::source(&config_err).is_some());
    }
}
