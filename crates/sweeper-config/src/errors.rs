use std::error::Error;

#[derive(Debug)]
pub enum ConfigError {
    ConfigParseError {
        message: String,
    },
    InvalidConfiguration {
        message: String,
    },
    InvalidEndpoint {
        surface: String,
        url: String,
    },
    IoError {
        source: std::io::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigParseError { message } => {
                write!(f, "Failed to parse config file: {}", message)
            }
            ConfigError::InvalidConfiguration { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
            ConfigError::InvalidEndpoint { surface, url } => {
                write!(
                    f,
                    "Invalid endpoint override for '{}': '{}' is not an absolute http(s) URL",
                    surface, url
                )
            }
            ConfigError::IoError { source } => {
                write!(f, "IO error reading config: {}", source)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::IoError { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(source: std::io::Error) -> Self {
        ConfigError::IoError { source }
    }
}
