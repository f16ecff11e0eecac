use thiserror::Error;

/// Startup configuration problems, rendered as a 500 if one ever reaches a response
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        var: &'static str,
        reason: &'static str,
    },
}
