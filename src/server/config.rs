use chrono::Duration;

use crate::server::error::{config::ConfigError, Error};

static DEFAULT_DATABASE_URL: &str = "sqlite://holocron.db?mode=rwc";
static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_JWT_TTL_HOURS: i64 = 24;

#[derive(Debug)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_ttl: Duration,
    pub bind_address: String,
}

impl Config {
    /// Reads the configuration from environment variables
    ///
    /// `JWT_SECRET` is required, every other variable has a default.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Builds the configuration from `lookup`, which returns the value of a variable if set
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::MissingEnvVar("JWT_SECRET"))?;

        if jwt_secret.is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "JWT_SECRET",
                reason: "must not be empty",
            });
        }

        let jwt_ttl_hours = match lookup("JWT_TTL_HOURS") {
            Some(value) => parse_ttl_hours(&value)?,
            None => DEFAULT_JWT_TTL_HOURS,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            jwt_ttl: Duration::hours(jwt_ttl_hours),
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn parse_ttl_hours(value: &str) -> Result<i64, ConfigError> {
    let invalid = |reason| ConfigError::InvalidEnvValue {
        var: "JWT_TTL_HOURS",
        reason,
    };

    let hours: i64 = value
        .trim()
        .parse()
        .map_err(|_| invalid("expected a whole number of hours"))?;

    if hours <= 0 {
        return Err(invalid("must be greater than zero"));
    }

    Ok(hours)
}
