use std::io;
use std::path::PathBuf;

use footer::client::DEFAULT_API_BASE;
use log::LevelFilter;

pub const ACCESS_TOKEN_VAR: &str = "SPOTIFY_ACCESS_TOKEN";
pub const API_BASE_VAR: &str = "SPOTIFY_API_BASE";
pub const LOG_FILE_VAR: &str = "FOOTER_LOG_FILE";
pub const LOG_LEVEL_VAR: &str = "FOOTER_LOG_LEVEL";

/// Settings read from the environment at startup
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub access_token: String,
    pub api_base: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl CliConfig {
    pub fn from_env() -> io::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> io::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = lookup(ACCESS_TOKEN_VAR)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} is not set", ACCESS_TOKEN_VAR),
                )
            })?;

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(level) => level.parse().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} has unknown level '{}'", LOG_LEVEL_VAR, level),
                )
            })?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            access_token,
            api_base: lookup(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            log_file: lookup(LOG_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("footer.log")),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup_from(&[(ACCESS_TOKEN_VAR, "abc")])).unwrap();

        assert_eq!(config.access_token, "abc");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.log_file, PathBuf::from("footer.log"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_missing_token() {
        let err = CliConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let err = CliConfig::from_lookup(lookup_from(&[(ACCESS_TOKEN_VAR, "  ")])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (ACCESS_TOKEN_VAR, "abc"),
            (API_BASE_VAR, "http://localhost:8888/v1"),
            (LOG_FILE_VAR, "/tmp/footer-test.log"),
            (LOG_LEVEL_VAR, "debug"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "http://localhost:8888/v1");
        assert_eq!(config.log_file, PathBuf::from("/tmp/footer-test.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_log_level() {
        let result = CliConfig::from_lookup(lookup_from(&[
            (ACCESS_TOKEN_VAR, "abc"),
            (LOG_LEVEL_VAR, "chatty"),
        ]));

        assert!(result.is_err());
    }
}
