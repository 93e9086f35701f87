use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";
pub const DEFAULT_LEAGUE_ID: i64 = 169608;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub espn: EspnConfig,
}

/// Upstream connection settings. `espn_s2` and `swid` are only needed for
/// private leagues.
#[derive(Debug, Clone)]
pub struct EspnConfig {
    pub base_url: String,
    pub league_id: i64,
    pub espn_s2: Option<String>,
    pub swid: Option<String>,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            host: parse_var("HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: parse_var("PORT", 3000)?,
            espn: EspnConfig::from_env()?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl EspnConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("ESPN_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(EspnConfig {
            base_url,
            league_id: parse_var("ESPN_LEAGUE_ID", DEFAULT_LEAGUE_ID)?,
            espn_s2: non_empty_var("ESPN_S2"),
            swid: non_empty_var("ESPN_SWID"),
            timeout: Duration::from_secs(parse_var("ESPN_TIMEOUT_SECS", 15)?),
        })
    }

    /// Settings pointing at an arbitrary base url, public league access.
    pub fn with_base_url(base_url: impl Into<String>, league_id: i64) -> Self {
        EspnConfig {
            base_url: base_url.into(),
            league_id,
            espn_s2: None,
            swid: None,
            timeout: Duration::from_secs(15),
        }
    }
}

impl Default for EspnConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_LEAGUE_ID)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_espn_config_targets_public_read_api() {
        let config = EspnConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.league_id, 169608);
        assert!(config.espn_s2.is_none());
        assert!(config.swid.is_none());
    }

    #[test]
    fn unset_variable_uses_default() {
        let port: u16 = parse_var("FANTASY_API_TEST_UNSET_PORT", 4040).unwrap();
        assert_eq!(port, 4040);
    }
}
