use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/1VHYoewWfi45VYZ5/scene.splinecode";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not valid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub addr: SocketAddr,
    pub workers: usize,
    /// `None` waits on the listing service indefinitely.
    pub fetch_timeout: Option<Duration>,
    pub max_sessions: usize,
    pub scene_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            fetch_timeout: Some(Duration::from_secs(30)),
            max_sessions: 1024,
            scene_url: DEFAULT_SCENE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; unset or blank values take the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let backend_url = match get("BACKEND_URL") {
            Some(raw) => {
                let url = Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
                    name: "BACKEND_URL",
                    reason: e.to_string(),
                })?;
                url.as_str().trim_end_matches('/').to_string()
            }
            None => defaults.backend_url,
        };

        let addr = match get("STAYFRONT_ADDR") {
            Some(raw) => parse("STAYFRONT_ADDR", &raw)?,
            None => defaults.addr,
        };

        let workers = match get("STAYFRONT_WORKERS") {
            Some(raw) => parse("STAYFRONT_WORKERS", &raw)?,
            None => defaults.workers,
        };

        // 0 disables the timeout
        let fetch_timeout = match get("STAYFRONT_FETCH_TIMEOUT_SECS") {
            Some(raw) => match parse::<u64>("STAYFRONT_FETCH_TIMEOUT_SECS", &raw)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            None => defaults.fetch_timeout,
        };

        let max_sessions = match get("STAYFRONT_MAX_SESSIONS") {
            Some(raw) => parse("STAYFRONT_MAX_SESSIONS", &raw)?,
            None => defaults.max_sessions,
        };

        let scene_url = get("STAYFRONT_SCENE_URL").unwrap_or(defaults.scene_url);

        Ok(Self {
            backend_url,
            addr,
            workers,
            fetch_timeout,
            max_sessions,
            scene_url,
        })
    }
}

fn parse<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}
