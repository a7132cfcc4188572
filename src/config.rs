use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::error::ConfigError;

static CONFIG: Config = Config::for_deployment(Deployment::ACTIVE);

/// Returns the process-wide configuration.
///
/// The value is a compiled-in `static`, so every call hands out the same
/// instance and readers on any thread need no synchronization. It can only
/// be reached through a shared reference:
///
/// ```compile_fail
/// let config = widget_config::get();
/// config.max_message_length = 1000;
/// ```
pub fn get() -> &'static Config {
    &CONFIG
}

/// Which backend the widget talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deployment {
    Production,
    Local,
}

impl Deployment {
    /// The deployment baked into [`get`], chosen by the `local-backend` feature.
    #[cfg(not(feature = "local-backend"))]
    pub const ACTIVE: Deployment = Deployment::Production;
    #[cfg(feature = "local-backend")]
    pub const ACTIVE: Deployment = Deployment::Local;

    pub const ALL: [Deployment; 2] = [Deployment::Production, Deployment::Local];

    /// Hosted backend. Update after the backend is deployed.
    pub const PRODUCTION_API_BASE_URL: &'static str = "https://your-backend.railway.app";

    /// Development server started from a local checkout.
    pub const LOCAL_API_BASE_URL: &'static str = "http://localhost:5000";

    pub const fn api_base_url(self) -> &'static str {
        match self {
            Deployment::Production => Self::PRODUCTION_API_BASE_URL,
            Deployment::Local => Self::LOCAL_API_BASE_URL,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Deployment::Production => "production",
            Deployment::Local => "local",
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Deployment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Deployment::Production),
            "local" | "dev" => Ok(Deployment::Local),
            _ => Err(ConfigError::UnknownDeployment(s.to_string())),
        }
    }
}

/// Logical backend operation. The set is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Chat,
    Health,
    Stats,
    Data,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Chat,
        Endpoint::Health,
        Endpoint::Stats,
        Endpoint::Data,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Endpoint::Chat => "chat",
            Endpoint::Health => "health",
            Endpoint::Stats => "stats",
            Endpoint::Data => "data",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownEndpoint(s.to_string()))
    }
}

/// URL paths of the backend operations, relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    pub chat: &'static str,
    pub health: &'static str,
    pub stats: &'static str,
    pub data: &'static str,
}

impl Endpoints {
    pub const DEFAULT: Endpoints = Endpoints {
        chat: "/chat",
        health: "/health",
        stats: "/stats",
        data: "/data",
    };

    pub const fn path(&self, endpoint: Endpoint) -> &'static str {
        match endpoint {
            Endpoint::Chat => self.chat,
            Endpoint::Health => self.health,
            Endpoint::Stats => self.stats,
            Endpoint::Data => self.data,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Endpoint, &'static str)> + '_ {
        Endpoint::ALL
            .into_iter()
            .map(move |endpoint| (endpoint, self.path(endpoint)))
    }
}

/// Frontend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Absolute backend URL without a trailing slash
    pub api_base_url: &'static str,

    pub endpoints: Endpoints,

    /// Longest outgoing chat message the UI accepts, in characters
    pub max_message_length: u32,

    /// Delay before the "typing" indicator is shown
    pub typing_delay_ms: u64,

    /// Inactivity after which a client session counts as expired
    pub session_timeout_ms: u64,
}

impl Config {
    pub const MAX_MESSAGE_LENGTH: u32 = 500;

    pub const TYPING_DELAY_MS: u64 = 1000;

    /// 30 minutes
    pub const SESSION_TIMEOUT_MS: u64 = 30 * 60 * 1000;

    pub const fn for_deployment(deployment: Deployment) -> Config {
        Config {
            api_base_url: deployment.api_base_url(),
            endpoints: Endpoints::DEFAULT,
            max_message_length: Self::MAX_MESSAGE_LENGTH,
            typing_delay_ms: Self::TYPING_DELAY_MS,
            session_timeout_ms: Self::SESSION_TIMEOUT_MS,
        }
    }

    /// Full request URL for `endpoint`.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}{}",
            self.api_base_url.trim_end_matches('/'),
            self.endpoints.path(endpoint)
        )
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn session_timeout(&self) -> Duration {
        Duration::from_millis(self.session_timeout_ms)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
