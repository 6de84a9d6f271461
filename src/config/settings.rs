use serde::Deserialize;

/// Top-level configuration settings for the application.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub session: SessionSettings,
}

/// Configuration settings for the server.
///
/// Defines the address to bind and whether new ideas are pushed to
/// connected sessions.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// When false, sessions only ever see their own replies.
    pub broadcast: bool,
}

/// Per-connection session settings.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    /// Seconds a connection may sit idle before the server hangs up;
    /// 0 disables the timeout.
    pub idle_timeout_secs: u64,
}

/// Partial configuration loaded from files or the environment.
///
/// Allows partial specification of settings; missing values are filled
/// from defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub server: Option<PartialServerSettings>,
    pub session: Option<PartialSessionSettings>,
}

/// Partial server settings.
#[derive(Debug, Deserialize)]
pub struct PartialServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub broadcast: Option<bool>,
}

/// Partial session settings.
#[derive(Debug, Deserialize)]
pub struct PartialSessionSettings {
    pub idle_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 4000,
                broadcast: true,
            },
            session: SessionSettings {
                idle_timeout_secs: 300,
            },
        }
    }
}
