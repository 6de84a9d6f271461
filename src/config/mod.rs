mod settings;

use config::{Config, ConfigError, Environment, File};

use crate::config::settings::PartialSettings;

pub use settings::{ServerSettings, SessionSettings, Settings};

/// Loads the configuration from the default file and environment variables.
///
/// Sources are layered: `config/default` (optional), then environment
/// variables (`SERVER__PORT`, `SESSION__IDLE_TIMEOUT_SECS`, ...), merged
/// over built-in defaults.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("__").try_parsing(true));

    let config = builder.build()?;

    // Take what is available and fill the rest from defaults.
    let partial: PartialSettings = config.try_deserialize()?;
    let default = Settings::default();

    Ok(Settings {
        server: ServerSettings {
            host: partial
                .server
                .as_ref()
                .and_then(|s| s.host.clone())
                .unwrap_or(default.server.host),
            port: partial
                .server
                .as_ref()
                .and_then(|s| s.port)
                .unwrap_or(default.server.port),
            broadcast: partial
                .server
                .as_ref()
                .and_then(|s| s.broadcast)
                .unwrap_or(default.server.broadcast),
        },
        session: SessionSettings {
            idle_timeout_secs: partial
                .session
                .as_ref()
                .and_then(|s| s.idle_timeout_secs)
                .unwrap_or(default.session.idle_timeout_secs),
        },
    })
}

#[cfg(test)]
mod tests;
