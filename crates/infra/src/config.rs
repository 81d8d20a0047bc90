use tracing::{info, warn};

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    /// The shared secret clients must send in the `X-API-Key` header.
    /// When this is `None` every request to a protected route is rejected.
    pub api_key: Option<String>,
    /// Port for the application to run on
    pub port: u16,
}

impl Config {
    pub fn new() -> Self {
        let api_key = Self::read_api_key();
        if api_key.is_none() {
            warn!("Did not find a usable API_KEY environment variable. All requests to protected routes will be rejected.");
        }

        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };
        info!("Configured to listen on port: {}", port);

        Self { api_key, port }
    }

    fn read_api_key() -> Option<String> {
        ["API_KEY", "ApiKey"]
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("API_KEY");
        std::env::remove_var("ApiKey");
        std::env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn reads_api_key_and_port() {
        clear_env();
        std::env::set_var("API_KEY", "test-key");
        std::env::set_var("PORT", "8080");

        let config = Config::new();
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.port, 8080);
        clear_env();
    }

    #[test]
    #[serial]
    fn falls_back_to_the_apikey_alias() {
        clear_env();
        std::env::set_var("ApiKey", "alias-key");

        assert_eq!(Config::new().api_key.as_deref(), Some("alias-key"));
        clear_env();
    }

    #[test]
    #[serial]
    fn blank_api_key_is_treated_as_unset() {
        clear_env();
        std::env::set_var("API_KEY", "   ");

        assert!(Config::new().api_key.is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_port_falls_back_to_default() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let config = Config::new();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.api_key.is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn out_of_range_port_falls_back_to_default() {
        clear_env();
        std::env::set_var("PORT", "70000");

        assert_eq!(Config::new().port, DEFAULT_PORT);
        clear_env();
    }
}
