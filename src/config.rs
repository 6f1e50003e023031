//! Server configuration.
//!
//! Values come from CLI flags, falling back to environment variables:
//! - `TMS_HOST` - Bind address (default: `0.0.0.0`)
//! - `TMS_PORT` - Listen port (default: `8080`)
//! - `TMS_CORS_ORIGINS` - Allowed CORS origins, comma-separated (default: any)

use clap::Args;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "TMS_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port for HTTP API
    #[arg(short, long, env = "TMS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Allowed CORS origins, comma-separated. Unset allows any origin.
    #[arg(long, env = "TMS_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Create a config with specific CORS origins.
    pub fn with_cors_origins(origins: Vec<String>) -> Self {
        Self {
            cors_origins: Some(origins),
            ..Self::default()
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Configured origins with blanks trimmed out.
    pub fn allowed_origins(&self) -> Option<Vec<String>> {
        self.cors_origins.as_ref().map(|origins| {
            origins
                .iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect()
        })
    }
}
