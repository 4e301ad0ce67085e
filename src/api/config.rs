use clap::Args;

/// HTTP server settings, read from flags or `REALRETURN_*` environment variables.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[arg(long, env = "REALRETURN_HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, env = "REALRETURN_PORT", default_value_t = 5000)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
