use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub app_name: String,
    /// Optional first-run administrator account, created at startup when no
    /// user with that email exists yet.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    pub admin_nickname: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Ok(Self {
            host: cfg.get_string("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: cfg.get_int("PORT").unwrap_or(3000) as u16,
            environment: cfg
                .get_string("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            app_name: cfg
                .get_string("APP_NAME")
                .unwrap_or_else(|_| "lounge-admin-api".to_string()),
            admin_email: cfg.get_string("ADMIN_EMAIL").ok(),
            admin_password: cfg.get_string("ADMIN_PASSWORD").ok(),
            admin_nickname: cfg.get_string("ADMIN_NICKNAME").ok(),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
