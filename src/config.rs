use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub mail: MailSettings,
    #[serde(default)]
    pub site: SiteSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

/// Transactional email provider settings
#[derive(Debug, Clone, Deserialize)]
pub struct MailSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_mail_base_url")]
    pub base_url: String,
    #[serde(default = "default_mail_from")]
    pub from: String,
    #[serde(default = "default_mail_to")]
    pub to: String,
    #[serde(default = "default_mail_timeout")]
    pub timeout_secs: u64,
}

impl MailSettings {
    /// True when an API key is present; without one every send fails.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_mail_base_url(),
            from: default_mail_from(),
            to: default_mail_to(),
            timeout_secs: default_mail_timeout(),
        }
    }
}

fn default_mail_base_url() -> String { "https://api.resend.com".to_string() }
fn default_mail_from() -> String { "Return Contact Form <contact@studioreturn.co>".to_string() }
fn default_mail_to() -> String { "hello@studioreturn.co".to_string() }
fn default_mail_timeout() -> u64 { 30 }

/// Public contact details shown across the site
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_site_email")]
    pub email: String,
    #[serde(default = "default_site_phone")]
    pub phone: String,
    #[serde(default = "default_site_address")]
    pub address: String,
}

impl SiteSettings {
    pub fn google_maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(&self.address)
        )
    }

    /// `tel:` link with parentheses and whitespace stripped
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|&c| !matches!(c, '(' | ')') && !c.is_whitespace())
            .collect();
        format!("tel:{}", digits)
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            email: default_site_email(),
            phone: default_site_phone(),
            address: default_site_address(),
        }
    }
}

fn default_site_email() -> String { "hello@studioreturn.co".to_string() }
fn default_site_phone() -> String { "(+44) 07707 683220".to_string() }
fn default_site_address() -> String {
    "Studio 51, Spike Island, 133 Cumberland Road, Bristol, BS1 6UX".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STUDIO_)
    /// 5. `RESEND_API_KEY`, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STUDIO__SERVER__PORT -> server.port
            .add_source(studio_environment())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(studio_environment())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }
}

fn studio_environment() -> Environment {
    Environment::with_prefix("STUDIO")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Hosting platforms inject the provider key under its bare name.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = std::env::var("RESEND_API_KEY") {
        builder = builder.set_override("mail.api_key", api_key)?;
    }

    builder.build()
}
