use std::env;

use chrono::{FixedOffset, NaiveTime};

use crate::features::archive::window::ReferenceZone;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub admin: AdminConfig,
    pub archive: ArchiveConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Shared secret for admin actions on izin (approve, delete, token check)
#[derive(Debug, Clone, Default)]
pub struct AdminConfig {
    /// `None` when `ADMIN_ACTION_TOKEN` is unset or blank
    pub action_token: Option<String>,
}

/// Reference timezone and cutoff used by the Friday archive sweep
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    pub utc_offset_secs: i32,
    pub cutoff_hour: u32,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            admin: AdminConfig::from_env()?,
            archive: ArchiveConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, String> {
        let action_token = env::var("ADMIN_ACTION_TOKEN")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self { action_token })
    }
}

impl ArchiveConfig {
    // Asia/Jakarta, no DST
    const DEFAULT_UTC_OFFSET_SECS: i32 = 7 * 3600;
    const DEFAULT_CUTOFF_HOUR: u32 = 15;

    pub fn from_env() -> Result<Self, String> {
        let utc_offset_secs = env::var("ARCHIVE_UTC_OFFSET_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_UTC_OFFSET_SECS.to_string())
            .parse::<i32>()
            .map_err(|_| "ARCHIVE_UTC_OFFSET_SECS must be a valid number".to_string())?;

        let cutoff_hour = env::var("ARCHIVE_CUTOFF_HOUR")
            .unwrap_or_else(|_| Self::DEFAULT_CUTOFF_HOUR.to_string())
            .parse::<u32>()
            .map_err(|_| "ARCHIVE_CUTOFF_HOUR must be a valid number".to_string())?;

        let config = Self {
            utc_offset_secs,
            cutoff_hour,
        };
        config.reference_zone()?;
        Ok(config)
    }

    pub fn reference_zone(&self) -> Result<ReferenceZone, String> {
        let offset = FixedOffset::east_opt(self.utc_offset_secs).ok_or_else(|| {
            "ARCHIVE_UTC_OFFSET_SECS must be within -86399..=86399".to_string()
        })?;
        let cutoff = NaiveTime::from_hms_opt(self.cutoff_hour, 0, 0)
            .ok_or_else(|| "ARCHIVE_CUTOFF_HOUR must be between 0 and 23".to_string())?;

        Ok(ReferenceZone::new(offset, cutoff))
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Pramuka Izin API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the Pramuka izin dashboard".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_archive_config_is_jakarta_three_pm() {
        let config = ArchiveConfig {
            utc_offset_secs: ArchiveConfig::DEFAULT_UTC_OFFSET_SECS,
            cutoff_hour: ArchiveConfig::DEFAULT_CUTOFF_HOUR,
        };

        assert_eq!(config.reference_zone().unwrap(), ReferenceZone::jakarta());
    }

    #[test]
    fn test_archive_config_rejects_bad_cutoff() {
        let config = ArchiveConfig {
            utc_offset_secs: 0,
            cutoff_hour: 24,
        };

        assert!(config.reference_zone().is_err());
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }
}
