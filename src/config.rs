/// Configuration management for the related-content service
///
/// Configuration is loaded from environment variables with development
/// defaults. Production deployments must set the guarded values explicitly.
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Site-level presentation settings
    pub site: SiteConfig,
    /// Related-posts query bounds
    pub related: RelatedConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Site-level presentation settings used by the response formatter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL for canonical permalinks
    pub base_url: String,
    /// Site timezone (IANA name) used when rendering dates
    pub timezone: Tz,
    /// Default date format template when the request omits one
    pub date_format: String,
    /// Word cap applied to derived excerpts
    pub excerpt_words: usize,
    /// Pixel size requested for author avatars
    pub avatar_size: u32,
}

/// Bounds for the related-posts query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedConfig {
    /// Limit applied when the request omits one
    pub default_limit: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("RELATED_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("RELATED_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8087),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/content".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            site: {
                let base_url = match std::env::var("SITE_BASE_URL") {
                    Ok(value) => value.trim_end_matches('/').to_string(),
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("SITE_BASE_URL must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:8080".to_string(),
                };

                let tz_name =
                    std::env::var("SITE_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());
                let timezone: Tz = tz_name
                    .parse()
                    .map_err(|_| format!("SITE_TIMEZONE '{}' is not a valid IANA name", tz_name))?;

                SiteConfig {
                    base_url,
                    timezone,
                    date_format: std::env::var("SITE_DATE_FORMAT")
                        .unwrap_or_else(|_| "F j, Y".to_string()),
                    excerpt_words: std::env::var("SITE_EXCERPT_WORDS")
                        .ok()
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(25),
                    avatar_size: std::env::var("SITE_AVATAR_SIZE")
                        .ok()
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(80),
                }
            },
            related: RelatedConfig {
                default_limit: std::env::var("RELATED_DEFAULT_LIMIT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(6),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Environment-free load picks development defaults
        let config = Config::from_env().expect("default config should load");
        assert_eq!(config.related.default_limit, 6);
        assert_eq!(config.site.excerpt_words, 25);
        assert_eq!(config.site.avatar_size, 80);
        assert_eq!(config.site.date_format, "F j, Y");
    }
}
