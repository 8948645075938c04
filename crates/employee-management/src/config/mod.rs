use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::employees::{CourseId, EmployeeServiceConfig, JobLevel};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub employees: EmployeeServiceConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            employees: load_employee_rules()?,
        })
    }
}

fn load_employee_rules() -> Result<EmployeeServiceConfig, ConfigError> {
    let mut rules = EmployeeServiceConfig::default();

    if let Ok(raw) = env::var("EMPLOYEE_OBLIGATORY_COURSES") {
        rules.obligatory_courses = raw
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| {
                value
                    .parse::<CourseId>()
                    .map_err(|source| ConfigError::InvalidCourseId {
                        value: value.to_string(),
                        source,
                    })
            })
            .collect::<Result<_, _>>()?;
    }

    for level in JobLevel::ALL {
        let suffix = level.label().to_ascii_uppercase();
        let bounds = rules.raise_policy.bounds_for_mut(level);
        if let Some(minimum) = raise_bound(&format!("RAISE_MINIMUM_{suffix}"))? {
            bounds.minimum = minimum;
        }
        if let Some(maximum) = raise_bound(&format!("RAISE_MAXIMUM_{suffix}"))? {
            bounds.maximum = maximum;
        }
        if bounds.minimum == 0 || bounds.minimum > bounds.maximum {
            return Err(ConfigError::InvalidRaiseRange { level });
        }
    }

    Ok(rules)
}

fn raise_bound(variable: &str) -> Result<Option<u32>, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidRaiseBound {
                variable: variable.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidCourseId {
        value: String,
        source: uuid::Error,
    },
    InvalidRaiseBound {
        variable: String,
    },
    InvalidRaiseRange {
        level: JobLevel,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidCourseId { value, .. } => write!(
                f,
                "EMPLOYEE_OBLIGATORY_COURSES entry '{}' is not a valid course id",
                value
            ),
            ConfigError::InvalidRaiseBound { variable } => {
                write!(f, "{variable} must be a non-negative whole amount")
            }
            ConfigError::InvalidRaiseRange { level } => write!(
                f,
                "{} raise minimum must be positive and not exceed its maximum",
                level.label()
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidCourseId { source, .. } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidRaiseBound { .. }
            | ConfigError::InvalidRaiseRange { .. } => None,
        }
    }
}
