//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File, Map};
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "PII_GATEWAY";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `PII_GATEWAY_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `PII_GATEWAY_SERVER__HOST=127.0.0.1`
/// - `PII_GATEWAY_SERVER__PORT=8080`
/// - `PII_GATEWAY_LOG__LEVEL=debug`
/// - `PII_GATEWAY_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with_env(config_path, None)
}

/// `env` 为 None 时读取进程环境变量，否则使用给定的变量表
fn load_config_with_env(
    config_path: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: PII_GATEWAY_SERVER__PORT=8080
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.host.is_empty() {
        return Err(ConfigError::ValidationError(
            "Server host cannot be empty".to_string(),
        ));
    }

    if config.log.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Log level cannot be empty".to_string(),
        ));
    }

    EnvFilter::try_new(&config.log.level).map_err(|e| {
        ConfigError::ValidationError(format!("Invalid log level '{}': {}", config.log.level, e))
    })?;

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("Log Format: {}", if config.log.json { "json" } else { "text" });
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_error_for_empty_host() {
        let mut config = AppConfig::default();
        config.server.host = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_accepts_filter_directives() {
        let mut config = AppConfig::default();
        config.log.level = "info,pii_gateway=debug".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = load_config_with_env(None, env(&[])).unwrap();
        assert_eq!(config.server.addr(), "0.0.0.0:3000");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = write_config("[server]\nport = 9000\n\n[log]\nlevel = \"debug\"\n");
        let config = load_config_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("[server]\nport = 9000\n");
        let config = load_config_with_env(
            Some(file.path()),
            env(&[
                ("PII_GATEWAY_SERVER__PORT", "9100"),
                ("PII_GATEWAY_LOG__JSON", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(config.server.port, 9100);
        assert!(config.log.json);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = load_config_with_env(
            Some(Path::new("/nonexistent/pii-gateway.toml")),
            env(&[]),
        );
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_zero_port_from_env_fails_validation() {
        let result = load_config_with_env(None, env(&[("PII_GATEWAY_SERVER__PORT", "0")]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
