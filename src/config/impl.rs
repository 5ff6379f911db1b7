use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use rand::Rng;
use rand::distr::Alphanumeric;

use super::{AppConfig, JwtConfig};

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::with_defaults(Config::builder())?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("PORTAL")
                    .separator("_")
                    .try_parsing(true),
            );

        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        let production = app_config.is_production();
        app_config.jwt.resolve_secret(production)?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    // 缺省值，配置文件可以只写需要覆盖的项
    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("app.system_name", "Student Portal")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 8)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 30)?
            .set_default("server.limits.max_payload_size", 1_048_576)?
            .set_default("jwt.access_token_expiry", 60)?
            .set_default("jwt.refresh_token_expiry", 7)?
            .set_default("database.url", "sqlite://student_portal.db?mode=rwc")?
            .set_default("database.pool_size", 10)?
            .set_default("database.timeout", 30)?
            .set_default("cache.default_ttl", 3600)?
            .set_default("cache.max_capacity", 10_000)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("cors.max_age", 3600)?
            .set_default("argon2.memory_cost", 19_456)?
            .set_default("argon2.time_cost", 2)?
            .set_default("argon2.parallelism", 1)?
            .set_default("seed.demo_data", false)?
            .set_default("seed.repair_on_startup", true)?
            .set_default("seed.admin_email", "admin@example.com")
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// 签名密钥的最小字节数
pub const MIN_JWT_SECRET_LEN: usize = 32;

const GENERATED_SECRET_LEN: usize = 64;

impl JwtConfig {
    /// 校验签名密钥
    ///
    /// 未配置时生产环境直接失败，其他环境生成仅本进程有效的随机密钥，
    /// 重启后已签发的 token 全部失效。配置了但过短同样失败。
    pub fn resolve_secret(&mut self, production: bool) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            if production {
                return Err(ConfigError::Message(
                    "jwt.secret must be set (JWT_SECRET) in production".to_string(),
                ));
            }
            self.secret = rand::rng()
                .sample_iter(&Alphanumeric)
                .take(GENERATED_SECRET_LEN)
                .map(char::from)
                .collect();
            self.secret_generated = true;
            return Ok(());
        }

        if self.secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {MIN_JWT_SECRET_LEN} bytes"
            )));
        }
        self.secret_generated = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: AppConfig = AppConfig::with_defaults(Config::builder())
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.seed.repair_on_startup);
        assert!(!config.seed.demo_data);
        assert!(config.is_development());
        assert_eq!(config.server_bind_address(), "127.0.0.1:8080");
        assert!(config.jwt.secret.is_empty());
    }

    fn jwt(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            secret_generated: false,
            access_token_expiry: 60,
            refresh_token_expiry: 7,
        }
    }

    #[test]
    fn test_missing_secret_fails_in_production() {
        assert!(jwt("").resolve_secret(true).is_err());
    }

    #[test]
    fn test_missing_secret_generated_outside_production() {
        let mut first = jwt("");
        first.resolve_secret(false).unwrap();
        assert!(first.secret_generated);
        assert_eq!(first.secret.len(), GENERATED_SECRET_LEN);

        let mut second = jwt("");
        second.resolve_secret(false).unwrap();
        assert_ne!(first.secret, second.secret);
    }

    #[test]
    fn test_short_secret_rejected() {
        assert!(jwt("change-me-in-production").resolve_secret(false).is_err());
        assert!(jwt("change-me-in-production").resolve_secret(true).is_err());

        let mut configured = jwt(&"k".repeat(MIN_JWT_SECRET_LEN));
        configured.resolve_secret(true).unwrap();
        assert!(!configured.secret_generated);
    }
}
