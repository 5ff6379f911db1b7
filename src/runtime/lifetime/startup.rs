use crate::cache::{MokaCacheWrapper, ObjectCache};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::lab_submissions::repair_submissions;
use crate::storage::{SeaOrmStorage, Storage};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::seed::seed_if_empty;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 准备服务器启动的上下文
///
/// 顺序：连接数据库并迁移，修复越界提交，空库写入初始数据，创建缓存。
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // 可能已由其他组件安装，重复安装的错误可以忽略
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = AppConfig::get();
    if config.jwt.secret_generated {
        warn!("==========================================================");
        warn!("  JWT_SECRET NOT SET - USING A RANDOM PER-PROCESS SECRET");
        warn!("  Issued tokens become invalid when the server restarts");
        warn!("==========================================================");
    }

    let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::new_async().await?);
    warn!("Storage backend initialized and migrations completed");

    if config.seed.repair_on_startup {
        let report = repair_submissions(storage.as_ref()).await?;
        if !report.repaired.is_empty() {
            warn!(
                "Repaired {} of {} lab submissions exceeding their maximum",
                report.repaired.len(),
                report.scanned
            );
        }
    } else {
        debug!("Startup submission repair disabled");
    }

    if seed_if_empty(storage.as_ref(), &config.seed).await? {
        info!("Initial data seeded");
    }

    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new());
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}
