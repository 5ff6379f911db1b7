//! 对象缓存
//!
//! 目前只有进程内的 Moka 实现，用于认证中间件缓存当前用户。
//! 值统一以 JSON 字符串存放。

pub mod moka;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

pub use self::moka::MokaCacheWrapper;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 当前用户的缓存键
pub fn user_key(user_id: i64) -> String {
    format!("user:{user_id}")
}

/// 读取并反序列化，损坏的条目会被清除
pub async fn get_json<T: DeserializeOwned>(cache: &dyn ObjectCache, key: &str) -> Option<T> {
    match cache.get_raw(key).await {
        CacheResult::Found(json) => match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Dropping corrupt cache entry {}: {}", key, e);
                cache.remove(key).await;
                None
            }
        },
        CacheResult::NotFound => None,
    }
}

pub async fn insert_json<T: Serialize>(cache: &dyn ObjectCache, key: String, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => cache.insert_raw(key, json).await,
        Err(e) => tracing::warn!("Failed to serialize cache entry {}: {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{User, UserRole};

    fn cache() -> MokaCacheWrapper {
        MokaCacheWrapper::with_capacity(16, 60)
    }

    #[tokio::test]
    async fn test_json_round_trip_and_remove() {
        let cache = cache();
        let user = User {
            id: 3,
            email: "s@example.com".to_string(),
            password_hash: "hash".to_string(),
            first_name: "Elena".to_string(),
            last_name: "Morozova".to_string(),
            role: UserRole::Student,
            student_group: None,
            department: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        insert_json(&cache, user_key(3), &user).await;
        let cached: User = get_json(&cache, &user_key(3)).await.unwrap();
        assert_eq!(cached.email, "s@example.com");
        // 哈希不进入缓存
        assert!(cached.password_hash.is_empty());

        cache.remove(&user_key(3)).await;
        assert!(get_json::<User>(&cache, &user_key(3)).await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_dropped() {
        let cache = cache();
        cache.insert_raw("k".to_string(), "{not json".to_string()).await;
        assert!(get_json::<User>(&cache, "k").await.is_none());
        assert_eq!(cache.get_raw("k").await, CacheResult::NotFound);
    }
}
