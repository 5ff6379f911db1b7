//! 局部更新
//!
//! `Patch<T>` 区分三种输入：
//! - 字段缺省 → `Patch::Unchanged`，不修改
//! - 字段为值 → `Patch::Set(v)`
//! - 字段为 `null` 且 `T = Option<_>` → `Patch::Set(None)`，清空
//!
//! 请求结构体的每个 `Patch` 字段都需要 `#[serde(default)]`。

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unchanged,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unchanged
    }
}

impl<T> Patch<T> {
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(v) => Some(v),
            Patch::Unchanged => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Patch::Set(v) => Patch::Set(f(v)),
            Patch::Unchanged => Patch::Unchanged,
        }
    }

    /// 写入目标字段，返回是否发生写入
    pub fn apply_to(self, slot: &mut T) -> bool {
        match self {
            Patch::Set(v) => {
                *slot = v;
                true
            }
            Patch::Unchanged => false,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Set)
    }
}

/// 把一组局部更新合并到目标实体上
///
/// 每种资源的 `*Patch` 请求只实现这一处合并逻辑，存储层读出实体、合并、写回。
pub trait Merge<Target> {
    fn merge_into(self, target: &mut Target);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default)]
        value: Patch<i32>,
        #[serde(default)]
        note: Patch<Option<String>>,
    }

    #[test]
    fn test_omitted_is_unchanged() {
        let s: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(s.value, Patch::Unchanged);
        assert_eq!(s.note, Patch::Unchanged);
    }

    #[test]
    fn test_null_clears_optional_field() {
        let s: Sample = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(s.note, Patch::Set(None));

        let mut note = Some("old".to_string());
        assert!(s.note.apply_to(&mut note));
        assert_eq!(note, None);
    }

    #[test]
    fn test_value_is_set() {
        let s: Sample = serde_json::from_str(r#"{"value": 4, "note": "late"}"#).unwrap();
        assert_eq!(s.value, Patch::Set(4));
        assert_eq!(s.note, Patch::Set(Some("late".to_string())));
    }

    #[test]
    fn test_null_on_required_field_is_rejected() {
        assert!(serde_json::from_str::<Sample>(r#"{"value": null}"#).is_err());
    }

    #[test]
    fn test_unchanged_leaves_slot() {
        let mut value = 3;
        assert!(!Patch::<i32>::Unchanged.apply_to(&mut value));
        assert_eq!(value, 3);
    }
}
