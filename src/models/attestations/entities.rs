use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考核轮次
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "attestation.ts")]
pub enum AttestationType {
    First,
    Second,
    Final,
}

impl AttestationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttestationType::First => "first",
            AttestationType::Second => "second",
            AttestationType::Final => "final",
        }
    }
}

impl<'de> Deserialize<'de> for AttestationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的考核类型: '{s}'. 支持的类型: first, second, final"
            ))
        })
    }
}

impl std::fmt::Display for AttestationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AttestationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(AttestationType::First),
            "second" => Ok(AttestationType::Second),
            "final" => Ok(AttestationType::Final),
            _ => Err(format!("Invalid attestation type: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "attestation.ts")]
pub struct Attestation {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    #[serde(rename = "type")]
    pub kind: AttestationType,
    pub passed: bool,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serialized_as_type() {
        let attestation = Attestation {
            id: 1,
            student_id: 1,
            subject_id: 1,
            kind: AttestationType::Final,
            passed: true,
            comment: None,
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&attestation).unwrap();
        assert_eq!(json["type"], "final");
        assert!(json.get("kind").is_none());
        assert_eq!("SECOND".parse::<AttestationType>(), Ok(AttestationType::Second));
    }
}
