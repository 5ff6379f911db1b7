use super::entities::{Attestation, AttestationType};
use crate::models::common::{Merge, Patch};
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "attestation.ts")]
pub struct CreateAttestationRequest {
    pub student_id: i64,
    pub subject_id: i64,
    #[serde(rename = "type")]
    pub kind: AttestationType,
    pub passed: bool,
    pub comment: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "attestation.ts")]
pub struct AttestationPatch {
    #[serde(default)]
    #[ts(as = "Option<i64>", optional)]
    pub subject_id: Patch<i64>,
    #[serde(default, rename = "type")]
    #[ts(as = "Option<AttestationType>", optional)]
    pub kind: Patch<AttestationType>,
    #[serde(default)]
    #[ts(as = "Option<bool>", optional)]
    pub passed: Patch<bool>,
    #[serde(default)]
    #[ts(as = "Option<String>", optional = nullable)]
    pub comment: Patch<Option<String>>,
}

impl Merge<Attestation> for AttestationPatch {
    fn merge_into(self, attestation: &mut Attestation) {
        self.subject_id.apply_to(&mut attestation.subject_id);
        self.kind.apply_to(&mut attestation.kind);
        self.passed.apply_to(&mut attestation.passed);
        self.comment.apply_to(&mut attestation.comment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_type_field() {
        let patch: AttestationPatch =
            serde_json::from_str(r#"{"type": "final", "comment": null}"#).unwrap();
        assert_eq!(patch.kind, Patch::Set(AttestationType::Final));
        assert_eq!(patch.comment, Patch::Set(None));
        assert_eq!(patch.passed, Patch::Unchanged);
    }
}
