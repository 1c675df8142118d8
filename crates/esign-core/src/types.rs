//! Contract draft and controller configuration

use crate::error::FormError;
use esign_signature::SignaturePayload;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The merchant's contract draft
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantFormData {
    /// Company or trade name
    pub company_name: String,
    /// Unified business number
    pub tax_id: String,
    /// Legal representative
    pub representative: String,
    /// Contact phone
    pub phone: String,
    /// Contact e-mail, receives the contract copy
    pub email: String,
    /// Selected plan id, empty until chosen
    pub selected_plan_id: String,
    /// Exported signature, `None` until a stroke ends
    pub signature: Option<SignaturePayload>,
}

impl MerchantFormData {
    /// Create empty draft
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a text field
    #[must_use]
    pub fn field(&self, field: MerchantField) -> &str {
        match field {
            MerchantField::CompanyName => &self.company_name,
            MerchantField::TaxId => &self.tax_id,
            MerchantField::Representative => &self.representative,
            MerchantField::Phone => &self.phone,
            MerchantField::Email => &self.email,
        }
    }

    pub(crate) fn field_mut(&mut self, field: MerchantField) -> &mut String {
        match field {
            MerchantField::CompanyName => &mut self.company_name,
            MerchantField::TaxId => &mut self.tax_id,
            MerchantField::Representative => &mut self.representative,
            MerchantField::Phone => &mut self.phone,
            MerchantField::Email => &mut self.email,
        }
    }

    /// Check if a plan is selected
    #[inline]
    #[must_use]
    pub fn has_plan(&self) -> bool {
        !self.selected_plan_id.is_empty()
    }

    /// Check if a signature is attached
    #[inline]
    #[must_use]
    pub fn has_signature(&self) -> bool {
        self.signature.is_some()
    }
}

/// Text fields of the merchant section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MerchantField {
    /// 公司/商號名稱
    CompanyName,
    /// 統一編號
    TaxId,
    /// 代表人姓名
    Representative,
    /// 聯絡電話
    Phone,
    /// 電子信箱
    Email,
}

impl MerchantField {
    /// All fields in form order
    pub const ALL: [MerchantField; 5] = [
        Self::CompanyName,
        Self::TaxId,
        Self::Representative,
        Self::Phone,
        Self::Email,
    ];

    /// Fields the submit gate always checks
    pub const MERCHANT: [MerchantField; 3] =
        [Self::CompanyName, Self::TaxId, Self::Representative];

    /// Contact fields, checked only when configured
    pub const CONTACT: [MerchantField; 2] = [Self::Phone, Self::Email];

    /// Input name (`companyName`, `taxId`, ...)
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::TaxId => "taxId",
            Self::Representative => "representative",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Form label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "公司/商號名稱",
            Self::TaxId => "統一編號",
            Self::Representative => "代表人姓名",
            Self::Phone => "聯絡電話",
            Self::Email => "電子信箱",
        }
    }
}

impl fmt::Display for MerchantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MerchantField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Also require phone and e-mail at submit time
    pub require_contact_fields: bool,
    /// Input length limit of the tax id field, in characters
    pub tax_id_max_len: usize,
}

impl FormConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With contact-field enforcement
    #[inline]
    #[must_use]
    pub fn with_contact_fields_required(mut self, required: bool) -> Self {
        self.require_contact_fields = required;
        self
    }

    /// With tax id length limit
    #[inline]
    #[must_use]
    pub fn with_tax_id_max_len(mut self, max: usize) -> Self {
        self.tax_id_max_len = max;
        self
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            require_contact_fields: false,
            tax_id_max_len: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        for field in MerchantField::ALL {
            assert_eq!(field.name().parse::<MerchantField>().unwrap(), field);
        }
        assert!(matches!(
            "fax".parse::<MerchantField>(),
            Err(FormError::UnknownField(name)) if name == "fax"
        ));
    }

    #[test]
    fn field_accessors() {
        let mut draft = MerchantFormData::new();
        *draft.field_mut(MerchantField::Email) = "a@b.tw".to_string();
        assert_eq!(draft.field(MerchantField::Email), "a@b.tw");
        assert_eq!(draft.email, "a@b.tw");
    }

    #[test]
    fn draft_serializes_camel_case() {
        let draft = MerchantFormData {
            selected_plan_id: "economic".to_string(),
            ..MerchantFormData::default()
        };
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["selectedPlanId"], "economic");
        assert!(json["signature"].is_null());
        assert!(json.get("companyName").is_some());
    }

    #[test]
    fn config_defaults() {
        let config = FormConfig::default();
        assert!(!config.require_contact_fields);
        assert_eq!(config.tax_id_max_len, 8);

        let config = FormConfig::new().with_contact_fields_required(true);
        assert!(config.require_contact_fields);
    }

    #[test]
    fn draft_rejects_non_png_signature() {
        let json = r#"{
            "companyName": "", "taxId": "", "representative": "", "phone": "",
            "email": "", "selectedPlanId": "", "signature": "not a data url"
        }"#;
        assert!(serde_json::from_str::<MerchantFormData>(json).is_err());
    }
}
