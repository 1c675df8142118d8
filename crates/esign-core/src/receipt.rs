//! Views computed from the draft
//!
//! `ContractSummary` is the live panel next to the signature surface.
//! `Receipt` is the read-only record shown once the backend accepts.

use crate::submission::SubmissionAck;
use crate::types::MerchantFormData;
use chrono::{DateTime, NaiveDate, Utc};
use esign_catalog::PlanCatalog;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Platform party of every contract (甲方)
pub const PARTY_A: &str = "平台服務股份有限公司";

const NOT_FILLED: &str = "(尚未填寫)";
const NOT_SELECTED: &str = "(尚未選擇)";

/// Live contract summary shown while editing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractSummary {
    /// Signing date
    pub date: NaiveDate,
    /// Platform party
    pub party_a: &'static str,
    /// Merchant party, `None` until the company name is filled
    pub party_b: Option<String>,
    /// Selected plan's display name
    pub plan_name: Option<String>,
}

impl ContractSummary {
    /// Build summary of a draft on the given date
    #[must_use]
    pub fn new(draft: &MerchantFormData, catalog: &PlanCatalog, date: NaiveDate) -> Self {
        Self {
            date,
            party_a: PARTY_A,
            party_b: Some(draft.company_name.clone()).filter(|s| !s.is_empty()),
            plan_name: catalog.name_of(&draft.selected_plan_id).map(str::to_string),
        }
    }

    /// Date as shown in the zh-TW locale, e.g. `2025/3/7`
    #[must_use]
    pub fn date_display(&self) -> String {
        self.date.format("%Y/%-m/%-d").to_string()
    }

    /// Merchant party or the not-filled marker
    #[must_use]
    pub fn party_b_display(&self) -> &str {
        self.party_b.as_deref().unwrap_or(NOT_FILLED)
    }

    /// Plan name or the not-selected marker
    #[must_use]
    pub fn plan_display(&self) -> &str {
        self.plan_name.as_deref().unwrap_or(NOT_SELECTED)
    }
}

impl fmt::Display for ContractSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "簽約摘要")?;
        writeln!(f, "日期：{}", self.date_display())?;
        writeln!(f, "甲方：{}", self.party_a)?;
        writeln!(f, "乙方：{}", self.party_b_display())?;
        write!(f, "選擇方案：{}", self.plan_display())
    }
}

/// Frozen record of an accepted contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Company or trade name
    pub company_name: String,
    /// Unified business number
    pub tax_id: String,
    /// Legal representative
    pub representative: String,
    /// Where the contract copy was sent
    pub email: String,
    /// Selected plan id
    pub plan_id: String,
    /// Selected plan's display name
    pub plan_name: String,
    /// Backend reference
    pub reference: Uuid,
    /// Backend acceptance time
    pub accepted_at: DateTime<Utc>,
    /// SHA-256 fingerprint of the signature payload
    pub signature_fingerprint: Option<String>,
}

impl Receipt {
    /// Build receipt from the frozen draft
    #[must_use]
    pub fn new(draft: &MerchantFormData, catalog: &PlanCatalog, ack: &SubmissionAck) -> Self {
        Self {
            company_name: draft.company_name.clone(),
            tax_id: draft.tax_id.clone(),
            representative: draft.representative.clone(),
            email: draft.email.clone(),
            plan_id: draft.selected_plan_id.clone(),
            plan_name: catalog
                .name_of(&draft.selected_plan_id)
                .unwrap_or_default()
                .to_string(),
            reference: ack.reference,
            accepted_at: ack.accepted_at,
            signature_fingerprint: draft.signature.as_ref().map(|s| s.fingerprint()),
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "簽約成功！")?;
        writeln!(f, "感謝您選擇與我們合作。")?;
        writeln!(f, "合約副本已發送至您的電子信箱：{}", self.email)?;
        writeln!(f)?;
        writeln!(f, "合約摘要")?;
        writeln!(f, "商家名稱：{}", self.company_name)?;
        writeln!(f, "統一編號：{}", self.tax_id)?;
        writeln!(f, "選擇方案：{}", self.plan_name)?;
        write!(f, "合約編號：{}", self.reference)
    }
}
