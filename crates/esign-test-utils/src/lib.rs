//! Testing utilities for the e-sign workspace
//!
//! Shared fixtures: filled drafts, a mounted pad with a drawn signature and
//! a scripted backend that records what it received.

#![allow(missing_docs)]

use async_trait::async_trait;
use esign_catalog::PlanCatalog;
use esign_core::{
    ContractForm, MerchantField, MerchantFormData, SubmissionAck, SubmissionError, Submitter,
};
use esign_signature::{FixedHost, PointerEvent, SignatureFeed, SignaturePad, SignaturePayload};
use std::collections::VecDeque;
use tokio::sync::Mutex;

pub const COMPANY: &str = "好食餐飲有限公司";
pub const TAX_ID: &str = "12345678";
pub const REPRESENTATIVE: &str = "王小明";
pub const PHONE: &str = "0912-345-678";
pub const EMAIL: &str = "owner@example.com";

/// A draft with every field filled, plan `economic`, and a signature
pub fn complete_draft() -> MerchantFormData {
    MerchantFormData {
        company_name: COMPANY.to_string(),
        tax_id: TAX_ID.to_string(),
        representative: REPRESENTATIVE.to_string(),
        phone: PHONE.to_string(),
        email: EMAIL.to_string(),
        selected_plan_id: "economic".to_string(),
        signature: Some(sample_signature()),
    }
}

/// Payload of a short diagonal stroke on a 120x200 surface
pub fn sample_signature() -> SignaturePayload {
    let (mut pad, mut feed) = mounted_pad(120);
    draw_stroke(&mut pad, &[(10.0, 10.0), (60.0, 90.0), (110.0, 40.0)]);
    feed.take_update()
        .flatten()
        .expect("stroke end must publish a payload")
}

/// Pad mounted at the viewport origin, mount-time update already drained
pub fn mounted_pad(width: u32) -> (SignaturePad, SignatureFeed) {
    let (mut pad, mut feed) = SignaturePad::new();
    pad.mount(FixedHost::new(0.0, 0.0, width));
    let _ = feed.take_update();
    (pad, feed)
}

/// Replay one stroke of client points
pub fn draw_stroke(pad: &mut SignaturePad, points: &[(f32, f32)]) {
    let Some((&(x, y), rest)) = points.split_first() else {
        return;
    };
    pad.begin(&mut PointerEvent::mouse(x, y));
    for &(x, y) in rest {
        pad.extend(&mut PointerEvent::mouse(x, y));
    }
    pad.end();
}

/// Fill every text field
pub fn fill_all_fields(form: &mut ContractForm) {
    let values = [COMPANY, TAX_ID, REPRESENTATIVE, PHONE, EMAIL];
    for (field, value) in MerchantField::ALL.into_iter().zip(values) {
        form.set_field(field, value).expect("form must be editable");
    }
}

/// Form over the built-in catalog
pub fn builtin_form() -> ContractForm {
    ContractForm::new(PlanCatalog::builtin())
}

/// Backend that replays queued outcomes and records every contract
#[derive(Debug, Default)]
pub struct ScriptedSubmitter {
    outcomes: Mutex<VecDeque<Result<SubmissionAck, SubmissionError>>>,
    received: Mutex<Vec<MerchantFormData>>,
}

impl ScriptedSubmitter {
    pub fn new(outcomes: Vec<Result<SubmissionAck, SubmissionError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::new(vec![Ok(SubmissionAck::new())])
    }

    pub async fn received(&self) -> Vec<MerchantFormData> {
        self.received.lock().await.clone()
    }
}

#[async_trait]
impl Submitter for ScriptedSubmitter {
    async fn submit(&self, contract: &MerchantFormData) -> Result<SubmissionAck, SubmissionError> {
        self.received.lock().await.push(contract.clone());
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(SubmissionError::Unavailable("no scripted outcome".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_signature_is_png() {
        let png = sample_signature().png_bytes().unwrap();
        assert!(png.starts_with(b"\x89PNG"));
    }

    #[test]
    fn fill_all_fields_matches_complete_draft() {
        let mut form = builtin_form();
        fill_all_fields(&mut form);
        let draft = complete_draft();
        for field in MerchantField::ALL {
            assert_eq!(form.draft().field(field), draft.field(field));
        }
    }
}
