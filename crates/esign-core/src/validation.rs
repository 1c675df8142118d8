//! Submit-time validation
//!
//! Rules run in a fixed order and the first failure wins:
//! 1. a plan is selected
//! 2. a signature is attached
//! 3. company name, tax id and representative are filled
//! 4. phone and e-mail are filled (only with `require_contact_fields`)

use crate::error::ValidationError;
use crate::types::{FormConfig, MerchantField, MerchantFormData};

/// Validate a draft
///
/// # Errors
/// Returns the first failing rule.
pub fn validate(draft: &MerchantFormData, config: &FormConfig) -> Result<(), ValidationError> {
    if !draft.has_plan() {
        return Err(ValidationError::MissingPlan);
    }
    if !draft.has_signature() {
        return Err(ValidationError::MissingSignature);
    }

    let missing = empty_fields(draft, &MerchantField::MERCHANT);
    if !missing.is_empty() {
        return Err(ValidationError::MissingMerchantFields { missing });
    }

    if config.require_contact_fields {
        let missing = empty_fields(draft, &MerchantField::CONTACT);
        if !missing.is_empty() {
            return Err(ValidationError::MissingContactFields { missing });
        }
    }

    Ok(())
}

fn empty_fields(draft: &MerchantFormData, fields: &[MerchantField]) -> Vec<MerchantField> {
    fields
        .iter()
        .copied()
        .filter(|f| draft.field(*f).is_empty())
        .collect()
}
