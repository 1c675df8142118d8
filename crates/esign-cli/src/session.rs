//! One signing session from merchant input to receipt

use crate::{AppConfig, StrokeScript};
use esign_catalog::PlanCatalog;
use esign_core::{ContractForm, FormError, FormState, MerchantField, Receipt, Submitter};
use esign_signature::{FixedHost, SignaturePad, SignaturePayload};

/// Merchant fields and plan as typed on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MerchantInput {
    /// Company name
    pub company_name: String,
    /// Tax id
    pub tax_id: String,
    /// Representative
    pub representative: String,
    /// Phone
    pub phone: String,
    /// Email
    pub email: String,
    /// Plan id; empty leaves the plan unselected
    pub plan_id: String,
}

impl MerchantInput {
    fn fields(&self) -> [(MerchantField, &str); 5] {
        [
            (MerchantField::CompanyName, self.company_name.as_str()),
            (MerchantField::TaxId, self.tax_id.as_str()),
            (MerchantField::Representative, self.representative.as_str()),
            (MerchantField::Phone, self.phone.as_str()),
            (MerchantField::Email, self.email.as_str()),
        ]
    }
}

/// Result of a completed session
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// Frozen receipt
    pub receipt: Receipt,
    /// Submitted signature
    pub signature: Option<SignaturePayload>,
}

/// Form and pad wired together on a fixed-width host
#[derive(Debug)]
pub struct SigningSession {
    form: ContractForm,
    pad: SignaturePad,
}

impl SigningSession {
    /// Mount a pad of `width` and attach it to a fresh form
    #[must_use]
    pub fn new(config: &AppConfig, catalog: PlanCatalog, width: u32) -> Self {
        let mut form = ContractForm::with_config(catalog, config.form.clone());
        let (mut pad, feed) = SignaturePad::with_style(config.pad);
        pad.mount(FixedHost::new(0.0, 0.0, width));
        form.attach_signature_feed(feed);
        Self { form, pad }
    }

    /// Fill the draft, replay the strokes and submit once
    ///
    /// # Errors
    /// Returns the first form error: unknown plan, validation or backend failure.
    pub async fn run<S>(
        &mut self,
        input: &MerchantInput,
        script: &StrokeScript,
        submitter: &S,
    ) -> Result<SessionOutcome, FormError>
    where
        S: Submitter + ?Sized,
    {
        for (field, value) in input.fields() {
            self.form.set_field(field, value)?;
        }
        if !input.plan_id.is_empty() {
            self.form.select_plan(&input.plan_id)?;
        }
        script.replay(&mut self.pad);

        let receipt = self.form.submit(submitter).await?;
        Ok(SessionOutcome {
            receipt,
            signature: self.form.draft().signature.clone(),
        })
    }

    /// Wipe the pad and start the form over
    ///
    /// # Errors
    /// `FormError::SubmissionInProgress` while a submission is pending.
    pub fn restart(&mut self) -> Result<(), FormError> {
        if self.form.state() == FormState::Submitting {
            return Err(FormError::SubmissionInProgress);
        }
        self.pad.clear();
        self.form.restart()
    }

    /// The form
    #[must_use]
    pub fn form(&self) -> &ContractForm {
        &self.form
    }

    /// The pad
    #[must_use]
    pub fn pad(&self) -> &SignaturePad {
        &self.pad
    }
}
