//! The contract form controller
//!
//! States and transitions:
//!
//! ```text
//! Editing --begin_submit (valid)--> Submitting --accepted--> Submitted
//!    ^  \--begin_submit (invalid): error slot set       |
//!    \---------------------------- failed --------------/
//! ```
//!
//! The draft only changes while editing. `Submitted` is terminal until
//! `restart` begins a new session.

use crate::error::{FormError, SubmissionError};
use crate::receipt::{ContractSummary, Receipt};
use crate::submission::{SubmissionAck, Submitter};
use crate::types::{FormConfig, MerchantField, MerchantFormData};
use crate::validation::validate;
use esign_catalog::{PlanCatalog, PlanOption};
use esign_signature::{SignatureFeed, SignaturePayload};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Submit button label while editing
pub const SUBMIT_LABEL: &str = "確認簽署並送出";

/// Submit button label while a submission is pending
pub const SUBMITTING_LABEL: &str = "處理中...";

/// Lifecycle state of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    /// Accepting edits
    Editing,
    /// Waiting on the backend
    Submitting,
    /// Accepted; draft frozen
    Submitted,
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
        })
    }
}

/// Contract form controller
///
/// Holds the single draft of one signing session together with the one
/// visible error, if any.
#[derive(Debug)]
pub struct ContractForm {
    catalog: PlanCatalog,
    config: FormConfig,
    draft: MerchantFormData,
    state: FormState,
    error: Option<FormError>,
    receipt: Option<Receipt>,
    signature_feed: Option<SignatureFeed>,
}

impl ContractForm {
    /// Create form over a catalog with default configuration
    #[inline]
    #[must_use]
    pub fn new(catalog: PlanCatalog) -> Self {
        Self::with_config(catalog, FormConfig::default())
    }

    /// Create form with configuration
    #[must_use]
    pub fn with_config(catalog: PlanCatalog, config: FormConfig) -> Self {
        Self {
            catalog,
            config,
            draft: MerchantFormData::new(),
            state: FormState::Editing,
            error: None,
            receipt: None,
            signature_feed: None,
        }
    }

    /// Subscribe to a capture surface's payload feed
    pub fn attach_signature_feed(&mut self, feed: SignatureFeed) {
        self.signature_feed = Some(feed);
    }

    /// Update a text field
    ///
    /// The tax id is cut to the configured input length.
    ///
    /// # Errors
    /// `FormError::Frozen` outside editing.
    pub fn set_field(
        &mut self,
        field: MerchantField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.ensure_editable()?;

        let mut value = value.into();
        if field == MerchantField::TaxId {
            value = value.chars().take(self.config.tax_id_max_len).collect();
        }
        tracing::trace!(field = %field, "field updated");
        *self.draft.field_mut(field) = value;
        Ok(())
    }

    /// Select a plan and clear the visible error
    ///
    /// # Errors
    /// - `FormError::Frozen` outside editing
    /// - `FormError::UnknownPlan` if the id is not in the catalog
    pub fn select_plan(&mut self, plan_id: &str) -> Result<(), FormError> {
        self.ensure_editable()?;
        if !self.catalog.contains(plan_id) {
            return Err(FormError::UnknownPlan(plan_id.to_string()));
        }

        self.draft.selected_plan_id = plan_id.to_string();
        self.error = None;
        tracing::debug!(plan = plan_id, "plan selected");
        Ok(())
    }

    /// Apply a signature event from the capture surface
    ///
    /// Ignored outside editing.
    pub fn set_signature(&mut self, payload: Option<SignaturePayload>) {
        if self.state != FormState::Editing {
            tracing::debug!(state = %self.state, "signature event ignored");
            return;
        }
        self.draft.signature = payload;
    }

    /// Pull the latest payload from the attached feed, if any
    ///
    /// Outside editing the feed is left unread.
    pub fn sync_signature(&mut self) {
        if self.state != FormState::Editing {
            return;
        }
        let update = self.signature_feed.as_mut().and_then(SignatureFeed::take_update);
        if let Some(payload) = update {
            self.set_signature(payload);
        }
    }

    /// Validate and move to submitting
    ///
    /// Clears the visible error first. On validation failure the error slot
    /// holds the first failing rule and the state stays editing.
    ///
    /// # Errors
    /// - `FormError::Validation` if the draft is incomplete
    /// - `FormError::SubmissionInProgress` while submitting
    /// - `FormError::AlreadySubmitted` after success
    pub fn begin_submit(&mut self) -> Result<MerchantFormData, FormError> {
        match self.state {
            FormState::Editing => {}
            FormState::Submitting => {
                tracing::warn!("submit requested while a submission is pending");
                return Err(FormError::SubmissionInProgress);
            }
            FormState::Submitted => return Err(FormError::AlreadySubmitted),
        }

        self.sync_signature();
        self.error = None;

        if let Err(e) = validate(&self.draft, &self.config) {
            tracing::warn!(error = %e, "contract validation failed");
            let err = FormError::from(e);
            self.error = Some(err.clone());
            return Err(err);
        }

        self.state = FormState::Submitting;
        tracing::info!(plan = %self.draft.selected_plan_id, "contract submitting");
        Ok(self.draft.clone())
    }

    /// Deliver the backend outcome of the pending submission
    ///
    /// # Errors
    /// - `FormError::SubmissionFailed` if the backend failed; back to editing
    /// - `FormError::NotSubmitting` if nothing is pending
    pub fn finish_submit(
        &mut self,
        outcome: Result<SubmissionAck, SubmissionError>,
    ) -> Result<Receipt, FormError> {
        if self.state != FormState::Submitting {
            return Err(FormError::NotSubmitting);
        }

        match outcome {
            Ok(ack) => {
                let receipt = Receipt::new(&self.draft, &self.catalog, &ack);
                self.state = FormState::Submitted;
                self.receipt = Some(receipt.clone());
                tracing::info!(
                    reference = %ack.reference,
                    plan = %receipt.plan_id,
                    "contract submitted"
                );
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(error = %e, "contract submission failed");
                self.state = FormState::Editing;
                let err = FormError::SubmissionFailed(e);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Validate, submit and await the backend
    ///
    /// # Errors
    /// See [`ContractForm::begin_submit`] and [`ContractForm::finish_submit`].
    pub async fn submit<S>(&mut self, submitter: &S) -> Result<Receipt, FormError>
    where
        S: Submitter + ?Sized,
    {
        let contract = self.begin_submit()?;
        let outcome = submitter.submit(&contract).await;
        self.finish_submit(outcome)
    }

    /// Start a new session with an empty draft
    ///
    /// The draft adopts whatever the attached capture surface currently
    /// holds, so the form and the pad agree on the signature.
    ///
    /// # Errors
    /// `FormError::SubmissionInProgress` while submitting; a pending
    /// submission can only end through its outcome.
    pub fn restart(&mut self) -> Result<(), FormError> {
        if self.state == FormState::Submitting {
            tracing::warn!("restart requested while a submission is pending");
            return Err(FormError::SubmissionInProgress);
        }

        self.draft = MerchantFormData::new();
        self.state = FormState::Editing;
        self.error = None;
        self.receipt = None;
        if let Some(feed) = self.signature_feed.as_mut() {
            let _ = feed.take_update();
            self.draft.signature = feed.current();
        }
        tracing::info!(signed = self.draft.has_signature(), "contract session restarted");
        Ok(())
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Current draft
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &MerchantFormData {
        &self.draft
    }

    /// The visible error
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// The visible error's message
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Receipt after success
    #[inline]
    #[must_use]
    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    /// Selected plan record
    #[must_use]
    pub fn selected_plan(&self) -> Option<&PlanOption> {
        self.catalog.get(&self.draft.selected_plan_id)
    }

    /// Whether `id` is the selected plan
    #[inline]
    #[must_use]
    pub fn is_selected(&self, plan_id: &str) -> bool {
        self.draft.selected_plan_id == plan_id
    }

    /// Plan catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Whether the draft can no longer change
    #[inline]
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.state != FormState::Editing
    }

    /// Whether the submit action is enabled
    #[inline]
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.state == FormState::Editing
    }

    /// Submit action label
    #[inline]
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.state {
            FormState::Submitting => SUBMITTING_LABEL,
            _ => SUBMIT_LABEL,
        }
    }

    /// Live summary on the given date
    #[must_use]
    pub fn summary_on(&self, date: chrono::NaiveDate) -> ContractSummary {
        ContractSummary::new(&self.draft, &self.catalog, date)
    }

    /// Live summary dated today (local time)
    #[must_use]
    pub fn summary(&self) -> ContractSummary {
        self.summary_on(chrono::Local::now().date_naive())
    }

    fn ensure_editable(&self) -> Result<(), FormError> {
        if self.state == FormState::Editing {
            Ok(())
        } else {
            Err(FormError::Frozen(self.state))
        }
    }
}
