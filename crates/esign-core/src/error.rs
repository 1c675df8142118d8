//! Error types for the contract form
//!
//! Two kinds reach the merchant through the single error slot:
//! - Validation errors (user-correctable, checked in a fixed order)
//! - Submission failures (backend, retryable with the draft intact)
//!
//! The remaining variants are API misuse that a UI prevents by disabling
//! controls; they are returned but never displayed.

use crate::form::FormState;
use crate::types::MerchantField;

/// Message shown when the backend rejects or fails a submission
pub const SUBMISSION_FAILED_MESSAGE: &str = "提交失敗，請稍後再試";

/// Submit-time validation failures, in check order
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No plan selected
    #[error("請選擇一個合作方案")]
    MissingPlan,

    /// No signature captured
    #[error("請完成簽名")]
    MissingSignature,

    /// Company name, tax id or representative empty
    #[error("請填寫完整的商家基本資料")]
    MissingMerchantFields {
        /// Empty fields, in form order
        missing: Vec<MerchantField>,
    },

    /// Phone or e-mail empty (only when configured)
    #[error("請填寫聯絡電話與電子信箱")]
    MissingContactFields {
        /// Empty fields, in form order
        missing: Vec<MerchantField>,
    },
}

/// Backend failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// Backend refused the contract
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// Backend could not be reached
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Contract form errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Draft failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend failed; the draft is preserved for retry
    #[error("提交失敗，請稍後再試")]
    SubmissionFailed(#[source] SubmissionError),

    /// Submit requested while a submission is pending
    #[error("submission already in progress")]
    SubmissionInProgress,

    /// Submit requested after success
    #[error("contract already submitted")]
    AlreadySubmitted,

    /// Submission outcome delivered with nothing pending
    #[error("no submission in progress")]
    NotSubmitting,

    /// Mutation attempted outside editing
    #[error("draft is frozen while {0}")]
    Frozen(FormState),

    /// Plan id not in the catalog
    #[error("unknown plan id: {0}")]
    UnknownPlan(String),

    /// Field name not recognised
    #[error("unknown merchant field: {0}")]
    UnknownField(String),
}

impl FormError {
    /// Check if the merchant can fix this by editing the form
    #[inline]
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if resubmitting the same draft may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::SubmissionFailed(_))
    }

    /// Check if this error belongs in the visible error slot
    #[inline]
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.is_user_correctable() || self.is_retryable()
    }
}
