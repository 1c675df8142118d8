//! Submission backend seam
//!
//! A submission is one request and one terminal response: accepted with an
//! acknowledgment, or failed with a reason. No retries, no streaming.

use crate::error::SubmissionError;
use crate::types::MerchantFormData;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Backend acknowledgment of an accepted contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAck {
    /// Contract reference assigned by the backend
    pub reference: Uuid,
    /// When the backend accepted the contract
    pub accepted_at: DateTime<Utc>,
}

impl SubmissionAck {
    /// Acknowledge now with a fresh reference
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            accepted_at: Utc::now(),
        }
    }
}

impl Default for SubmissionAck {
    fn default() -> Self {
        Self::new()
    }
}

/// Contract submission backend
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Submit a validated contract
    ///
    /// # Errors
    /// Returns `SubmissionError` if the backend rejects or fails the request.
    async fn submit(&self, contract: &MerchantFormData) -> Result<SubmissionAck, SubmissionError>;
}

/// Simulated backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Artificial latency in milliseconds
    pub delay_ms: u64,
    /// Reject every submission with this reason
    pub reject_with: Option<String>,
}

impl SubmissionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With latency
    #[inline]
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// With rejection reason
    #[inline]
    #[must_use]
    pub fn rejecting(mut self, reason: impl Into<String>) -> Self {
        self.reject_with = Some(reason.into());
        self
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            reject_with: None,
        }
    }
}

/// Stand-in backend: waits, then accepts or rejects per configuration
#[derive(Debug, Clone, Default)]
pub struct SimulatedSubmitter {
    config: SubmissionConfig,
}

impl SimulatedSubmitter {
    /// Create simulated backend
    #[inline]
    #[must_use]
    pub fn new(config: SubmissionConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SubmissionConfig {
        &self.config
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, contract: &MerchantFormData) -> Result<SubmissionAck, SubmissionError> {
        tracing::debug!(
            delay_ms = self.config.delay_ms,
            plan = %contract.selected_plan_id,
            "simulated submission started"
        );
        tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;

        if let Some(reason) = &self.config.reject_with {
            return Err(SubmissionError::Rejected(reason.clone()));
        }
        Ok(SubmissionAck::new())
    }
}
