//! Contract Form Controller
//!
//! Owns the merchant's in-progress contract draft and drives it through
//! editing, submitting and submitted:
//! - Field, plan and signature updates while editing
//! - Ordered validation with a single current error message
//! - One awaited hand-off to a `Submitter` backend
//! - A frozen receipt after a successful submission
//!
//! # Example
//!
//! ```rust,ignore
//! use esign_core::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut form = ContractForm::new(PlanCatalog::builtin());
//! form.select_plan("economic")?;
//! form.set_field(MerchantField::CompanyName, "好食餐飲有限公司")?;
//! // ... remaining fields and a signature ...
//!
//! let receipt = form.submit(&SimulatedSubmitter::default()).await?;
//! println!("{}", receipt.plan_name);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod form;
pub mod receipt;
pub mod submission;
pub mod types;
pub mod validation;

pub use error::{FormError, SubmissionError, ValidationError, SUBMISSION_FAILED_MESSAGE};
pub use form::{ContractForm, FormState, SUBMIT_LABEL, SUBMITTING_LABEL};
pub use receipt::{ContractSummary, Receipt, PARTY_A};
pub use submission::{SimulatedSubmitter, SubmissionAck, SubmissionConfig, Submitter};
pub use types::{FormConfig, MerchantField, MerchantFormData};
pub use validation::validate;

pub use esign_catalog::{PlanCatalog, PlanOption};
pub use esign_signature::SignaturePayload;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving a signing session
    pub use crate::{
        ContractForm, FormConfig, FormError, FormState, MerchantField, MerchantFormData,
        PlanCatalog, Receipt, SignaturePayload, SimulatedSubmitter, Submitter,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
