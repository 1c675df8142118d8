//! Command-line signing session
//!
//! Drives the contract form end to end without a browser: the pad is
//! mounted on a fixed host, strokes are replayed from a JSON script and the
//! draft goes through the simulated backend.

pub mod config;
pub mod logging;
pub mod script;
pub mod session;

pub use config::AppConfig;
pub use script::StrokeScript;
pub use session::{MerchantInput, SessionOutcome, SigningSession};
