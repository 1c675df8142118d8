//! Plan Catalog
//!
//! The fixed, ordered list of pricing plans a merchant chooses from:
//! - `PlanOption` / `PlanDetail` records with their fee clauses
//! - `PlanCatalog`, an immutable shared handle preserving display order
//! - The built-in four-plan catalog
//! - Loading alternative catalogs from TOML, YAML or JSON
//!
//! # Example
//!
//! ```rust
//! use esign_catalog::PlanCatalog;
//!
//! let catalog = PlanCatalog::builtin();
//! assert_eq!(catalog.len(), 4);
//! assert_eq!(catalog.name_of("economic"), Some("2. 經濟型"));
//! ```

#![warn(unreachable_pub)]

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod plan;

pub use catalog::PlanCatalog;
pub use error::CatalogError;
pub use plan::{PlanDetail, PlanOption};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
