//! Shared, read-only plan catalog
//!
//! The catalog is built once at startup and handed to every consumer as a
//! cheap clone of the same `Arc`. There is no mutating API.

use crate::builtin::builtin_plans;
use crate::error::CatalogError;
use crate::plan::PlanOption;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// On-disk catalog shape: `{ plans = [...] }`
#[derive(Debug, Deserialize)]
struct CatalogFile {
    plans: Vec<PlanOption>,
}

/// Immutable ordered catalog of plans keyed by id
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: Arc<IndexMap<String, PlanOption>>,
}

impl PlanCatalog {
    /// Build catalog from plans in display order
    ///
    /// # Errors
    /// - `CatalogError::EmptyPlanId` if any plan has an empty id
    /// - `CatalogError::DuplicatePlanId` if two plans share an id
    pub fn from_plans(plans: Vec<PlanOption>) -> Result<Self, CatalogError> {
        let mut map = IndexMap::with_capacity(plans.len());
        for (idx, plan) in plans.into_iter().enumerate() {
            if plan.id.is_empty() {
                return Err(CatalogError::EmptyPlanId { position: idx + 1 });
            }
            if map.contains_key(&plan.id) {
                return Err(CatalogError::DuplicatePlanId(plan.id));
            }
            map.insert(plan.id.clone(), plan);
        }

        tracing::debug!(plans = map.len(), "plan catalog built");
        Ok(Self {
            plans: Arc::new(map),
        })
    }

    /// The four-plan catalog shown on the signing page
    #[must_use]
    pub fn builtin() -> Self {
        let plans = builtin_plans();
        let map = plans.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self {
            plans: Arc::new(map),
        }
    }

    /// Parse a TOML catalog (`[[plans]]` tables)
    ///
    /// # Errors
    /// Returns `CatalogError::Malformed` on parse failure, or any
    /// construction error from [`PlanCatalog::from_plans`].
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(text).map_err(|e| CatalogError::malformed("toml", e))?;
        Self::from_plans(file.plans)
    }

    /// Parse a YAML catalog (`plans:` list)
    ///
    /// # Errors
    /// See [`PlanCatalog::from_toml_str`].
    pub fn from_yaml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_yaml::from_str(text).map_err(|e| CatalogError::malformed("yaml", e))?;
        Self::from_plans(file.plans)
    }

    /// Parse a JSON catalog (`{"plans": [...]}`)
    ///
    /// # Errors
    /// See [`PlanCatalog::from_toml_str`].
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(text).map_err(|e| CatalogError::malformed("json", e))?;
        Self::from_plans(file.plans)
    }

    /// Load a catalog file, choosing the parser by extension
    ///
    /// # Errors
    /// - `CatalogError::Io` if the file cannot be read
    /// - `CatalogError::UnsupportedFormat` for unknown extensions
    /// - parse and construction errors as for the `from_*_str` constructors
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self, CatalogError> = match ext.as_str() {
            "toml" => Self::from_toml_str,
            "yaml" | "yml" => Self::from_yaml_str,
            "json" => Self::from_json_str,
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };

        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = parse(&text)?;

        tracing::info!(path = %path.display(), plans = catalog.len(), "loaded plan catalog");
        Ok(catalog)
    }

    /// Look up plan by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PlanOption> {
        self.plans.get(id)
    }

    /// Display name of plan, if present
    #[inline]
    #[must_use]
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|p| p.name.as_str())
    }

    /// Check if id is in catalog
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.plans.contains_key(id)
    }

    /// 1-based display position ("plan N")
    #[inline]
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.plans.get_index_of(id).map(|i| i + 1)
    }

    /// Plans in display order
    pub fn iter(&self) -> impl Iterator<Item = &PlanOption> {
        self.plans.values()
    }

    /// Number of plans
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Check if two handles share the same underlying catalog
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.plans, &other.plans)
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a PlanCatalog {
    type Item = &'a PlanOption;
    type IntoIter = indexmap::map::Values<'a, String, PlanOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.plans.values()
    }
}
