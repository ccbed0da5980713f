use crate::shared::{Result, SourcingError};
use crate::sourcing::domain::VendorResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable input to one vendor resolution.
///
/// A missing or empty part number means "skip this vendor": the refresh
/// job delivers the unavailable sentinel without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartQuery {
    pub part_number: Option<String>,
    pub quantity: u32,
}

impl PartQuery {
    pub fn new(part_number: Option<String>, quantity: u32) -> Self {
        Self {
            part_number,
            quantity,
        }
    }

    /// Whether this query should reach the vendor at all
    pub fn is_actionable(&self) -> bool {
        self.quantity > 0
            && self
                .part_number
                .as_deref()
                .map(|pn| !pn.trim().is_empty())
                .unwrap_or(false)
    }
}

/// A component of a project's bill of materials.
///
/// Holds the vendor-specific part identifiers plus the last-known
/// `VendorResult` per vendor. The cached vendor fields are mutated only
/// by the refresh coordinator after a worker delivers its result; they
/// are read by aggregation and presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: Uuid,
    pub mouser_part_number: Option<String>,
    pub jlcpcb_part_number: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub target_qty: u32,
    #[serde(default)]
    pub backup_part: Option<String>,
    #[serde(default)]
    pub mouser: VendorResult,
    #[serde(default)]
    pub jlcpcb: VendorResult,
    #[serde(default)]
    pub refreshed_at: Option<DateTime<Utc>>,
}

fn default_category() -> String {
    "Other".to_string()
}

impl ComponentRecord {
    /// Creates a new component with a fresh id and no cached vendor data.
    ///
    /// # Errors
    /// Returns a validation error if the target quantity is zero or if
    /// neither vendor part number is given.
    pub fn new(
        mouser_part_number: Option<String>,
        jlcpcb_part_number: Option<String>,
        description: String,
        category: String,
        target_qty: u32,
        backup_part: Option<String>,
    ) -> Result<Self> {
        if target_qty == 0 {
            return Err(SourcingError::Validation {
                message: "Target quantity must be at least 1".to_string(),
            }
            .into());
        }

        let mouser_part_number = normalize_part_number(mouser_part_number);
        let jlcpcb_part_number = normalize_part_number(jlcpcb_part_number);

        if mouser_part_number.is_none() && jlcpcb_part_number.is_none() {
            return Err(SourcingError::Validation {
                message: "At least one vendor part number is required".to_string(),
            }
            .into());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            mouser_part_number,
            jlcpcb_part_number,
            description,
            category: if category.trim().is_empty() {
                default_category()
            } else {
                category
            },
            target_qty,
            backup_part,
            mouser: VendorResult::unavailable(),
            jlcpcb: VendorResult::unavailable(),
            refreshed_at: None,
        })
    }

    pub fn mouser_query(&self) -> PartQuery {
        PartQuery::new(self.mouser_part_number.clone(), self.target_qty)
    }

    pub fn jlcpcb_query(&self) -> PartQuery {
        PartQuery::new(self.jlcpcb_part_number.clone(), self.target_qty)
    }

    /// Applies a delivered refresh result to this component's cache fields.
    /// Called only from the refresh coordinator, never from workers.
    pub fn apply_refresh(
        &mut self,
        mouser: VendorResult,
        jlcpcb: VendorResult,
        refreshed_at: DateTime<Utc>,
    ) {
        self.mouser = mouser;
        self.jlcpcb = jlcpcb;
        self.refreshed_at = Some(refreshed_at);
    }
}

fn normalize_part_number(part_number: Option<String>) -> Option<String> {
    part_number
        .map(|pn| pn.trim().replace('\n', ""))
        .filter(|pn| !pn.is_empty())
}

/// A project owning a bill of materials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
}

impl Project {
    pub fn new(name: String) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(SourcingError::Validation {
                message: "Project name cannot be empty".to_string(),
            }
            .into());
        }
        Ok(Self {
            name,
            notes: String::new(),
            components: Vec::new(),
        })
    }

    pub fn add_component(&mut self, component: ComponentRecord) {
        self.components.push(component);
    }

    /// Removes the single component whose id starts with the given prefix.
    ///
    /// # Errors
    /// Returns `ComponentNotFound` when no id matches, or a validation
    /// error when the prefix is ambiguous.
    pub fn remove_component(&mut self, id_prefix: &str) -> Result<ComponentRecord> {
        let matches: Vec<usize> = self
            .components
            .iter()
            .enumerate()
            .filter(|(_, c)| c.id.to_string().starts_with(id_prefix))
            .map(|(i, _)| i)
            .collect();

        match matches.as_slice() {
            [] => Err(SourcingError::ComponentNotFound {
                id: id_prefix.to_string(),
            }
            .into()),
            [idx] => Ok(self.components.remove(*idx)),
            _ => Err(SourcingError::Validation {
                message: format!(
                    "Id prefix '{}' matches {} components, please use a longer prefix",
                    id_prefix,
                    matches.len()
                ),
            }
            .into()),
        }
    }
}
