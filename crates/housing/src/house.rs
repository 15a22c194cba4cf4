use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentroll_core::{DomainError, DomainResult, HouseId, OwnerId};

/// A boarding house owned by the acting account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub house_id: HouseId,
    pub owner_id: OwnerId,
    pub name: String,
    pub address: String,
    pub district: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Form payload: register a new house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHouse {
    pub name: String,
    pub address: String,
    pub district: Option<String>,
}

impl NewHouse {
    /// Client-side form validation; the backend re-validates on its side.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("house name must not be empty"));
        }
        if self.address.trim().is_empty() {
            return Err(DomainError::validation("house address must not be empty"));
        }
        Ok(())
    }
}

/// Form payload: partial house update (None = keep existing).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}
