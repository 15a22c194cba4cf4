use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentroll_core::{DomainError, DomainResult, HouseId, RoomId};

/// A rentable room within a house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: RoomId,
    pub house_id: HouseId,
    pub name: String,
    /// Asking rent in whole VND per month.
    pub price: i64,
    /// Maximum number of tenants the room accommodates.
    pub capacity: u32,
    /// Floor area in square meters, when surveyed.
    pub area: Option<f64>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn is_vacant(&self) -> bool {
        self.is_available
    }
}

/// Form payload: add a room to a house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoom {
    pub house_id: HouseId,
    pub name: String,
    pub price: i64,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
}

impl NewRoom {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("room name must not be empty"));
        }
        if self.price < 0 {
            return Err(DomainError::validation("room price must not be negative"));
        }
        if self.capacity == 0 {
            return Err(DomainError::validation("room capacity must be at least 1"));
        }
        Ok(())
    }
}

/// Form payload: partial room update (None = keep existing).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}
