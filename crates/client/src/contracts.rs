//! Tenancy contract endpoints (`/rented-rooms/*`).

use rentroll_core::{ContractId, RoomId};
use rentroll_tenancy::{Contract, ContractUpdate, NewContract};

use crate::error::ApiError;
use crate::http::{Acknowledgement, ApiClient};

impl ApiClient {
    pub async fn contracts(&self) -> Result<Vec<Contract>, ApiError> {
        self.get_json("rented-rooms/").await
    }

    pub async fn contract(&self, rr_id: ContractId) -> Result<Contract, ApiError> {
        self.get_json(&format!("rented-rooms/{rr_id}")).await
    }

    pub async fn contracts_by_room(&self, room_id: RoomId) -> Result<Vec<Contract>, ApiError> {
        self.get_json(&format!("rented-rooms/room/{room_id}")).await
    }

    pub async fn create_contract(&self, contract: &NewContract) -> Result<Contract, ApiError> {
        contract
            .validate()
            .map_err(|e| ApiError::Api {
                status: 422,
                message: e.to_string(),
            })?;
        self.post_json("rented-rooms/", contract).await
    }

    pub async fn update_contract(
        &self,
        rr_id: ContractId,
        update: &ContractUpdate,
    ) -> Result<Contract, ApiError> {
        self.put_json(&format!("rented-rooms/{rr_id}"), update).await
    }

    /// Soft-terminate; the contract stays queryable with `is_active = false`.
    pub async fn terminate_contract(
        &self,
        rr_id: ContractId,
    ) -> Result<Acknowledgement, ApiError> {
        self.post_empty(&format!("rented-rooms/{rr_id}/terminate"))
            .await
    }
}
