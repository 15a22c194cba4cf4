//! House and room directory endpoints.

use rentroll_core::{HouseId, OwnerId, RoomId};
use rentroll_housing::{House, HouseUpdate, NewHouse, NewRoom, Room, RoomUpdate};

use crate::error::ApiError;
use crate::http::{Acknowledgement, ApiClient};

impl ApiClient {
    pub async fn houses(&self) -> Result<Vec<House>, ApiError> {
        self.get_json("houses/").await
    }

    pub async fn house(&self, house_id: HouseId) -> Result<House, ApiError> {
        self.get_json(&format!("houses/{house_id}")).await
    }

    /// Admin-only: houses belonging to another owner.
    pub async fn houses_by_owner(&self, owner_id: OwnerId) -> Result<Vec<House>, ApiError> {
        self.get_json(&format!("houses/owner/{owner_id}")).await
    }

    pub async fn create_house(&self, house: &NewHouse) -> Result<House, ApiError> {
        house.validate().map_err(|e| ApiError::Api {
            status: 422,
            message: e.to_string(),
        })?;
        self.post_json("houses/", house).await
    }

    pub async fn update_house(
        &self,
        house_id: HouseId,
        update: &HouseUpdate,
    ) -> Result<House, ApiError> {
        self.put_json(&format!("houses/{house_id}"), update).await
    }

    pub async fn delete_house(&self, house_id: HouseId) -> Result<Acknowledgement, ApiError> {
        self.delete_json(&format!("houses/{house_id}")).await
    }

    pub async fn rooms_by_house(&self, house_id: HouseId) -> Result<Vec<Room>, ApiError> {
        self.get_json(&format!("rooms/house/{house_id}")).await
    }

    pub async fn room(&self, room_id: RoomId) -> Result<Room, ApiError> {
        self.get_json(&format!("rooms/{room_id}")).await
    }

    pub async fn create_room(&self, room: &NewRoom) -> Result<Room, ApiError> {
        room.validate().map_err(|e| ApiError::Api {
            status: 422,
            message: e.to_string(),
        })?;
        self.post_json("rooms/", room).await
    }

    pub async fn update_room(
        &self,
        room_id: RoomId,
        update: &RoomUpdate,
    ) -> Result<Room, ApiError> {
        self.put_json(&format!("rooms/{room_id}"), update).await
    }

    pub async fn delete_room(&self, room_id: RoomId) -> Result<Acknowledgement, ApiError> {
        self.delete_json(&format!("rooms/{room_id}")).await
    }
}
