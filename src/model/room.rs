use serde::{Deserialize, Serialize};

/// Room choice exposed to the meeting forms and the report filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDto {
    pub room_id: i32,
    pub building: String,
    pub number: String,
    pub max_capacity: Option<i32>,
}

impl RoomDto {
    /// Converts an entity model to a DTO at the repository boundary.
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            room_id: entity.room_id,
            building: entity.building,
            number: entity.number,
            max_capacity: entity.max_capacity,
        }
    }

    /// Display label combining building and number ("Eng 101").
    pub fn label(&self) -> String {
        format!("{} {}", self.building, self.number)
    }
}
