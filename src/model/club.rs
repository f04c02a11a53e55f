use serde::{Deserialize, Serialize};

/// Club choice exposed to the meeting forms and the report filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubDto {
    pub club_id: i32,
    pub name: String,
}

impl ClubDto {
    /// Converts an entity model to a DTO at the repository boundary.
    pub fn from_entity(entity: entity::club::Model) -> Self {
        Self {
            club_id: entity.club_id,
            name: entity.name,
        }
    }
}
