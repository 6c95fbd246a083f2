//! Room model.

use serde::{Deserialize, Serialize};

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    /// Standard lecture room.
    Classroom,
    /// Equipped laboratory.
    Lab,
    /// Large seminar hall.
    SeminarHall,
    /// Auditorium.
    Auditorium,
    /// Conference room.
    ConferenceRoom,
}

/// A teaching room.
///
/// The building + room-number pair forms a globally unique compound
/// key. Only rooms with `is_available` set participate in search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Building name.
    pub building: String,
    /// Room number within the building.
    pub room_number: String,
    /// Room classification.
    pub room_type: RoomType,
    /// Seating capacity.
    pub capacity: u32,
    /// Has a projector.
    pub has_projector: bool,
    /// Has computers.
    pub has_computer: bool,
    /// Has a whiteboard.
    pub has_whiteboard: bool,
    /// Has a smart board.
    pub has_smart_board: bool,
    /// Is air-conditioned.
    pub is_ac: bool,
    /// Whether the room can be scheduled.
    pub is_available: bool,
}

impl Room {
    /// Creates a new available room.
    pub fn new(id: impl Into<String>, room_number: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            building: String::new(),
            room_number: room_number.into(),
            room_type,
            capacity: 0,
            has_projector: false,
            has_computer: false,
            has_whiteboard: true,
            has_smart_board: false,
            is_ac: false,
            is_available: true,
        }
    }

    /// Sets the building.
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = building.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Marks the room as having a projector.
    pub fn with_projector(mut self) -> Self {
        self.has_projector = true;
        self
    }

    /// Marks the room as having computers.
    pub fn with_computer(mut self) -> Self {
        self.has_computer = true;
        self
    }

    /// Marks the room as having a smart board.
    pub fn with_smart_board(mut self) -> Self {
        self.has_smart_board = true;
        self
    }

    /// Marks the room as air-conditioned.
    pub fn with_ac(mut self) -> Self {
        self.is_ac = true;
        self
    }

    /// Marks the room unavailable (excluded from search).
    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }

    /// The globally unique building + room-number compound key.
    pub fn compound_key(&self) -> String {
        format!("{}/{}", self.building, self.room_number)
    }
}
