//! Time-of-day and weekly time slot models.
//!
//! # Time Model
//! All clock times are minutes since midnight, parsed once from
//! `"HH:MM"` text at construction. Intervals are half-open `[start, end)`;
//! two intervals overlap iff `start1 < end2 && start2 < end1`.
//!
//! Days of week are `0..=6` (0 = Sunday).

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A clock time, stored as minutes since midnight.
///
/// Serializes as a zero-padded `"HH:MM"` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time from minutes since midnight.
    pub const fn from_minutes(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Creates a time from hour and minute components.
    pub const fn hm(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    /// Parses a `"HH:MM"` string.
    ///
    /// Returns `None` for anything that is not two colon-separated
    /// integer fields with hour < 24 and minute < 60.
    pub fn parse(text: &str) -> Option<Self> {
        let (h, m) = text.split_once(':')?;
        let hour: u16 = h.parse().ok()?;
        let minute: u16 = m.parse().ok()?;
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self::hm(hour, minute))
    }

    /// Minutes since midnight.
    #[inline]
    pub const fn minutes(self) -> u16 {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).ok_or_else(|| D::Error::custom(format!("invalid time: {text}")))
    }
}

/// Whether two half-open intervals `[start1, end1)` and `[start2, end2)`
/// strictly overlap. Touching endpoints do not overlap.
#[inline]
pub fn intervals_overlap(start1: TimeOfDay, end1: TimeOfDay, start2: TimeOfDay, end2: TimeOfDay) -> bool {
    start1 < end2 && start2 < end1
}

/// Classification of weekly time slots.
///
/// Only [`SlotType::Regular`] slots may hold classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotType {
    /// A teaching slot.
    Regular,
    /// A short break between sessions.
    Break,
    /// The lunch window.
    Lunch,
    /// Reserved for institution events.
    Special,
}

/// A discrete weekly time slot owned by a timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Owning timetable.
    pub timetable_id: String,
    /// Day of week (0 = Sunday .. 6 = Saturday).
    pub day_of_week: u8,
    /// Slot start.
    pub start: TimeOfDay,
    /// Slot end.
    pub end: TimeOfDay,
    /// Slot classification.
    pub slot_type: SlotType,
}

impl TimeSlot {
    /// Creates a regular slot.
    pub fn new(
        id: impl Into<String>,
        timetable_id: impl Into<String>,
        day_of_week: u8,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            id: id.into(),
            timetable_id: timetable_id.into(),
            day_of_week,
            start,
            end,
            slot_type: SlotType::Regular,
        }
    }

    /// Sets the slot type.
    pub fn with_slot_type(mut self, slot_type: SlotType) -> Self {
        self.slot_type = slot_type;
        self
    }

    /// Whether classes may be scheduled in this slot.
    #[inline]
    pub fn is_regular(&self) -> bool {
        self.slot_type == SlotType::Regular
    }

    /// Slot duration in minutes. Negative if `end < start` (malformed
    /// input is accepted and surfaces through evaluation instead).
    pub fn duration_minutes(&self) -> i32 {
        self.end.minutes() as i32 - self.start.minutes() as i32
    }
}
