use std::{collections::HashMap, time::Duration};

use serde::{Deserialize, Serialize};

/// A stable coordinate pair addressing one UI field of the host interface.
///
/// The host exposes its interface as groups of child elements; a field is
/// identified by `(group, child)` and is only readable while its owning panel
/// is on screen. Coordinates are data, not behavior - the concrete constants
/// the tracker reads live in [`crate::tracker::fields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{group}:{child}")]
pub struct FieldCoord {
    /// Interface group id.
    pub group: u32,
    /// Child element id within the group.
    pub child: u32,
}

impl FieldCoord {
    /// Creates a coordinate from a group and child id.
    #[must_use]
    pub const fn new(group: u32, child: u32) -> Self {
        Self { group, child }
    }
}

impl Serialize for FieldCoord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: "group:child" (e.g. "488:8"), so coordinate-keyed maps
        // serialize as plain JSON objects.
        serializer.serialize_str(&format!("{}:{}", self.group, self.child))
    }
}

impl<'de> Deserialize<'de> for FieldCoord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let mut parts = s.splitn(2, ':');
        let group_str = parts.next().ok_or_else(|| {
            serde::de::Error::custom(format!("expected format 'group:child', got '{s}'"))
        })?;
        let child_str = parts.next().ok_or_else(|| {
            serde::de::Error::custom(format!("missing ':' in format 'group:child', got '{s}'"))
        })?;

        let group = group_str
            .parse::<u32>()
            .map_err(|e| serde::de::Error::custom(format!("invalid group: {group_str} ({e})")))?;
        let child = child_str
            .parse::<u32>()
            .map_err(|e| serde::de::Error::custom(format!("invalid child: {child_str} ({e})")))?;

        Ok(Self { group, child })
    }
}

/// Read access to the host's coordinate-addressable game state.
///
/// Implementations present one stable snapshot of the interface: a field that
/// is absent (its panel not rendered) reads as `None`, which callers treat as
/// "no data" rather than an error.
pub trait FieldSource {
    /// Returns the text content of the field, if the field is present.
    fn read_text(&self, coord: FieldCoord) -> Option<&str>;

    /// Returns the integer content of the field, if the field is present.
    fn read_int(&self, coord: FieldCoord) -> Option<i32>;
}

/// A map-backed [`FieldSource`] holding one captured snapshot of the host
/// interface.
///
/// This is the engine's only concrete source: tests populate it directly and
/// the CLI deserializes it from a JSON snapshot file. The optional
/// `elapsed_secs` mirrors the per-wave timer, which the live tracker reads
/// from a [`WaveTimer`](crate::tracker::WaveTimer) instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotSource {
    /// Text fields by coordinate.
    #[serde(default)]
    pub text: HashMap<FieldCoord, String>,
    /// Integer fields by coordinate.
    #[serde(default)]
    pub ints: HashMap<FieldCoord, i32>,
    /// Seconds elapsed since the wave started, when the snapshot was taken
    /// during a timed wave.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_secs: Option<u64>,
}

impl SnapshotSource {
    /// Creates an empty snapshot with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a text field.
    pub fn set_text(&mut self, coord: FieldCoord, value: impl Into<String>) {
        self.text.insert(coord, value.into());
    }

    /// Sets an integer field.
    pub fn set_int(&mut self, coord: FieldCoord, value: i32) {
        self.ints.insert(coord, value);
    }

    /// Returns the captured wave time, when present.
    #[must_use]
    pub fn elapsed_time(&self) -> Option<Duration> {
        self.elapsed_secs.map(Duration::from_secs)
    }
}

impl FieldSource for SnapshotSource {
    fn read_text(&self, coord: FieldCoord) -> Option<&str> {
        self.text.get(&coord).map(String::as_str)
    }

    fn read_int(&self, coord: FieldCoord) -> Option<i32> {
        self.ints.get(&coord).copied()
    }
}
