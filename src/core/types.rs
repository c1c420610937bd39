//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for actors taking part in a guild war
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

/// Guild identifier. `GuildId::NONE` (0) means "no guild" and never matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildId(pub u32);

impl GuildId {
    pub const NONE: GuildId = GuildId(0);

    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// True only when both ids are affiliated and equal
    pub fn shares_with(&self, other: GuildId) -> bool {
        !self.is_none() && *self == other
    }
}

/// Grouping tag for wild monsters that do not fight each other
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllyGroupId(pub u32);

impl AllyGroupId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}
