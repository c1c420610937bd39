//! Shared state of the running guild war

use serde::{Deserialize, Serialize};

use crate::core::types::GuildId;

/// State the siege-outcome logic mutates and the resolver reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarContext {
    /// Guild currently holding the castle. `GuildId::NONE` until assigned.
    #[serde(default)]
    pub defender_guild: GuildId,
}

impl WarContext {
    pub fn new(defender_guild: GuildId) -> Self {
        Self { defender_guild }
    }

    /// No defender assigned yet
    pub fn undefended() -> Self {
        Self::default()
    }

    pub fn has_defender(&self) -> bool {
        !self.defender_guild.is_none()
    }

    /// True when `guild` is the assigned defender. An unassigned defender
    /// matches nobody, including guildless players.
    pub fn is_defender(&self, guild: GuildId) -> bool {
        self.defender_guild.shares_with(guild)
    }

    pub fn set_defender(&mut self, guild: GuildId) {
        tracing::debug!("Defender guild changed from {:?} to {:?}", self.defender_guild, guild);
        self.defender_guild = guild;
    }

    pub fn clear_defender(&mut self) {
        self.set_defender(GuildId::NONE);
    }
}
