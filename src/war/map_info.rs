//! Guild war map definition
//!
//! Bundles the weekly schedule with round timing and announcement text.
//! Loaded from TOML; every field has a default so partial files work.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::core::calendar::WallClock;
use crate::core::error::{Result, WarError};
use crate::war::schedule::EventSchedule;

/// Placeholder replaced by the guild name in win announcements
pub const GUILD_NAME_PLACEHOLDER: &str = "{0}";

/// Announcement templates broadcast by the event controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnounceMessages {
    pub event_started: String,
    pub event_ended: String,
    pub round_ended: String,
    /// `{0}` is the defending guild's name
    pub defender_win: String,
    /// `{0}` is the attacking guild's name
    pub attacker_win: String,
}

impl Default for AnnounceMessages {
    fn default() -> Self {
        Self {
            event_started: "Guild war started !!".to_string(),
            event_ended: "Guild war ended !!".to_string(),
            round_ended: "Current guild war round ended !!".to_string(),
            defender_win: "{0} can defend the castle and win this round.".to_string(),
            attacker_win: "{0} can occupy the castle and win this round.".to_string(),
        }
    }
}

impl AnnounceMessages {
    pub fn defender_win(&self, guild_name: &str) -> String {
        self.defender_win.replace(GUILD_NAME_PLACEHOLDER, guild_name)
    }

    pub fn attacker_win(&self, guild_name: &str) -> String {
        self.attacker_win.replace(GUILD_NAME_PLACEHOLDER, guild_name)
    }
}

/// Configuration for one guild war map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildWarMapInfo {
    /// Map identifier used by the host's map registry
    pub id: String,

    /// When the event runs, per weekday
    pub schedule: EventSchedule,

    /// Round length in minutes
    ///
    /// If the defender holds the castle for this long, the defender wins
    /// the round.
    pub battle_duration_minutes: u32,

    pub messages: AnnounceMessages,
}

impl Default for GuildWarMapInfo {
    fn default() -> Self {
        Self {
            id: "guild_war".to_string(),
            schedule: EventSchedule::default(),
            battle_duration_minutes: 15,
            messages: AnnounceMessages::default(),
        }
    }
}

impl GuildWarMapInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML map definition
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let info: GuildWarMapInfo = toml::from_str(content)?;
        info.validate()?;
        tracing::debug!("Loaded guild war map '{}'", info.id);
        Ok(info)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.battle_duration_minutes == 0 {
            return Err(WarError::InvalidConfig(
                "battle_duration_minutes must be positive".into(),
            ));
        }
        self.schedule.validate()
    }

    /// Players killed on this map respawn automatically
    pub fn auto_respawn_when_dead(&self) -> bool {
        true
    }

    /// Each war runs in its own map instance
    pub fn is_instance_map(&self) -> bool {
        true
    }

    pub fn battle_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.battle_duration_minutes) * 60)
    }

    /// Whether the event is running at the given time
    pub fn is_on_at(&self, now: WallClock) -> bool {
        self.schedule.is_active(now)
    }

    /// Whether the event is running now, by the local clock
    pub fn is_on(&self) -> bool {
        self.is_on_at(WallClock::now())
    }
}
