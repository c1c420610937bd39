//! Actors taking part in a guild war
//!
//! The host simulation owns and mutates these; the relationship resolver
//! only reads them. Dispatch over actor kinds is an exhaustive match on
//! [`Actor`].

pub mod registry;

use serde::{Deserialize, Serialize};

use crate::core::types::{ActorId, AllyGroupId, GuildId};

pub use registry::{ActorGraph, ActorRegistry};

/// A player character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerActor {
    pub id: ActorId,
    #[serde(default)]
    pub guild: GuildId,
}

impl PlayerActor {
    pub fn new(guild: GuildId) -> Self {
        Self {
            id: ActorId::new(),
            guild,
        }
    }

    pub fn unaffiliated() -> Self {
        Self::new(GuildId::NONE)
    }
}

/// The contested castle's core structure. Its allegiance follows whichever
/// guild currently defends the castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastleCoreActor {
    pub id: ActorId,
}

impl CastleCoreActor {
    pub fn new() -> Self {
        Self { id: ActorId::new() }
    }
}

impl Default for CastleCoreActor {
    fn default() -> Self {
        Self::new()
    }
}

/// Any monster other than the castle core: wild monsters grouped by
/// ally group, or creatures summoned by another actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMonsterActor {
    pub id: ActorId,
    /// Set while the monster is summoned. Summon chains must be acyclic.
    #[serde(default)]
    pub summoner: Option<ActorId>,
    /// Only consulted while the monster is not summoned
    #[serde(default)]
    pub ally_group: AllyGroupId,
}

impl GenericMonsterActor {
    /// A wild (non-summoned) monster
    pub fn wild(ally_group: AllyGroupId) -> Self {
        Self {
            id: ActorId::new(),
            summoner: None,
            ally_group,
        }
    }

    /// A monster summoned by `summoner`
    pub fn summoned_by(summoner: ActorId) -> Self {
        Self {
            id: ActorId::new(),
            summoner: Some(summoner),
            ally_group: AllyGroupId::default(),
        }
    }

    pub fn is_summoned(&self) -> bool {
        self.summoner.is_some()
    }
}

/// Every kind of combat-capable actor in a guild war
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    Player(PlayerActor),
    CastleCore(CastleCoreActor),
    Monster(GenericMonsterActor),
}

impl Actor {
    pub fn id(&self) -> ActorId {
        match self {
            Actor::Player(player) => player.id,
            Actor::CastleCore(core) => core.id,
            Actor::Monster(monster) => monster.id,
        }
    }

    /// Guild of a player actor; other kinds have none
    pub fn guild(&self) -> Option<GuildId> {
        match self {
            Actor::Player(player) => Some(player.guild),
            _ => None,
        }
    }

    /// Summoner of a summoned monster
    pub fn summoner(&self) -> Option<ActorId> {
        match self {
            Actor::Monster(monster) => monster.summoner,
            _ => None,
        }
    }

    pub fn is_summoned(&self) -> bool {
        self.summoner().is_some()
    }

    pub fn is_castle_core(&self) -> bool {
        matches!(self, Actor::CastleCore(_))
    }
}

impl From<PlayerActor> for Actor {
    fn from(player: PlayerActor) -> Self {
        Actor::Player(player)
    }
}

impl From<CastleCoreActor> for Actor {
    fn from(core: CastleCoreActor) -> Self {
        Actor::CastleCore(core)
    }
}

impl From<GenericMonsterActor> for Actor {
    fn from(monster: GenericMonsterActor) -> Self {
        Actor::Monster(monster)
    }
}
