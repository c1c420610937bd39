//! Guild War - faction resolution for timed castle sieges
//!
//! Decides whether two actors in a guild war are allies, enemies, or
//! neither, and whether the war is currently scheduled to run.

pub mod actor;
pub mod core;
pub mod war;

pub use actor::{Actor, ActorGraph, ActorRegistry, CastleCoreActor, GenericMonsterActor, PlayerActor};
pub use crate::core::{ActorId, AllyGroupId, GuildId, Result, WallClock, WarError, Weekday};
pub use war::{EventSchedule, EventTime, GuildWarMapInfo, Relation, RelationResolver, WarContext};
