//! Guild war rules: who fights whom, and when the war runs

pub mod context;
pub mod map_info;
pub mod relations;
pub mod schedule;

pub use context::WarContext;
pub use map_info::{AnnounceMessages, GuildWarMapInfo};
pub use relations::{Relation, RelationResolver};
pub use schedule::{EventSchedule, EventTime};
