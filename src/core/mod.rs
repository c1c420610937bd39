pub mod calendar;
pub mod error;
pub mod types;

pub use calendar::{WallClock, Weekday};
pub use error::{Result, WarError};
pub use types::{ActorId, AllyGroupId, GuildId};
