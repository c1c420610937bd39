//! Actor lookup for relationship queries
//!
//! `ActorGraph` is the read-only view the resolver needs: resolve an id to
//! an actor. `ActorRegistry` is the in-memory implementation, loadable from
//! a JSON snapshot of the combat session.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::actor::Actor;
use crate::core::error::{Result, WarError};
use crate::core::types::ActorId;

/// Read-only actor lookup
pub trait ActorGraph {
    fn actor(&self, id: ActorId) -> Option<&Actor>;
}

impl ActorGraph for AHashMap<ActorId, Actor> {
    fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.get(&id)
    }
}

/// Serialized form of a registry
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub actors: Vec<Actor>,
}

/// Storage for all actors in a combat session
#[derive(Debug, Clone, Default)]
pub struct ActorRegistry {
    actors: AHashMap<ActorId, Actor>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self {
            actors: AHashMap::new(),
        }
    }

    /// Add an actor, returning its id. Replaces any actor with the same id.
    pub fn spawn(&mut self, actor: impl Into<Actor>) -> ActorId {
        let actor = actor.into();
        let id = actor.id();
        self.actors.insert(id, actor);
        id
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn despawn(&mut self, id: ActorId) -> Option<Actor> {
        self.actors.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Build a registry from a snapshot, rejecting duplicate ids
    pub fn from_snapshot(snapshot: ActorSnapshot) -> Result<Self> {
        let mut registry = Self::new();
        for actor in snapshot.actors {
            let id = actor.id();
            if registry.actors.insert(id, actor).is_some() {
                return Err(WarError::DuplicateActor(id));
            }
        }
        tracing::debug!("Loaded actor snapshot with {} actors", registry.len());
        Ok(registry)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: ActorSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_snapshot(&self) -> ActorSnapshot {
        ActorSnapshot {
            actors: self.iter().copied().collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }
}

impl ActorGraph for ActorRegistry {
    fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.get(id)
    }
}
