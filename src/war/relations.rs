//! Ally / enemy resolution between guild war actors
//!
//! Rules depend on the observer's kind as well as the target's:
//!
//! - Players ally by shared non-zero guild, and ally the castle core only
//!   while their guild defends it. Wild monsters are always their enemies.
//! - The castle core sides with the defender guild and ignores wild monsters.
//! - Summoned monsters take their summoner's side; a player looking at a
//!   summon asks the summoner about the player instead.
//! - Wild monsters ally within their ally group, attack players, and leave
//!   the castle core and other groups alone.
//!
//! Summon chains are followed by recursion through `summoner`. Chains must be
//! acyclic; a cycle does not terminate. A summoner missing from the graph
//! makes the delegated query answer `false`.
//!
//! Ally and enemy are evaluated independently. A pair can be neither.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actor::{Actor, ActorGraph, GenericMonsterActor, PlayerActor};
use crate::core::types::ActorId;
use crate::war::context::WarContext;

/// Combined verdict for an ordered observer/target pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Ally,
    Enemy,
    Neutral,
}

/// Relationship queries over one snapshot of actor state
pub struct RelationResolver<'a, G: ActorGraph + ?Sized> {
    graph: &'a G,
    war: &'a WarContext,
}

impl<'a, G: ActorGraph + ?Sized> RelationResolver<'a, G> {
    pub fn new(graph: &'a G, war: &'a WarContext) -> Self {
        Self { graph, war }
    }

    /// Does `observer` consider `target` an ally? Absent targets are not.
    pub fn is_ally(&self, observer: &Actor, target: Option<&Actor>) -> bool {
        let Some(target) = target else {
            return false;
        };

        match observer {
            Actor::Player(player) => self.player_ally(player, observer, target),
            Actor::CastleCore(_) => self.core_ally(observer, target),
            Actor::Monster(monster) => match monster.summoner {
                Some(summoner) => self.summoned_ally(summoner, target),
                None => self.wild_ally(monster, observer, target),
            },
        }
    }

    /// Does `observer` consider `target` an enemy? Absent targets are not.
    pub fn is_enemy(&self, observer: &Actor, target: Option<&Actor>) -> bool {
        let Some(target) = target else {
            return false;
        };

        match observer {
            Actor::Player(player) => self.player_enemy(player, observer, target),
            Actor::CastleCore(_) => self.core_enemy(observer, target),
            Actor::Monster(monster) => match monster.summoner {
                Some(summoner) => self.summoned_enemy(summoner, target),
                None => self.wild_enemy(observer, target),
            },
        }
    }

    pub fn relation(&self, observer: &Actor, target: Option<&Actor>) -> Relation {
        if self.is_ally(observer, target) {
            Relation::Ally
        } else if self.is_enemy(observer, target) {
            Relation::Enemy
        } else {
            Relation::Neutral
        }
    }

    /// Id-based `is_ally`. Unknown ids count as absent.
    pub fn is_ally_by_id(&self, observer: ActorId, target: ActorId) -> bool {
        self.graph
            .actor(observer)
            .is_some_and(|observer| self.is_ally(observer, self.graph.actor(target)))
    }

    /// Id-based `is_enemy`. Unknown ids count as absent.
    pub fn is_enemy_by_id(&self, observer: ActorId, target: ActorId) -> bool {
        self.graph
            .actor(observer)
            .is_some_and(|observer| self.is_enemy(observer, self.graph.actor(target)))
    }

    pub fn relation_by_id(&self, observer: ActorId, target: ActorId) -> Relation {
        match self.graph.actor(observer) {
            Some(observer) => self.relation(observer, self.graph.actor(target)),
            None => Relation::Neutral,
        }
    }

    fn summoner(&self, id: ActorId) -> Option<&'a Actor> {
        let summoner = self.graph.actor(id);
        if summoner.is_none() {
            tracing::debug!("Summoner {:?} not found, treating as neither ally nor enemy", id);
        }
        summoner
    }

    // === PLAYER OBSERVER ===

    fn player_ally(&self, player: &PlayerActor, observer: &Actor, target: &Actor) -> bool {
        match target {
            Actor::Player(other) => other.guild.shares_with(player.guild),
            Actor::CastleCore(_) => self.war.is_defender(player.guild),
            Actor::Monster(GenericMonsterActor { summoner: Some(summoner), .. }) => {
                // The summon's side is whatever its summoner thinks of us
                tracing::trace!("Player ally check delegated to summoner {:?}", summoner);
                self.summoner(*summoner)
                    .is_some_and(|summoner| self.is_ally(summoner, Some(observer)))
            }
            Actor::Monster(_) => false,
        }
    }

    fn player_enemy(&self, player: &PlayerActor, observer: &Actor, target: &Actor) -> bool {
        match target {
            Actor::Player(other) => !other.guild.shares_with(player.guild),
            Actor::CastleCore(_) => !self.war.is_defender(player.guild),
            Actor::Monster(GenericMonsterActor { summoner: Some(summoner), .. }) => {
                tracing::trace!("Player enemy check delegated to summoner {:?}", summoner);
                self.summoner(*summoner)
                    .is_some_and(|summoner| self.is_enemy(summoner, Some(observer)))
            }
            Actor::Monster(_) => true,
        }
    }

    // === CASTLE CORE OBSERVER ===

    fn core_ally(&self, observer: &Actor, target: &Actor) -> bool {
        match target {
            Actor::Player(player) => self.war.is_defender(player.guild),
            Actor::Monster(GenericMonsterActor { summoner: Some(summoner), .. }) => self
                .summoner(*summoner)
                .is_some_and(|summoner| self.is_ally(observer, Some(summoner))),
            Actor::Monster(_) | Actor::CastleCore(_) => false,
        }
    }

    fn core_enemy(&self, observer: &Actor, target: &Actor) -> bool {
        match target {
            Actor::Player(player) => !self.war.is_defender(player.guild),
            Actor::Monster(GenericMonsterActor { summoner: Some(summoner), .. }) => self
                .summoner(*summoner)
                .is_some_and(|summoner| self.is_enemy(observer, Some(summoner))),
            Actor::Monster(_) | Actor::CastleCore(_) => false,
        }
    }

    // === SUMMONED MONSTER OBSERVER ===

    fn summoned_ally(&self, summoner: ActorId, target: &Actor) -> bool {
        if target.id() == summoner {
            return true;
        }
        tracing::trace!("Summon ally check delegated to summoner {:?}", summoner);
        self.summoner(summoner)
            .is_some_and(|summoner| self.is_ally(summoner, Some(target)))
    }

    fn summoned_enemy(&self, summoner: ActorId, target: &Actor) -> bool {
        if target.id() == summoner {
            return false;
        }
        tracing::trace!("Summon enemy check delegated to summoner {:?}", summoner);
        self.summoner(summoner)
            .is_some_and(|summoner| self.is_enemy(summoner, Some(target)))
    }

    // === WILD MONSTER OBSERVER ===

    fn wild_ally(&self, monster: &GenericMonsterActor, observer: &Actor, target: &Actor) -> bool {
        match target {
            Actor::Player(_) | Actor::CastleCore(_) => false,
            Actor::Monster(GenericMonsterActor { summoner: Some(summoner), .. }) => self
                .summoner(*summoner)
                .is_some_and(|summoner| self.is_ally(observer, Some(summoner))),
            Actor::Monster(other) => other.ally_group == monster.ally_group,
        }
    }

    fn wild_enemy(&self, observer: &Actor, target: &Actor) -> bool {
        match target {
            Actor::Player(_) => true,
            Actor::CastleCore(_) => false,
            // Hostile to any summon whose summoner is not on our side
            Actor::Monster(GenericMonsterActor { summoner: Some(summoner), .. }) => self
                .summoner(*summoner)
                .is_some_and(|summoner| !self.is_ally(observer, Some(summoner))),
            // Different ally groups leave each other alone
            Actor::Monster(_) => false,
        }
    }
}

impl<'a, G: ActorGraph + Sync + ?Sized> RelationResolver<'a, G> {
    /// Classify many targets for one observer in parallel.
    ///
    /// Output order matches `targets`. Unknown target ids are `Neutral`.
    pub fn classify_targets(&self, observer: &Actor, targets: &[ActorId]) -> Vec<(ActorId, Relation)> {
        targets
            .par_iter()
            .map(|&id| (id, self.relation(observer, self.graph.actor(id))))
            .collect()
    }

    /// Ids of the targets `observer` is hostile to, in input order
    pub fn enemies_among(&self, observer: &Actor, targets: &[ActorId]) -> Vec<ActorId> {
        targets
            .par_iter()
            .filter(|&&id| self.is_enemy(observer, self.graph.actor(id)))
            .copied()
            .collect()
    }
}
