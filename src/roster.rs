//! The fixed actor arena and the play field it lives on.
//!
//! Actors are stored once, in setup order, and addressed by `ActorId`.
//! Nothing is added or removed after `Roster::new`; "destroyed" actors are
//! retired in place.

use std::ops::{Index, IndexMut};

use log::info;

use crate::consts::{AVATAR_START, ENEMY_STARTS, FIELD_HEIGHT, FIELD_WIDTH, MARGIN_X, MARGIN_Y};
use crate::entities::{Actor, ActorId, ActorKind, PlayField, Roster, Squad, Vec2};
use crate::error::SetupError;

impl Roster {
    /// Match setup: one avatar, one projectile per enemy, one avatar shot.
    pub fn new() -> Roster {
        Roster::with_enemies(&ENEMY_STARTS)
    }

    /// Match setup with custom enemy starts. The avatar still starts at
    /// `AVATAR_START`; every projectile starts at rest.
    pub fn with_enemies(enemy_starts: &[Vec2]) -> Roster {
        let mut actors = Vec::with_capacity(enemy_starts.len() * 2 + 2);
        actors.push(Actor::new(ActorKind::Avatar, AVATAR_START));

        let first_enemy = actors.len();
        actors.extend(
            enemy_starts
                .iter()
                .map(|&pos| Actor::new(ActorKind::Enemy, pos)),
        );

        let first_projectile = actors.len();
        actors.extend(
            enemy_starts
                .iter()
                .map(|_| Actor::new(ActorKind::Projectile, Vec2::ZERO)),
        );

        let squads = (0..enemy_starts.len())
            .map(|i| Squad {
                enemy: ActorId(first_enemy + i),
                projectile: ActorId(first_projectile + i),
            })
            .collect();

        let avatar_shot = ActorId(actors.len());
        actors.push(Actor::new(ActorKind::Projectile, Vec2::ZERO));

        info!("roster ready: {} enemies, {} actors", enemy_starts.len(), actors.len());

        Roster {
            actors,
            avatar: ActorId(0),
            avatar_shot,
            squads,
        }
    }

    pub fn avatar(&self) -> ActorId {
        self.avatar
    }

    pub fn avatar_shot(&self) -> ActorId {
        self.avatar_shot
    }

    pub fn squads(&self) -> &[Squad] {
        &self.squads
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// All actors in setup order.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors.iter().enumerate().map(|(i, a)| (ActorId(i), a))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.actors.iter_mut()
    }

    pub fn enemies(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.squads.iter().map(|s| s.enemy)
    }

    /// Borrow one actor shared and another mutably.
    ///
    /// Panics if both ids are the same actor.
    pub fn pair_mut(&mut self, subject: ActorId, target: ActorId) -> (&Actor, &mut Actor) {
        assert_ne!(subject, target, "an actor can't be paired with itself");
        if subject.0 < target.0 {
            let (head, tail) = self.actors.split_at_mut(target.0);
            (&head[subject.0], &mut tail[0])
        } else {
            let (head, tail) = self.actors.split_at_mut(subject.0);
            (&tail[0], &mut head[target.0])
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Roster::new()
    }
}

impl Index<ActorId> for Roster {
    type Output = Actor;

    fn index(&self, id: ActorId) -> &Actor {
        &self.actors[id.0]
    }
}

impl IndexMut<ActorId> for Roster {
    fn index_mut(&mut self, id: ActorId) -> &mut Actor {
        &mut self.actors[id.0]
    }
}

// ── Play field ───────────────────────────────────────────────────────────────

impl PlayField {
    /// The field must be finite and wider/taller than both margins together.
    pub fn new(width: f32, height: f32) -> Result<PlayField, SetupError> {
        let valid = width.is_finite()
            && height.is_finite()
            && width > 2.0 * MARGIN_X
            && height > 2.0 * MARGIN_Y;
        if !valid {
            return Err(SetupError::InvalidField { width, height });
        }
        Ok(PlayField { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// True if `pos` lies on the visible field (edges included).
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

impl Default for PlayField {
    fn default() -> Self {
        PlayField {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}
