//! Proximity hits and projectile launches.
//!
//! Both rules work on plain actor references; `Roster` wrappers resolve ids
//! and borrow the two actors disjointly.

use log::debug;

use crate::consts::PROXIMITY;
use crate::entities::{Actor, ActorId, Roster, Vec2};

/// True when both actors are live and inside each other's proximity box.
///
/// The box is axis-aligned with half-extent `PROXIMITY`, strict on both axes.
pub fn in_proximity(subject: &Actor, target: &Actor) -> bool {
    if !subject.is_live() || !target.is_live() {
        return false;
    }
    let delta = (target.position() - subject.position()).abs();
    delta.x < PROXIMITY && delta.y < PROXIMITY
}

/// Hit test. On a hit `target` explodes, skips one animation frame, and is
/// retired off the field. `subject` is never touched.
///
/// Returns whether it was a hit.
pub fn collide(subject: &Actor, target: &mut Actor) -> bool {
    if !in_proximity(subject, target) {
        return false;
    }
    target.explode();
    target.advance_explosion();
    target.retire();
    true
}

/// Launch `projectile` from `source`.
///
/// A projectile at rest (`velocity.y == 0`) is first moved onto the source.
/// Velocity is always set to `(0, -magnitude)`: positive goes up the field,
/// negative goes down.
pub fn attack(source: &Actor, projectile: &mut Actor, magnitude: f32) {
    if projectile.velocity().y == 0.0 {
        *projectile.position_mut() = source.position();
    }
    projectile.launch(Vec2::new(0.0, -magnitude));
}

impl Roster {
    /// `collide` by id.
    pub fn collide(&mut self, subject: ActorId, target: ActorId) -> bool {
        let (s, t) = self.pair_mut(subject, target);
        let hit = collide(s, t);
        if hit {
            debug!("hit: {:?} retired {:?}", subject, target);
        }
        hit
    }

    /// `attack` by id.
    pub fn attack(&mut self, source: ActorId, projectile: ActorId, magnitude: f32) {
        let (s, p) = self.pair_mut(source, projectile);
        attack(s, p, magnitude);
    }
}
