//! Actor state machine.
//!
//! ```text
//!   Active ──attack──▶ InFlight        (projectiles only)
//!     ▲  ◀──stop─────────┘
//!     │
//!   explode ──▶ Exploding ──advance × EXPLOSION_FRAMES──▶ Active
//!                    │
//!                  retire ──▶ Retired ──attack──▶ InFlight (projectiles only)
//! ```

use log::debug;

use crate::consts::{EXPLOSION_FRAMES, MOVE_IMPULSE, OFF_FIELD};
use crate::entities::{Actor, ActorKind, ActorState, Direction, Vec2};

impl Actor {
    /// A fresh actor at rest.
    pub fn new(kind: ActorKind, position: Vec2) -> Actor {
        Actor {
            kind,
            position,
            velocity: Vec2::ZERO,
            state: ActorState::Active,
            explosion_frame: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn state(&self) -> ActorState {
        self.state
    }

    pub fn explosion_frame(&self) -> u32 {
        self.explosion_frame
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn position_mut(&mut self) -> &mut Vec2 {
        &mut self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Overwrite velocity. A projectile at rest or in flight is re-tagged to
    /// match its new vertical velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        self.sync_flight();
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == ActorState::InFlight
    }

    /// Whether the actor can take part in a hit, as subject or target.
    ///
    /// Everything on the field is live, exploding actors included, except a
    /// projectile that isn't in flight.
    pub fn is_live(&self) -> bool {
        match self.state {
            ActorState::Retired => false,
            ActorState::InFlight => true,
            ActorState::Active | ActorState::Exploding => self.kind != ActorKind::Projectile,
        }
    }

    // ── Operations ───────────────────────────────────────────────────────────

    /// Add one `MOVE_IMPULSE` to velocity for every flag set in `direction`.
    /// Exploding and retired actors ignore it.
    pub fn move_in(&mut self, direction: Direction) {
        if matches!(self.state, ActorState::Exploding | ActorState::Retired) {
            return;
        }
        let mut velocity = self.velocity;
        if direction.contains(Direction::LEFT) {
            velocity.x -= MOVE_IMPULSE;
        }
        if direction.contains(Direction::RIGHT) {
            velocity.x += MOVE_IMPULSE;
        }
        if direction.contains(Direction::FORWARD) {
            velocity.y -= MOVE_IMPULSE;
        }
        if direction.contains(Direction::BACKWARD) {
            velocity.y += MOVE_IMPULSE;
        }
        self.set_velocity(velocity);
    }

    pub fn stop(&mut self) {
        self.set_velocity(Vec2::ZERO);
    }

    /// Integrate position. Runs in every state, retired actors included.
    pub fn update(&mut self, elapsed: f32) {
        self.position += self.velocity * elapsed;
    }

    pub fn explode(&mut self) {
        self.state = ActorState::Exploding;
        self.explosion_frame = 0;
    }

    /// Step the explosion animation. Returns true while frames remain.
    ///
    /// The call that reaches `EXPLOSION_FRAMES` brings the actor back to
    /// `Active` at rest and returns false. Not exploding: no-op, false.
    pub fn advance_explosion(&mut self) -> bool {
        if self.state != ActorState::Exploding {
            return false;
        }
        self.explosion_frame += 1;
        if self.explosion_frame < EXPLOSION_FRAMES {
            return true;
        }
        self.state = ActorState::Active;
        self.explosion_frame = 0;
        self.velocity = Vec2::ZERO;
        false
    }

    /// Soft-delete: zero velocity and park off the field.
    pub fn retire(&mut self) {
        self.velocity = Vec2::ZERO;
        self.position = OFF_FIELD;
        self.state = ActorState::Retired;
        debug!("{:?} retired", self.kind);
    }

    /// Assign a launch velocity. A projectile with nonzero vertical velocity
    /// enters flight from any state.
    pub(crate) fn launch(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        if self.kind == ActorKind::Projectile && velocity.y != 0.0 {
            self.state = ActorState::InFlight;
        } else {
            self.sync_flight();
        }
    }

    fn sync_flight(&mut self) {
        if self.kind != ActorKind::Projectile {
            return;
        }
        self.state = match self.state {
            ActorState::Active | ActorState::InFlight if self.velocity.y != 0.0 => {
                ActorState::InFlight
            }
            ActorState::Active | ActorState::InFlight => ActorState::Active,
            other => other,
        };
    }
}
