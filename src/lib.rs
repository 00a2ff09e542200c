//! Star Raid - per-frame entity simulation for a 2D arcade shooter
//!
//! Core modules:
//! - `entities`: plain data (actors, roster, frame input, draw commands)
//! - `actor`: the actor state machine
//! - `roster`: the fixed arena of actors for one match
//! - `combat`: proximity hits and projectile launches
//! - `compute`: AI pass and the advance-one-frame entry point
//!
//! The library never touches the terminal. The binary owns input polling,
//! timing and drawing, and talks to the core through `FrameInput` and
//! `DrawCommand`.

pub mod actor;
pub mod combat;
pub mod compute;
pub mod entities;
pub mod error;
pub mod roster;

pub use entities::Vec2;
pub use error::SetupError;

/// Rule constants. These are fixed; the game has no configurable rules.
pub mod consts {
    use glam::Vec2;

    /// Half-extent of the axis-aligned proximity box used for hits.
    pub const PROXIMITY: f32 = 60.0;

    /// Where retired actors are parked, far outside any play field.
    pub const OFF_FIELD: Vec2 = Vec2::new(5000.0, 5000.0);

    /// Explosion animation length in frames.
    pub const EXPLOSION_FRAMES: u32 = 8;
    /// Host period between explosion frame advances.
    pub const EXPLOSION_TICK_MS: u64 = 250;

    /// Velocity added per direction flag per `move_in` call (units/s).
    pub const MOVE_IMPULSE: f32 = 0.1;

    /// Avatar may move freely while this far from the left/right edge.
    pub const MARGIN_X: f32 = 50.0;
    /// Avatar may move freely while this far from the top/bottom edge.
    pub const MARGIN_Y: f32 = 70.0;

    /// Launch magnitude of the avatar's shot (positive = upward).
    pub const AVATAR_SHOT: f32 = 300.0;
    /// Magnitude used when an enemy projectile is recycled at the bottom edge.
    pub const ENEMY_RECYCLE: f32 = 100.0;
    /// Magnitude of the AI's continuous bombardment (negative = downward).
    pub const ENEMY_SHOT: f32 = -100.0;
    /// Downward drift every enemy is reset to each frame.
    pub const ENEMY_DRIFT: Vec2 = Vec2::new(0.0, 25.0);

    /// Default play field, in world units.
    pub const FIELD_WIDTH: f32 = 1480.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Match setup positions.
    pub const AVATAR_START: Vec2 = Vec2::new(700.0, 650.0);
    pub const ENEMY_STARTS: [Vec2; 7] = [
        Vec2::new(100.0, 100.0),
        Vec2::new(300.0, 100.0),
        Vec2::new(500.0, 100.0),
        Vec2::new(700.0, 100.0),
        Vec2::new(900.0, 100.0),
        Vec2::new(1100.0, 100.0),
        Vec2::new(1300.0, 100.0),
    ];
}
