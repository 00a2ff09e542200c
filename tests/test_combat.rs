use star_raid::combat::{attack, collide, in_proximity};
use star_raid::consts::*;
use star_raid::entities::*;

fn avatar_at(x: f32, y: f32) -> Actor {
    Actor::new(ActorKind::Avatar, Vec2::new(x, y))
}

fn missile_at(x: f32, y: f32, y_speed: f32) -> Actor {
    let mut m = Actor::new(ActorKind::Projectile, Vec2::new(x, y));
    m.set_velocity(Vec2::new(0.0, y_speed));
    m
}

// ── collide ───────────────────────────────────────────────────────────────────

#[test]
fn missile_far_from_avatar_then_close() {
    let avatar = avatar_at(700.0, 650.0);
    let mut missile = missile_at(700.0, 40.0, 100.0);

    assert!(!collide(&avatar, &mut missile));
    assert!(missile.is_in_flight());

    *missile.position_mut() = Vec2::new(700.0, 620.0);
    assert!(collide(&avatar, &mut missile));
    assert_eq!(missile.state(), ActorState::Retired);
    assert_eq!(missile.position(), Vec2::new(5000.0, 5000.0));
    assert_eq!(missile.velocity(), Vec2::ZERO);
}

#[test]
fn hit_skips_first_explosion_frame() {
    let subject = missile_at(0.0, 0.0, 100.0);
    let mut target = avatar_at(10.0, 10.0);
    assert!(collide(&subject, &mut target));
    assert_eq!(target.explosion_frame(), 1);
}

#[test]
fn proximity_box_is_strict_on_both_axes() {
    let avatar = avatar_at(100.0, 100.0);
    let edge_x = missile_at(160.0, 100.0, 100.0);
    let edge_y = missile_at(100.0, 40.0, 100.0);
    let inside = missile_at(159.0, 41.0, 100.0);
    assert!(!in_proximity(&edge_x, &avatar));
    assert!(!in_proximity(&edge_y, &avatar));
    assert!(in_proximity(&inside, &avatar));
}

#[test]
fn box_not_circle() {
    // corner of the box is ~83 units away, still a hit
    let avatar = avatar_at(100.0, 100.0);
    let corner = missile_at(159.0, 159.0, 100.0);
    assert!(in_proximity(&corner, &avatar));
}

#[test]
fn resting_projectile_never_collides() {
    let mut avatar = avatar_at(700.0, 650.0);
    let mut resting = Actor::new(ActorKind::Projectile, Vec2::new(700.0, 650.0));

    assert!(!collide(&avatar, &mut resting));
    assert_eq!(resting.state(), ActorState::Active);
    assert_eq!(resting.position(), Vec2::new(700.0, 650.0));

    assert!(!collide(&resting, &mut avatar));
    assert_eq!(avatar.state(), ActorState::Active);
}

#[test]
fn collide_retires_target_only() {
    let a = avatar_at(100.0, 100.0);
    let mut b = Actor::new(ActorKind::Enemy, Vec2::new(110.0, 110.0));
    let a_before = a.clone();

    assert!(collide(&a, &mut b));
    assert_eq!(a, a_before);
    assert_eq!(a.state(), ActorState::Active);
    assert_eq!(b.state(), ActorState::Retired);
}

#[test]
fn retired_actors_are_not_hit_again() {
    let subject = avatar_at(OFF_FIELD.x, OFF_FIELD.y);
    let mut parked = Actor::new(ActorKind::Enemy, Vec2::ZERO);
    parked.retire();
    assert!(!collide(&subject, &mut parked));
    assert_eq!(parked.explosion_frame(), 0);
}

#[test]
fn exploding_actors_still_collide() {
    let near = avatar_at(0.0, 0.0);
    let mut exploding = Actor::new(ActorKind::Enemy, Vec2::new(10.0, 10.0));
    exploding.explode();
    assert!(collide(&near, &mut exploding));
    assert_eq!(exploding.state(), ActorState::Retired);
    assert_eq!(exploding.position(), OFF_FIELD);

    // and an exploding subject still lands hits
    let mut boom = Actor::new(ActorKind::Enemy, Vec2::new(700.0, 620.0));
    boom.explode();
    let mut avatar = avatar_at(700.0, 650.0);
    assert!(collide(&boom, &mut avatar));
    assert_eq!(avatar.state(), ActorState::Retired);
}

// ── attack ────────────────────────────────────────────────────────────────────

#[test]
fn enemy_attack_from_rest_repositions_and_aims_down() {
    let enemy = Actor::new(ActorKind::Enemy, Vec2::new(300.0, 100.0));
    let mut missile = Actor::new(ActorKind::Projectile, Vec2::ZERO);

    attack(&enemy, &mut missile, -100.0);
    assert_eq!(missile.position(), Vec2::new(300.0, 100.0));
    assert_eq!(missile.velocity(), Vec2::new(0.0, 100.0));
    assert!(missile.is_in_flight());
}

#[test]
fn avatar_attack_aims_up() {
    let avatar = avatar_at(700.0, 650.0);
    let mut shot = Actor::new(ActorKind::Projectile, Vec2::ZERO);
    attack(&avatar, &mut shot, AVATAR_SHOT);
    assert_eq!(shot.position(), Vec2::new(700.0, 650.0));
    assert_eq!(shot.velocity(), Vec2::new(0.0, -300.0));
}

#[test]
fn second_attack_in_flight_keeps_position() {
    let mut enemy = Actor::new(ActorKind::Enemy, Vec2::new(300.0, 100.0));
    let mut missile = Actor::new(ActorKind::Projectile, Vec2::ZERO);

    attack(&enemy, &mut missile, -100.0);
    missile.update(0.5);
    *enemy.position_mut() = Vec2::new(900.0, 400.0);

    attack(&enemy, &mut missile, -100.0);
    assert_eq!(missile.position(), Vec2::new(300.0, 150.0));
    assert_eq!(missile.velocity(), Vec2::new(0.0, 100.0));
}

#[test]
fn attack_reverses_in_flight_projectile_without_moving_it() {
    let enemy = Actor::new(ActorKind::Enemy, Vec2::new(300.0, 100.0));
    let mut missile = missile_at(300.0, 500.0, -100.0);
    attack(&enemy, &mut missile, ENEMY_SHOT);
    assert_eq!(missile.position(), Vec2::new(300.0, 500.0));
    assert_eq!(missile.velocity(), Vec2::new(0.0, 100.0));
}

#[test]
fn attack_relaunches_retired_projectile() {
    let enemy = Actor::new(ActorKind::Enemy, Vec2::new(500.0, 100.0));
    let mut missile = missile_at(0.0, 0.0, 100.0);
    missile.retire();

    attack(&enemy, &mut missile, ENEMY_SHOT);
    assert_eq!(missile.state(), ActorState::InFlight);
    assert_eq!(missile.position(), Vec2::new(500.0, 100.0));
}

#[test]
fn zero_magnitude_attack_leaves_projectile_at_rest() {
    let enemy = Actor::new(ActorKind::Enemy, Vec2::new(500.0, 100.0));
    let mut missile = Actor::new(ActorKind::Projectile, Vec2::ZERO);
    attack(&enemy, &mut missile, 0.0);
    assert_eq!(missile.position(), Vec2::new(500.0, 100.0));
    assert!(!missile.is_in_flight());
}

// ── roster wrappers ───────────────────────────────────────────────────────────

#[test]
fn roster_attack_and_collide_by_id() {
    let mut roster = Roster::new();
    let squad = roster.squads()[3]; // enemy at (700, 100)
    let avatar = roster.avatar();

    roster.attack(squad.enemy, squad.projectile, ENEMY_SHOT);
    assert_eq!(roster[squad.projectile].position(), Vec2::new(700.0, 100.0));

    assert!(!roster.collide(squad.projectile, avatar));
    *roster[squad.projectile].position_mut() = Vec2::new(700.0, 620.0);
    assert!(roster.collide(squad.projectile, avatar));
    assert_eq!(roster[avatar].state(), ActorState::Retired);
    assert!(roster[squad.projectile].is_in_flight());
}
