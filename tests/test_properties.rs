use proptest::prelude::*;

use star_raid::combat::{attack, collide};
use star_raid::consts::*;
use star_raid::entities::*;

fn coord() -> impl Strategy<Value = f32> {
    -200.0f32..1700.0
}

fn kind() -> impl Strategy<Value = ActorKind> {
    prop_oneof![
        Just(ActorKind::Avatar),
        Just(ActorKind::Enemy),
        Just(ActorKind::Projectile),
    ]
}

fn nonzero_magnitude() -> impl Strategy<Value = f32> {
    prop_oneof![-500.0f32..-1.0, 1.0f32..500.0]
}

proptest! {
    #[test]
    fn explosion_reports_k_minus_one_trues(kind in kind(), x in coord(), y in coord()) {
        let mut a = Actor::new(kind, Vec2::new(x, y));
        a.explode();
        let results: Vec<bool> = (0..EXPLOSION_FRAMES).map(|_| a.advance_explosion()).collect();
        let trues = results.iter().filter(|&&r| r).count() as u32;
        prop_assert_eq!(trues, EXPLOSION_FRAMES - 1);
        prop_assert!(!results[results.len() - 1]);
    }

    #[test]
    fn resting_projectile_is_never_retired(
        sx in coord(), sy in coord(), dx in -59.0f32..59.0, dy in -59.0f32..59.0,
    ) {
        let subject = Actor::new(ActorKind::Avatar, Vec2::new(sx, sy));
        let mut resting = Actor::new(ActorKind::Projectile, Vec2::new(sx + dx, sy + dy));
        let before = resting.clone();
        prop_assert!(!collide(&subject, &mut resting));
        prop_assert_eq!(resting, before);
    }

    #[test]
    fn collide_never_touches_subject(
        sk in kind(), tk in kind(),
        sx in coord(), sy in coord(), tx in coord(), ty in coord(),
        vy in nonzero_magnitude(),
    ) {
        let mut subject = Actor::new(sk, Vec2::new(sx, sy));
        subject.set_velocity(Vec2::new(0.0, vy));
        let mut target = Actor::new(tk, Vec2::new(tx, ty));
        target.set_velocity(Vec2::new(0.0, vy));

        let before = subject.clone();
        let hit = collide(&subject, &mut target);
        prop_assert_eq!(&subject, &before);
        if hit {
            prop_assert_eq!(target.state(), ActorState::Retired);
            prop_assert_eq!(target.position(), OFF_FIELD);
            prop_assert_eq!(target.velocity(), Vec2::ZERO);
        }
    }

    #[test]
    fn proximity_is_symmetric_in_geometry(
        ax in coord(), ay in coord(), bx in coord(), by in coord(),
    ) {
        let a = Actor::new(ActorKind::Avatar, Vec2::new(ax, ay));
        let b = Actor::new(ActorKind::Enemy, Vec2::new(bx, by));
        let mut a2 = a.clone();
        let mut b2 = b.clone();
        prop_assert_eq!(collide(&a, &mut b2), collide(&b, &mut a2));
    }

    #[test]
    fn reattack_in_flight_only_reassigns_velocity(
        sx in coord(), sy in coord(), m1 in nonzero_magnitude(), m2 in nonzero_magnitude(),
        nx in coord(), ny in coord(),
    ) {
        let mut source = Actor::new(ActorKind::Enemy, Vec2::new(sx, sy));
        let mut p = Actor::new(ActorKind::Projectile, Vec2::ZERO);
        attack(&source, &mut p, m1);
        prop_assert_eq!(p.position(), Vec2::new(sx, sy));

        *source.position_mut() = Vec2::new(nx, ny);
        attack(&source, &mut p, m2);
        prop_assert_eq!(p.position(), Vec2::new(sx, sy));
        prop_assert_eq!(p.velocity(), Vec2::new(0.0, -m2));
        prop_assert!(p.is_in_flight());
    }

    #[test]
    fn stop_twice_equals_stop_once(vx in -300.0f32..300.0, vy in -300.0f32..300.0, kind in kind()) {
        let mut a = Actor::new(kind, Vec2::ZERO);
        a.set_velocity(Vec2::new(vx, vy));
        a.stop();
        let once = a.clone();
        a.stop();
        prop_assert_eq!(a.velocity(), Vec2::ZERO);
        prop_assert_eq!(a, once);
    }
}
