//! Single-particle motion: free flight and wall reflection inside the box.

use psim_core::tests::test_helpers::approx_vec;
use psim_core::{DVec2, Particle};

fn advance_alone(p: Particle, width: f64, height: f64) -> Particle {
    let snapshot = [p];
    p.advance(width, height, &snapshot, 0, 1.0)
}

#[test]
fn left_wall_flips_x_velocity_only() {
    // Heading further into the left wall: x reflects, y is untouched.
    let p = Particle::mover(DVec2::new(1.0, 5.0), 1.0, DVec2::new(-1.0, 2.0), 1.0);
    let after = advance_alone(p, 20.0, 20.0);
    assert_eq!(after.velocity(), DVec2::new(1.0, 2.0));
    assert_eq!(after.center(), DVec2::new(2.0, 7.0));
}

#[test]
fn right_wall_reflects_incoming_mover() {
    let p = Particle::mover(DVec2::new(19.0, 5.0), 1.0, DVec2::new(1.0, 2.0), 1.0);
    let after = advance_alone(p, 20.0, 20.0);
    assert_eq!(after.velocity(), DVec2::new(-1.0, 2.0));
    assert_eq!(after.center(), DVec2::new(18.0, 7.0));
}

#[test]
fn floor_and_ceiling_reflect_y() {
    let low = Particle::mover(DVec2::new(6.0, 1.0), 1.0, DVec2::new(0.0, -2.0), 1.0);
    let after = advance_alone(low, 20.0, 20.0);
    assert_eq!(after.velocity(), DVec2::new(0.0, 2.0));
    assert_eq!(after.center(), DVec2::new(6.0, 3.0));

    let high = Particle::mover(DVec2::new(6.0, 19.0), 2.0, DVec2::new(0.0, 2.0), 1.0);
    let after = advance_alone(high, 20.0, 20.0);
    assert_eq!(after.velocity(), DVec2::new(0.0, -2.0));
    assert_eq!(after.center(), DVec2::new(6.0, 17.0));
}

#[test]
fn mover_beyond_wall_but_leaving_is_not_reflected() {
    // Already past the right wall yet moving back inside: the displacement
    // sign test must not flip the velocity a second time.
    let p = Particle::mover(DVec2::new(20.0, 2.0), 1.0, DVec2::new(-1.0, 2.0), 1.0);
    let after = advance_alone(p, 20.0, 20.0);
    assert_eq!(after.velocity(), DVec2::new(-1.0, 2.0));
    assert_eq!(after.center(), DVec2::new(19.0, 4.0));
}

#[test]
fn corner_hit_flips_both_axes_once_each() {
    let p = Particle::mover(DVec2::new(1.0, 1.0), 1.0, DVec2::new(-2.0, -3.0), 1.0);
    let after = advance_alone(p, 20.0, 20.0);
    assert_eq!(after.velocity(), DVec2::new(2.0, 3.0));
    assert_eq!(after.center(), DVec2::new(3.0, 4.0));
}

#[test]
fn stationary_mover_stays_put() {
    let p = Particle::mover(DVec2::new(10.0, 10.0), 1.0, DVec2::ZERO, 1.0);
    let after = advance_alone(p, 20.0, 20.0);
    assert!(approx_vec(after.center(), DVec2::new(10.0, 10.0), 0.0));
    assert_eq!(after.velocity(), DVec2::ZERO);
}
