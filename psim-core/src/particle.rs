//! Particle variants and their per-frame physics.

use crate::vector::DVec2;

/// Effective mass an [`Particle::Anchor`] reports inside the collision
/// response formula. Anchors never move, so the value only shapes how hard
/// movers bounce off them.
pub const ANCHOR_MASS: f64 = 100.0;

/// Draw tag for mover particles.
pub const MOVER_TAG: u32 = 0;
/// Draw tag for anchor particles.
pub const ANCHOR_TAG: u32 = 1;

/// A circular particle in the system.
///
/// A particle is one of two variants for its whole life:
/// - `Mover`: finite mass, moves under velocity/acceleration, bounces off
///   walls and other particles.
/// - `Anchor`: immovable, absorbs no force, and participates in other
///   particles' collision response with a fixed large mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Particle {
    Mover {
        center: DVec2,
        radius: f64,
        velocity: DVec2,
        acceleration: DVec2,
        mass: f64,
    },
    Anchor {
        center: DVec2,
        radius: f64,
    },
}

impl Particle {
    /// A mover at rest with no accumulated force.
    pub fn mover(center: DVec2, radius: f64, velocity: DVec2, mass: f64) -> Self {
        Particle::Mover {
            center,
            radius,
            velocity,
            acceleration: DVec2::ZERO,
            mass,
        }
    }

    /// An immovable anchor.
    pub fn anchor(center: DVec2, radius: f64) -> Self {
        Particle::Anchor { center, radius }
    }

    pub fn center(&self) -> DVec2 {
        match *self {
            Particle::Mover { center, .. } | Particle::Anchor { center, .. } => center,
        }
    }

    pub fn radius(&self) -> f64 {
        match *self {
            Particle::Mover { radius, .. } | Particle::Anchor { radius, .. } => radius,
        }
    }

    /// Mover mass, or [`ANCHOR_MASS`] for anchors.
    pub fn mass(&self) -> f64 {
        match *self {
            Particle::Mover { mass, .. } => mass,
            Particle::Anchor { .. } => ANCHOR_MASS,
        }
    }

    /// Current velocity. Anchors always report zero.
    pub fn velocity(&self) -> DVec2 {
        match *self {
            Particle::Mover { velocity, .. } => velocity,
            Particle::Anchor { .. } => DVec2::ZERO,
        }
    }

    /// Integer appearance tag consumed by the presentation layer.
    pub fn draw_tag(&self) -> u32 {
        match *self {
            Particle::Mover { .. } => MOVER_TAG,
            Particle::Anchor { .. } => ANCHOR_TAG,
        }
    }

    /// Computes this particle's state one frame later.
    ///
    /// `snapshot` is the read-only pre-frame state of every particle in the
    /// system; `self_index` is this particle's slot in it, skipped during the
    /// collision scan. Anchors return themselves unchanged.
    ///
    /// The mover update, in order:
    /// 1. Wall reflection against the `[0, width] x [0, height]` box, per
    ///    axis, using the predicted position and the sign of the predicted
    ///    displacement (so each axis flips at most once per frame).
    /// 2. Pairwise collision scan in snapshot index order; every overlapping
    ///    pair rewrites the velocity sequentially, which makes simultaneous
    ///    multi-contact frames order-dependent on the scan order. That is
    ///    documented behavior, deterministic for a fixed snapshot.
    /// 3. Integration: velocity += acceleration, acceleration cleared,
    ///    center += velocity.
    pub fn advance(
        &self,
        width: f64,
        height: f64,
        snapshot: &[Particle],
        self_index: usize,
        restitution: f64,
    ) -> Particle {
        let Particle::Mover {
            mut center,
            radius,
            mut velocity,
            mut acceleration,
            mass,
        } = *self
        else {
            return *self;
        };

        let predicted = center + velocity;
        let step = predicted - center;
        if (predicted.x - radius <= 0.0 && step.x < 0.0)
            || (predicted.x + radius >= width && step.x > 0.0)
        {
            velocity.x = -velocity.x;
        }
        if (predicted.y - radius <= 0.0 && step.y < 0.0)
            || (predicted.y + radius >= height && step.y > 0.0)
        {
            velocity.y = -velocity.y;
        }

        for (i, other) in snapshot.iter().enumerate() {
            if i != self_index && center.distance(other.center()) <= radius + other.radius() {
                velocity = collision_response(center, velocity, mass, other, restitution);
            }
        }

        velocity += acceleration;
        acceleration = DVec2::ZERO;
        center += velocity;

        Particle::Mover {
            center,
            radius,
            velocity,
            acceleration,
            mass,
        }
    }

    /// Applies a one-frame impulse: movers accumulate `force / mass` into
    /// their acceleration (cleared again at the end of the next frame),
    /// anchors ignore the force entirely.
    pub fn apply_force(&self, force: DVec2) -> Particle {
        match *self {
            Particle::Mover {
                center,
                radius,
                velocity,
                acceleration,
                mass,
            } => Particle::Mover {
                center,
                radius,
                velocity,
                acceleration: acceleration + force / mass,
                mass,
            },
            Particle::Anchor { .. } => *self,
        }
    }
}

/// Post-collision velocity for a mover `a` (given by `center`, `velocity`,
/// `mass`) hitting particle `b`, scaled by the restitution coefficient:
///
/// ```text
/// d  = a.center - b.center
/// v  = dot(a.vel - b.vel, d) / dot(d, d)
/// m  = 2 * b.mass / (a.mass + b.mass)
/// v' = (a.vel - d * (m * v)) * restitution
/// ```
///
/// Perfectly coincident centers make `dot(d, d)` zero and the result NaN;
/// the engine lets that propagate rather than raising an error.
fn collision_response(
    center: DVec2,
    velocity: DVec2,
    mass: f64,
    b: &Particle,
    restitution: f64,
) -> DVec2 {
    let d = center - b.center();
    let v = (velocity - b.velocity()).dot(d) / d.dot(d);
    let m = 2.0 * b.mass() / (mass + b.mass());
    (velocity - d * (m * v)) * restitution
}
