//! System-level orchestration: the particle collection, the per-frame
//! parallel advance, validated insertion, and the radial repulsion impulse.

use log::debug;
use rand::{rng, rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::particle::Particle;
use crate::vector::{self, DVec2};

/// Per-particle draw descriptor exported to the presentation layer.
/// Carries no physics state beyond what is needed to paint a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawInfo {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub draw_tag: u32,
}

/// A bounded population of circular particles advanced one frame at a time.
///
/// `max_particles`, `repulse_strength` and `restitution` are fixed for the
/// system's whole life. Particles enter only through the validated
/// [`System::insert`] path and leave only through [`System::clear`].
///
/// `num_particles` counts lifetime insertions and is never decremented, not
/// even by `clear`; a cleared system can therefore still be at capacity.
/// Legacy behavior, kept deliberately.
#[derive(Debug)]
pub struct System {
    particles: Vec<Particle>,
    max_particles: usize,
    num_particles: usize,
    repulse_strength: f64,
    restitution: f64,
    rng: StdRng,
}

impl System {
    /// Creates an empty system.
    ///
    /// `seed` fixes the RNG used for new movers' initial velocities; pass
    /// `None` for an entropy seed.
    pub fn new(
        max_particles: usize,
        repulse_strength: f64,
        restitution: f64,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::seed_from_u64(rng().random()),
        };
        Self {
            particles: Vec::new(),
            max_particles,
            num_particles: 0,
            repulse_strength,
            restitution,
            rng,
        }
    }

    /// Advances every particle by one frame inside the
    /// `[0, width] x [0, height]` box.
    ///
    /// One task per particle, all reading the same pre-frame snapshot; the
    /// next frame replaces the collection only after every task has joined.
    /// Frame results are therefore independent of task scheduling order, and
    /// the `&mut self` receiver rules out structural mutation while a frame
    /// is in flight.
    pub fn advance(&mut self, width: u32, height: u32) {
        let snapshot = self.particles.clone();
        let (w, h) = (f64::from(width), f64::from(height));
        let restitution = self.restitution;
        self.particles = snapshot
            .par_iter()
            .enumerate()
            .map(|(i, p)| p.advance(w, h, &snapshot, i, restitution))
            .collect();
    }

    /// Validated entry point for a caller-built particle.
    ///
    /// Rejects (leaving the system untouched) when the lifetime insertion
    /// count has reached `max_particles`, or when the new disc would overlap
    /// any existing particle (`distance < radius sum`, strict). Counts the
    /// insertion and appends on success.
    pub fn insert(&mut self, particle: Particle) -> bool {
        if self.num_particles >= self.max_particles {
            debug!("insertion rejected: max particles reached");
            return false;
        }
        let center = particle.center();
        if self
            .particles
            .iter()
            .any(|p| center.distance(p.center()) < particle.radius() + p.radius())
        {
            debug!("insertion rejected: particle at that location already");
            return false;
        }
        self.num_particles += 1;
        self.particles.push(particle);
        true
    }

    /// Adds a mover at `(x, y)`, subject to [`System::insert`]'s admission
    /// rules.
    ///
    /// With `restitution >= 1.0` the mover starts at rest; lossy
    /// configurations get a small random initial velocity in `[0,1) x [0,1)`
    /// so the population does not freeze solid.
    pub fn add_mover(&mut self, x: f64, y: f64, radius: f64, mass: f64) -> bool {
        let velocity = if self.restitution >= 1.0 {
            DVec2::ZERO
        } else {
            DVec2::new(self.rng.random(), self.rng.random())
        };
        let ok = self.insert(Particle::mover(DVec2::new(x, y), radius, velocity, mass));
        if ok {
            debug!("created mover at ({x}, {y})");
        }
        ok
    }

    /// Adds an immovable anchor at `(x, y)`, subject to [`System::insert`]'s
    /// admission rules.
    pub fn add_anchor(&mut self, x: f64, y: f64, radius: f64) -> bool {
        let ok = self.insert(Particle::anchor(DVec2::new(x, y), radius));
        if ok {
            debug!("created anchor at ({x}, {y})");
        }
        ok
    }

    /// Removes every particle. The lifetime insertion counter keeps its
    /// value, so capacity may still be exhausted afterwards.
    pub fn clear(&mut self) {
        self.particles.clear();
        debug!("system cleared");
    }

    /// Applies an inverse-square radial impulse originating at `(x, y)` to
    /// every particle, in parallel.
    ///
    /// `dir = origin - center` points from the particle toward the origin;
    /// the negative force magnitude `-repulse_strength / mag^2` reverses it,
    /// so a positive strength pushes particles away.
    ///
    /// A particle whose center coincides exactly with the origin has no
    /// direction to push along: its task fails, and after every task has
    /// joined the call reports `Err(ZeroMagnitude)`, but every non-failing
    /// particle keeps the force it received. Partial effect on failure is
    /// the documented contract.
    pub fn repulse(&mut self, x: f64, y: f64) -> Result<()> {
        let origin = DVec2::new(x, y);
        let strength = self.repulse_strength;
        let outcomes: Vec<Result<Particle>> = self
            .particles
            .par_iter()
            .map(|p| {
                let dir = origin - p.center();
                let mag = dir.length();
                let unit = vector::normalize(dir)?;
                let force = -strength / (mag * mag);
                Ok(p.apply_force(unit * force))
            })
            .collect();

        let mut zero_mag = false;
        for (slot, outcome) in self.particles.iter_mut().zip(outcomes) {
            match outcome {
                Ok(p) => *slot = p,
                Err(Error::ZeroMagnitude) => zero_mag = true,
            }
        }
        if zero_mag {
            Err(Error::ZeroMagnitude)
        } else {
            Ok(())
        }
    }

    /// Draw descriptors for every particle, in insertion order.
    ///
    /// Reads current state without any frame synchronization; callers must
    /// sequence this with [`System::advance`] from a single driver loop,
    /// which the `&self`/`&mut self` split already enforces within safe code.
    pub fn draw_info(&self) -> Vec<DrawInfo> {
        self.particles
            .iter()
            .map(|p| DrawInfo {
                x: p.center().x,
                y: p.center().y,
                radius: p.radius(),
                draw_tag: p.draw_tag(),
            })
            .collect()
    }

    /// Current particles, in insertion order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles currently in the collection.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Total kinetic energy `sum 1/2 m |v|^2` (diagnostic). Anchors report
    /// zero velocity and contribute nothing.
    pub fn kinetic_energy(&self) -> f64 {
        self.particles
            .iter()
            .map(|p| 0.5 * p.mass() * p.velocity().length_squared())
            .sum()
    }
}
