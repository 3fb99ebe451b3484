//! Handles bodies and such

use crate::surface::{Sprite, Surface, RED};
use crate::vector::{angle, distance};
use crate::Viewport;

use euclid::default::{Point2D, Vector2D};
use log::debug;

/// A Kinemat holds all the kinematic information about something.
/// Velocity is in position units per frame, there is no dt.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Kinemat {
    pub pos: Point2D<f64>,
    pub vel: Vector2D<f64>,
}

impl Kinemat {
    pub fn new(pos: Point2D<f64>, vel: Vector2D<f64>) -> Self {
        Self { pos, vel }
    }

    /// One frame of semi-implicit Euler: the new velocity moves the position.
    pub fn advance(&mut self, acc: Vector2D<f64>) {
        self.vel += acc;
        self.pos += self.vel;
    }
}

/// The one big heavy thing everything falls towards.
/// It never moves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Attractor {
    pos: Point2D<f64>,
    mass: f64,
    /// Both how big it's drawn and how close you can get before hitting it
    radius: f64,
}

impl Attractor {
    pub fn new(pos: Point2D<f64>, mass: f64, radius: f64) -> Self {
        Self { pos, mass, radius }
    }

    pub fn pos(&self) -> Point2D<f64> {
        self.pos
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Blit the sprite so it's centered on the attractor.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let corner = self.pos - Vector2D::new(self.radius, self.radius);
        surface.blit(Sprite::Attractor, corner)
    }
}

/// How projectiles get drawn. Decided once when the assets load.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Appearance {
    /// Half the width of a projectile, in pixels
    pub projectile_size: f64,
    /// If false there's no projectile picture and we draw circles instead
    pub projectile_sprite: bool,
}

/// What happened when a projectile tried to step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Advanced,
    /// The projectile sat exactly on the attractor so there's no direction to pull in.
    /// Nothing moved.
    Degenerate,
}

/// Something the user threw.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projectile {
    kinemat: Kinemat,
    mass: f64,
}

impl Projectile {
    /// Returns `None` if the mass isn't a positive number, or if the position or velocity
    /// isn't finite. A NaN position would never count as off screen and never get culled.
    pub fn new(pos: Point2D<f64>, vel: Vector2D<f64>, mass: f64) -> Option<Self> {
        let finite = pos.x.is_finite() && pos.y.is_finite() && vel.x.is_finite() && vel.y.is_finite();
        if finite && mass.is_finite() && mass > 0.0 {
            Some(Self {
                kinemat: Kinemat::new(pos, vel),
                mass,
            })
        } else {
            None
        }
    }

    /// For callers that already checked the mass.
    pub(crate) fn launched(pos: Point2D<f64>, vel: Vector2D<f64>, mass: f64) -> Self {
        debug_assert!(mass > 0.0);
        Self {
            kinemat: Kinemat::new(pos, vel),
            mass,
        }
    }

    pub fn pos(&self) -> Point2D<f64> {
        self.kinemat.pos
    }

    pub fn vel(&self) -> Vector2D<f64> {
        self.kinemat.vel
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Pull towards the attractor for one frame and then move.
    pub fn step(&mut self, attractor: &Attractor, grav_constant: f64) -> Step {
        let distance = distance(self.kinemat.pos, attractor.pos);
        if distance == 0.0 {
            debug!(
                "projectile at {:?} sits on the attractor, skipping its step",
                self.kinemat.pos
            );
            return Step::Degenerate;
        }

        let force = grav_constant * self.mass * attractor.mass / distance.powi(2);
        // Yes the mass cancels out. Going through the force keeps the rounding the same.
        let acceleration = force / self.mass;
        let angle = angle(self.kinemat.pos, attractor.pos);

        let acc = Vector2D::new(acceleration * angle.cos(), acceleration * angle.sin());
        self.kinemat.advance(acc);
        Step::Advanced
    }

    /// Sitting exactly on an edge still counts as on screen.
    pub fn is_off_screen(&self, viewport: Viewport) -> bool {
        let pos = self.kinemat.pos;
        pos.x < 0.0 || pos.x > viewport.width || pos.y < 0.0 || pos.y > viewport.height
    }

    /// Touching the edge counts as a hit.
    pub fn has_collided(&self, attractor: &Attractor, collision_radius: f64) -> bool {
        distance(self.kinemat.pos, attractor.pos) <= collision_radius
    }

    /// The position gets snapped to the pixel grid before drawing.
    pub fn draw<S: Surface>(&self, surface: &mut S, appearance: &Appearance) -> Result<(), S::Error> {
        let snapped = Point2D::new(self.kinemat.pos.x.trunc(), self.kinemat.pos.y.trunc());
        let size = appearance.projectile_size;
        if appearance.projectile_sprite {
            surface.blit(Sprite::Projectile, snapped - Vector2D::new(size, size))
        } else {
            surface.draw_circle(snapped, size, RED)
        }
    }
}
