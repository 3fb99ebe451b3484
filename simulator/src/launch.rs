//! Turns a click-and-drag into a projectile.

use crate::bodies::Projectile;

use euclid::default::Point2D;

/// Builds projectiles out of an anchor point and where the pointer is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaunchBuilder {
    /// This many pixels of drag = 1 pixel per frame of velocity
    vel_scale: f64,
    mass: f64,
}

impl LaunchBuilder {
    /// Returns `None` if the mass isn't positive or the scale is zero.
    pub fn new(vel_scale: f64, mass: f64) -> Option<Self> {
        if vel_scale != 0.0 && vel_scale.is_finite() && mass.is_finite() && mass > 0.0 {
            Some(Self { vel_scale, mass })
        } else {
            None
        }
    }

    pub fn vel_scale(&self) -> f64 {
        self.vel_scale
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// The projectile starts at the anchor and heads towards the pointer,
    /// faster the further away the pointer is.
    pub fn build(&self, anchor: Point2D<f64>, pointer: Point2D<f64>) -> Projectile {
        let vel = (pointer - anchor) / self.vel_scale;
        Projectile::launched(anchor, vel, self.mass)
    }
}

impl Default for LaunchBuilder {
    fn default() -> Self {
        Self {
            vel_scale: VEL_SCALE,
            mass: SHIP_MASS,
        }
    }
}

pub const VEL_SCALE: f64 = 100.0;
pub const SHIP_MASS: f64 = 5.0;
