//! Everything a scene file turns into.

use simulator::bodies::Projectile;
use simulator::Settings;

/// A fully loaded scene, ready to hand to the viewer.
#[derive(Clone, Debug)]
pub struct Scene {
    pub settings: Settings,
    pub window: Window,
    pub assets: AssetNames,
    /// Already flying when the simulation starts
    pub projectiles: Vec<Projectile>,
}

/// How the window should look.
#[derive(Clone, Debug, PartialEq)]
pub struct Window {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Frames (and so physics steps) per second
    pub fps: u32,
}

/// Where to find the pictures, relative to the resources directory.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetNames {
    pub background: String,
    pub attractor: String,
    /// If this one can't be loaded projectiles get drawn as circles
    pub projectile: String,
}
