//! Lets you load a Scene from a file.

use serde::Deserialize;

/// A Vector2D or Point2D.
#[derive(Deserialize)]
struct Vec2D(f64, f64);

#[derive(Deserialize)]
#[serde(default)]
struct RawWindow {
    title: String,
    width: u32,
    height: u32,
    fps: u32,
}

impl Default for RawWindow {
    fn default() -> Self {
        Self {
            title: "Soccer Ball Gravity Slingshot".to_string(),
            width: 800,
            height: 600,
            fps: 60,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawPhysics {
    g: f64,
    vel_scale: f64,
}

impl Default for RawPhysics {
    fn default() -> Self {
        Self {
            g: simulator::GRAV_CONSTANT,
            vel_scale: simulator::launch::VEL_SCALE,
        }
    }
}

/// The attractor, either by name or spelled out
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAttractor {
    Prefab(String),
    Custom {
        mass: f64,
        radius: f64,
        /// Defaults to the middle of the window
        #[serde(default)]
        pos: Option<Vec2D>,
    },
}

#[derive(Deserialize)]
#[serde(default)]
struct RawProjectile {
    mass: f64,
    size: f64,
}

impl Default for RawProjectile {
    fn default() -> Self {
        Self {
            mass: simulator::launch::SHIP_MASS,
            size: simulator::OBJ_SIZE,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawAssets {
    background: String,
    attractor: String,
    projectile: String,
}

impl Default for RawAssets {
    fn default() -> Self {
        Self {
            background: "/space_background.jpg".to_string(),
            attractor: "/soccer_ball.png".to_string(),
            projectile: "/soccer.png".to_string(),
        }
    }
}

/// A projectile that's already flying at the start
#[derive(Deserialize)]
struct RawLaunch {
    pos: Vec2D,
    #[serde(default = "get_still_for_serde")]
    vel: Vec2D,
}

/// Returns a zero velocity because Serde needs a function
fn get_still_for_serde() -> Vec2D {
    Vec2D(0.0, 0.0)
}

/// Serde needs you to define the thing to use it on...
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawScene {
    window: RawWindow,
    physics: RawPhysics,
    attractor: Option<RawAttractor>,
    projectile: RawProjectile,
    assets: RawAssets,
    projectiles: Vec<RawLaunch>,
}

use crate::prefabs::AttractorPrefab;
use crate::scene::{AssetNames, Scene, Window};
use anyhow::{anyhow, ensure, Context, Result};
use euclid::default::{Point2D, Vector2D};
use log::debug;
use simulator::bodies::{Appearance, Attractor, Projectile};
use simulator::launch::LaunchBuilder;
use simulator::{Settings, Viewport};

/// Reads a scene file's contents and checks it makes sense.
pub fn load(contents: &str) -> Result<Scene> {
    let raw: RawScene = json5::from_str(contents).context("couldn't parse the scene")?;

    let window = raw.window;
    ensure!(
        window.width > 0 && window.height > 0,
        "the window has to be bigger than {}x{}",
        window.width,
        window.height
    );
    ensure!(window.fps > 0, "fps has to be more than zero");
    let viewport = Viewport::new(window.width as f64, window.height as f64);

    let attractor = match raw.attractor {
        None => prefab_attractor("soccer_ball", viewport)?,
        Some(RawAttractor::Prefab(name)) => prefab_attractor(&name, viewport)?,
        Some(RawAttractor::Custom { mass, radius, pos }) => {
            let pos = pos.map_or_else(|| viewport.center(), |p| Point2D::new(p.0, p.1));
            Attractor::new(pos, mass, radius)
        }
    };
    ensure!(
        attractor.mass() > 0.0,
        "the attractor's mass has to be positive, not {}",
        attractor.mass()
    );
    ensure!(
        attractor.pos().x.is_finite() && attractor.pos().y.is_finite(),
        "the attractor has to be somewhere finite, not {:?}",
        attractor.pos()
    );
    ensure!(
        attractor.radius() >= 0.0,
        "the attractor's radius can't be negative ({})",
        attractor.radius()
    );

    let physics = raw.physics;
    ensure!(
        physics.g.is_finite() && physics.g > 0.0,
        "g has to be positive, not {}",
        physics.g
    );
    let projectile = raw.projectile;
    let launch = LaunchBuilder::new(physics.vel_scale, projectile.mass).with_context(|| {
        format!(
            "can't launch with vel_scale {} and projectile mass {}",
            physics.vel_scale, projectile.mass
        )
    })?;
    ensure!(
        projectile.size >= 0.0,
        "the projectile size can't be negative ({})",
        projectile.size
    );

    let projectiles = raw
        .projectiles
        .iter()
        .enumerate()
        .map(|(idx, start)| {
            let pos = Point2D::new(start.pos.0, start.pos.1);
            let vel = Vector2D::new(start.vel.0, start.vel.1);
            Projectile::new(pos, vel, projectile.mass).ok_or_else(|| {
                anyhow!(
                    "starting projectile #{} needs a finite position and velocity, got {:?} and {:?}",
                    idx,
                    pos,
                    vel
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(
        "loaded scene with attractor {:?} and {} starting projectiles",
        attractor,
        projectiles.len()
    );

    Ok(Scene {
        settings: Settings {
            viewport,
            grav_constant: physics.g,
            launch,
            appearance: Appearance {
                projectile_size: projectile.size,
                // The viewer finds out if it actually has the picture
                projectile_sprite: true,
            },
            attractor,
        },
        window: Window {
            title: window.title,
            width: window.width,
            height: window.height,
            fps: window.fps,
        },
        assets: AssetNames {
            background: raw.assets.background,
            attractor: raw.assets.attractor,
            projectile: raw.assets.projectile,
        },
        projectiles,
    })
}

/// Puts a prefab attractor in the middle of the viewport
fn prefab_attractor(name: &str, viewport: Viewport) -> Result<Attractor> {
    let prefab = get_attractor_from_id(name)?;
    Ok(Attractor::new(viewport.center(), prefab.mass, prefab.radius))
}

/// Gets a premade attractor from a string
fn get_attractor_from_id(id: &str) -> Result<AttractorPrefab> {
    use crate::prefabs;
    use std::collections::HashMap;

    macro_rules! maker {
        (
            $($name:ident),*
        ) => {
            {
                let mut h: HashMap<&'static str, fn() -> AttractorPrefab> = HashMap::new();
                $( h.insert(stringify!($name), prefabs::attractors::$name); )*
                h
            }
        };
    }

    lazy_static! {
        static ref ATTRACTORS: HashMap<&'static str, fn() -> AttractorPrefab> =
            maker![soccer_ball, moon, gas_giant, dwarf];
    }

    ATTRACTORS
        .get(id)
        .map(|make| make())
        .ok_or_else(|| anyhow!("no prefab attractor named {}", id))
}
