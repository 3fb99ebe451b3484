//! Loads the pictures and scales them once, up front.

use loader::AssetNames;
use simulator::surface::Sprite;
use simulator::Settings;

use anyhow::{anyhow, Result};
use ggez::graphics::Image;
use ggez::nalgebra::Vector2;
use ggez::{Context, GameResult};
use log::{info, warn};

/// An image and how much to stretch it by so it comes out the right size.
pub struct Scaled {
    pub image: Image,
    pub scale: Vector2<f32>,
}

pub struct Assets {
    background: Scaled,
    attractor: Scaled,
    /// Missing if the picture couldn't be loaded; projectiles are circles then
    projectile: Option<Scaled>,
}

impl Assets {
    /// The background and attractor have to load. The projectile picture is optional.
    pub fn load(ctx: &mut Context, names: &AssetNames, settings: &Settings) -> Result<Self> {
        let viewport = settings.viewport;
        let background = load_scaled(ctx, &names.background, viewport.width, viewport.height)
            .map_err(|e| anyhow!("couldn't load the background '{}': {}", names.background, e))?;

        let diameter = settings.attractor.radius() * 2.0;
        let attractor = load_scaled(ctx, &names.attractor, diameter, diameter)
            .map_err(|e| anyhow!("couldn't load the attractor '{}': {}", names.attractor, e))?;

        let diameter = settings.appearance.projectile_size * 2.0;
        let projectile = match load_scaled(ctx, &names.projectile, diameter, diameter) {
            Ok(scaled) => Some(scaled),
            Err(e) => {
                warn!(
                    "couldn't load the projectile '{}', drawing circles instead: {}",
                    names.projectile, e
                );
                None
            }
        };
        info!("loaded assets");

        Ok(Assets {
            background,
            attractor,
            projectile,
        })
    }

    pub fn has_projectile(&self) -> bool {
        self.projectile.is_some()
    }

    pub fn get(&self, sprite: Sprite) -> Option<&Scaled> {
        match sprite {
            Sprite::Background => Some(&self.background),
            Sprite::Attractor => Some(&self.attractor),
            Sprite::Projectile => self.projectile.as_ref(),
        }
    }
}

/// Load an image and work out the scale that makes it `width` by `height`.
fn load_scaled(ctx: &mut Context, path: &str, width: f64, height: f64) -> GameResult<Scaled> {
    let image = Image::new(ctx, path)?;
    let scale = Vector2::new(
        width as f32 / f32::from(image.width()),
        height as f32 / f32::from(image.height()),
    );
    Ok(Scaled { image, scale })
}
