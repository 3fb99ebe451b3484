//! Draws the simulation with GGEZ.

use crate::assets::Assets;

use euclid::default::Point2D;
use ggez::graphics::{self, Color, DrawMode, DrawParam, MeshBuilder};
use ggez::nalgebra::Point2;
use ggez::{Context, GameError};
use simulator::surface::{Sprite, Surface};

/// Whatever's behind the background picture
const BACKDROP: u32 = 0x000000;
/// How smooth circles are. Smaller is smoother.
const TOLERANCE: f32 = 0.1;

pub struct GgezSurface<'a> {
    ctx: &'a mut Context,
    assets: &'a Assets,
}

impl<'a> GgezSurface<'a> {
    pub fn new(ctx: &'a mut Context, assets: &'a Assets) -> Self {
        Self { ctx, assets }
    }
}

fn to_screen(p: Point2D<f64>) -> Point2<f32> {
    Point2::new(p.x as f32, p.y as f32)
}

impl<'a> Surface for GgezSurface<'a> {
    type Error = GameError;

    fn clear(&mut self) -> Result<(), GameError> {
        graphics::clear(self.ctx, Color::from_rgb_u32(BACKDROP));
        self.blit(Sprite::Background, Point2D::zero())
    }

    fn blit(&mut self, sprite: Sprite, top_left: Point2D<f64>) -> Result<(), GameError> {
        match self.assets.get(sprite) {
            Some(scaled) => graphics::draw(
                self.ctx,
                &scaled.image,
                DrawParam::default()
                    .dest(to_screen(top_left))
                    .scale(scaled.scale),
            ),
            // The simulator knows not to ask for pictures we don't have
            None => Ok(()),
        }
    }

    fn draw_line(
        &mut self,
        from: Point2D<f64>,
        to: Point2D<f64>,
        color: u32,
        width: f64,
    ) -> Result<(), GameError> {
        // Lyon won't tessellate a zero-length line
        if from == to {
            return Ok(());
        }
        let line = MeshBuilder::new()
            .line(
                &[to_screen(from), to_screen(to)],
                width as f32,
                Color::from_rgb_u32(color),
            )?
            .build(self.ctx)?;
        graphics::draw(self.ctx, &line, DrawParam::default())
    }

    fn draw_circle(&mut self, center: Point2D<f64>, radius: f64, color: u32) -> Result<(), GameError> {
        let circle = MeshBuilder::new()
            .circle(
                DrawMode::fill(),
                to_screen(center),
                radius as f32,
                TOLERANCE,
                Color::from_rgb_u32(color),
            )
            .build(self.ctx)?;
        graphics::draw(self.ctx, &circle, DrawParam::default())
    }

    fn present(&mut self) -> Result<(), GameError> {
        graphics::present(self.ctx)
    }
}
