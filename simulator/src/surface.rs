//! The thing the simulation draws onto.
//! The simulator only ever issues draw commands; whatever implements `Surface` decides what pixels they become.

use euclid::default::Point2D;

/// Pure white, stored as 0xRRGGBB
pub const WHITE: u32 = 0xFFFFFF;
/// Pure red, stored as 0xRRGGBB
pub const RED: u32 = 0xFF0000;

/// The pictures a surface knows how to blit.
/// Each one is already scaled to the size it's drawn at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sprite {
    /// Covers the whole viewport
    Background,
    Attractor,
    Projectile,
}

/// A rendering surface that accepts draw commands.
pub trait Surface {
    type Error;

    /// Wipe the frame and paint the background.
    fn clear(&mut self) -> Result<(), Self::Error>;
    /// Draw a sprite with its top-left corner at `top_left`.
    fn blit(&mut self, sprite: Sprite, top_left: Point2D<f64>) -> Result<(), Self::Error>;
    /// Color is stored as 0xRRGGBB
    fn draw_line(
        &mut self,
        from: Point2D<f64>,
        to: Point2D<f64>,
        color: u32,
        width: f64,
    ) -> Result<(), Self::Error>;
    /// Draw a filled circle. Color is stored as 0xRRGGBB
    fn draw_circle(
        &mut self,
        center: Point2D<f64>,
        radius: f64,
        color: u32,
    ) -> Result<(), Self::Error>;
    /// Show everything drawn since the last `clear`.
    fn present(&mut self) -> Result<(), Self::Error>;
}
