//! A surface that just writes down what it was told to draw.

use crate::surface::{Sprite, Surface};

use euclid::default::Point2D;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Clear,
    Blit(Sprite, Point2D<f64>),
    Line(Point2D<f64>, Point2D<f64>, u32, f64),
    Circle(Point2D<f64>, f64, u32),
    Present,
}

#[derive(Default)]
pub struct Recorder {
    pub commands: Vec<Command>,
}

impl Surface for Recorder {
    type Error = ();

    fn clear(&mut self) -> Result<(), ()> {
        self.commands.push(Command::Clear);
        Ok(())
    }

    fn blit(&mut self, sprite: Sprite, top_left: Point2D<f64>) -> Result<(), ()> {
        self.commands.push(Command::Blit(sprite, top_left));
        Ok(())
    }

    fn draw_line(&mut self, from: Point2D<f64>, to: Point2D<f64>, color: u32, width: f64) -> Result<(), ()> {
        self.commands.push(Command::Line(from, to, color, width));
        Ok(())
    }

    fn draw_circle(&mut self, center: Point2D<f64>, radius: f64, color: u32) -> Result<(), ()> {
        self.commands.push(Command::Circle(center, radius, color));
        Ok(())
    }

    fn present(&mut self) -> Result<(), ()> {
        self.commands.push(Command::Present);
        Ok(())
    }
}
