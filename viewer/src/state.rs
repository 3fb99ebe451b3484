//! Handles the state for the viewer.

use crate::assets::Assets;
use crate::surface::GgezSurface;

use loader::Scene;
use simulator::{FrameInput, InputEvent, SimulationState};

use anyhow::Result;
use euclid::default::Point2D;
use ggez::event::{self, EventHandler, KeyCode, KeyMods, MouseButton};
use ggez::input::mouse;
use ggez::{timer, Context, GameResult};
use log::{info, trace};

/// The simulation plus everything it needs to get onto the screen.
pub struct State {
    simulation: SimulationState,
    assets: Assets,
    /// Input that came in since the last frame, oldest first
    events: Vec<InputEvent>,
    fps: u32,
    /// How many frames are owed since the last one ran
    frames_due: u32,
}

impl State {
    pub fn new(ctx: &mut Context, scene: Scene) -> Result<Self> {
        let mut settings = scene.settings;
        let assets = Assets::load(ctx, &scene.assets, &settings)?;
        settings.appearance.projectile_sprite = assets.has_projectile();

        let mut simulation = SimulationState::new(settings);
        for projectile in scene.projectiles {
            simulation.spawn(projectile);
        }
        info!(
            "starting at {} fps with {} projectiles already flying",
            scene.window.fps,
            simulation.projectiles().len()
        );

        Ok(State {
            simulation,
            assets,
            events: Vec::new(),
            fps: scene.window.fps,
            frames_due: 0,
        })
    }
}

impl EventHandler for State {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        while timer::check_update_time(ctx, self.fps) {
            self.frames_due += 1;
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        if self.frames_due == 0 {
            timer::yield_now();
            return Ok(());
        }
        if self.frames_due > 1 {
            // Running behind. Like any fixed-rate clock we just skip them.
            trace!("dropping {} frames", self.frames_due - 1);
        }
        self.frames_due = 0;

        let pointer = mouse::position(ctx);
        let input = FrameInput {
            pointer: Point2D::new(pointer.x as f64, pointer.y as f64),
            events: self.events.drain(..).collect(),
        };
        let report = {
            let mut surface = GgezSurface::new(ctx, &self.assets);
            self.simulation.frame(&input, &mut surface)?
        };

        if report.stopped {
            event::quit(ctx);
        }
        Ok(())
    }

    fn mouse_button_down_event(&mut self, _ctx: &mut Context, _button: MouseButton, x: f32, y: f32) {
        self.events
            .push(InputEvent::ButtonDown(Point2D::new(x as f64, y as f64)));
    }

    fn key_down_event(&mut self, _ctx: &mut Context, keycode: KeyCode, _keymods: KeyMods, _repeat: bool) {
        if keycode == KeyCode::Escape {
            self.events.push(InputEvent::Quit);
        }
    }

    /// Don't quit right away; the simulation stops at the end of the next frame.
    fn quit_event(&mut self, _ctx: &mut Context) -> bool {
        self.events.push(InputEvent::Quit);
        true
    }
}
