//! Handles the simulation of the slingshot

pub mod bodies;
pub mod launch;
pub mod surface;
pub mod vector;

#[cfg(test)]
mod test_surface;

use crate::bodies::{Appearance, Attractor, Projectile};
use crate::launch::LaunchBuilder;
use crate::surface::{Surface, RED, WHITE};

use euclid::default::Point2D;
use log::{debug, info};

/// The rectangle projectiles are allowed to live in.
/// (0, 0) is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The middle, rounded down to whole pixels.
    pub fn center(&self) -> Point2D<f64> {
        Point2D::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }
}

/// Everything needed to start a simulation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    pub viewport: Viewport,
    pub grav_constant: f64,
    pub launch: LaunchBuilder,
    pub appearance: Appearance,
    pub attractor: Attractor,
}

impl Default for Settings {
    fn default() -> Self {
        let viewport = Viewport::new(WIDTH, HEIGHT);
        Self {
            viewport,
            grav_constant: GRAV_CONSTANT,
            launch: LaunchBuilder::default(),
            appearance: Appearance {
                projectile_size: OBJ_SIZE,
                projectile_sprite: true,
            },
            attractor: Attractor::new(viewport.center(), PLANET_MASS, PLANET_SIZE),
        }
    }
}

/// What the simulation is up to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Mode {
    /// Nobody's clicked yet
    Idle,
    /// Clicked once here, the next click launches
    Aiming(Point2D<f64>),
    /// Got told to quit. Nothing happens anymore.
    Stopped,
}

/// Something the input source saw happen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    ButtonDown(Point2D<f64>),
}

/// All the input for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameInput {
    /// Where the pointer is right now
    pub pointer: Point2D<f64>,
    /// Oldest first
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn new(pointer: Point2D<f64>) -> Self {
        Self {
            pointer,
            events: Vec::new(),
        }
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// What happened during a frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub spawned: usize,
    pub removed: usize,
    /// Once this is true the caller should stop calling `frame`.
    pub stopped: bool,
}

pub struct SimulationState {
    settings: Settings,
    /// In launch order.
    projectiles: Vec<Projectile>,
    mode: Mode,
    frames_elapsed: usize,
}

impl SimulationState {
    pub fn new(settings: Settings) -> Self {
        SimulationState {
            settings,
            projectiles: Vec::new(),
            mode: Mode::Idle,
            frames_elapsed: 0,
        }
    }

    /// Put a projectile straight into play, no clicking needed.
    pub fn spawn(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn attractor(&self) -> &Attractor {
        &self.settings.attractor
    }

    pub fn frames_elapsed(&self) -> usize {
        self.frames_elapsed
    }

    /// Run one whole frame: handle input, draw, move everything, cull, and present.
    /// Projectiles are drawn before they move, so one that crashes this frame still
    /// shows up once where it was.
    pub fn frame<S: Surface>(
        &mut self,
        input: &FrameInput,
        surface: &mut S,
    ) -> Result<FrameReport, S::Error> {
        let mut report = FrameReport::default();
        if self.mode == Mode::Stopped {
            report.stopped = true;
            return Ok(report);
        }

        for event in input.events.iter() {
            if self.handle_event(*event) {
                report.spawned += 1;
            }
            if self.mode == Mode::Stopped {
                break;
            }
        }

        surface.clear()?;

        if let Mode::Aiming(anchor) = self.mode {
            surface.draw_line(anchor, input.pointer, WHITE, AIM_LINE_WIDTH)?;
            surface.draw_circle(anchor, self.settings.appearance.projectile_size, RED)?;
        }

        let appearance = self.settings.appearance;
        // Mark everything first, then throw the dead ones out afterwards
        let mut doomed = Vec::with_capacity(self.projectiles.len());
        for projectile in self.projectiles.iter_mut() {
            projectile.draw(surface, &appearance)?;
            doomed.push(step_and_check(projectile, &self.settings));
        }
        report.removed = remove_doomed(&mut self.projectiles, doomed);

        self.settings.attractor.draw(surface)?;
        surface.present()?;

        self.frames_elapsed += 1;
        report.stopped = self.mode == Mode::Stopped;
        Ok(report)
    }

    /// Apply one input event to the launch state machine.
    /// Returns whether a projectile got launched.
    fn handle_event(&mut self, event: InputEvent) -> bool {
        match (self.mode, event) {
            (Mode::Stopped, _) => false,
            (_, InputEvent::Quit) => {
                info!(
                    "stopping after {} frames with {} projectiles in flight",
                    self.frames_elapsed,
                    self.projectiles.len()
                );
                self.mode = Mode::Stopped;
                false
            }
            (Mode::Idle, InputEvent::ButtonDown(pos)) => {
                self.mode = Mode::Aiming(pos);
                false
            }
            (Mode::Aiming(anchor), InputEvent::ButtonDown(pos)) => {
                let projectile = self.settings.launch.build(anchor, pos);
                info!(
                    "launched projectile from {:?} with velocity {:?}",
                    projectile.pos(),
                    projectile.vel()
                );
                self.projectiles.push(projectile);
                self.mode = Mode::Idle;
                true
            }
        }
    }

    /// Step and cull every projectile like `frame` does, without any input or drawing.
    /// Returns how many got removed.
    #[cfg(test)]
    fn advance(&mut self) -> usize {
        let settings = &self.settings;
        let doomed = self
            .projectiles
            .iter_mut()
            .map(|projectile| step_and_check(projectile, settings))
            .collect();
        remove_doomed(&mut self.projectiles, doomed)
    }
}

/// Move a projectile one frame, then say whether it should be removed.
fn step_and_check(projectile: &mut Projectile, settings: &Settings) -> bool {
    let attractor = &settings.attractor;
    // A degenerate step leaves it sitting inside the attractor, so it still gets culled here
    projectile.step(attractor, settings.grav_constant);
    let off_screen = projectile.is_off_screen(settings.viewport);
    let collided = projectile.has_collided(attractor, attractor.radius());
    if off_screen || collided {
        debug!(
            "removing projectile at {:?} (off screen: {}, collided: {})",
            projectile.pos(),
            off_screen,
            collided
        );
    }
    off_screen || collided
}

/// Rebuild the list without the marked projectiles. Returns how many went.
fn remove_doomed(projectiles: &mut Vec<Projectile>, doomed: Vec<bool>) -> usize {
    let removed = doomed.iter().filter(|&&dead| dead).count();
    if removed > 0 {
        *projectiles = projectiles
            .drain(..)
            .zip(doomed)
            .filter_map(|(projectile, dead)| if dead { None } else { Some(projectile) })
            .collect();
    }
    removed
}

pub const WIDTH: f64 = 800.0;
pub const HEIGHT: f64 = 600.0;
pub const GRAV_CONSTANT: f64 = 5.0;
pub const PLANET_MASS: f64 = 100.0;
/// Radius of the attractor, in pixels
pub const PLANET_SIZE: f64 = 50.0;
/// Radius of a projectile, in pixels
pub const OBJ_SIZE: f64 = 5.0;
const AIM_LINE_WIDTH: f64 = 2.0;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Sprite;
    use crate::test_surface::{Command, Recorder};
    use euclid::default::Vector2D;

    fn click(x: f64, y: f64) -> InputEvent {
        InputEvent::ButtonDown(Point2D::new(x, y))
    }

    fn idle_input() -> FrameInput {
        FrameInput::new(Point2D::new(0.0, 0.0))
    }

    #[test]
    fn starts_idle_and_empty() {
        let sim = SimulationState::new(Settings::default());
        assert_eq!(sim.mode(), Mode::Idle);
        assert!(sim.projectiles().is_empty());
        assert_eq!(sim.attractor().pos(), Point2D::new(400.0, 300.0));
        assert_eq!(sim.frames_elapsed(), 0);
    }

    #[test]
    fn two_clicks_launch_one_projectile() {
        let mut sim = SimulationState::new(Settings::default());
        let mut surface = Recorder::default();

        let input = FrameInput::new(Point2D::new(200.0, 200.0)).with_event(click(200.0, 200.0));
        let report = sim.frame(&input, &mut surface).unwrap();
        assert_eq!(report.spawned, 0);
        assert_eq!(sim.mode(), Mode::Aiming(Point2D::new(200.0, 200.0)));

        let input = FrameInput::new(Point2D::new(300.0, 200.0)).with_event(click(300.0, 200.0));
        let report = sim.frame(&input, &mut surface).unwrap();
        assert_eq!(report.spawned, 1);
        assert_eq!(sim.mode(), Mode::Idle);
        assert_eq!(sim.projectiles().len(), 1);

        // The third click starts a new aim instead of launching
        let input = idle_input().with_event(click(10.0, 20.0));
        let report = sim.frame(&input, &mut surface).unwrap();
        assert_eq!(report.spawned, 0);
        assert_eq!(sim.mode(), Mode::Aiming(Point2D::new(10.0, 20.0)));
        assert_eq!(sim.projectiles().len(), 1);
    }

    #[test]
    fn launched_projectile_has_the_drag_velocity() {
        let mut sim = SimulationState::new(Settings::default());
        let mut surface = Recorder::default();
        let input = FrameInput::new(Point2D::new(300.0, 200.0))
            .with_event(click(200.0, 200.0))
            .with_event(click(300.0, 200.0));
        sim.frame(&input, &mut surface).unwrap();

        // It already got one step in during the frame it was launched
        let p = sim.projectiles()[0];
        assert!(p.vel().x > 1.0);
        assert!(p.vel().y > 0.0);
        assert!((p.pos().x - (200.0 + p.vel().x)).abs() < 1e-12);
    }

    #[test]
    fn aiming_draws_a_line_and_marker() {
        let mut sim = SimulationState::new(Settings::default());
        let mut surface = Recorder::default();
        let input = FrameInput::new(Point2D::new(150.0, 160.0)).with_event(click(100.0, 100.0));
        sim.frame(&input, &mut surface).unwrap();

        assert_eq!(
            surface.commands,
            vec![
                Command::Clear,
                Command::Line(
                    Point2D::new(100.0, 100.0),
                    Point2D::new(150.0, 160.0),
                    WHITE,
                    AIM_LINE_WIDTH
                ),
                Command::Circle(Point2D::new(100.0, 100.0), OBJ_SIZE, RED),
                Command::Blit(Sprite::Attractor, Point2D::new(350.0, 250.0)),
                Command::Present,
            ]
        );
    }

    #[test]
    fn projectiles_are_drawn_before_the_attractor() {
        let mut sim = SimulationState::new(Settings::default());
        sim.spawn(Projectile::new(Point2D::new(100.0, 100.0), Vector2D::zero(), 5.0).unwrap());
        let mut surface = Recorder::default();
        sim.frame(&idle_input(), &mut surface).unwrap();

        assert_eq!(
            surface.commands,
            vec![
                Command::Clear,
                Command::Blit(Sprite::Projectile, Point2D::new(95.0, 95.0)),
                Command::Blit(Sprite::Attractor, Point2D::new(350.0, 250.0)),
                Command::Present,
            ]
        );
    }

    #[test]
    fn crashing_projectile_is_drawn_once_then_removed() {
        let mut sim = SimulationState::new(Settings::default());
        // Heading straight in, it'll be inside the radius after one step
        sim.spawn(Projectile::new(Point2D::new(340.0, 300.0), Vector2D::new(20.0, 0.0), 5.0).unwrap());
        let mut surface = Recorder::default();

        let report = sim.frame(&idle_input(), &mut surface).unwrap();
        assert_eq!(report.removed, 1);
        assert!(sim.projectiles().is_empty());
        assert!(surface
            .commands
            .contains(&Command::Blit(Sprite::Projectile, Point2D::new(335.0, 295.0))));

        surface.commands.clear();
        sim.frame(&idle_input(), &mut surface).unwrap();
        assert!(!surface
            .commands
            .iter()
            .any(|c| *c == Command::Blit(Sprite::Projectile, Point2D::new(335.0, 295.0))));
    }

    #[test]
    fn out_of_bounds_projectile_goes_on_the_first_frame() {
        let mut sim = SimulationState::new(Settings::default());
        sim.spawn(Projectile::new(Point2D::new(-5.0, 300.0), Vector2D::zero(), 5.0).unwrap());
        sim.spawn(Projectile::new(Point2D::new(100.0, 300.0), Vector2D::new(0.0, -2.0), 5.0).unwrap());
        let mut surface = Recorder::default();

        let report = sim.frame(&idle_input(), &mut surface).unwrap();
        assert_eq!(report.removed, 1);
        assert_eq!(sim.projectiles().len(), 1);
        assert_eq!(sim.projectiles()[0].pos().y, 298.0);
    }

    #[test]
    fn missing_sprite_draws_circles() {
        let mut settings = Settings::default();
        settings.appearance.projectile_sprite = false;
        let mut sim = SimulationState::new(settings);
        sim.spawn(Projectile::new(Point2D::new(100.5, 100.5), Vector2D::zero(), 5.0).unwrap());
        let mut surface = Recorder::default();
        sim.frame(&idle_input(), &mut surface).unwrap();

        assert_eq!(
            surface.commands[1],
            Command::Circle(Point2D::new(100.0, 100.0), OBJ_SIZE, RED)
        );
    }

    #[test]
    fn quit_stops_everything() {
        let mut sim = SimulationState::new(Settings::default());
        let mut surface = Recorder::default();
        let input = idle_input()
            .with_event(click(1.0, 1.0))
            .with_event(InputEvent::Quit)
            .with_event(click(2.0, 2.0));
        let report = sim.frame(&input, &mut surface).unwrap();

        // The frame still gets drawn but the click after the quit is ignored
        assert!(report.stopped);
        assert_eq!(report.spawned, 0);
        assert_eq!(sim.mode(), Mode::Stopped);
        assert_eq!(surface.commands.last(), Some(&Command::Present));
        assert_eq!(sim.frames_elapsed(), 1);

        surface.commands.clear();
        let report = sim.frame(&idle_input().with_event(click(3.0, 3.0)), &mut surface).unwrap();
        assert!(report.stopped);
        assert!(surface.commands.is_empty());
        assert_eq!(sim.frames_elapsed(), 1);
    }

    #[test]
    fn advance_culls_like_frame_does() {
        let mut sim = SimulationState::new(Settings::default());
        sim.spawn(Projectile::new(Point2D::new(-5.0, 300.0), Vector2D::zero(), 5.0).unwrap());
        sim.spawn(Projectile::new(Point2D::new(399.0, 300.0), Vector2D::zero(), 5.0).unwrap());
        sim.spawn(Projectile::new(Point2D::new(100.0, 300.0), Vector2D::new(0.0, -2.0), 5.0).unwrap());
        assert_eq!(sim.advance(), 2);
        assert_eq!(sim.projectiles().len(), 1);
    }

    #[test]
    fn headless_and_drawn_runs_agree() {
        let start = Projectile::new(Point2D::new(120.0, 80.0), Vector2D::new(1.5, 0.3), 5.0).unwrap();
        let mut drawn = SimulationState::new(Settings::default());
        let mut headless = SimulationState::new(Settings::default());
        drawn.spawn(start);
        headless.spawn(start);

        let mut surface = Recorder::default();
        for _ in 0..300 {
            drawn.frame(&idle_input(), &mut surface).unwrap();
            headless.advance();
            assert_eq!(drawn.projectiles(), headless.projectiles());
        }
    }

    #[test]
    fn projectile_on_the_attractor_is_removed_not_stepped() {
        let mut sim = SimulationState::new(Settings::default());
        sim.spawn(Projectile::new(Point2D::new(400.0, 300.0), Vector2D::new(1.0, 0.0), 5.0).unwrap());
        let mut surface = Recorder::default();
        let report = sim.frame(&idle_input(), &mut surface).unwrap();
        assert_eq!(report.removed, 1);
    }

    #[test]
    fn center_rounds_down() {
        assert_eq!(Viewport::new(801.0, 601.0).center(), Point2D::new(400.0, 300.0));
    }
}
