mod assets;
mod state;
mod surface;
use state::State;

use anyhow::{anyhow, Context as _, Result};
use ggez::{
    conf::{WindowMode, WindowSetup},
    event, ContextBuilder,
};
use std::path::PathBuf;

pub fn main() -> Result<()> {
    env_logger::init();

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let path_to_scene = {
        let args: Vec<String> = std::env::args().collect();
        if args.len() == 2 {
            PathBuf::from(&args[1])
        } else {
            manifest_dir.join("scenes").join("soccer.json5")
        }
    };
    let contents = std::fs::read_to_string(&path_to_scene)
        .with_context(|| format!("couldn't read {}", path_to_scene.display()))?;
    let scene = loader::load(&contents)
        .with_context(|| format!("bad scene in {}", path_to_scene.display()))?;

    let window = scene.window.clone();
    let (ref mut ctx, ref mut event_loop) = ContextBuilder::new("slingshot", "gamma-delta")
        .window_setup(WindowSetup::default().title(&window.title))
        .window_mode(WindowMode::default().dimensions(window.width as f32, window.height as f32))
        .add_resource_path(manifest_dir.join("resources"))
        .build()
        .map_err(|e| anyhow!("couldn't open the window: {}", e))?;

    let state = &mut State::new(ctx, scene)?;

    event::run(ctx, event_loop, state).map_err(|e| anyhow!("{}", e))
}
