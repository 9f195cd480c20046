mod animation;
mod app;
mod canvas;
mod config;
mod error;
mod frame;
mod geometry;
mod gpu;
mod viewport;

use winit::event_loop::EventLoop;

use app::App;
use config::Config;
use error::Error;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    config.validate()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
