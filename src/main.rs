use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use superpac::config::Config;
use superpac::input::{control_for, Control, InputState};
use superpac::render::Renderer;
use superpac::{GameResult, MapSource, Session};

fn main() -> GameResult<()> {
    let config = Config::from_env();
    init_logging(&config);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &config);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

/// Logs go to a file; the terminal belongs to the game.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match File::create(&config.log_path) {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(err) => eprintln!(
            "logging disabled, cannot create {}: {err}",
            config.log_path.display()
        ),
    }
}

fn run(stdout: &mut Stdout, config: &Config) -> GameResult<()> {
    let mut session = Session::new(MapSource::File(config.map_path.clone()));
    let mut renderer = Renderer::new(session.map.width(), session.map.height());
    let mut input = InputState::default();
    let frame_time = Duration::from_micros(1_000_000 / config.fps.max(1));
    let started = Instant::now();
    let mut last_frame = started;
    info!(map = %config.map_path.display(), fps = config.fps, "starting");

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                match control_for(key) {
                    Some(Control::Quit) => {
                        info!(score = session.score, "close requested");
                        return Ok(());
                    }
                    Some(Control::Steer(dir)) => input.press(dir, frame_start),
                    None => {}
                }
            }
        }

        let dt = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;
        session.step(input.active(frame_start), dt);
        renderer.render(stdout, &session, started.elapsed().as_secs_f32())?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        } else {
            debug!(?elapsed, "frame overran its budget");
        }
    }
}
