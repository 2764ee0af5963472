use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::path::PathBuf;

mod ball;
mod collision;
mod config;
mod demo;
mod game;
mod gui;
mod input_system;
mod level;
mod player;
mod render;
mod screenshot;
mod text;
mod timing;

use config::GameConfig;
use game::{Control, Session};
use input_system::InputSystem;
use render::{draw_frame, Renderer, SdlRenderer};
use timing::FrameClock;

/// Collect the yellow balls, dodge the red ones
#[derive(Parser, Debug)]
#[command(name = "jazzball", version, about)]
struct Cli {
    /// JSON config file (defaults to the user config dir if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where F12 screenshots are written
    #[arg(long)]
    screenshot_dir: Option<PathBuf>,
}

/// Resolves the config: defaults, then the config file, then CLI flags
fn load_config(cli: &Cli) -> Result<GameConfig, String> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load_from_file(path)
            .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))?,
        None => match GameConfig::default_path().filter(|p| p.exists()) {
            Some(path) => {
                log::info!("Using config {}", path.display());
                GameConfig::load_from_file(&path)
                    .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))?
            }
            None => GameConfig::default(),
        },
    };

    if let Some(dir) = &cli.screenshot_dir {
        config.screenshot_dir = dir.clone();
    }

    Ok(config)
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("JazzBall Game", config.width, config.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut renderer = SdlRenderer::new(canvas);
    let mut event_pump = sdl_context.event_pump()?;

    let mut session = Session::new(&config, Pcg32::from_entropy());
    let mut input = InputSystem::new();
    let mut clock = FrameClock::new(config.tick_rate);

    println!("Controls:");
    println!("1 / Click PLAY GAME - Start a game");
    println!("2 / Click WATCH DEMO - Watch the autopilot");
    println!("Mouse - Move your ball");
    println!("R - Restart");
    println!("ESC - Back to menu (quits from the menu)");
    println!("F12 - Screenshot to {}", config.screenshot_dir.display());

    'running: loop {
        // Input
        let screenshot_requested = match input.poll_events(&mut event_pump, &mut session) {
            Control::Quit => break 'running,
            Control::TakeScreenshot => true,
            Control::Continue => false,
        };

        // Simulation
        let pointer = InputSystem::pointer(&event_pump);
        let report = session.update(pointer);
        if report.collected > 0 || report.hit_obstacle {
            log::debug!(
                "Tick: collected {}, obstacle hit {}, score {}",
                report.collected, report.hit_obstacle, session.score()
            );
        }
        if let Some(level) = report.advanced_to {
            log::debug!("Cleared level {}", level - 1);
        }
        if report.demo_timed_out {
            log::debug!("Demo finished after {} seconds", config.demo_duration_secs);
        }

        // Render
        draw_frame(&session, &mut renderer)?;
        if screenshot_requested {
            if let Err(e) = screenshot::take_screenshot(renderer.canvas(), &config.screenshot_dir) {
                log::error!("Screenshot failed: {}", e);
            }
        }
        renderer.present_frame();

        clock.tick();
    }

    log::info!("Final score {} at level {}", session.score(), session.level());
    Ok(())
}
