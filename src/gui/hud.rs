//! In-game HUD: score, level, demo banner and the game over message

use crate::config::Playfield;
use crate::game::{GameMode, Session};
use crate::render::Renderer;
use crate::text::{text_height, text_width};
use rand::Rng;
use sdl2::pixels::Color;

const HUD_SCALE: u32 = 3;
const MARGIN: i32 = 20;

/// Snapshot of the values the HUD shows
#[derive(Debug, Clone, PartialEq)]
pub struct HudInfo {
    pub score: u32,
    pub level: u32,
    pub demo: bool,
    pub game_over: bool,
}

impl HudInfo {
    pub fn from_session<R: Rng>(session: &Session<R>) -> Self {
        HudInfo {
            score: session.score(),
            level: session.level(),
            demo: session.mode() == GameMode::Demo,
            game_over: session.is_game_over(),
        }
    }
}

pub struct Hud {
    bounds: Playfield,
    text_color: Color,
    alert_color: Color,
}

impl Hud {
    pub fn new(bounds: Playfield) -> Self {
        Hud {
            bounds,
            text_color: Color::RGB(255, 255, 255),
            alert_color: Color::RGB(255, 0, 0),
        }
    }

    pub fn render(&self, renderer: &mut impl Renderer, info: &HudInfo) -> Result<(), String> {
        let width = self.bounds.width as i32;
        let height = self.bounds.height as i32;

        renderer.draw_text(&format!("SCORE: {}", info.score), MARGIN, 20, self.text_color, HUD_SCALE)?;
        renderer.draw_text(&format!("LEVEL: {}", info.level), MARGIN, 60, self.text_color, HUD_SCALE)?;

        if info.demo {
            let banner = "DEMO MODE";
            let x = width - text_width(banner, HUD_SCALE) as i32 - MARGIN;
            renderer.draw_text(banner, x, 20, self.alert_color, HUD_SCALE)?;
        }

        if info.game_over {
            let message = "GAME OVER! PRESS R TO RESTART";
            let x = width / 2 - text_width(message, HUD_SCALE) as i32 / 2;
            let y = height / 2 - text_height(HUD_SCALE) as i32 / 2;
            renderer.draw_text(message, x, y, self.alert_color, HUD_SCALE)?;
        }

        Ok(())
    }
}
