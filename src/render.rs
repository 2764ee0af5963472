/// Frame rendering for JazzBall
///
/// Drawing goes through the small `Renderer` trait so the frame layout can be
/// exercised in tests with a recording backend, while the game itself draws
/// with SDL2.
///
/// # Architecture
///
/// - `Renderer` trait: the draw primitives the game needs
/// - `SdlRenderer`: `Renderer` over an SDL2 window canvas
/// - `draw_frame()`: composes one full frame from a `Session`
///
/// `draw_frame()` does not present. The main loop presents after it had the
/// chance to capture a screenshot of the finished back buffer.
use crate::game::{GameMode, Session};
use crate::gui::{Hud, HudInfo};
use crate::player::PLAYER_COLOR;
use crate::text::layout_text;
use glam::DVec2;
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const BACKGROUND: Color = Color::RGB(0, 0, 0);

/// Draw primitives used by the game.
///
/// All methods return `Err(String)` on backend failure, matching SDL2.
pub trait Renderer {
    fn clear(&mut self, color: Color);

    fn draw_circle(&mut self, center: DVec2, radius: f64, color: Color) -> Result<(), String>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Draws bitmap text with its top-left corner at (`x`, `y`)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, scale: u32)
        -> Result<(), String>;

    fn present_frame(&mut self);
}

/// Horizontal spans covering a filled circle, one per pixel row
pub fn circle_spans(center: DVec2, radius: f64) -> Vec<Rect> {
    let cx = center.x.round() as i32;
    let cy = center.y.round() as i32;
    let r = radius.round() as i32;
    let mut spans = Vec::with_capacity((2 * r + 1).max(0) as usize);

    for dy in -r..=r {
        let half = ((r * r - dy * dy) as f64).sqrt() as i32;
        spans.push(Rect::new(cx - half, cy + dy, (2 * half + 1) as u32, 1));
    }

    spans
}

/// `Renderer` backed by an SDL2 window canvas
pub struct SdlRenderer {
    canvas: Canvas<Window>,
}

impl SdlRenderer {
    pub fn new(canvas: Canvas<Window>) -> Self {
        SdlRenderer { canvas }
    }

    /// Direct access for things outside the draw primitives (screenshots)
    pub fn canvas(&self) -> &Canvas<Window> {
        &self.canvas
    }
}

impl Renderer for SdlRenderer {
    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    fn draw_circle(&mut self, center: DVec2, radius: f64, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rects(&circle_spans(center, radius))
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rects(&layout_text(text, x, y, scale))
    }

    fn present_frame(&mut self) {
        self.canvas.present();
    }
}

/// Composes a complete frame for the current session state.
///
/// Menu mode shows the main menu only. Playing and Demo show every active
/// ball, the player on top, then the HUD.
pub fn draw_frame<R: Rng>(session: &Session<R>, renderer: &mut impl Renderer) -> Result<(), String> {
    renderer.clear(BACKGROUND);

    match session.mode() {
        GameMode::Menu => session.menu().render(renderer)?,
        GameMode::Playing | GameMode::Demo => {
            for ball in session.targets().chain(session.obstacles()) {
                renderer.draw_circle(ball.position, ball.radius, ball.kind.color())?;
            }

            let player = session.player();
            renderer.draw_circle(player.position, player.radius, PLAYER_COLOR)?;

            Hud::new(*session.bounds()).render(renderer, &HudInfo::from_session(session))?;
        }
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::{DrawCall, RecordingRenderer};
    use super::*;
    use crate::ball::BallKind;
    use crate::config::GameConfig;
    use crate::game::Command;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn session() -> Session<Pcg32> {
        Session::new(&GameConfig::default(), Pcg32::seed_from_u64(5))
    }

    #[test]
    fn test_circle_spans_cover_diameter() {
        let spans = circle_spans(DVec2::new(100.0, 100.0), 10.0);

        assert_eq!(spans.len(), 21);
        // Widest row passes through the center
        assert_eq!(spans[10], Rect::new(90, 100, 21, 1));
        // Top and bottom rows are a single pixel
        assert_eq!(spans[0], Rect::new(100, 90, 1, 1));
        assert_eq!(spans[20], Rect::new(100, 110, 1, 1));
    }

    #[test]
    fn test_menu_frame() {
        let session = session();
        let mut renderer = RecordingRenderer::default();
        draw_frame(&session, &mut renderer).unwrap();

        assert_eq!(renderer.calls[0], DrawCall::Clear(BACKGROUND));
        assert!(renderer.circles().is_empty());
        assert!(renderer.texts().contains(&"PLAY GAME"));
        assert!(renderer.texts().contains(&"WATCH DEMO"));
        assert!(!renderer.calls.contains(&DrawCall::Present));
    }

    #[test]
    fn test_playing_frame_draws_balls_then_player() {
        let mut session = session();
        session.handle_command(Command::StartGame);
        let mut renderer = RecordingRenderer::default();
        draw_frame(&session, &mut renderer).unwrap();

        let circles = renderer.circles();
        assert_eq!(circles.len(), session.balls().len() + 1);
        let (center, radius, color) = circles[circles.len() - 1];
        assert_eq!(center, session.player().position);
        assert_eq!(radius, session.player().radius);
        assert_eq!(color, PLAYER_COLOR);
        assert_eq!(circles[0].2, BallKind::Target.color());

        let texts = renderer.texts();
        assert!(texts.contains(&"SCORE: 0"));
        assert!(texts.contains(&"LEVEL: 1"));
        assert!(!texts.contains(&"DEMO MODE"));
    }

    #[test]
    fn test_demo_frame_has_banner() {
        let mut session = session();
        session.handle_command(Command::StartDemo);
        let mut renderer = RecordingRenderer::default();
        draw_frame(&session, &mut renderer).unwrap();

        assert!(renderer.texts().contains(&"DEMO MODE"));
    }
}
