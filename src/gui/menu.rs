//! Main Menu
//!
//! Title, two clickable buttons (play / demo) and a block of instructions.
//! The menu knows its own layout so the session can hit-test clicks against
//! the same rectangles that get drawn.

use crate::render::Renderer;
use crate::text::text_width;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

const BUTTON_WIDTH: u32 = 200;
const BUTTON_HEIGHT: u32 = 50;
const TITLE_SCALE: u32 = 4;
const LABEL_SCALE: u32 = 3;
const INSTRUCTION_SCALE: u32 = 2;

const INSTRUCTIONS: [&str; 8] = [
    "INSTRUCTIONS:",
    "- MOVE THE MOUSE TO CONTROL YOUR BALL",
    "- COLLECT YELLOW BALLS TO SCORE POINTS",
    "- AVOID RED BALLS",
    "- COMPLETE LEVELS TO INCREASE DIFFICULTY",
    "- PRESS ESC TO RETURN TO MENU",
    "- PRESS R TO RESTART THE GAME",
    "- PRESS F12 TO TAKE A SCREENSHOT",
];

/// Buttons on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Play,
    Demo,
}

impl MenuButton {
    fn label(&self) -> &'static str {
        match self {
            MenuButton::Play => "PLAY GAME",
            MenuButton::Demo => "WATCH DEMO",
        }
    }

    fn color(&self) -> Color {
        match self {
            MenuButton::Play => Color::RGB(0, 0, 255),
            MenuButton::Demo => Color::RGB(128, 0, 128),
        }
    }
}

/// Layout and drawing of the main menu
#[derive(Debug, Clone)]
pub struct MainMenu {
    screen_width: i32,
    play_button: Rect,
    demo_button: Rect,
}

impl MainMenu {
    /// Lays the menu out for a screen `screen_width` pixels wide.
    ///
    /// Buttons are centered horizontally at fixed heights.
    pub fn new(screen_width: i32) -> Self {
        let button_x = screen_width / 2 - BUTTON_WIDTH as i32 / 2;
        MainMenu {
            screen_width,
            play_button: Rect::new(button_x, 200, BUTTON_WIDTH, BUTTON_HEIGHT),
            demo_button: Rect::new(button_x, 300, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }

    fn buttons(&self) -> [(MenuButton, Rect); 2] {
        [
            (MenuButton::Play, self.play_button),
            (MenuButton::Demo, self.demo_button),
        ]
    }

    /// Which button, if any, contains the point. Edges count as inside.
    pub fn button_at(&self, x: i32, y: i32) -> Option<MenuButton> {
        self.buttons()
            .into_iter()
            .find(|(_, rect)| {
                x >= rect.left() && x <= rect.right() && y >= rect.top() && y <= rect.bottom()
            })
            .map(|(button, _)| button)
    }

    pub fn render(&self, renderer: &mut impl Renderer) -> Result<(), String> {
        let white = Color::RGB(255, 255, 255);

        let title = "JAZZBALL";
        renderer.draw_text(title, self.centered_x(title, TITLE_SCALE), 100, white, TITLE_SCALE)?;

        for (button, rect) in self.buttons() {
            renderer.fill_rect(rect, button.color())?;
            let label = button.label();
            renderer.draw_text(label, self.centered_x(label, LABEL_SCALE), rect.y() + 15, white, LABEL_SCALE)?;
        }

        for (i, line) in INSTRUCTIONS.iter().enumerate() {
            renderer.draw_text(line, 50, 400 + i as i32 * 25, white, INSTRUCTION_SCALE)?;
        }

        Ok(())
    }

    fn centered_x(&self, text: &str, scale: u32) -> i32 {
        self.screen_width / 2 - text_width(text, scale) as i32 / 2
    }
}
