//! Screen-Space GUI
//!
//! UI drawn at fixed screen positions on top of the playfield. Everything
//! here draws through the `Renderer` trait using bitmap text and filled
//! rectangles.
//!
//! # Available Components
//!
//! - [`MainMenu`] - Title, play/demo buttons and instructions
//! - [`Hud`] - Score, level, demo banner and game over message
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{MainMenu, MenuButton};
//!
//! let menu = MainMenu::new(800);
//!
//! // Hit test a click
//! if menu.button_at(x, y) == Some(MenuButton::Play) { /* ... */ }
//!
//! // Render
//! menu.render(&mut renderer)?;
//! ```

pub mod hud;
pub mod menu;

pub use hud::{Hud, HudInfo};
pub use menu::{MainMenu, MenuButton};
