use crate::game::{Command, Control, GameMode, Session};
use glam::DVec2;
use rand::Rng;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// InputSystem turns SDL2 events into game `Command`s
///
/// Key bindings depend on the current mode, so the system keeps track of
/// it as its input context. `dispatch()` refreshes the context from the
/// session before every event, so a key that changes the mode affects how
/// the next key in the same frame is read.
///
/// # Bindings
///
/// | Mode          | Key / button | Command        |
/// |---------------|--------------|----------------|
/// | Menu          | 1            | StartGame      |
/// | Menu          | 2            | StartDemo      |
/// | Menu          | Escape       | Quit           |
/// | Playing, Demo | Escape       | CancelToMenu   |
/// | Playing, Demo | R            | Restart        |
/// | any           | F12          | Screenshot     |
/// | any           | left click   | Click(x, y)    |
/// | any           | window close | Quit           |
pub struct InputSystem {
    /// Current input context
    pub context: GameMode,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: GameMode::Menu,
        }
    }

    pub fn update_context(&mut self, mode: GameMode) {
        self.context = mode;
    }

    /// Drains pending SDL2 events into `session`
    pub fn poll_events<R: Rng>(
        &mut self,
        event_pump: &mut EventPump,
        session: &mut Session<R>,
    ) -> Control {
        let events: Vec<Event> = event_pump.poll_iter().collect();
        self.dispatch(events, session)
    }

    /// Translates and applies events in order.
    ///
    /// Stops at the first `Quit`. Otherwise returns `TakeScreenshot` if any
    /// event asked for one this frame.
    pub fn dispatch<R: Rng>(
        &mut self,
        events: impl IntoIterator<Item = Event>,
        session: &mut Session<R>,
    ) -> Control {
        let mut control = Control::Continue;
        for event in events {
            self.update_context(session.mode());
            let Some(command) = self.translate(&event) else {
                continue;
            };
            match session.handle_command(command) {
                Control::Continue => {}
                Control::Quit => return Control::Quit,
                Control::TakeScreenshot => control = Control::TakeScreenshot,
            }
        }
        control
    }

    /// Current mouse position in window coordinates
    pub fn pointer(event_pump: &EventPump) -> DVec2 {
        let mouse = event_pump.mouse_state();
        DVec2::new(mouse.x() as f64, mouse.y() as f64)
    }

    /// Maps a single event to a command, if it means anything right now
    pub fn translate(&self, event: &Event) -> Option<Command> {
        match event {
            Event::Quit { .. } => Some(Command::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => self.command_for_key(*key),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(Command::Click(*x, *y)),
            _ => None,
        }
    }

    fn command_for_key(&self, key: Keycode) -> Option<Command> {
        if key == Keycode::F12 {
            return Some(Command::Screenshot);
        }

        match self.context {
            GameMode::Menu => match key {
                Keycode::Num1 => Some(Command::StartGame),
                Keycode::Num2 => Some(Command::StartDemo),
                Keycode::Escape => Some(Command::Quit),
                _ => None,
            },
            GameMode::Playing | GameMode::Demo => match key {
                Keycode::Escape => Some(Command::CancelToMenu),
                Keycode::R => Some(Command::Restart),
                _ => None,
            },
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use sdl2::keyboard::Mod;

    fn session() -> Session<Pcg32> {
        Session::new(&GameConfig::default(), Pcg32::seed_from_u64(3))
    }

    fn key_down(key: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(key),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    fn input(mode: GameMode) -> InputSystem {
        let mut input = InputSystem::new();
        input.update_context(mode);
        input
    }

    #[test]
    fn test_input_system_starts_in_menu() {
        assert_eq!(InputSystem::new().context, GameMode::Menu);
    }

    #[test]
    fn test_menu_keys() {
        let input = input(GameMode::Menu);

        assert_eq!(input.translate(&key_down(Keycode::Num1)), Some(Command::StartGame));
        assert_eq!(input.translate(&key_down(Keycode::Num2)), Some(Command::StartDemo));
        assert_eq!(input.translate(&key_down(Keycode::Escape)), Some(Command::Quit));
        assert_eq!(input.translate(&key_down(Keycode::R)), None);
    }

    #[test]
    fn test_running_keys() {
        for mode in [GameMode::Playing, GameMode::Demo] {
            let input = input(mode);

            assert_eq!(input.translate(&key_down(Keycode::Escape)), Some(Command::CancelToMenu));
            assert_eq!(input.translate(&key_down(Keycode::R)), Some(Command::Restart));
            assert_eq!(input.translate(&key_down(Keycode::Num1)), None);
        }
    }

    #[test]
    fn test_screenshot_in_every_mode() {
        for mode in [GameMode::Menu, GameMode::Playing, GameMode::Demo] {
            assert_eq!(input(mode).translate(&key_down(Keycode::F12)), Some(Command::Screenshot));
        }
    }

    #[test]
    fn test_window_close_quits() {
        let input = input(GameMode::Playing);
        assert_eq!(input.translate(&Event::Quit { timestamp: 0 }), Some(Command::Quit));
    }

    #[test]
    fn test_left_click_only() {
        let input = input(GameMode::Menu);
        let click = |mouse_btn| Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn,
            clicks: 1,
            x: 350,
            y: 220,
        };

        assert_eq!(input.translate(&click(MouseButton::Left)), Some(Command::Click(350, 220)));
        assert_eq!(input.translate(&click(MouseButton::Right)), None);
    }

    #[test]
    fn test_each_event_sees_the_mode_left_by_the_previous_one() {
        let mut session = session();
        let mut input = InputSystem::new();

        // 1 starts a game, so the Escape after it goes back to the menu
        let control = input.dispatch(
            vec![key_down(Keycode::Num1), key_down(Keycode::Escape)],
            &mut session,
        );

        assert_eq!(control, Control::Continue);
        assert_eq!(session.mode(), GameMode::Menu);
        assert_eq!(input.context, GameMode::Playing);
    }

    #[test]
    fn test_dispatch_stops_at_quit() {
        let mut session = session();
        let mut input = InputSystem::new();

        let control = input.dispatch(
            vec![key_down(Keycode::Escape), key_down(Keycode::Num2)],
            &mut session,
        );

        assert_eq!(control, Control::Quit);
        assert_eq!(session.mode(), GameMode::Menu);
    }

    #[test]
    fn test_dispatch_reports_screenshot() {
        let mut session = session();
        let mut input = InputSystem::new();

        let control = input.dispatch(
            vec![key_down(Keycode::F12), key_down(Keycode::Num2)],
            &mut session,
        );

        assert_eq!(control, Control::TakeScreenshot);
        assert_eq!(session.mode(), GameMode::Demo);
    }
}
