// Session - all mutable game state for one play-through
//
// The session owns the player, every ball and the mode state machine. The
// main loop feeds it commands and the pointer position once per tick and
// reads it back (immutably) for rendering.

use crate::ball::Ball;
use crate::collision::{check_collisions_with_collection, Circular};
use crate::config::{GameConfig, Playfield};
use crate::demo;
use crate::gui::{MainMenu, MenuButton};
use crate::level;
use crate::player::Player;
use glam::DVec2;
use rand::Rng;

use super::{Command, Control, GameMode, TickReport};

/// Points awarded per collected target
pub const TARGET_REWARD: u32 = 10;

pub struct Session<R: Rng> {
    mode: GameMode,
    level: u32,
    game_over: bool,
    demo_elapsed_ticks: u32,
    demo_duration_ticks: u32,
    balls: Vec<Ball>,
    player: Player,
    bounds: Playfield,
    menu: MainMenu,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Creates a session sitting in the menu with a level already generated
    pub fn new(config: &GameConfig, rng: R) -> Self {
        let bounds = config.playfield();
        let mut session = Session {
            mode: GameMode::Menu,
            level: 1,
            game_over: false,
            demo_elapsed_ticks: 0,
            demo_duration_ticks: config.demo_duration_ticks(),
            balls: Vec::new(),
            player: Player::spawn(&bounds),
            bounds,
            menu: MainMenu::new(config.width as i32),
            rng,
        };
        session.reset();
        session
    }

    // === Accessors ===

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bounds(&self) -> &Playfield {
        &self.bounds
    }

    pub fn menu(&self) -> &MainMenu {
        &self.menu
    }

    /// Every ball still in play, targets first
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Active targets not yet collected
    pub fn targets(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter().filter(|b| b.is_target() && b.is_active())
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter().filter(|b| b.is_obstacle())
    }

    // === State machine ===

    /// Applies one input command.
    ///
    /// Commands that make no sense in the current mode (clicking empty
    /// space on the menu, restarting from the menu, ...) are ignored.
    pub fn handle_command(&mut self, command: Command) -> Control {
        match (self.mode, command) {
            (_, Command::Quit) => Control::Quit,
            (_, Command::Screenshot) => Control::TakeScreenshot,

            (GameMode::Menu, Command::StartGame) => {
                self.start(GameMode::Playing);
                Control::Continue
            }
            (GameMode::Menu, Command::StartDemo) => {
                self.start(GameMode::Demo);
                Control::Continue
            }
            (GameMode::Menu, Command::Click(x, y)) => {
                match self.menu.button_at(x, y) {
                    Some(MenuButton::Play) => self.start(GameMode::Playing),
                    Some(MenuButton::Demo) => self.start(GameMode::Demo),
                    None => {}
                }
                Control::Continue
            }

            (GameMode::Demo | GameMode::Playing, Command::CancelToMenu) => {
                self.return_to_menu();
                Control::Continue
            }
            (GameMode::Demo | GameMode::Playing, Command::Restart) => {
                log::info!("Restarting {:?}", self.mode);
                self.reset();
                Control::Continue
            }

            _ => Control::Continue,
        }
    }

    /// Resets the session and switches to `mode`
    pub fn start(&mut self, mode: GameMode) {
        debug_assert!(mode.is_running(), "start() only enters Playing or Demo");
        self.reset();
        self.mode = mode;
        log::info!("Entering {:?}", mode);
    }

    pub fn return_to_menu(&mut self) {
        log::info!("Back to menu (score {}, level {})", self.score(), self.level);
        self.mode = GameMode::Menu;
    }

    /// Full reset: new player, level 1, fresh balls. Mode is untouched.
    pub fn reset(&mut self) {
        self.player = Player::spawn(&self.bounds);
        self.level = 1;
        self.game_over = false;
        self.demo_elapsed_ticks = 0;
        self.load_level(1);
    }

    fn load_level(&mut self, level: u32) {
        self.balls = level::generate(level, &self.bounds, &mut self.rng).into_balls();
        log::debug!("Generated level {} with {} balls", level, self.balls.len());
    }

    // === Simulation ===

    /// Advances the world by one tick.
    ///
    /// `pointer` is the mouse position; it only matters in Playing mode.
    /// Nothing happens while the menu is showing.
    pub fn update(&mut self, pointer: DVec2) -> TickReport {
        let mut report = TickReport::default();
        if !self.mode.is_running() {
            return report;
        }

        // 1-2. Position the player
        let destination = match self.mode {
            GameMode::Playing => Some(pointer),
            GameMode::Demo => demo::next_position(self.player.position, &self.balls),
            GameMode::Menu => unreachable!("menu does not run the simulation"),
        };
        if let Some(destination) = destination {
            self.player.move_to(destination, &self.bounds);
        }

        // 3. Move balls
        for ball in &mut self.balls {
            ball.advance(&self.bounds, 1.0);
        }

        // 4-5. Resolve player contacts. Collect first, mutate after.
        let hits = check_collisions_with_collection(&self.player, &self.balls);
        for &index in &hits {
            let ball = &mut self.balls[index];
            if ball.is_target() {
                ball.active = false;
                report.collected += 1;
            } else {
                report.hit_obstacle = true;
            }
        }
        self.balls.retain(|ball| ball.active);
        self.player.add_score(report.collected * TARGET_REWARD);

        if report.hit_obstacle && !self.game_over {
            log::info!("Game over at level {} with score {}", self.level, self.score());
        }
        self.game_over |= report.hit_obstacle;

        // 6. Level cleared
        if self.targets().next().is_none() {
            self.level += 1;
            self.load_level(self.level);
            report.advanced_to = Some(self.level);
            log::info!("Level {} reached", self.level);
        }

        // 7. Demo timeout
        if self.mode == GameMode::Demo {
            self.demo_elapsed_ticks += 1;
            if self.demo_elapsed_ticks > self.demo_duration_ticks {
                report.demo_timed_out = true;
                self.return_to_menu();
            }
        }

        report
    }
}
