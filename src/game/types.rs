// Shared enums used by the session, the input system and the main loop

/// Top-level mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Demo,
    Playing,
}

impl GameMode {
    /// True for the two modes that run the simulation
    pub fn is_running(&self) -> bool {
        matches!(self, GameMode::Demo | GameMode::Playing)
    }
}

/// Discrete commands produced by the input system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    StartGame,
    StartDemo,
    CancelToMenu,
    Restart,
    Screenshot,
    /// Left click at screen coordinates
    Click(i32, i32),
}

/// What the main loop should do after a command has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
    TakeScreenshot,
}

/// Things that happened during one simulation tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Targets collected this tick
    pub collected: u32,
    /// Player overlapped at least one obstacle
    pub hit_obstacle: bool,
    /// Level number after advancing, if the level was cleared
    pub advanced_to: Option<u32>,
    /// Demo ran out of time and dropped back to the menu
    pub demo_timed_out: bool,
}
