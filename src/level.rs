//! Procedural level generation
//!
//! Every level is a fresh set of balls: `3 + level` targets and `level`
//! obstacles, scattered at random with random velocities. Obstacles are
//! faster and bigger than targets, so later levels get crowded quickly.
//!
//! The random source is passed in by the caller. The game seeds a `Pcg32`
//! from OS entropy once per run; tests seed their own for repeatable layouts.

use crate::ball::Ball;
use crate::config::{Playfield, SPAWN_MARGIN};
use glam::DVec2;
use rand::Rng;

/// Max absolute velocity component for targets, in pixels per tick
pub const TARGET_MAX_SPEED: f64 = 2.0;
/// Max absolute velocity component for obstacles, in pixels per tick
pub const OBSTACLE_MAX_SPEED: f64 = 3.0;

/// The balls that make up one level
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub targets: Vec<Ball>,
    pub obstacles: Vec<Ball>,
}

impl LevelLayout {
    /// Flattens the layout into the session's ball list: targets first,
    /// then obstacles.
    pub fn into_balls(self) -> Vec<Ball> {
        let mut balls = self.targets;
        balls.extend(self.obstacles);
        balls
    }
}

pub fn target_count(level: u32) -> usize {
    3 + level as usize
}

pub fn obstacle_count(level: u32) -> usize {
    level as usize
}

/// Generates the ball layout for `level`.
pub fn generate<R: Rng + ?Sized>(level: u32, bounds: &Playfield, rng: &mut R) -> LevelLayout {
    let targets = (0..target_count(level))
        .map(|_| {
            Ball::target(
                random_position(bounds, rng),
                random_velocity(TARGET_MAX_SPEED, rng),
            )
        })
        .collect();

    let obstacles = (0..obstacle_count(level))
        .map(|_| {
            Ball::obstacle(
                random_position(bounds, rng),
                random_velocity(OBSTACLE_MAX_SPEED, rng),
            )
        })
        .collect();

    LevelLayout { targets, obstacles }
}

// Spawn area ignores the ball radius; the margin is wide enough for both kinds.
fn random_position<R: Rng + ?Sized>(bounds: &Playfield, rng: &mut R) -> DVec2 {
    DVec2::new(
        rng.gen_range(SPAWN_MARGIN..=bounds.width - SPAWN_MARGIN),
        rng.gen_range(SPAWN_MARGIN..=bounds.height - SPAWN_MARGIN),
    )
}

fn random_velocity<R: Rng + ?Sized>(max_speed: f64, rng: &mut R) -> DVec2 {
    DVec2::new(
        rng.gen_range(-max_speed..=max_speed),
        rng.gen_range(-max_speed..=max_speed),
    )
}
