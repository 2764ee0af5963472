use crate::collision::Circular;
use crate::config::Playfield;
use glam::DVec2;
use sdl2::pixels::Color;

/// Radius of a collectible target ball
pub const TARGET_RADIUS: f64 = 15.0;
/// Radius of an obstacle ball (bigger than targets on purpose)
pub const OBSTACLE_RADIUS: f64 = 20.0;

/// What a ball means to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    /// Collect these for points
    Target,
    /// Touching one ends the game
    Obstacle,
}

impl BallKind {
    pub fn color(&self) -> Color {
        match self {
            BallKind::Target => Color::RGB(255, 255, 0),
            BallKind::Obstacle => Color::RGB(255, 0, 0),
        }
    }
}

/// A moving ball on the playfield
///
/// Balls move in a straight line at constant speed and bounce off the
/// playfield walls. They never interact with each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub kind: BallKind,
    pub active: bool,
}

impl Ball {
    pub fn new(kind: BallKind, position: DVec2, velocity: DVec2, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        Ball {
            position,
            velocity,
            radius,
            kind,
            active: true,
        }
    }

    pub fn target(position: DVec2, velocity: DVec2) -> Self {
        Ball::new(BallKind::Target, position, velocity, TARGET_RADIUS)
    }

    pub fn obstacle(position: DVec2, velocity: DVec2) -> Self {
        Ball::new(BallKind::Obstacle, position, velocity, OBSTACLE_RADIUS)
    }

    /// Integrates one step of motion, then bounces off the walls.
    ///
    /// Reflection only flips the sign of the velocity component; the position
    /// is never pushed back inside. A ball that ends up past a wall keeps
    /// flipping every tick until it drifts back in.
    pub fn advance(&mut self, bounds: &Playfield, dt_ticks: f64) {
        self.position += self.velocity * dt_ticks;

        if self.position.x - self.radius <= 0.0 || self.position.x + self.radius >= bounds.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y - self.radius <= 0.0 || self.position.y + self.radius >= bounds.height {
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn is_target(&self) -> bool {
        self.kind == BallKind::Target
    }

    pub fn is_obstacle(&self) -> bool {
        self.kind == BallKind::Obstacle
    }
}

impl Circular for Ball {
    fn center(&self) -> DVec2 {
        self.position
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
