use crate::collision::Circular;
use crate::config::Playfield;
use glam::DVec2;
use sdl2::pixels::Color;

pub const PLAYER_RADIUS: f64 = 20.0;
pub const PLAYER_COLOR: Color = Color::RGB(0, 255, 0);

/// The player-controlled ball
///
/// Unlike `Ball`, the player has no velocity. Each tick its position is set
/// directly (from the mouse, or from the demo steering) and then clamped so
/// the whole circle stays on the playfield.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: DVec2,
    pub radius: f64,
    pub score: u32,
}

impl Player {
    pub fn new(position: DVec2, radius: f64) -> Self {
        Player {
            position,
            radius,
            score: 0,
        }
    }

    /// Spawns a fresh player in the middle of the playfield
    pub fn spawn(bounds: &Playfield) -> Self {
        Player::new(bounds.center(), PLAYER_RADIUS)
    }

    /// Teleports the player to `destination`, then keeps it in bounds
    pub fn move_to(&mut self, destination: DVec2, bounds: &Playfield) {
        self.position = destination;
        self.keep_in_bounds(bounds);
    }

    pub fn keep_in_bounds(&mut self, bounds: &Playfield) {
        let min = DVec2::splat(self.radius);
        let max = DVec2::new(bounds.width - self.radius, bounds.height - self.radius);
        self.position = self.position.max(min).min(max);
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

impl Circular for Player {
    fn center(&self) -> DVec2 {
        self.position
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield::new(800.0, 600.0)
    }

    #[test]
    fn test_spawn_at_center() {
        let player = Player::spawn(&field());

        assert_eq!(player.position, DVec2::new(400.0, 300.0));
        assert_eq!(player.radius, PLAYER_RADIUS);
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_move_to_inside_bounds() {
        let mut player = Player::spawn(&field());
        player.move_to(DVec2::new(123.0, 456.0), &field());

        assert_eq!(player.position, DVec2::new(123.0, 456.0));
    }

    #[test]
    fn test_move_to_clamps_each_edge() {
        let mut player = Player::spawn(&field());

        player.move_to(DVec2::new(-100.0, -5.0), &field());
        assert_eq!(player.position, DVec2::new(20.0, 20.0));

        player.move_to(DVec2::new(5000.0, 1000.0), &field());
        assert_eq!(player.position, DVec2::new(780.0, 580.0));

        player.move_to(DVec2::new(10.0, 590.0), &field());
        assert_eq!(player.position, DVec2::new(20.0, 580.0));
    }

    #[test]
    fn test_add_score() {
        let mut player = Player::spawn(&field());
        player.add_score(10);
        player.add_score(10);

        assert_eq!(player.score, 20);
    }
}
