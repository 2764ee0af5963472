//! Demo mode steering
//!
//! A tiny greedy autopilot: head for the nearest target, but bend away from
//! any obstacle that comes within `AVOIDANCE_RADIUS`.
//!
//! Each nearby obstacle contributes a repulsion point (the obstacle mirrored
//! through the player) which is averaged into the running destination one
//! obstacle at a time. With two or more nearby obstacles the result depends
//! on their order in the list.

use crate::ball::Ball;
use crate::collision::Circular;
use glam::DVec2;

/// Obstacles closer than this start pushing the autopilot away
pub const AVOIDANCE_RADIUS: f64 = 100.0;
/// Distance the autopilot moves the player per tick
pub const DEMO_STEP: f64 = 5.0;

/// Picks the point the autopilot is aiming for this tick.
///
/// Returns `None` when there is no active target left to chase.
pub fn steering_target(player: DVec2, balls: &[Ball]) -> Option<DVec2> {
    let closest = closest_target(player, balls)?;
    let mut target = closest.position;

    for obstacle in balls.iter().filter(|b| b.is_obstacle() && b.is_active()) {
        if player.distance(obstacle.position) < AVOIDANCE_RADIUS {
            let avoid = player + (player - obstacle.position);
            target = (target + avoid) / 2.0;
        }
    }

    Some(target)
}

/// Computes where the player should move this tick, before clamping.
///
/// `None` means "stay put": either nothing to chase, or the destination is
/// exactly where the player already is.
pub fn next_position(player: DVec2, balls: &[Ball]) -> Option<DVec2> {
    let target = steering_target(player, balls)?;
    let direction = (target - player).try_normalize()?;
    Some(player + direction * DEMO_STEP)
}

// First minimum wins on ties, matching iteration order.
fn closest_target(player: DVec2, balls: &[Ball]) -> Option<&Ball> {
    let mut best: Option<(&Ball, f64)> = None;
    for ball in balls.iter().filter(|b| b.is_target() && b.is_active()) {
        let distance = player.distance(ball.position);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((ball, distance)),
        }
    }
    best.map(|(ball, _)| ball)
}
