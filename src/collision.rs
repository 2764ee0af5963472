/// Circle collision detection for JazzBall
///
/// Every object on the playfield is a circle: the player, the targets it
/// collects and the obstacles it avoids. This module provides a trait-based
/// overlap test that works across those types without a shared base struct.
///
/// # Architecture
///
/// - `Circular` trait: Implemented by anything with a center and a radius
/// - `collides()`: Pure circle-circle overlap test
/// - `check_collisions_with_collection()`: Scan one circle against many
///
/// Balls never collide with each other, only with the player, so a linear
/// scan per tick is all that is needed.
use glam::DVec2;

/// Trait for objects that occupy a circular region of the playfield.
///
/// # Design Pattern: Trait-based Polymorphism
///
/// `Ball` and `Player` are separate records. The player has no velocity and
/// is never integrated, but both expose the same "positioned circle" shape
/// through this trait so collision code doesn't care which one it has.
///
/// # Example
///
/// ```rust
/// impl Circular for Player {
///     fn center(&self) -> DVec2 {
///         self.position
///     }
///
///     fn radius(&self) -> f64 {
///         self.radius
///     }
/// }
/// ```
pub trait Circular {
    /// Center of the circle in playfield coordinates.
    fn center(&self) -> DVec2;

    /// Radius of the circle. Always positive.
    fn radius(&self) -> f64;

    /// Inactive circles are skipped by collision scans.
    fn is_active(&self) -> bool {
        true
    }
}

/// Checks if two circles overlap.
///
/// Two circles overlap when the distance between their centers is strictly
/// less than the sum of their radii. Circles that only touch (distance equal
/// to the radius sum) do NOT collide.
///
/// # Example
///
/// ```rust
/// if collides(&player, &target) {
///     score += TARGET_REWARD;
/// }
/// ```
pub fn collides(a: &impl Circular, b: &impl Circular) -> bool {
    a.center().distance(b.center()) < a.radius() + b.radius()
}

/// Checks a single circle against a collection of other circles.
///
/// Inactive entries are skipped. Returns the indices into `others` where a
/// collision was detected, in ascending order.
///
/// # Example
///
/// ```rust
/// let hits = check_collisions_with_collection(&player, &balls);
/// for index in hits {
///     println!("Player touched ball {}", index);
/// }
/// ```
pub fn check_collisions_with_collection<T: Circular>(
    entity: &impl Circular,
    others: &[T],
) -> Vec<usize> {
    others
        .iter()
        .enumerate()
        .filter(|(_, other)| other.is_active() && collides(entity, *other))
        .map(|(index, _)| index)
        .collect()
}
