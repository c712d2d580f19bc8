//! Game entities that each opt into a different set of capabilities.

use tracing::debug;

// =============================================================================
// Capabilities
// =============================================================================

pub trait Drawable {
    fn sprite(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn position(&self) -> (i32, i32);

    fn draw(&self) -> String {
        let (x, y) = self.position();
        format!("{} {} at ({x}, {y})", self.sprite(), self.label())
    }
}

pub trait Movable {
    fn move_by(&mut self, dx: i32, dy: i32);
}

pub trait Damageable {
    fn health(&self) -> u32;
    fn max_health(&self) -> u32;

    /// Health bottoms out at zero.
    fn take_damage(&mut self, amount: u32);

    fn is_alive(&self) -> bool {
        self.health() > 0
    }
}

pub trait Interactable {
    fn interaction_text(&self) -> &'static str;
}

/// Coordinates saturate at the `i32` bounds.
fn shift((x, y): (i32, i32), dx: i32, dy: i32) -> (i32, i32) {
    (x.saturating_add(dx), y.saturating_add(dy))
}

// =============================================================================
// Entities
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    position: (i32, i32),
    health: u32,
}

impl Player {
    pub const MAX_HEALTH: u32 = 100;

    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: (x, y),
            health: Self::MAX_HEALTH,
        }
    }
}

impl Drawable for Player {
    fn sprite(&self) -> &'static str {
        "🧑"
    }

    fn label(&self) -> &'static str {
        "Player"
    }

    fn position(&self) -> (i32, i32) {
        self.position
    }
}

impl Movable for Player {
    fn move_by(&mut self, dx: i32, dy: i32) {
        self.position = shift(self.position, dx, dy);
    }
}

impl Damageable for Player {
    fn health(&self) -> u32 {
        self.health
    }

    fn max_health(&self) -> u32 {
        Self::MAX_HEALTH
    }

    fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        debug!(amount, health = self.health, "player hit");
    }
}

impl Interactable for Player {
    fn interaction_text(&self) -> &'static str {
        "Press E to open inventory"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    position: (i32, i32),
    health: u32,
}

impl Enemy {
    pub const MAX_HEALTH: u32 = 50;

    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: (x, y),
            health: Self::MAX_HEALTH,
        }
    }
}

impl Drawable for Enemy {
    fn sprite(&self) -> &'static str {
        "👾"
    }

    fn label(&self) -> &'static str {
        "Enemy"
    }

    fn position(&self) -> (i32, i32) {
        self.position
    }
}

impl Movable for Enemy {
    fn move_by(&mut self, dx: i32, dy: i32) {
        self.position = shift(self.position, dx, dy);
    }
}

impl Damageable for Enemy {
    fn health(&self) -> u32 {
        self.health
    }

    fn max_health(&self) -> u32 {
        Self::MAX_HEALTH
    }

    fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        debug!(amount, health = self.health, "enemy hit");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chest {
    position: (i32, i32),
}

impl Chest {
    pub fn new(x: i32, y: i32) -> Self {
        Self { position: (x, y) }
    }
}

impl Drawable for Chest {
    fn sprite(&self) -> &'static str {
        "📦"
    }

    fn label(&self) -> &'static str {
        "Chest"
    }

    fn position(&self) -> (i32, i32) {
        self.position
    }
}

impl Interactable for Chest {
    fn interaction_text(&self) -> &'static str {
        "Press E to open chest"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    position: (i32, i32),
}

impl Wall {
    pub fn new(x: i32, y: i32) -> Self {
        Self { position: (x, y) }
    }
}

impl Drawable for Wall {
    fn sprite(&self) -> &'static str {
        "🧱"
    }

    fn label(&self) -> &'static str {
        "Wall"
    }

    fn position(&self) -> (i32, i32) {
        self.position
    }
}

// =============================================================================
// Systems that only see one capability
// =============================================================================

pub fn render_all(scene: &[&dyn Drawable]) -> Vec<String> {
    scene.iter().map(|entity| entity.draw()).collect()
}

/// Returns whether the target survived.
pub fn attack<T: Damageable + ?Sized>(target: &mut T, damage: u32) -> bool {
    target.take_damage(damage);
    target.is_alive()
}
