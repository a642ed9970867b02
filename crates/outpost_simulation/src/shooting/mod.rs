//! Shooting domain: пули и прицел (player)
//!
//! Содержит:
//! - Scope (zoom состояние + плавный переход FOV)
//! - ProjectileFired / ProjectileExpired (events)
//! - fire / advance / cull системы
//! - ease_out_cubic (easing function)

pub mod events;
pub mod scope;
pub mod systems;

pub use events::*;
pub use scope::*;
pub use systems::*;
