//! Input abstraction
//!
//! # Архитектура
//!
//! ```text
//! Device (keyboard / mouse / touch buttons): клиент
//!     ↓
//! ControlInput / LookInput (ECS events) - events.rs
//!     ↓
//! apply_control_inputs (PreUpdate) - systems.rs
//!     ↓
//! InputState (resource, boolean flags) - state.rs
//!     ↓
//! FixedUpdate gameplay systems (читают флаги раз в тик)
//! ```
//!
//! Источник ввода не важен: desktop и mobile отличаются только тем,
//! кто пишет `ControlInput`.

pub mod events;
pub mod state;
pub mod systems;

pub use events::*;
pub use state::*;
pub use systems::*;
