//! Session: start screen vs игра, счётчики
//!
//! Gameplay pipeline (FixedUpdate) работает только в `SessionPhase::Playing`.
//! Start screen overlay в клиенте вызывает `StartSessionIntent`,
//! Escape / потеря pointer lock: `PauseSessionIntent`.

use bevy::prelude::*;

use crate::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum SessionPhase {
    /// Overlay "click to play", симуляция стоит
    #[default]
    StartScreen,
    Playing,
}

#[derive(Resource, Debug, Clone, Default, Reflect)]
#[reflect(Resource)]
pub struct Session {
    pub phase: SessionPhase,
}

impl Session {
    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }
}

/// Счётчики сессии (для headless soak и debug overlay)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct SessionStats {
    pub ticks: u64,
    pub shots_fired: u64,
    pub projectiles_expired: u64,
}

impl SessionStats {
    pub fn live_projectiles(&self) -> u64 {
        self.shots_fired - self.projectiles_expired
    }
}

/// Event: начать игру (клик/тап по start overlay)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StartSessionIntent;

/// Event: вернуться на start screen
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PauseSessionIntent;

/// Run condition для gameplay систем
pub fn session_playing(session: Res<Session>) -> bool {
    session.is_playing()
}

pub fn start_session(session: &mut Session) {
    if session.phase != SessionPhase::Playing {
        session.phase = SessionPhase::Playing;
        crate::log_info("Session started");
    }
}

/// Пауза: held флаги сбрасываются, чтобы после возврата rig не ехал сам
pub fn pause_session(session: &mut Session, input: &mut InputState) {
    if session.phase != SessionPhase::StartScreen {
        session.phase = SessionPhase::StartScreen;
        input.clear_held();
        crate::log_info("Session paused");
    }
}

/// System: обработка StartSessionIntent / PauseSessionIntent
pub fn handle_session_intents(
    mut starts: EventReader<StartSessionIntent>,
    mut pauses: EventReader<PauseSessionIntent>,
    mut session: ResMut<Session>,
    mut input: ResMut<InputState>,
) {
    if starts.read().count() > 0 {
        start_session(&mut session);
    }
    if pauses.read().count() > 0 {
        pause_session(&mut session, &mut input);
    }
}

/// System: +1 тик (последний в FixedUpdate цепочке)
pub fn count_tick(mut stats: ResMut<SessionStats>) {
    stats.ticks += 1;
}
