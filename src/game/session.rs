//! Game Session
//!
//! The per-frame driver: samples input, integrates the player, publishes the
//! position snapshot, steps the active scene, and surfaces events for the
//! shell (UI/render layer) to react to.
//!
//! Ordering within a tick is fixed: the player integrator runs to completion
//! and publishes its position before any beast reads it - read-after-write
//! within the same tick, never stale. Pausing short-circuits the whole tick
//! so every timer and velocity freezes in place.

use crate::camera::LookCamera;
use crate::game::scenes::hive::HIVE_SPAWN;
use crate::game::scenes::{HiveEvent, HiveScene, LibraryEvent, LibraryScene, SceneKind};
use crate::game::settings::Settings;
use crate::game::state::GameProgress;
use crate::game::story::{Ending, ending_for_trust};
use crate::game::save::{self, SaveData};
use crate::input::InputCollector;
use crate::player::{PlayerIntegrator, PlayerState};

/// Events a tick can surface to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The player reached the companion and was teleported to the hive.
    TeleportedToHive,
    /// A beast captured the player; the shell should show the encounter
    /// overlay and call [`GameSession::resolve_encounter`] when done.
    EncounterStarted {
        /// Narration line for the overlay.
        message: &'static str,
    },
}

/// One running game: player, camera, scenes, and progression.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Input sources, fed by the shell between ticks.
    pub input: InputCollector,
    /// First-person camera derived from the player.
    pub camera: LookCamera,
    /// Player kinematic state, owned here and integrated each tick.
    pub player: PlayerState,
    /// Progression state.
    pub progress: GameProgress,
    /// Player settings.
    pub settings: Settings,
    library: LibraryScene,
    hive: HiveScene,
    library_integrator: PlayerIntegrator,
    hive_integrator: PlayerIntegrator,
    paused: bool,
    encounter_message: Option<&'static str>,
    elapsed: f32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Start a new game with the default world seed.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Start a new game; the seed drives the hive layout and beast behavior.
    pub fn with_seed(seed: u32) -> Self {
        let library = LibraryScene::new();
        let hive = HiveScene::new(seed);
        let library_integrator = PlayerIntegrator::new(library.bounds());
        let hive_integrator = PlayerIntegrator::new(hive.bounds());
        Self {
            input: InputCollector::new(),
            camera: LookCamera::new(),
            player: PlayerState::new(),
            progress: GameProgress::new(),
            settings: Settings::new(),
            library,
            hive,
            library_integrator,
            hive_integrator,
            paused: false,
            encounter_message: None,
            elapsed: 0.0,
        }
    }

    /// Resume a saved game.
    pub fn from_save(data: SaveData, seed: u32) -> Self {
        let mut session = Self::with_seed(seed);
        session.camera.aim_sensitivity = data.settings.aim_sensitivity;
        if data.progress.current_scene == SceneKind::Hive {
            session.player = PlayerState::at(HIVE_SPAWN);
        }
        session.progress = data.progress;
        session.settings = data.settings;
        session
    }

    /// Snapshot progress and settings for writing a save file.
    pub fn save_data(&self) -> SaveData {
        SaveData {
            progress: self.progress.clone(),
            settings: self.settings,
        }
    }

    /// Write the current state to a save file.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), save::SaveFileError> {
        save::save_game(path, &self.save_data())
    }

    /// The library scene (for rendering and interaction queries).
    pub fn library(&self) -> &LibraryScene {
        &self.library
    }

    /// The hive scene (for rendering beast positions/phases).
    pub fn hive(&self) -> &HiveScene {
        &self.hive
    }

    /// Scene the player is currently in.
    pub fn scene(&self) -> SceneKind {
        self.progress.current_scene
    }

    /// Total wall-clock time fed into the session; drives render-only bobs.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether the pause menu has frozen the simulation.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze the simulation (pause menu opened).
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the simulation exactly where it froze.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// The active encounter's narration, if one is playing.
    pub fn encounter_message(&self) -> Option<&'static str> {
        self.encounter_message
    }

    /// Close the encounter overlay and unfreeze the hive.
    pub fn resolve_encounter(&mut self) {
        self.encounter_message = None;
    }

    /// Update the aim sensitivity in both settings and camera.
    pub fn set_aim_sensitivity(&mut self, sensitivity: f32) {
        self.settings.set_aim_sensitivity(sensitivity);
        self.camera.aim_sensitivity = self.settings.aim_sensitivity;
    }

    /// Roll credits: pick the ending for the current trust and record it.
    pub fn reach_ending(&mut self) -> &'static Ending {
        let ending = ending_for_trust(self.progress.trust_level);
        self.progress.unlock_ending(ending.id);
        println!("[Cozy Library] Ending reached: {}", ending.name);
        ending
    }

    /// Switch back to the library (leaving the hive re-arms its trigger).
    pub fn return_to_library(&mut self) {
        self.progress.current_scene = SceneKind::Library;
        self.player = PlayerState::new();
        self.camera.follow(self.player.position);
        self.library.reset_trigger();
    }

    /// Step the simulation by one frame.
    ///
    /// Returns the events this tick produced, in order.
    pub fn update(&mut self, dt: f32) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        // Render clock: keeps idle bobs moving even under the pause menu
        self.elapsed += dt;

        if self.paused {
            return events;
        }

        match self.progress.current_scene {
            SceneKind::Library => {
                let frame = self.input.sample();
                self.library_integrator.update(&mut self.player, &frame, dt);
                self.camera.apply_look(frame.look, dt);
                self.camera.follow(self.player.position);

                if let Some(LibraryEvent::TeleportToHive) =
                    self.library.update(dt, self.player.position)
                {
                    self.enter_hive();
                    events.push(SessionEvent::TeleportedToHive);
                    println!("[Cozy Library] Teleporting to the hive...");
                }
            }
            SceneKind::Hive => {
                let encounter_active = self.encounter_message.is_some();
                if !encounter_active {
                    let frame = self.input.sample();
                    self.hive_integrator.update(&mut self.player, &frame, dt);
                    self.camera.apply_look(frame.look, dt);
                    self.camera.follow(self.player.position);
                }

                // Beasts read the snapshot published just above
                let snapshot = self.player.position;
                if let Some(HiveEvent::CaptureStarted { message }) =
                    self.hive.update(dt, snapshot, encounter_active)
                {
                    self.encounter_message = Some(message);
                    self.progress.record_transfur();
                    events.push(SessionEvent::EncounterStarted { message });
                    println!("[Cozy Library] Transfur encounter: {message}");
                }
            }
        }

        events
    }

    fn enter_hive(&mut self) {
        self.progress.current_scene = SceneKind::Hive;
        self.player = PlayerState::at(HIVE_SPAWN);
        self.camera.follow(self.player.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::scenes::library::COMPANION_POSITION;
    use crate::input::KeyCode;

    const DT: f32 = 0.016;

    /// Drive the session until the player reaches the hive.
    fn walk_to_hive(session: &mut GameSession) {
        // The companion is toward +X/-Z from the origin
        session.input.handle_key(KeyCode::D, true);
        session.input.handle_key(KeyCode::W, true);
        for _ in 0..2000 {
            if !session.update(DT).is_empty() {
                session.input.handle_key(KeyCode::D, false);
                session.input.handle_key(KeyCode::W, false);
                return;
            }
        }
        panic!("never reached the companion");
    }

    #[test]
    fn test_walking_to_companion_teleports() {
        let mut session = GameSession::new();
        assert_eq!(session.scene(), SceneKind::Library);

        walk_to_hive(&mut session);
        assert_eq!(session.scene(), SceneKind::Hive);
        assert_eq!(session.player.position, HIVE_SPAWN);
    }

    #[test]
    fn test_player_stays_in_library_bounds() {
        let mut session = GameSession::new();
        session.input.handle_key(KeyCode::A, true);
        session.input.handle_key(KeyCode::S, true);
        for _ in 0..3000 {
            session.update(DT);
            assert!(session.player.position.x >= -8.0);
            assert!(session.player.position.z <= 8.0);
        }
    }

    #[test]
    fn test_pause_freezes_player_and_camera() {
        let mut session = GameSession::new();
        session.input.handle_key(KeyCode::W, true);
        session.update(DT);
        let position = session.player.position;
        let yaw = session.camera.yaw;

        session.pause();
        session.input.accumulate_look(100.0, 0.0);
        for _ in 0..100 {
            assert!(session.update(DT).is_empty());
        }
        assert_eq!(session.player.position, position);
        assert_eq!(session.camera.yaw, yaw);

        session.resume();
        session.update(DT);
        assert!(session.player.position != position);
    }

    #[test]
    fn test_capture_starts_encounter_and_freezes_hive() {
        let mut session = GameSession::new();
        walk_to_hive(&mut session);

        // Stand on a beast: it captures on the next tick
        session.player.position = session.hive().beasts()[0].position();
        let events = session.update(DT);
        assert!(matches!(
            events.as_slice(),
            [SessionEvent::EncounterStarted { .. }]
        ));
        assert!(session.encounter_message().is_some());
        assert_eq!(session.progress.transfur_count, 1);

        // While the encounter plays, the player does not move
        session.input.handle_key(KeyCode::W, true);
        let held = session.player.position;
        for _ in 0..30 {
            session.update(DT);
        }
        assert_eq!(session.player.position, held);

        // Resolving resumes the simulation in place
        session.resolve_encounter();
        session.update(DT);
        assert!(session.player.position != held);
    }

    #[test]
    fn test_look_uses_aim_sensitivity() {
        let mut session = GameSession::new();
        session.set_aim_sensitivity(2.0);
        session.input.accumulate_look(1.0, 0.0);
        session.update(1.0);
        assert!((session.camera.yaw - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_reach_ending_records_it() {
        let mut session = GameSession::new();
        session.progress.set_trust(80);
        let ending = session.reach_ending();
        assert_eq!(ending.id, "good");
        assert_eq!(session.progress.endings_unlocked, vec!["good"]);
    }

    #[test]
    fn test_return_to_library_rearms_trigger() {
        let mut session = GameSession::new();
        walk_to_hive(&mut session);

        session.return_to_library();
        assert_eq!(session.scene(), SceneKind::Library);

        // The trigger works again on the second visit
        session.player.position = COMPANION_POSITION;
        walk_to_hive(&mut session);
        assert_eq!(session.scene(), SceneKind::Hive);
    }

    #[test]
    fn test_save_restore_round_trip() {
        let mut session = GameSession::with_seed(5);
        session.progress.adjust_trust(20);
        walk_to_hive(&mut session);

        let restored = GameSession::from_save(session.save_data(), 5);
        assert_eq!(restored.progress, session.progress);
        assert_eq!(restored.scene(), SceneKind::Hive);
        assert_eq!(restored.player.position, HIVE_SPAWN);
    }
}
