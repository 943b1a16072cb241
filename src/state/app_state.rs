use bevy::prelude::*;
use bevy_egui::egui;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::content::{DECK_CARDS, PORTRAIT_FALLBACK, PORTRAIT_PRIMARY};
use crate::deck::DeckEngine;
use crate::motion::ParallaxSmoother;
use crate::road::{MarkerPose, RoadPath};
use crate::state::ViewportClass;

#[derive(Resource)]
pub struct AppState {
    pub config: super::AppConfig,

    // Fan deck
    pub deck: DeckEngine,

    // Road timeline
    pub road_path: RoadPath,
    pub road_viewport: ViewportClass,
    pub road_progress: f32,
    pub road_pose: MarkerPose,

    // Hero
    pub parallax: ParallaxSmoother,
    portrait_fallback_applied: bool,
    portrait_exhausted: bool,

    // Loaded textures cache (asset path -> egui::TextureHandle); paths that
    // failed to decode are remembered so we only warn once.
    pub texture_cache: HashMap<String, egui::TextureHandle>,
    pub failed_assets: HashSet<String>,

    // Status message
    pub status_message: Option<(String, Instant)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let config = super::AppConfig::load();
        let road_viewport = ViewportClass::Desktop;
        let road_path = RoadPath::for_viewport(road_viewport);
        let road_progress = if config.reduced_motion { 1.0 } else { 0.0 };
        let road_pose = road_path.marker_pose(road_progress);

        let mut deck = DeckEngine::new(DECK_CARDS.len());
        deck.set_reduced_motion(config.reduced_motion);

        let mut parallax = ParallaxSmoother::new();
        if !config.reduced_motion {
            parallax.start();
        }

        Self {
            config,
            deck,
            road_path,
            road_viewport,
            road_progress,
            road_pose,
            parallax,
            portrait_fallback_applied: false,
            portrait_exhausted: false,
            texture_cache: HashMap::new(),
            failed_assets: HashSet::new(),
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Flip the reduced-motion preference, re-syncing every widget that
    /// keys off it. The parallax loop is stopped outright so no per-frame
    /// work survives the switch. Persisting the config is the caller's job.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.config.reduced_motion = reduced;
        self.deck.set_reduced_motion(reduced);
        if reduced {
            self.parallax.stop();
            self.road_progress = 1.0;
        } else {
            self.parallax.start();
        }
        self.road_pose = self.road_path.marker_pose(self.road_progress);
    }

    /// Swap the road geometry when the window crosses the breakpoint.
    /// Re-places the marker at the last known progress so the pose never
    /// goes stale against the new path.
    pub fn select_road_variant(&mut self, class: ViewportClass) -> bool {
        if class == self.road_viewport {
            return false;
        }
        self.road_viewport = class;
        self.road_path = RoadPath::for_viewport(class);
        self.road_pose = self.road_path.marker_pose(self.road_progress);
        true
    }

    /// Record fresh scroll progress and move the marker.
    pub fn set_road_progress(&mut self, progress: f32) {
        self.road_progress = progress.clamp(0.0, 1.0);
        self.road_pose = self.road_path.marker_pose(self.road_progress);
    }

    /// Asset path for the hero portrait, accounting for the one-shot
    /// fallback swap.
    pub fn portrait_source(&self) -> Option<&'static str> {
        if self.portrait_exhausted {
            None
        } else if self.portrait_fallback_applied {
            Some(PORTRAIT_FALLBACK)
        } else {
            Some(PORTRAIT_PRIMARY)
        }
    }

    /// Note that the current portrait asset failed to load. The primary
    /// falls back to the secondary exactly once; a failing secondary leaves
    /// the painted placeholder.
    pub fn note_portrait_failure(&mut self) {
        if self.portrait_fallback_applied {
            self.portrait_exhausted = true;
        } else {
            self.portrait_fallback_applied = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let mut state = AppState::new();
        // Tests must not depend on whatever config file is on this machine.
        state.config = super::super::AppConfig::default();
        state.deck.set_reduced_motion(false);
        state
    }

    #[test]
    fn test_variant_switch_replaces_marker_pose() {
        let mut state = state();
        state.set_road_progress(0.5);
        let desktop_pose = state.road_pose;

        assert!(state.select_road_variant(ViewportClass::Compact));
        assert_eq!(state.road_progress, 0.5);
        assert_ne!(state.road_pose, desktop_pose);
        assert_eq!(state.road_pose, state.road_path.marker_pose(0.5));
    }

    #[test]
    fn test_variant_reselect_is_noop() {
        let mut state = state();
        assert!(!state.select_road_variant(ViewportClass::Desktop));
    }

    #[test]
    fn test_road_progress_clamped() {
        let mut state = state();
        state.set_road_progress(3.0);
        assert_eq!(state.road_progress, 1.0);
        state.set_road_progress(-1.0);
        assert_eq!(state.road_progress, 0.0);
    }

    #[test]
    fn test_portrait_falls_back_exactly_once() {
        let mut state = state();
        assert_eq!(state.portrait_source(), Some(PORTRAIT_PRIMARY));
        state.note_portrait_failure();
        assert_eq!(state.portrait_source(), Some(PORTRAIT_FALLBACK));
        state.note_portrait_failure();
        assert_eq!(state.portrait_source(), None);
    }

    #[test]
    fn test_reduced_motion_stops_parallax_and_completes_road() {
        let mut state = state();
        state.parallax.start();
        state.set_reduced_motion(true);
        assert!(!state.parallax.is_active());
        assert_eq!(state.road_progress, 1.0);
        assert_eq!(state.road_pose, state.road_path.marker_pose(1.0));
    }
}
