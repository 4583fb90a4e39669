//! Hero preview playlist: which clip is showing, which one the preview tile
//! offers next, and whether the first full load has happened yet.

use super::tween::{Easing, Pose, Tween};
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroEvent {
    PreviewClicked,
    AssetLoaded,
    /// The deployment now ships this many clips.
    TotalVideos(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroPlaylistState {
    current_index: u32,
    has_been_activated: bool,
    loaded_count: u32,
    is_loading: bool,
    total_videos: u32,
    activations: u32,
}

impl HeroPlaylistState {
    pub fn new(total_videos: u32) -> Self {
        Self::starting_at(total_videos, 1)
    }

    /// `current_index` is 1-based and clamped into `[1, total_videos]`.
    pub fn starting_at(total_videos: u32, current_index: u32) -> Self {
        let total_videos = total_videos.max(1);
        Self {
            current_index: current_index.clamp(1, total_videos),
            has_been_activated: false,
            loaded_count: 0,
            is_loading: true,
            total_videos,
            activations: 0,
        }
    }

    pub fn current_index(&self) -> u32 {
        self.current_index
    }

    /// The clip the preview tile shows: the one a click would switch to.
    pub fn upcoming_index(&self) -> u32 {
        (self.current_index % self.total_videos) + 1
    }

    pub fn has_been_activated(&self) -> bool {
        self.has_been_activated
    }

    pub fn loaded_count(&self) -> u32 {
        self.loaded_count
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn total_videos(&self) -> u32 {
        self.total_videos
    }

    /// Bumped on every click, so the expand transition replays even when
    /// the index wraps onto itself.
    pub fn activations(&self) -> u32 {
        self.activations
    }

    pub fn on_preview_clicked(&mut self) -> u32 {
        self.has_been_activated = true;
        self.activations = self.activations.wrapping_add(1);
        self.current_index = self.upcoming_index();
        self.current_index
    }

    /// Returns true on the one call that ends the loading phase.
    pub fn on_asset_loaded(&mut self) -> bool {
        self.loaded_count = self.loaded_count.saturating_add(1);
        if self.is_loading && self.loaded_count >= self.total_videos {
            self.is_loading = false;
            return true;
        }
        false
    }

    /// Resizes the playlist in place. The current clip is clamped into the
    /// new range and a finished loading phase stays finished.
    pub fn with_total_videos(&self, total_videos: u32) -> Self {
        let total_videos = total_videos.max(1);
        Self {
            current_index: self.current_index.min(total_videos),
            is_loading: self.is_loading && self.loaded_count < total_videos,
            total_videos,
            ..self.clone()
        }
    }

    pub fn apply(&self, event: HeroEvent) -> Self {
        let mut next = self.clone();
        match event {
            HeroEvent::PreviewClicked => {
                next.on_preview_clicked();
            }
            HeroEvent::AssetLoaded => {
                next.on_asset_loaded();
            }
            HeroEvent::TotalVideos(total) => next = self.with_total_videos(total),
        }
        next
    }
}

pub fn on_video_source_resolved(index: u32) -> String {
    format!("hero-{}", index)
}

pub fn video_path(index: u32) -> String {
    format!("videos/{}.mp4", on_video_source_resolved(index))
}

/// The two concurrent tweens started by a preview click.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandCue {
    /// The next clip grows from the preview tile to fill the frame.
    pub next: Tween,
    /// The preview tile pops back in from nothing.
    pub preview: Tween,
}

pub fn expand_cue() -> ExpandCue {
    let next = Tween::from_to(
        Pose::new().size("16rem", "16rem").visible(true),
        Pose::new().size("100%", "100%").visible(true),
        config::HERO_EXPAND_MS,
    )
    .easing(Easing::Power1InOut);

    let preview = Tween::from_to(
        Pose::new().scale(0.0),
        Pose::new().scale(config::HERO_PREVIEW_REST_SCALE),
        config::HERO_PREVIEW_POP_MS,
    )
    .easing(Easing::Power1InOut);

    ExpandCue { next, preview }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n_clicks_return_to_the_start() {
        for total in 1..=6 {
            for start in 1..=total {
                let mut state = HeroPlaylistState::starting_at(total, start);
                for _ in 0..total {
                    state.on_preview_clicked();
                }
                assert_eq!(state.current_index(), start, "total={total} start={start}");
            }
        }
    }

    #[test]
    fn clicks_walk_round_robin() {
        let mut state = HeroPlaylistState::new(3);
        let seen: Vec<u32> = (0..4).map(|_| state.on_preview_clicked()).collect();
        assert_eq!(seen, vec![2, 3, 1, 2]);
    }

    #[test]
    fn single_video_deployment_never_moves() {
        let mut state = HeroPlaylistState::new(1);
        assert!(!state.has_been_activated());
        for _ in 0..3 {
            state.on_preview_clicked();
            assert_eq!(state.current_index(), 1);
            assert!(state.has_been_activated());
            assert_eq!(on_video_source_resolved(state.current_index()), "hero-1");
        }
        assert_eq!(state.upcoming_index(), 1);
        assert_eq!(state.activations(), 3);
    }

    #[test]
    fn source_locator_is_pure_and_embeds_index() {
        for index in [1, 2, 7, 42, 1000] {
            let locator = on_video_source_resolved(index);
            assert_eq!(locator, on_video_source_resolved(index));
            assert_eq!(locator, format!("hero-{index}"));
        }
        assert_eq!(video_path(3), "videos/hero-3.mp4");
    }

    #[test]
    fn loading_ends_exactly_once() {
        let mut state = HeroPlaylistState::new(3);
        assert!(state.is_loading());
        assert!(!state.on_asset_loaded());
        assert!(!state.on_asset_loaded());
        assert!(state.is_loading());
        assert!(state.on_asset_loaded());
        assert!(!state.is_loading());
        for _ in 0..5 {
            assert!(!state.on_asset_loaded());
            assert!(!state.is_loading());
        }
        assert_eq!(state.loaded_count(), 8);
    }

    #[test]
    fn click_before_any_load_is_allowed() {
        let state = HeroPlaylistState::new(2).apply(HeroEvent::PreviewClicked);
        assert!(state.is_loading());
        assert!(state.has_been_activated());
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn apply_leaves_the_original_untouched() {
        let state = HeroPlaylistState::new(1);
        let loaded = state.apply(HeroEvent::AssetLoaded);
        assert!(state.is_loading());
        assert!(!loaded.is_loading());
    }

    #[test]
    fn degenerate_totals_are_clamped() {
        let state = HeroPlaylistState::starting_at(0, 9);
        assert_eq!(state.total_videos(), 1);
        assert_eq!(state.current_index(), 1);
        assert_eq!(HeroPlaylistState::starting_at(4, 0).current_index(), 1);
    }

    #[test]
    fn resizing_keeps_position_and_finished_loads() {
        let mut state = HeroPlaylistState::starting_at(4, 4);
        state.on_asset_loaded();
        let shrunk = state.apply(HeroEvent::TotalVideos(2));
        assert_eq!(shrunk.total_videos(), 2);
        assert_eq!(shrunk.current_index(), 2);
        assert!(shrunk.is_loading());

        let done = shrunk.apply(HeroEvent::AssetLoaded);
        assert!(!done.is_loading());
        let grown = done.apply(HeroEvent::TotalVideos(5));
        assert!(!grown.is_loading());
        assert_eq!(grown.upcoming_index(), 3);

        assert_eq!(grown.with_total_videos(5), grown);
        assert_eq!(grown.with_total_videos(0).total_videos(), 1);
    }

    #[test]
    fn shrinking_below_the_loaded_count_ends_loading() {
        let mut state = HeroPlaylistState::new(3);
        state.on_asset_loaded();
        state.on_asset_loaded();
        let resized = state.with_total_videos(2);
        assert!(!resized.is_loading());
        assert_eq!(resized.loaded_count(), 2);
    }

    #[test]
    fn expand_animations_start_together_at_1000_and_1500_ms() {
        let cue = expand_cue();

        let next = cue.next.timing();
        assert_eq!(next.duration, 1000.0);
        assert_eq!(next.delay, 0.0);
        assert_eq!(next.easing, Easing::Power1InOut.css());
        assert_eq!(cue.next.keyframes().len(), 2);

        let preview = cue.preview.timing();
        assert_eq!(preview.duration, 1500.0);
        assert_eq!(preview.delay, 0.0);
        assert_eq!(preview.easing, Easing::Power1InOut.css());
        let frames = cue.preview.keyframes();
        assert_eq!(frames[0].transform.as_deref(), Some("scale(0)"));
        assert_eq!(frames[1].transform.as_deref(), Some("scale(1.5)"));
    }

    #[test]
    fn expand_tweens_run_together_with_different_lengths() {
        let cue = expand_cue();
        assert_eq!(cue.next.delay_ms, 0);
        assert_eq!(cue.preview.delay_ms, 0);
        assert!(cue.preview.duration_ms > cue.next.duration_ms);
        assert_eq!(cue.next.to.width, Some("100%"));
        assert_eq!(cue.next.to.visible, Some(true));
        assert_eq!(cue.preview.from.as_ref().and_then(|p| p.scale), Some(0.0));
    }
}
