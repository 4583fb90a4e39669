use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose transitions while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Number of hero videos shipped under `videos/hero-{n}.mp4`.
pub const HERO_VIDEO_COUNT: u32 = 1;

/// Navigation chrome slide/fade.
pub const NAV_TWEEN_MS: u32 = 200;
pub const NAV_HIDDEN_OFFSET_PX: f64 = -100.0;

/// Hero preview expand: the next video grows, the preview tile pops concurrently.
pub const HERO_EXPAND_MS: u32 = 1000;
pub const HERO_PREVIEW_POP_MS: u32 = 1500;
pub const HERO_PREVIEW_REST_SCALE: f64 = 1.5;

/// Top stories reveal triggers, as the fraction of the viewport height the
/// section top has to cross.
pub const REVEAL_TITLE_AT: f64 = 0.85;
pub const REVEAL_FEATURED_AT: f64 = 0.82;
pub const REVEAL_ROWS_AT: f64 = 0.80;
pub const REVEAL_ROW_STAGGER_MS: u32 = 80;

/// Static media is served from the site root next to `index.html`.
pub fn media_url(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}
