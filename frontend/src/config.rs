use log::Level;

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/assets"  // Served by trunk from frontend/assets when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "/static/assets"  // Production bundle layout
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn background_video_src() -> String {
    format!("{}/gotham-cartoon-bg.mp4", get_asset_base())
}

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Cursor trail
pub const TRAIL_CAPACITY: usize = 30;
pub const TRAIL_MIN_DISTANCE_PX: f64 = 2.0;
pub const TRAIL_DECAY_MS: u32 = 80;

// Title phases, measured from mount
pub const TITLE_ENTER_MS: u32 = 300;
pub const TITLE_SHINE_MS: u32 = 1800;
pub const TITLE_IDLE_MS: u32 = 3000;
pub const TITLE_CHAR_STAGGER_MS: u32 = 60;
pub const TITLE_IDLE_STAGGER_S: f64 = 0.15;

// Background video
pub const VIDEO_PLAYBACK_RATE: f64 = 0.8;
pub const BACKGROUND_FALLBACK_MS: u32 = 6000;

// Loading gate
pub const LOADING_RELEASE_DELAY_MS: u32 = 500;

// Cards
pub const CARD_MAX_TILT_DEG: f64 = 8.0;
pub const CARD_PERSPECTIVE_PX: u32 = 1000;
pub const CARD_BASE_DELAY_MS: u32 = 200;
pub const CARD_STAGGER_MS: u32 = 100;
