// Element ids and classes the page shell provides, plus web-only tuning.

// Navigation
pub const NAV_ID: &str = "orbital-nav";
pub const NAV_ITEM_SELECTOR: &str = ".nav-item";
pub const NAV_COMPACT_CLASS: &str = "nav-compact";

// Hero
pub const HERO_ID: &str = "hero";
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const HERO_LOADED_CLASS: &str = "is-loaded";
pub const HERO_LOADED_DELAY_MS: i32 = 500;

// Music section
pub const TRACK_SELECTOR: &str = "#track-list [data-track-id]";
pub const PLAYER_AUDIO_ID: &str = "player-audio";
pub const PLAYER_TITLE_ID: &str = "player-title";
pub const PLAYER_TOGGLE_ID: &str = "player-toggle";
pub const PLAYER_PROGRESS_ID: &str = "player-progress";
pub const PLAYER_COVER_ID: &str = "player-cover";
pub const VISUALIZER_ID: &str = "visualizer";
pub const ACTIVE_CLASS: &str = "is-active";
pub const PLAYING_CLASS: &str = "is-playing";

// Visualizer bar gradient, top to bottom
pub const BAR_COLOR_TOP: &str = "#ff1e1e";
pub const BAR_COLOR_BOTTOM: &str = "#990000";

