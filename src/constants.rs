//! Application constants and preference keys

pub const APP_NAME: &str = "Seal Network Settings";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PREFERENCES_FILE: &str = "preferences.json";

// Preference keys
pub const MAX_RATE: &str = "max_rate";
pub const RATE_LIMIT: &str = "rate_limit";
pub const COOKIES: &str = "cookies";
pub const COOKIES_DOMAIN: &str = "cookies_domain";
pub const COOKIES_FILE: &str = "cookies_file";
pub const CONCURRENT: &str = "concurrent_fragments";

// Window geometry keys
pub const WINDOW_X: &str = "window_x";
pub const WINDOW_Y: &str = "window_y";
pub const WINDOW_W: &str = "window_w";
pub const WINDOW_H: &str = "window_h";

pub const DEFAULT_MAX_RATE: &str = "1000";
pub const DEFAULT_CONCURRENT: i32 = 8;

/// Accepted download rate cap, in KB/s (inclusive)
pub const MAX_RATE_RANGE: (u32, u32) = (1, 1_000_000);

/// Slider positions at or below this snap to a single fragment
pub const CONCURRENT_DEAD_ZONE: f32 = 0.125;
pub const CONCURRENT_MAX: i32 = 16;
