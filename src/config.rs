use log::Level;

pub const PAGE_TITLE: &str = "Society of Engineering Students - JKUAT";

/// Splash overlay and cursor ring wait this long before the page counts as loaded.
pub const LOADED_DELAY_MS: u32 = 500;

/// Full-screen preloader shown by the page wrapper on first paint.
pub const PRELOADER_MS: u32 = 2_500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Header switches to its solid backdrop once `scroll_y` exceeds this.
    pub scroll_threshold: f64,
    /// Focal line sits at `viewport_height / focal_divisor` below the top.
    pub focal_divisor: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 10.0,
            focal_divisor: 3.0,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
