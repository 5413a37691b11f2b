use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;

/// Shared presentation state. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    dark: Arc<AtomicBool>,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark: Arc::new(AtomicBool::new(dark)) }
    }

    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }

    pub fn set_dark(&self, on: bool) {
        self.dark.store(on, Ordering::Relaxed);
    }
}

/// Everything a session needs that is not form data: resolved configuration
/// and the live theme.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub theme: Theme,
}

impl AppContext {
    pub fn new(config: Config, dark_mode: bool) -> Self {
        Self { config, theme: Theme::new(dark_mode) }
    }
}
