use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// Day counts at or above these values are highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeThresholds {
    pub warn_days: i64,
    pub alert_days: i64,
}

impl Default for AgeThresholds {
    fn default() -> Self {
        Self {
            warn_days: 15,
            alert_days: 30,
        }
    }
}

impl AgeThresholds {
    pub fn level(&self, days: i64) -> AgeLevel {
        if days >= self.alert_days {
            AgeLevel::Alert
        } else if days >= self.warn_days {
            AgeLevel::Warn
        } else {
            AgeLevel::Ok
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeLevel {
    Ok,
    Warn,
    Alert,
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub thresholds: AgeThresholds,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            thresholds: AgeThresholds::default(),
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    pub fn with_thresholds(mut self, thresholds: AgeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Apply the colour decision to the `colored` crate globally.
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }
}

pub struct AgeFormatter {
    config: FormattingConfig,
}

impl AgeFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        Self { config }
    }

    pub fn header(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.config.color.should_use_color() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
