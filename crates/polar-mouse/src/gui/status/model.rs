use crate::config::Config;
use polarcoord::coords::{self, AngleNotation, CoordinateMode, Displacement};

pub const TURN_OFF_LABEL: &str = "Turn Off Tracking";
pub const QUIT_LABEL: &str = "Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    StartTracking,
    ShowMenu,
}

/// What the status label shows and which toggles are active.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub tracking: bool,
    pub mode: CoordinateMode,
    pub notation: AngleNotation,
    pub title: String,
}

impl Status {
    pub fn new(mode: CoordinateMode, notation: AngleNotation) -> Self {
        Self {
            tracking: false,
            mode,
            notation,
            title: coords::placeholder(mode).to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.mode, config.notation)
    }

    /// The first click starts tracking, later clicks open the menu.
    pub fn click(&mut self) -> ClickAction {
        if self.start() {
            ClickAction::StartTracking
        } else {
            ClickAction::ShowMenu
        }
    }

    /// Returns false if already tracking.
    pub fn start(&mut self) -> bool {
        let started = !self.tracking;
        self.tracking = true;
        started
    }

    /// Returns false if already idle.
    pub fn stop(&mut self) -> bool {
        let stopped = self.tracking;
        self.tracking = false;
        self.reset_title();
        stopped
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.reset_title();
    }

    // takes effect on the next sample
    pub fn toggle_notation(&mut self) {
        self.notation = self.notation.toggled();
    }

    pub fn apply_config(&mut self, config: &Config) {
        let mode_changed = self.mode != config.mode;
        self.mode = config.mode;
        self.notation = config.notation;
        if mode_changed {
            self.reset_title();
        }
    }

    /// Renders a new sample. Ignored while idle; returns whether the title changed.
    pub fn update(&mut self, displacement: Displacement) -> bool {
        if !self.tracking {
            return false;
        }
        let title = coords::format(displacement, self.mode, self.notation);
        let changed = title != self.title;
        self.title = title;
        changed
    }

    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            CoordinateMode::Polar => "Switch to Cartesian",
            CoordinateMode::Cartesian => "Switch to Polar",
        }
    }

    pub fn notation_label(&self) -> &'static str {
        match self.notation {
            AngleNotation::Degrees => "Show θ in terms of π",
            AngleNotation::PiFraction => "Show θ in Degrees",
        }
    }

    fn reset_title(&mut self) {
        self.title = coords::placeholder(self.mode).to_string();
    }
}
