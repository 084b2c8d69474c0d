use crate::coords::Displacement;
use derive_more::{AsRef, Deref, Display, From, Into};
use hyprland::data::{CursorPosition, Monitor, Monitors, Transforms};
use hyprland::error::HyprError;
use hyprland::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct MonitorName(String);

impl MonitorName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

/// Logical geometry of a monitor in compositor coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Screen {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Screen {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    fn from_monitor(monitor: &Monitor) -> Self {
        Self::from_mode(
            Point::new(monitor.x as f64, monitor.y as f64),
            (monitor.width as f64, monitor.height as f64),
            monitor.scale as f64,
            is_quarter_turn(monitor.transform),
        )
    }

    /// Logical geometry from a monitor's pixel mode. A quarter-turned monitor lays its mode out
    /// sideways.
    pub fn from_mode(
        origin: Point,
        (width, height): (f64, f64),
        scale: f64,
        rotated: bool,
    ) -> Self {
        let scale = if scale > 0.0 { scale } else { 1.0 };
        let (width, height) = if rotated {
            (height, width)
        } else {
            (width, height)
        };
        Self::new(origin, width / scale, height / scale)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    /// Vector from the screen center to `cursor`, flipped so that up is positive `dy`.
    pub fn displacement_of(&self, cursor: Point) -> Displacement {
        let center = self.center();
        Displacement::new(cursor.x - center.x, center.y - cursor.y)
    }
}

fn is_quarter_turn(transform: Transforms) -> bool {
    matches!(
        transform,
        Transforms::Normal90
            | Transforms::Normal270
            | Transforms::Flipped90
            | Transforms::Flipped270
    )
}

#[derive(Debug, Error)]
pub enum SampleError {
    #[error(transparent)]
    Hypr(#[from] HyprError),
    #[error("No focused monitor")]
    NoFocusedMonitor,
}

pub fn get_active_monitor() -> Option<MonitorName> {
    Monitors::get()
        .ok()?
        .into_iter()
        .find(|m| m.focused)
        .map(|m| MonitorName(m.name))
}

pub fn focused_screen() -> Result<Screen, SampleError> {
    Monitors::get()?
        .into_iter()
        .find(|m| m.focused)
        .map(|m| Screen::from_monitor(&m))
        .ok_or(SampleError::NoFocusedMonitor)
}

pub fn cursor_position() -> Result<Point, SampleError> {
    let cursor = CursorPosition::get()?;
    Ok(Point::new(cursor.x as f64, cursor.y as f64))
}

/// Samples the cursor relative to the center of the focused monitor.
pub fn sample_displacement() -> Result<Displacement, SampleError> {
    let screen = focused_screen()?;
    let cursor = cursor_position()?;
    Ok(screen.displacement_of(cursor))
}
