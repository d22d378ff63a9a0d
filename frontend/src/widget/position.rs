use log::warn;
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const POSITION_KEY: &str = "floating-contact-position";

/// Offset of the widget from the bottom-right corner of the viewport, in pixels.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct WidgetPosition {
    pub x: f64,
    pub y: f64,
}

pub const DEFAULT_POSITION: WidgetPosition = WidgetPosition { x: 20.0, y: 20.0 };

impl Default for WidgetPosition {
    fn default() -> Self {
        DEFAULT_POSITION
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetSize {
    pub width: f64,
    pub height: f64,
}

fn clamp_axis(value: f64, viewport: f64, widget: f64) -> f64 {
    let max = (viewport - widget).max(0.0);
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

impl WidgetPosition {
    /// Keep the whole widget inside the viewport.
    pub fn clamp(self, viewport: Viewport, widget: WidgetSize) -> Self {
        Self {
            x: clamp_axis(self.x, viewport.width, widget.width),
            y: clamp_axis(self.y, viewport.height, widget.height),
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Self {
        let raw = match store.get(POSITION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return DEFAULT_POSITION,
            Err(e) => {
                warn!("could not read widget position: {}", e);
                return DEFAULT_POSITION;
            }
        };
        match serde_json::from_str::<WidgetPosition>(&raw) {
            Ok(pos) if pos.x.is_finite() && pos.y.is_finite() => pos,
            _ => {
                warn!("ignoring stored widget position {:?}", raw);
                DEFAULT_POSITION
            }
        }
    }

    /// Failures are logged and otherwise ignored.
    pub fn save(&self, store: &dyn KeyValueStore) {
        let raw = match serde_json::to_string(self) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("could not encode widget position: {}", e);
                return;
            }
        };
        if let Err(e) = store.set(POSITION_KEY, &raw) {
            warn!("could not persist widget position: {}", e);
        }
    }
}
