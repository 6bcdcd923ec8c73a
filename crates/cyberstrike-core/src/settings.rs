//! User-adjustable settings forwarded to the renderer and audio frontend.

use serde::{Deserialize, Serialize};

use crate::enums::GraphicsQuality;

/// Player-facing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub graphics: GraphicsQuality,
    pub resolution: String,
    pub master_volume: f32,
    pub sfx_volume: f32,
    /// Multiplier applied to raw mouse movement.
    pub mouse_sensitivity: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            graphics: GraphicsQuality::Medium,
            resolution: "1920x1080".to_string(),
            master_volume: 0.7,
            sfx_volume: 0.8,
            mouse_sensitivity: 1.0,
        }
    }
}

/// Renderer configuration derived from the graphics quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderProfile {
    pub shadows: bool,
    pub antialias: bool,
    /// Upper bound applied to the device pixel ratio.
    pub pixel_ratio_cap: f32,
}

impl GraphicsQuality {
    pub fn render_profile(self) -> RenderProfile {
        match self {
            GraphicsQuality::Low => RenderProfile {
                shadows: false,
                antialias: false,
                pixel_ratio_cap: 1.0,
            },
            GraphicsQuality::Medium => RenderProfile {
                shadows: true,
                antialias: true,
                pixel_ratio_cap: 1.5,
            },
            GraphicsQuality::High => RenderProfile {
                shadows: true,
                antialias: true,
                pixel_ratio_cap: 2.0,
            },
        }
    }
}

impl Settings {
    /// Clamp volumes to [0, 1] and keep sensitivity positive.
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        if !self.mouse_sensitivity.is_finite() || self.mouse_sensitivity <= 0.0 {
            self.mouse_sensitivity = 1.0;
        }
        self
    }
}
