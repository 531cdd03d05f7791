pub mod camera;
pub mod frame;
pub mod layout;
pub mod motion;

pub use camera::{Viewport, WheelScroll};
pub use frame::{Panel, SceneFrame, PANEL_WIDTH_PX};

use crate::config::Config;
use camera::Lens;
use layout::GridLayout;
use motion::{FocusPose, MotionRates};

/// Scene parameters resolved from the config once per render
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSettings {
    pub layout: GridLayout,
    pub lens: Lens,
    pub motion: MotionRates,
    pub focus: FocusPose,
    pub bottom_guard: f32,
    pub camera_smoothing: f32,
    pub wheel_sensitivity: f32,
}

impl SceneSettings {
    pub fn from_config(config: &Config) -> Self {
        let scene = &config.scene;
        Self {
            layout: GridLayout {
                columns: config.columns,
                column_spacing: scene.column_spacing,
                row_spacing: scene.row_spacing,
                top_padding: scene.top_padding,
                bottom_padding: scene.bottom_padding,
                anchor_row: scene.anchor_row,
            },
            lens: Lens {
                distance: scene.camera_distance,
                fov_degrees: scene.fov_degrees,
            },
            motion: MotionRates {
                blend: scene.blend_rate,
                shrink: scene.shrink_rate,
            },
            focus: FocusPose {
                depth: scene.focus_depth,
                scale: scene.focus_scale,
            },
            bottom_guard: scene.bottom_guard,
            camera_smoothing: scene.camera_smoothing,
            wheel_sensitivity: scene.wheel_sensitivity,
        }
    }

    /// Scroll range for `visible` cards
    pub fn max_shift(&self, visible: usize) -> f32 {
        let rows = self.layout.rows(visible);
        camera::max_shift(self.layout.content_height(rows), &self.lens, self.bottom_guard)
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
