// Camera rig and input control mode selection.

use glam::Vec3;
use std::f32::consts::FRAC_PI_4;

/// Perspective camera plus the orbit controls attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    /// Orbit pivot; sits just beside the camera so orbiting turns the head in place.
    pub target: Vec3,
    /// Initial upward orbit, in radians.
    pub initial_pitch: f32,
    pub zoom_enabled: bool,
    pub pan_enabled: bool,
}

impl Default for CameraRig {
    fn default() -> Self {
        let position = Vec3::new(0.0, 10.0, 0.0);
        Self {
            fov_degrees: 90.0,
            aspect: 1.0,
            near: 0.001,
            far: 700.0,
            position,
            target: position + Vec3::new(0.1, 0.0, 0.0),
            initial_pitch: FRAC_PI_4,
            zoom_enabled: false,
            pan_enabled: false,
        }
    }
}

impl CameraRig {
    /// Matches the projection to the drawable size. Zero-area sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Orbit,
    DeviceOrientation,
}

/// Tracks which controller drives the camera.
///
/// Starts on orbit controls and switches once, permanently, to device
/// orientation after the first usable sensor reading.
#[derive(Debug, Clone)]
pub struct Controls {
    mode: ControlMode,
    fullscreen_on_click: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            mode: ControlMode::Orbit,
            fullscreen_on_click: false,
        }
    }
}

impl Controls {
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn fullscreen_on_click(&self) -> bool {
        self.fullscreen_on_click
    }

    /// Feeds a device-orientation reading. Returns true when this reading
    /// caused the switch to device-orientation controls.
    pub fn on_device_orientation(&mut self, alpha: Option<f32>) -> bool {
        if self.mode == ControlMode::DeviceOrientation {
            return false;
        }
        // Desktop browsers fire the event with a null or zero alpha.
        match alpha {
            Some(a) if a != 0.0 && !a.is_nan() => {
                self.mode = ControlMode::DeviceOrientation;
                self.fullscreen_on_click = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_aspect() {
        let mut cam = CameraRig::default();
        assert!(cam.resize(1920, 1080));
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn resize_ignores_empty_surfaces() {
        let mut cam = CameraRig::default();
        assert!(!cam.resize(0, 1080));
        assert!(!cam.resize(800, 0));
        assert_eq!(cam.aspect, 1.0);
    }

    #[test]
    fn orbit_target_sits_beside_the_camera() {
        let cam = CameraRig::default();
        assert_eq!(cam.target - cam.position, Vec3::new(0.1, 0.0, 0.0));
        assert!(!cam.zoom_enabled && !cam.pan_enabled);
    }

    #[test]
    fn orientation_without_alpha_keeps_orbit_controls() {
        let mut controls = Controls::default();
        assert!(!controls.on_device_orientation(None));
        assert!(!controls.on_device_orientation(Some(0.0)));
        assert!(!controls.on_device_orientation(Some(f32::NAN)));
        assert_eq!(controls.mode(), ControlMode::Orbit);
        assert!(!controls.fullscreen_on_click());
    }

    #[test]
    fn first_real_reading_switches_once() {
        let mut controls = Controls::default();
        assert!(controls.on_device_orientation(Some(12.5)));
        assert_eq!(controls.mode(), ControlMode::DeviceOrientation);
        assert!(controls.fullscreen_on_click());
        assert!(!controls.on_device_orientation(Some(40.0)));
    }
}
