//! Device description channel
//!
//! The rendering subsystem is configured out of band: the shell publishes a
//! [`DeviceDesc`] describing the display it created, and the renderer reads
//! it through a shared [`DeviceConfig`] handle. The description is populated
//! in two passes: display geometry before the window exists, then the window
//! handle once creation succeeds.

use std::sync::{Arc, Mutex};

use winit::window::Window;

/// Display/runtime parameters consumed by the rendering subsystem.
#[derive(Debug, Clone, Default)]
pub struct DeviceDesc {
    /// Application name, mirrors the window title
    pub app_name: String,
    /// Whether exclusive fullscreen is active
    pub fullscreen: bool,
    /// Whether presentation should wait for vblank
    pub vsync: bool,
    /// Client width in physical pixels
    pub width: u32,
    /// Client height in physical pixels
    pub height: u32,
    /// The created window; absent until the handle pass runs
    pub window: Option<Arc<Window>>,
}

/// Shared handle to the published device description.
///
/// Cloneable so the shell and the renderer hold it independently. The mutex
/// exists for the renderer's benefit; the shell only touches the description
/// from the event-loop thread.
#[derive(Debug, Clone, Default)]
pub struct DeviceConfig {
    desc: Arc<Mutex<DeviceDesc>>,
}

impl DeviceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the published description.
    pub fn set_desc(&self, desc: DeviceDesc) {
        *self.lock() = desc;
    }

    /// Returns a snapshot of the published description.
    pub fn desc(&self) -> DeviceDesc {
        self.lock().clone()
    }

    /// Merges the created window into the already-published description,
    /// leaving the geometry fields untouched.
    pub fn attach_window(&self, window: Arc<Window>) {
        self.lock().window = Some(window);
    }

    /// Clears the window handle during teardown.
    pub fn detach_window(&self) {
        self.lock().window = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DeviceDesc> {
        self.desc.lock().expect("device description lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry_desc() -> DeviceDesc {
        DeviceDesc {
            app_name: "test".to_string(),
            fullscreen: true,
            vsync: false,
            width: 1280,
            height: 720,
            window: None,
        }
    }

    #[test]
    fn published_description_round_trips() {
        let device = DeviceConfig::new();
        device.set_desc(geometry_desc());

        let desc = device.desc();
        assert_eq!(desc.app_name, "test");
        assert!(desc.fullscreen);
        assert!(!desc.vsync);
        assert_eq!((desc.width, desc.height), (1280, 720));
        assert!(desc.window.is_none());
    }

    #[test]
    fn detaching_the_window_keeps_the_geometry_pass() {
        let device = DeviceConfig::new();
        device.set_desc(geometry_desc());
        device.detach_window();

        let desc = device.desc();
        assert_eq!((desc.width, desc.height), (1280, 720));
        assert!(desc.window.is_none());
    }

    #[test]
    fn handles_are_shared_between_clones() {
        let device = DeviceConfig::new();
        let renderer_view = device.clone();
        device.set_desc(geometry_desc());

        assert_eq!(renderer_view.desc().width, 1280);
    }
}
