//! Integration tests for window placement and the device description channel

use game_shell::app::WindowConfig;
use game_shell::app::window::{DisplayMode, Placement, ScreenMetrics, resolve_placement};
use game_shell::device::{DeviceConfig, DeviceDesc};

fn window_config(fullscreen: bool, width: u32, height: u32) -> WindowConfig {
    WindowConfig {
        title: "Placement Test".to_string(),
        width,
        height,
        fullscreen,
        vsync: true,
        resizable: false,
        decorated: true,
    }
}

#[test]
fn test_windowed_placement_is_centered() {
    let screen = ScreenMetrics {
        width: 2560,
        height: 1440,
    };
    let placement = resolve_placement(&window_config(false, 1280, 720), screen, &[]).unwrap();

    assert_eq!(
        placement,
        Placement::Windowed {
            x: 640,
            y: 360,
            width: 1280,
            height: 720,
        }
    );
}

#[test]
fn test_fullscreen_placement_selects_the_configured_mode() {
    let screen = ScreenMetrics {
        width: 2560,
        height: 1440,
    };
    let modes = [
        DisplayMode {
            width: 2560,
            height: 1440,
            bit_depth: 32,
        },
        DisplayMode {
            width: 1280,
            height: 720,
            bit_depth: 32,
        },
    ];
    let placement = resolve_placement(&window_config(true, 1280, 720), screen, &modes).unwrap();

    assert_eq!(placement, Placement::Fullscreen { mode_index: 1 });
}

#[test]
fn test_fullscreen_placement_fails_without_a_32_bit_mode() {
    let screen = ScreenMetrics {
        width: 2560,
        height: 1440,
    };
    let modes = [DisplayMode {
        width: 1280,
        height: 720,
        bit_depth: 16,
    }];

    assert!(resolve_placement(&window_config(true, 1280, 720), screen, &modes).is_err());
}

#[test]
fn test_device_description_is_published_in_two_passes() {
    let device = DeviceConfig::new();
    let renderer_view = device.clone();

    // Geometry pass, as the shell publishes it before window creation.
    device.set_desc(DeviceDesc {
        app_name: "Placement Test".to_string(),
        fullscreen: false,
        vsync: true,
        width: 1280,
        height: 720,
        window: None,
    });

    let desc = renderer_view.desc();
    assert_eq!(desc.app_name, "Placement Test");
    assert_eq!((desc.width, desc.height), (1280, 720));
    assert!(desc.window.is_none());

    // Teardown clears only the handle slot.
    device.detach_window();
    assert_eq!(renderer_view.desc().width, 1280);
}
