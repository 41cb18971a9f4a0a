//! Window placement and attribute resolution
//!
//! Everything that can be decided without talking to the OS lives here as
//! pure functions, so the arithmetic stays unit-testable. The runner feeds
//! these with the real monitor metrics and video mode list.

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::window::{Fullscreen, WindowAttributes};

use super::config::WindowConfig;
use super::error::ShellError;

/// Exclusive fullscreen requests ask for 32 bits per pixel, the depth the
/// rendering subsystem is configured for.
pub const REQUIRED_BIT_DEPTH: u16 = 32;

/// Size of the primary monitor in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenMetrics {
    pub width: u32,
    pub height: u32,
}

/// A candidate exclusive video mode as reported by the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u16,
}

/// Resolved window placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Take exclusive fullscreen using the indexed entry of the mode list
    Fullscreen { mode_index: usize },
    /// Windowed at the given outer position with the given client size
    Windowed {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// Centers a `width` x `height` window on the screen, integer division.
/// A window larger than the screen lands at negative coordinates.
pub fn centered_position(screen: ScreenMetrics, width: u32, height: u32) -> (i32, i32) {
    let x = (screen.width as i32 - width as i32) / 2;
    let y = (screen.height as i32 - height as i32) / 2;
    (x, y)
}

/// Picks the first mode matching the configured resolution at 32-bit depth.
/// Modes with any other size or depth are ignored.
pub fn pick_display_mode(modes: &[DisplayMode], width: u32, height: u32) -> Option<usize> {
    modes.iter().position(|mode| {
        mode.width == width && mode.height == height && mode.bit_depth == REQUIRED_BIT_DEPTH
    })
}

/// Resolves window placement for the given configuration.
///
/// Fullscreen requests consult only the mode list; windowed requests consult
/// only the screen metrics. The two branches never mix.
pub fn resolve_placement(
    config: &WindowConfig,
    screen: ScreenMetrics,
    modes: &[DisplayMode],
) -> Result<Placement, ShellError> {
    if config.fullscreen {
        let mode_index = pick_display_mode(modes, config.width, config.height).ok_or(
            ShellError::Placement {
                width: config.width,
                height: config.height,
            },
        )?;
        Ok(Placement::Fullscreen { mode_index })
    } else {
        let (x, y) = centered_position(screen, config.width, config.height);
        Ok(Placement::Windowed {
            x,
            y,
            width: config.width,
            height: config.height,
        })
    }
}

/// A [`Placement`] with its OS handles looked up: the exclusive mode handle
/// travels with the fullscreen branch, so a fullscreen window cannot be
/// built without one.
#[derive(Debug, Clone)]
pub enum ResolvedMode {
    /// Exclusive fullscreen with the chosen video mode
    Fullscreen(Fullscreen),
    /// Windowed, decorated outer frame at the computed origin
    Windowed { x: i32, y: i32 },
}

/// Builds winit window attributes from the resolved mode.
///
/// `with_position` is never set on the fullscreen branch. Windowed modes
/// position the outer frame at the computed origin and size the client area
/// from the configuration.
pub fn window_attributes(config: &WindowConfig, mode: &ResolvedMode) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
        .with_decorations(config.decorated);

    match mode {
        ResolvedMode::Fullscreen(fullscreen) => {
            attrs = attrs.with_fullscreen(Some(fullscreen.clone()));
        }
        ResolvedMode::Windowed { x, y } => {
            attrs = attrs.with_position(PhysicalPosition::new(*x, *y));
        }
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Position;

    const SCREEN: ScreenMetrics = ScreenMetrics {
        width: 1920,
        height: 1080,
    };

    fn test_config(fullscreen: bool) -> WindowConfig {
        WindowConfig {
            title: "test".to_string(),
            width: 800,
            height: 600,
            fullscreen,
            vsync: true,
            resizable: false,
            decorated: true,
        }
    }

    #[test]
    fn centering_splits_the_margin_evenly() {
        assert_eq!(centered_position(SCREEN, 800, 600), (560, 240));
    }

    #[test]
    fn centering_truncates_odd_margins() {
        let screen = ScreenMetrics {
            width: 1919,
            height: 1079,
        };
        assert_eq!(centered_position(screen, 800, 600), (559, 239));
    }

    #[test]
    fn oversized_windows_center_at_negative_origins() {
        let screen = ScreenMetrics {
            width: 800,
            height: 600,
        };
        assert_eq!(centered_position(screen, 1024, 768), (-112, -84));
    }

    #[test]
    fn mode_picking_requires_exact_size_and_depth() {
        let modes = [
            DisplayMode {
                width: 800,
                height: 600,
                bit_depth: 16,
            },
            DisplayMode {
                width: 1024,
                height: 768,
                bit_depth: 32,
            },
            DisplayMode {
                width: 800,
                height: 600,
                bit_depth: 32,
            },
            DisplayMode {
                width: 800,
                height: 600,
                bit_depth: 32,
            },
        ];

        // First exact 32-bit match wins; the 16-bit entry is skipped.
        assert_eq!(pick_display_mode(&modes, 800, 600), Some(2));
        assert_eq!(pick_display_mode(&modes, 1024, 768), Some(1));
        assert_eq!(pick_display_mode(&modes, 1280, 720), None);
    }

    #[test]
    fn windowed_placement_ignores_the_mode_list() {
        let placement = resolve_placement(&test_config(false), SCREEN, &[]).unwrap();
        assert_eq!(
            placement,
            Placement::Windowed {
                x: 560,
                y: 240,
                width: 800,
                height: 600,
            }
        );
    }

    #[test]
    fn fullscreen_placement_never_centers() {
        let modes = [DisplayMode {
            width: 800,
            height: 600,
            bit_depth: 32,
        }];
        // Degenerate screen metrics would produce a nonsense center; the
        // fullscreen branch must not look at them.
        let screen = ScreenMetrics {
            width: 0,
            height: 0,
        };
        let placement = resolve_placement(&test_config(true), screen, &modes).unwrap();
        assert_eq!(placement, Placement::Fullscreen { mode_index: 0 });
    }

    #[test]
    fn fullscreen_without_a_matching_mode_is_an_error() {
        let modes = [DisplayMode {
            width: 800,
            height: 600,
            bit_depth: 16,
        }];
        let err = resolve_placement(&test_config(true), SCREEN, &modes).unwrap_err();
        assert!(matches!(
            err,
            ShellError::Placement {
                width: 800,
                height: 600,
            }
        ));
    }

    #[test]
    fn windowed_attributes_carry_the_computed_position() {
        let config = test_config(false);
        let mode = ResolvedMode::Windowed { x: 560, y: 240 };
        let attrs = window_attributes(&config, &mode);

        assert_eq!(attrs.title, "test");
        assert_eq!(
            attrs.position,
            Some(Position::Physical(PhysicalPosition::new(560, 240)))
        );
        assert!(attrs.fullscreen.is_none());
        assert!(!attrs.resizable);
    }

    #[test]
    fn fullscreen_attributes_carry_the_mode_and_no_position() {
        let config = test_config(true);
        let mode = ResolvedMode::Fullscreen(Fullscreen::Borderless(None));
        let attrs = window_attributes(&config, &mode);

        assert!(attrs.position.is_none());
        assert!(attrs.fullscreen.is_some());
    }
}
