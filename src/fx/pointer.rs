//! Pointer flourishes: spotlight, tilt, magnetic buttons

use super::Rect;
use crate::consts::{TILT_PERSPECTIVE_PX, TILT_SCALE};
use crate::px;

/// Transform applied when the pointer leaves a tilted card
pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";

/// Transform applied when the pointer leaves a magnetic button
pub const MAGNETIC_RESET: &str = "translate(0px, 0px)";

/// Custom properties read by the background gradient
pub const SPOTLIGHT_X: &str = "--x";
pub const SPOTLIGHT_Y: &str = "--y";

/// Spotlight custom property values for a client point
pub fn spotlight_vars(client_x: f64, client_y: f64) -> [(&'static str, String); 2] {
    [(SPOTLIGHT_X, px(client_x)), (SPOTLIGHT_Y, px(client_y))]
}

/// Card rotation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// CSS transform with perspective and a slight scale-up
    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
            TILT_PERSPECTIVE_PX,
            self.rotate_x,
            self.rotate_y,
            s = TILT_SCALE
        )
    }
}

/// Rotation for a pointer over `rect`, proportional to its offset from the
/// centre and reaching `max_deg` at the edges. Pointer below centre tips the
/// card back (negative X rotation).
pub fn tilt_for(rect: &Rect, client_x: f64, client_y: f64, max_deg: f64) -> Tilt {
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    if center_x <= 0.0 || center_y <= 0.0 {
        return Tilt::default();
    }
    let (dx, dy) = rect.offset_from_center(client_x, client_y);
    Tilt {
        rotate_x: (dy / center_y) * -max_deg,
        rotate_y: (dx / center_x) * max_deg,
    }
}

/// Button offset: a fraction of the pointer's offset from the button centre
pub fn magnetic_offset(rect: &Rect, client_x: f64, client_y: f64, strength: f64) -> (f64, f64) {
    let (dx, dy) = rect.offset_from_center(client_x, client_y);
    (dx * strength, dy * strength)
}

pub fn magnetic_transform(offset: (f64, f64)) -> String {
    format!("translate({}, {})", px(offset.0), px(offset.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAGNETIC_STRENGTH, TILT_MAX_DEG};

    fn card() -> Rect {
        Rect::new(100.0, 200.0, 300.0, 200.0)
    }

    #[test]
    fn test_tilt_centre_is_flat() {
        let tilt = tilt_for(&card(), 250.0, 300.0, TILT_MAX_DEG);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn test_tilt_edges_hit_max() {
        let r = card();
        // Top-left corner
        let tilt = tilt_for(&r, 100.0, 200.0, TILT_MAX_DEG);
        assert_eq!(tilt.rotate_x, 5.0);
        assert_eq!(tilt.rotate_y, -5.0);
        // Bottom-right corner
        let tilt = tilt_for(&r, 400.0, 400.0, TILT_MAX_DEG);
        assert_eq!(tilt.rotate_x, -5.0);
        assert_eq!(tilt.rotate_y, 5.0);
    }

    #[test]
    fn test_tilt_degenerate_rect() {
        let r = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(tilt_for(&r, 10.0, 10.0, TILT_MAX_DEG), Tilt::default());
    }

    #[test]
    fn test_tilt_transform_string() {
        let tilt = Tilt {
            rotate_x: 2.5,
            rotate_y: -1.0,
        };
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(2.5deg) rotateY(-1deg) scale3d(1.02, 1.02, 1.02)"
        );
    }

    #[test]
    fn test_magnetic_offset() {
        let r = Rect::new(0.0, 0.0, 100.0, 40.0);
        let offset = magnetic_offset(&r, 100.0, 0.0, MAGNETIC_STRENGTH);
        assert!((offset.0 - 10.0).abs() < 1e-9);
        assert!((offset.1 + 4.0).abs() < 1e-9);
        assert_eq!(magnetic_transform((0.0, 0.0)), MAGNETIC_RESET);
    }

    #[test]
    fn test_spotlight_vars() {
        let [(kx, vx), (ky, vy)] = spotlight_vars(12.0, 340.5);
        assert_eq!((kx, vx.as_str()), ("--x", "12px"));
        assert_eq!((ky, vy.as_str()), ("--y", "340.5px"));
    }
}
