use crate::config;

/// Bounding box of the card in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt { rotate_x: 0.0, rotate_y: 0.0 };

    /// Pointer at the top edge tips the card back, right edge turns it right.
    pub fn from_pointer(client_x: f64, client_y: f64, rect: CardRect, max_deg: f64) -> Self {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Self::FLAT;
        }
        let half_w = rect.width / 2.0;
        let half_h = rect.height / 2.0;
        let nx = ((client_x - rect.left - half_w) / half_w).clamp(-1.0, 1.0);
        let ny = ((client_y - rect.top - half_h) / half_h).clamp(-1.0, 1.0);

        Self {
            rotate_x: -ny * max_deg,
            rotate_y: nx * max_deg,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            config::CARD_PERSPECTIVE_PX,
            self.rotate_x,
            self.rotate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: CardRect = CardRect { left: 100.0, top: 50.0, width: 300.0, height: 200.0 };
    const MAX: f64 = config::CARD_MAX_TILT_DEG;

    #[test]
    fn center_is_flat() {
        assert_eq!(Tilt::from_pointer(250.0, 150.0, RECT, MAX), Tilt::FLAT);
    }

    #[test]
    fn corners_hit_the_bound_with_opposite_signs() {
        let top_right = Tilt::from_pointer(400.0, 50.0, RECT, MAX);
        assert_eq!(top_right.rotate_x, MAX);
        assert_eq!(top_right.rotate_y, MAX);

        let bottom_left = Tilt::from_pointer(100.0, 250.0, RECT, MAX);
        assert_eq!(bottom_left.rotate_x, -MAX);
        assert_eq!(bottom_left.rotate_y, -MAX);
    }

    #[test]
    fn stays_in_bounds_across_the_card() {
        for step_x in 0..=30 {
            for step_y in 0..=20 {
                let x = RECT.left + step_x as f64 * 10.0;
                let y = RECT.top + step_y as f64 * 10.0;
                let tilt = Tilt::from_pointer(x, y, RECT, MAX);
                assert!(tilt.rotate_x.abs() <= MAX && tilt.rotate_y.abs() <= MAX);
            }
        }
        let outside = Tilt::from_pointer(10_000.0, -10_000.0, RECT, MAX);
        assert_eq!(outside.rotate_y, MAX);
        assert_eq!(outside.rotate_x, MAX);
    }

    #[test]
    fn degenerate_rect_is_flat() {
        let rect = CardRect { width: 0.0, ..RECT };
        assert_eq!(Tilt::from_pointer(120.0, 60.0, rect, MAX), Tilt::FLAT);
    }

    #[test]
    fn transform_string() {
        assert_eq!(
            Tilt::FLAT.transform(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg)"
        );
        let tilt = Tilt { rotate_x: -4.0, rotate_y: 2.5 };
        assert_eq!(tilt.transform(), "perspective(1000px) rotateX(-4deg) rotateY(2.5deg)");
    }
}
