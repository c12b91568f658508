//! Digit-to-color mapping
//!
//! Colors come from a 10-way hue partition in HSV space so every digit is
//! visually distinct, with saturation nudged by `digit % 3` to separate
//! hue-adjacent digits a little further.

/// RGB color for a digit (0-9). Deterministic: same digit, same color.
pub fn color_for_digit(digit: u8) -> [u8; 3] {
    let hue = digit as f32 / 10.0;
    let saturation = 0.7 + (digit % 3) as f32 * 0.1;
    let value = 0.9;
    hsv_to_rgb(hue, saturation, value)
}

/// HSV (all components in [0, 1]) to 8-bit RGB, standard sector algorithm.
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        for d in 0..10u8 {
            assert_eq!(color_for_digit(d), color_for_digit(d));
        }
    }

    #[test]
    fn test_digits_are_distinct() {
        for a in 0..10u8 {
            for b in (a + 1)..10 {
                assert_ne!(color_for_digit(a), color_for_digit(b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_zero_is_red_dominant() {
        // Hue 0, s=0.7, v=0.9: red channel at full value
        let [r, g, b] = color_for_digit(0);
        assert_eq!(r, 229);
        assert!(r > g && r > b);
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), [0, 0, 255]);
    }
}
