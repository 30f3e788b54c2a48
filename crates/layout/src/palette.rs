//! Building and ground colors.
//!
//! Pure helpers over 8-bit RGB triples: random pastel / grey picks and
//! clamped lighten / darken used for the shaded cube faces.

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel up by `1 + k`, saturating at 255. `k` is clamped to `[0, 1]`.
    pub fn lighten(self, k: f64) -> Self {
        let k = k.clamp(0.0, 1.0);
        let up = |c: u8| {
            let c = c as f64;
            (c + c * k).min(255.0) as u8
        };
        Self::new(up(self.r), up(self.g), up(self.b))
    }

    /// Scale every channel down by `1 - k`, rounded. `k` is clamped to `[0, 1]`.
    pub fn darken(self, k: f64) -> Self {
        let k = 1.0 - k.clamp(0.0, 1.0);
        let down = |c: u8| (c as f64 * k).round() as u8;
        Self::new(down(self.r), down(self.g), down(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Light color with every channel in the upper half of the byte range.
pub fn random_pastel<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(
        rng.gen_range(128..=255),
        rng.gen_range(128..=255),
        rng.gen_range(128..=255),
    )
}

/// Light grey with a few units of per-channel jitter.
pub fn random_grey<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    let base: i16 = rng.gen_range(190..210);
    let g = base + rng.gen_range(-10..10);
    let b = base + rng.gen_range(-10..10);
    Rgb::new(base as u8, g as u8, b as u8)
}

/// Greenish-grey used for the ground plane.
pub fn random_ground<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(
        rng.gen_range(190..196),
        rng.gen_range(190..240),
        rng.gen_range(60..72),
    )
}

/// Contributor colors for one render. A contributor keeps the same color in
/// every zone; colors preassigned in the statistics win over random picks.
#[derive(Debug, Default)]
pub struct ColorBook {
    colors: HashMap<String, Rgb>,
}

impl ColorBook {
    pub fn color_for<R: Rng + ?Sized>(
        &mut self,
        email: &str,
        preassigned: Option<Rgb>,
        rng: &mut R,
    ) -> Rgb {
        if let Some(c) = self.colors.get(email) {
            return *c;
        }
        let c = preassigned.unwrap_or_else(|| random_pastel(rng));
        self.colors.insert(email.to_string(), c);
        c
    }

    pub fn get(&self, email: &str) -> Option<Rgb> {
        self.colors.get(email).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_lighten_saturates() {
        assert_eq!(Rgb::new(100, 200, 250).lighten(0.1), Rgb::new(110, 220, 255));
        assert_eq!(Rgb::new(10, 20, 30).lighten(5.0), Rgb::new(20, 40, 60));
        assert_eq!(Rgb::new(10, 20, 30).lighten(-1.0), Rgb::new(10, 20, 30));
    }

    #[test]
    fn test_darken_rounds() {
        assert_eq!(Rgb::new(100, 201, 255).darken(0.2), Rgb::new(80, 161, 204));
        assert_eq!(Rgb::new(100, 100, 100).darken(2.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_random_palettes_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let p = random_pastel(&mut rng);
            assert!(p.r >= 128 && p.g >= 128 && p.b >= 128, "{p}");

            let g = random_grey(&mut rng);
            assert!((190..210).contains(&g.r), "{g}");
            assert!((g.g as i16 - g.r as i16).abs() <= 10, "{g}");
            assert!((g.b as i16 - g.r as i16).abs() <= 10, "{g}");

            let f = random_ground(&mut rng);
            assert!(f.g >= f.b, "ground should lean green: {f}");
        }
    }

    #[test]
    fn test_color_book_reuses_colors() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut book = ColorBook::default();
        let first = book.color_for("a@x", None, &mut rng);
        let again = book.color_for("a@x", None, &mut rng);
        assert_eq!(first, again);

        let fixed = Rgb::new(1, 2, 3);
        assert_eq!(book.color_for("b@x", Some(fixed), &mut rng), fixed);
        assert_eq!(book.get("b@x"), Some(fixed));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_display_is_css_rgb() {
        assert_eq!(Rgb::new(1, 22, 255).to_string(), "rgb(1,22,255)");
    }
}
