use crate::constants::COLOR_VARIANTS;
use rand::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected a #rrggbb color, got {0:?}")]
    Malformed(String),
}

/// Parse `#rrggbb` into normalized RGB.
pub fn hex_to_rgb(hex: &str) -> Result<[f32; 3], ColorError> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6)
        .ok_or_else(|| ColorError::Malformed(hex.to_owned()))?;
    let value =
        u32::from_str_radix(digits, 16).map_err(|_| ColorError::Malformed(hex.to_owned()))?;
    Ok([
        ((value >> 16) & 0xff) as f32 / 255.0,
        ((value >> 8) & 0xff) as f32 / 255.0,
        (value & 0xff) as f32 / 255.0,
    ])
}

/// Pick one of the palette colors uniformly at random.
pub fn pick_base_color<R: Rng + ?Sized>(rng: &mut R) -> Result<[f32; 3], ColorError> {
    let hex = COLOR_VARIANTS.choose(rng).copied().unwrap_or(COLOR_VARIANTS[0]);
    log::info!("base color {}", hex);
    hex_to_rgb(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_palette_entries() {
        assert_eq!(hex_to_rgb("#ff0000"), Ok([1.0, 0.0, 0.0]));
        assert_eq!(hex_to_rgb("#00ffff"), Ok([0.0, 1.0, 1.0]));
        let [r, g, b] = hex_to_rgb("#3fa9f5").unwrap();
        assert!((r - 63.0 / 255.0).abs() < 1e-6);
        assert!((g - 169.0 / 255.0).abs() < 1e-6);
        assert!((b - 245.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn every_palette_entry_is_well_formed() {
        for hex in COLOR_VARIANTS {
            assert!(hex_to_rgb(hex).is_ok(), "{hex}");
        }
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(hex_to_rgb("3fa9f5").is_err());
        assert!(hex_to_rgb("#3fa9f").is_err());
        assert!(hex_to_rgb("#zzzzzz").is_err());
    }

    #[test]
    fn pick_is_deterministic_for_a_seed() {
        let a = pick_base_color(&mut StdRng::seed_from_u64(3)).unwrap();
        let b = pick_base_color(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
        let all: Vec<[f32; 3]> = COLOR_VARIANTS.iter().map(|h| hex_to_rgb(h).unwrap()).collect();
        assert!(all.contains(&a));
    }
}
