use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Picks a random light pastel for a wave card. Purely cosmetic: the color is
/// regenerated on every fetch and never persisted or compared.
pub fn random_light_color() -> String {
    let mut rng = SmallRng::from_entropy();
    hsl(
        rng.gen_range(0..360),
        rng.gen_range(55..=90),
        rng.gen_range(75..=90),
    )
}

fn hsl(hue: u16, saturation: u8, lightness: u8) -> String {
    format!("hsl({}, {}%, {}%)", hue, saturation, lightness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_stay_in_the_light_band() {
        for _ in 0..200 {
            let color = random_light_color();
            let inner = color
                .strip_prefix("hsl(")
                .and_then(|s| s.strip_suffix(')'))
                .unwrap();
            let parts: Vec<&str> = inner.split(", ").collect();
            assert_eq!(parts.len(), 3);

            let hue: u16 = parts[0].parse().unwrap();
            let saturation: u8 = parts[1].strip_suffix('%').unwrap().parse().unwrap();
            let lightness: u8 = parts[2].strip_suffix('%').unwrap().parse().unwrap();

            assert!(hue < 360);
            assert!((55..=90).contains(&saturation));
            assert!((75..=90).contains(&lightness));
        }
    }
}
