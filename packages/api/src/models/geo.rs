use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest offset, in degrees, added to each axis before a location leaves
/// the browser.
pub const LOCATION_JITTER_DEGREES: f64 = 0.3;

/// A latitude/longitude pair.
///
/// Recipes hold an `Option<GeoPoint>`, so a location is either complete or
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Offset both axes by an independent uniform amount in
    /// `[-LOCATION_JITTER_DEGREES, LOCATION_JITTER_DEGREES]`.
    pub fn jittered<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let j = LOCATION_JITTER_DEGREES;
        Self {
            latitude: self.latitude + rng.gen_range(-j..=j),
            longitude: self.longitude + rng.gen_range(-j..=j),
        }
    }

    /// [`GeoPoint::jittered`] with the thread-local RNG.
    pub fn approximate(self) -> Self {
        self.jittered(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_jitter_stays_within_bounds() {
        let readings = [
            GeoPoint::new(37.8277754, -122.2662917),
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(-89.9, 179.9),
            GeoPoint::new(51.5, -0.12),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        for reading in readings {
            for _ in 0..1_000 {
                let approx = reading.jittered(&mut rng);
                assert!((approx.latitude - reading.latitude).abs() <= LOCATION_JITTER_DEGREES);
                assert!((approx.longitude - reading.longitude).abs() <= LOCATION_JITTER_DEGREES);
            }
        }
    }

    #[test]
    fn test_jitter_moves_the_point() {
        let reading = GeoPoint::new(37.8, -122.2);
        let mut rng = StdRng::seed_from_u64(42);
        let moved = (0..100)
            .map(|_| reading.jittered(&mut rng))
            .filter(|p| *p != reading)
            .count();
        assert!(moved > 90);
    }
}
