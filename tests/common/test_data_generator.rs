use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use locpkt_rust::locpkt_common_rs::packet::codec::PacketCodec;
use locpkt_rust::locpkt_common_rs::packet::types::{DecodedLocation, LocationType};

/// Test data generator for location packet testing
///
/// Seeded so failures are reproducible.
pub struct TestDataGenerator {
    rng: StdRng,
}

impl TestDataGenerator {
    pub fn new() -> Self {
        Self::with_seed(0x4C4F_4350)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate random coordinates within valid Earth bounds
    pub fn random_coordinates(&mut self) -> (f32, f32) {
        let lat = self.rng.gen_range(-90.0f32..=90.0);
        let lon = self.rng.gen_range(-180.0f32..=180.0);
        (lat, lon)
    }

    /// Arbitrary non-NaN f32 bit patterns (including infinities and subnormals)
    pub fn random_float(&mut self) -> f32 {
        loop {
            let value = f32::from_bits(self.rng.gen());
            if !value.is_nan() {
                return value;
            }
        }
    }

    pub fn random_location_type(&mut self) -> LocationType {
        if self.rng.gen_bool(0.5) {
            LocationType::Current
        } else {
            LocationType::Home
        }
    }

    pub fn random_location(&mut self) -> DecodedLocation {
        let (lat, lon) = self.random_coordinates();
        DecodedLocation::new(self.random_location_type(), lat, lon)
    }

    pub fn random_packet(&mut self) -> [u8; 12] {
        let location = self.random_location();
        PacketCodec::encode(&location)
    }

    pub fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.rng.gen()).collect()
    }

    /// Generate coordinates for major cities
    pub fn city_coordinates(&mut self) -> (f32, f32, &'static str) {
        let cities = [
            (35.6812, 139.7671, "Tokyo"),
            (39.9042, 116.4074, "Beijing"),
            (-33.8688, 151.2093, "Sydney"),
            (51.5074, -0.1278, "London"),
            (-22.9068, -43.1729, "Rio de Janeiro"),
            (64.1466, -21.9426, "Reykjavik"),
        ];

        cities[self.rng.gen_range(0..cities.len())]
    }
}
