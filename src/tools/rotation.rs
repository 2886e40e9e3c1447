use uuid::Uuid;

/// Supplies sticker rotations when a rotating sticker is selected.
pub trait RotationSource {
    /// Next rotation in whole degrees, within `[0, 360)`
    fn next_degrees(&mut self) -> f32;
}

/// Uniformly random whole-degree rotations.
///
/// Draws its randomness from the v4 UUID generator, which is backed by the
/// operating system's random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRotation;

impl RotationSource for RandomRotation {
    fn next_degrees(&mut self) -> f32 {
        // The last four bytes of a v4 UUID are fully random.
        let bytes = Uuid::new_v4().into_bytes();
        let bits = u32::from_be_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
        let unit = bits as f64 / (u32::MAX as f64 + 1.0);
        (unit * 360.0).floor() as f32
    }
}

/// Always yields the same rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRotation(pub f32);

impl RotationSource for FixedRotation {
    fn next_degrees(&mut self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_rotation_is_in_range() {
        let mut source = RandomRotation;
        for _ in 0..1000 {
            let degrees = source.next_degrees();
            assert!((0.0..360.0).contains(&degrees));
            assert_eq!(degrees, degrees.floor());
        }
    }
}
