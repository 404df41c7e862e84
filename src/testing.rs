use quickcheck::{Arbitrary, Gen};
use rand::RngCore;

/// An `i64` drawn from every magnitude, `i64::arbitrary` never leaves the
/// generator size (100 by default) and would only produce one-byte varints.
#[derive(Debug, Copy, Clone)]
pub struct AnyI64(pub i64);

impl Arbitrary for AnyI64 {
    fn arbitrary<G: Gen>(g: &mut G) -> AnyI64 {
        let shift = g.next_u32() % 64;
        let magnitude = (g.next_u64() >> shift) as i64;
        if g.next_u32() & 1 == 1 {
            AnyI64(magnitude.wrapping_neg())
        } else {
            AnyI64(magnitude)
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = AnyI64>> {
        Box::new(self.0.shrink().map(AnyI64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoded_len;
    use quickcheck::StdGen;

    #[test]
    fn covers_every_length() {
        let mut g = StdGen::new(rand::thread_rng(), 100);
        let mut seen = [false; 11];
        for _ in 0..100_000 {
            let AnyI64(n) = AnyI64::arbitrary(&mut g);
            seen[encoded_len(n)] = true;
        }

        for &len in &[1, 2, 3, 4, 5, 6, 9, 10] {
            assert!(seen[len], "no value of {} byte(s) was generated", len);
        }
    }
}
