//! Parameter slots that are either fixed or drawn per generation

use rand::Rng;
use rand::seq::IndexedRandom;

/// Real-valued parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Fixed(f32),
    /// Uniform over the closed range [lo, hi]
    Uniform(f32, f32),
}

impl Sample {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        match *self {
            Sample::Fixed(v) => v,
            Sample::Uniform(lo, hi) => rng.random_range(lo..=hi),
        }
    }

    /// Whether `value` could have come out of this slot
    pub fn contains(&self, value: f32) -> bool {
        match *self {
            Sample::Fixed(v) => value == v,
            Sample::Uniform(lo, hi) => (lo..=hi).contains(&value),
        }
    }
}

/// Integer parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleInt {
    Fixed(u32),
    /// Uniform over the closed range [lo, hi]
    Range(u32, u32),
}

impl SampleInt {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        match *self {
            SampleInt::Fixed(v) => v,
            SampleInt::Range(lo, hi) => rng.random_range(lo..=hi),
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        match *self {
            SampleInt::Fixed(v) => value == v,
            SampleInt::Range(lo, hi) => (lo..=hi).contains(&value),
        }
    }
}

/// Enumerated parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pick<T: 'static> {
    Fixed(T),
    /// Uniform choice among the listed values
    OneOf(&'static [T]),
}

impl<T: Copy + Default + PartialEq + 'static> Pick<T> {
    /// An empty choice list falls back to the host default.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        match self {
            Pick::Fixed(v) => *v,
            Pick::OneOf(options) => options.choose(rng).copied().unwrap_or_default(),
        }
    }

    pub fn contains(&self, value: T) -> bool {
        match self {
            Pick::Fixed(v) => *v == value,
            Pick::OneOf(options) => options.contains(&value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_fixed_never_draws() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(Sample::Fixed(0.3).sample(&mut rng), 0.3);
        assert_eq!(SampleInt::Fixed(4).sample(&mut rng), 4);
        assert_eq!(Pick::Fixed('a').sample(&mut rng), 'a');
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let slot = Sample::Uniform(0.2, 0.8);
        let int_slot = SampleInt::Range(6, 8);

        for _ in 0..500 {
            assert!(slot.contains(slot.sample(&mut rng)));
            assert!(int_slot.contains(int_slot.sample(&mut rng)));
        }
    }

    #[test]
    fn test_int_range_hits_both_ends() {
        let mut rng = Pcg32::seed_from_u64(3);
        let slot = SampleInt::Range(6, 8);
        let seen: Vec<u32> = (0..200).map(|_| slot.sample(&mut rng)).collect();

        assert!(seen.contains(&6));
        assert!(seen.contains(&8));
    }

    #[test]
    fn test_pick_one_of() {
        const OPTIONS: &[u8] = &[1, 2, 3];
        let mut rng = Pcg32::seed_from_u64(9);
        let slot = Pick::OneOf(OPTIONS);

        for _ in 0..100 {
            assert!(slot.contains(slot.sample(&mut rng)));
        }
    }

    #[test]
    fn test_pick_empty_falls_back_to_default() {
        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(Pick::<u8>::OneOf(&[]).sample(&mut rng), 0);
    }
}
