//! Counting the passwords the generator can produce.
//!
//! Each position is treated independently: its sample set is the first
//! alternative of its slot in memorizable mode, or every alternative
//! concatenated otherwise, minus ambiguous characters. The count is the
//! product of the set sizes.

use crate::options::Options;
use crate::pattern::{PATTERN_LEN, Pattern};
use crate::sample::unambiguous;
use crate::Result;
use num_bigint::BigUint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutations {
    sample_sets: Vec<Vec<char>>,
}

impl Permutations {
    pub fn new(options: &Options) -> Result<Self> {
        let options = options.validate()?;
        let slots = Pattern::for_length(options.length).slots();

        let sample_sets: Vec<Vec<char>> = (0..options.length)
            .map(|i| {
                let slot = slots[i % PATTERN_LEN];
                if options.memorizable {
                    unambiguous(slot.first().chars()).collect::<Vec<_>>()
                } else {
                    // Duplicates across alternatives are kept, each one is a
                    // separate outcome.
                    slot.alternatives()
                        .iter()
                        .flat_map(|id| unambiguous(id.chars()))
                        .collect::<Vec<_>>()
                }
            })
            .collect();

        Ok(Self { sample_sets })
    }

    pub fn sample_sets(&self) -> &[Vec<char>] {
        &self.sample_sets
    }

    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.sample_sets.iter().map(Vec::len)
    }

    pub fn count(&self) -> BigUint {
        self.sizes()
            .fold(BigUint::from(1u32), |acc, size| acc * BigUint::from(size))
    }

    /// Base-2 logarithm of the count.
    pub fn entropy_bits(&self) -> f64 {
        self.sizes().map(|size| (size as f64).log2()).sum()
    }

    /// Detail lines for the given verbosity: the sample sets from 3 up,
    /// the factors of the count from 2 up.
    pub fn diagnostics(&self, verbosity: u8) -> Vec<String> {
        let mut lines = Vec::new();

        if verbosity >= 3 {
            lines.push("sample sets:".to_string());
            lines.extend(self.sample_sets.iter().map(|set| format!("{:?}", set)));
        }

        if verbosity >= 2 {
            let factors = self
                .sizes()
                .map(|size| size.to_string())
                .collect::<Vec<_>>()
                .join(" * ");
            lines.push(format!("{} permutations", factors));
        }

        lines
    }
}

/// Count the possible passwords for `options`, printing the diagnostics
/// its verbosity asks for.
pub fn permutations(options: &Options) -> Result<BigUint> {
    let permutations = Permutations::new(options)?;
    for line in permutations.diagnostics(options.verbosity) {
        println!("{}", line);
    }
    Ok(permutations.count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn count(length: usize, memorizable: bool) -> BigUint {
        permutations(&Options::new(length, memorizable)).unwrap()
    }

    #[test]
    fn test_known_counts() {
        assert_eq!(count(8, true), BigUint::from(31_752_000u64));
        assert_eq!(count(8, false), BigUint::from(53_572_004_640u64));
        assert_eq!(count(11, true), BigUint::from(60_011_280_000u64));
        assert_eq!(count(11, false), BigUint::from(544_505_855_160_960u64));
    }

    #[test]
    fn test_default_sizes() {
        let p = Permutations::new(&Options::default()).unwrap();
        let sizes: Vec<usize> = p.sizes().collect();
        assert_eq!(sizes, vec![10, 15, 9, 4, 10, 14, 3, 14]);
    }

    #[test]
    fn test_random_mode_sizes() {
        let p = Permutations::new(&Options::new(8, false)).unwrap();
        let sizes: Vec<usize> = p.sizes().collect();
        assert_eq!(sizes, vec![10, 33, 22, 33, 22, 33, 22, 14]);
    }

    #[test]
    fn test_single_character() {
        assert_eq!(count(1, true), BigUint::from(14u32));
        assert_eq!(count(1, false), BigUint::from(14u32));
    }

    #[test]
    fn test_count_exceeds_u128() {
        let big = count(64, false);
        assert!(big > BigUint::from(u128::MAX));
    }

    #[test]
    fn test_entropy_matches_count() {
        let p = Permutations::new(&Options::default()).unwrap();
        let expected = 31_752_000f64.log2();
        assert!((p.entropy_bits() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_diagnostics_by_verbosity() {
        let p = Permutations::new(&Options::default()).unwrap();
        assert!(p.diagnostics(0).is_empty());
        assert!(p.diagnostics(1).is_empty());

        let two = p.diagnostics(2);
        assert_eq!(two, vec!["10 * 15 * 9 * 4 * 10 * 14 * 3 * 14 permutations"]);

        let three = p.diagnostics(3);
        assert_eq!(three.len(), 1 + 8 + 1);
        assert_eq!(three[0], "sample sets:");
        assert_eq!(three[7], "['7', '8', '9']");
        assert_eq!(three[9], two[0]);
    }

    #[test]
    fn test_sample_sets_have_no_ambiguous_characters() {
        let p = Permutations::new(&Options::new(16, false)).unwrap();
        for set in p.sample_sets() {
            assert!(set.iter().all(|c| !crate::pattern::is_ambiguous(*c)));
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        assert_eq!(
            permutations(&Options::new(0, false)),
            Err(Error::LengthNotPositive(0))
        );
    }
}
