use crate::error::Error;
use crate::pattern::is_ambiguous;
use crate::Result;
use rand::Rng;

/// Pick a uniformly random element of `set`.
pub fn sample<R: Rng + ?Sized>(set: &[char], rng: &mut R) -> Result<char> {
    if set.is_empty() {
        return Err(Error::EmptySample);
    }
    Ok(set[rng.gen_range(0..set.len())])
}

/// Draw from `set` until the character is not ambiguous.
pub fn sample_unambiguous<R: Rng + ?Sized>(set: &[char], rng: &mut R) -> Result<char> {
    if !set.is_empty() && set.iter().copied().all(is_ambiguous) {
        return Err(Error::NoUnambiguousCharacter(set.to_vec()));
    }

    loop {
        let c = sample(set, rng)?;
        if !is_ambiguous(c) {
            return Ok(c);
        }
    }
}

/// The members of `set` that survive the ambiguity filter, in order.
pub fn unambiguous(set: &[char]) -> impl Iterator<Item = char> + '_ {
    set.iter().copied().filter(|c| !is_ambiguous(*c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_sample_single_element() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(sample(&['a'], &mut rng).unwrap(), 'a');
        assert_eq!(sample(&['a', 'a', 'a'], &mut rng).unwrap(), 'a');
    }

    #[test]
    fn test_sample_returns_member() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let set = ['a', 'b', 'c'];
        for _ in 0..100 {
            assert!(set.contains(&sample(&set, &mut rng).unwrap()));
        }
    }

    #[test]
    fn test_sample_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let err = sample(&[], &mut rng).unwrap_err();
        assert_eq!(err, Error::EmptySample);
        assert_eq!(
            err.to_string(),
            "expected a non-empty character set, but got an empty one"
        );
        assert_eq!(sample_unambiguous(&[], &mut rng), Err(Error::EmptySample));
    }

    #[test]
    fn test_sample_unambiguous_rejects() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let set = ['1', 'l', 'I', 'x', '0', 'O'];
        for _ in 0..200 {
            assert_eq!(sample_unambiguous(&set, &mut rng).unwrap(), 'x');
        }
    }

    #[test]
    fn test_sample_unambiguous_all_ambiguous() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            sample_unambiguous(&['6', 'b'], &mut rng),
            Err(Error::NoUnambiguousCharacter(vec!['6', 'b']))
        );
    }

    #[test]
    fn test_unambiguous_filter_keeps_order() {
        let kept: Vec<char> = unambiguous(&['6', '7', '8', '9', '0']).collect();
        assert_eq!(kept, vec!['7', '8', '9']);
    }
}
