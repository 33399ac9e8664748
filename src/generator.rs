use crate::options::Options;
use crate::pattern::{PATTERN_LEN, Pattern};
use crate::sample::sample_unambiguous;
use crate::Result;
use rand::Rng;
use zeroize::Zeroizing;

/// Generate a password with the thread-local RNG.
pub fn generate(options: &Options) -> Result<Zeroizing<String>> {
    generate_with(options, &mut rand::thread_rng())
}

/// Generate a password drawing randomness from `rng`.
///
/// The pattern for the length's parity is run `length / 8 + 1` times and
/// the result is cut down to `length` characters.
pub fn generate_with<R: Rng + ?Sized>(options: &Options, rng: &mut R) -> Result<Zeroizing<String>> {
    let options = options.validate()?;
    let slots = Pattern::for_length(options.length).slots();
    // Bounded by MAX_LENGTH, so the capacity below cannot overflow.
    let iterations = options.length / PATTERN_LEN + 1;

    let mut password = Zeroizing::new(String::with_capacity(iterations * PATTERN_LEN));

    for _ in 0..iterations {
        for slot in slots {
            let alternatives = slot.alternatives();
            let set = if options.memorizable {
                slot.first()
            } else {
                alternatives[rng.gen_range(0..alternatives.len())]
            };
            password.push(sample_unambiguous(set.chars(), rng)?);
        }
    }

    password.truncate(options.length);

    Ok(password)
}
