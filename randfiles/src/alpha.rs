use rand::Rng;

/// Lowercase then uppercase ASCII letters
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
    ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a string of `len` letters, each one picked uniformly from [`ALPHABET`]
///
/// ```
/// # use rand::{rngs::StdRng, SeedableRng};
/// # use randfiles::alpha::{gen_alpha_string, is_alpha_string};
/// let mut rng = StdRng::seed_from_u64(42);
/// let s = gen_alpha_string(&mut rng, 10);
///
/// assert_eq!(10, s.len());
/// assert!(is_alpha_string(&s));
/// ```
pub fn gen_alpha_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect::<String>()
}

pub fn is_alpha_string(s: &str) -> bool {
    s.bytes().all(|b| ALPHABET.contains(&b))
}
