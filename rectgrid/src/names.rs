use crate::error::NameError;
use rand::Rng;

/// Number of characters in a rectangle name.
pub const NAME_LEN: usize = 4;

/// Draws names character by character from a character source.
pub struct NameGenerator<F> {
    char_source: F,
    len: usize,
}

impl<F: FnMut() -> char> NameGenerator<F> {
    /// Creates a generator for names of [`NAME_LEN`] characters.
    pub fn new(char_source: F) -> Self {
        Self::with_len(char_source, NAME_LEN)
    }

    pub fn with_len(char_source: F, len: usize) -> Self {
        Self { char_source, len }
    }

    pub fn generate(&mut self) -> String {
        (0..self.len).map(|_| (self.char_source)()).collect()
    }
}

/// A generator drawing lowercase letters from `rng`.
pub fn lowercase_names<R: Rng>(mut rng: R) -> NameGenerator<impl FnMut() -> char> {
    NameGenerator::new(move || rng.gen_range('a'..='z'))
}

/// Checks that `name` consists of exactly [`NAME_LEN`] lowercase ASCII
/// letters.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    let len = name.chars().count();
    if len != NAME_LEN {
        return Err(NameError::Length(len));
    }

    match name.chars().find(|c| !c.is_ascii_lowercase()) {
        Some(c) => Err(NameError::Character(c)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_generate_uses_char_source() {
        let mut chars = "wxyzabcd".chars().cycle();
        let mut gen = NameGenerator::new(|| chars.next().unwrap_or('a'));

        assert_eq!(gen.generate(), "wxyz");
        assert_eq!(gen.generate(), "abcd");
        assert_eq!(gen.generate(), "wxyz");
    }

    #[test]
    fn test_generate_custom_length() {
        let mut gen = NameGenerator::with_len(|| 'q', 6);
        assert_eq!(gen.generate(), "qqqqqq");
    }

    #[test]
    fn test_lowercase_names() {
        let mut gen = lowercase_names(StdRng::seed_from_u64(42));
        for _ in 0..500 {
            let name = gen.generate();
            assert_eq!(name.len(), NAME_LEN);
            assert_eq!(validate_name(&name), Ok(()), "{name}");
        }
    }

    #[test]
    fn test_lowercase_is_deterministic_with_seed() {
        let mut a = lowercase_names(StdRng::seed_from_u64(7));
        let mut b = lowercase_names(StdRng::seed_from_u64(7));
        for _ in 0..20 {
            assert_eq!(a.generate(), b.generate());
        }
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("abcd"), Ok(()));
        assert_eq!(validate_name("abc"), Err(NameError::Length(3)));
        assert_eq!(validate_name("abcde"), Err(NameError::Length(5)));
        assert_eq!(validate_name(""), Err(NameError::Length(0)));
        assert_eq!(validate_name("abCd"), Err(NameError::Character('C')));
        assert_eq!(validate_name("ab1d"), Err(NameError::Character('1')));
        assert_eq!(validate_name("äbcd"), Err(NameError::Character('ä')));
    }
}
