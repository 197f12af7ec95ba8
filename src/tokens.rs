//! Record tokens

use jiff::Timestamp;
use mockall::automock;
use rand::{Rng, thread_rng};

const RANDOM_LEN: usize = 8;
const RADIX: u32 = 36;

/// Produces the opaque identifiers assigned to products.
#[automock]
pub trait TokenGenerator: Send + Sync {
    /// Returns a new token.
    fn generate(&self) -> String;
}

/// Random prefix followed by the current Unix millisecond, both in base 36.
///
/// Not cryptographically secure. Collisions only need to be unlikely within one local catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokens;

impl TokenGenerator for RandomTokens {
    fn generate(&self) -> String {
        let mut rng = thread_rng();
        let mut token = String::with_capacity(RANDOM_LEN + 9);

        for _ in 0..RANDOM_LEN {
            let digit = rng.gen_range(0..RADIX);
            token.extend(char::from_digit(digit, RADIX));
        }

        let millis = u64::try_from(Timestamp::now().as_millisecond()).unwrap_or_default();
        token.push_str(&to_base36(millis));

        token
    }
}

fn to_base36(mut value: u64) -> String {
    let mut digits = Vec::new();

    loop {
        let digit = u32::try_from(value % u64::from(RADIX)).unwrap_or_default();
        digits.extend(char::from_digit(digit, RADIX));
        value /= u64::from(RADIX);

        if value == 0 {
            break;
        }
    }

    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn base36_encodes_zero_and_boundaries() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_295), "zz");
    }

    #[test]
    fn tokens_are_lowercase_alphanumeric() {
        let token = RandomTokens.generate();

        assert!(token.len() > RANDOM_LEN, "token should carry a time suffix");
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()),
            "unexpected character in {token}"
        );
    }

    #[test]
    fn tokens_generated_back_to_back_differ() {
        let tokens: FxHashSet<String> = (0..1_000).map(|_| RandomTokens.generate()).collect();

        assert_eq!(tokens.len(), 1_000);
    }
}
