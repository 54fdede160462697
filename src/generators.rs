use rand::Rng;

pub const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIALS: &[u8] = b"~=&+%^*/()[]{}/!@#$?|";

/// Picks one byte uniformly from `alphabet`, which must not be empty.
pub fn generate_from<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> u8 {
    alphabet[rng.random_range(0..alphabet.len())]
}

pub fn generate_digit<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    generate_from(rng, DIGITS)
}

pub fn generate_special<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    generate_from(rng, SPECIALS)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn sets_are_disjoint() {
        for c in LETTERS {
            assert!(!DIGITS.contains(c));
            assert!(!SPECIALS.contains(c));
        }
        for c in DIGITS {
            assert!(!SPECIALS.contains(c));
        }
    }

    #[test]
    fn draws_stay_in_their_set() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            assert!(LETTERS.contains(&generate_from(&mut rng, LETTERS)));
            assert!(DIGITS.contains(&generate_digit(&mut rng)));
            assert!(SPECIALS.contains(&generate_special(&mut rng)));
        }
    }

    #[test]
    fn every_digit_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 10];

        for _ in 0..1000 {
            seen[(generate_digit(&mut rng) - b'0') as usize] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }
}
