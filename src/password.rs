use crate::errors::PasswordError;
use crate::generators::{DIGITS, LETTERS, SPECIALS, generate_digit, generate_from, generate_special};

use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: usize,
    pub digits: bool,
    pub specials: bool,
}

impl PasswordRequest {
    pub const DEFAULT_LENGTH: i64 = 15;

    pub fn new(length: i64, digits: bool, specials: bool) -> Result<Self, PasswordError> {
        let length = usize::try_from(length)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(PasswordError::InvalidLength(length))?;

        Ok(Self {
            length,
            digits,
            specials,
        })
    }

    /// Letters, then digits, then specials, depending on the toggles.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut alphabet = LETTERS.to_vec();

        if self.digits {
            alphabet.extend_from_slice(DIGITS);
        }

        if self.specials {
            alphabet.extend_from_slice(SPECIALS);
        }

        alphabet
    }

    /// Upper bound on entropy, ignoring the bias of the guaranteed characters.
    pub fn entropy_bits(&self) -> f64 {
        self.length as f64 * (self.alphabet().len() as f64).log2()
    }
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH as usize,
            digits: true,
            specials: true,
        }
    }
}

pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    length: i64,
    digits: bool,
    specials: bool,
) -> Result<String, PasswordError> {
    let request = PasswordRequest::new(length, digits, specials)?;

    Ok(generate_password(rng, &request))
}

pub fn generate_password<R: Rng + ?Sized>(rng: &mut R, request: &PasswordRequest) -> String {
    let alphabet = request.alphabet();
    log::debug!(
        "Generating {} characters from a {} character alphabet (~{:.1} bits)",
        request.length,
        alphabet.len(),
        request.entropy_bits()
    );

    let mut buf: Vec<u8> = (0..request.length)
        .map(|_| generate_from(rng, &alphabet))
        .collect();

    // Positions 0 and 1 carry the guaranteed classes until the shuffle.
    if request.digits {
        if let Some(first) = buf.get_mut(0) {
            *first = generate_digit(rng);
        }
    }

    if request.specials {
        if let Some(second) = buf.get_mut(1) {
            *second = generate_special(rng);
        }
    }

    buf.shuffle(rng);

    buf.iter().map(|&b| b as char).collect()
}
