use soroban_sdk::{Env, String};

use crate::error::ContractError;

/// A 24-bit RGB value, the decoded form of a 6-character hex color string.
/// The first two hex characters are the most significant byte (red).
pub type Color = u32;

pub const HEX_LEN: usize = 6;

/// Returns true iff `s` is exactly six characters, each `0-9A-F`.
/// Lowercase digits are rejected.
pub fn is_valid(s: &String) -> bool {
    if s.len() as usize != HEX_LEN {
        return false;
    }
    let mut digits = [0u8; HEX_LEN];
    s.copy_into_slice(&mut digits);

    digits.iter().all(|d| hex_value(*d).is_some())
}

pub fn decode(s: &String) -> Result<Color, ContractError> {
    if s.len() as usize != HEX_LEN {
        return Err(ContractError::InvalidColorFormat);
    }
    let mut digits = [0u8; HEX_LEN];
    s.copy_into_slice(&mut digits);

    let mut value: u32 = 0;
    for digit in digits {
        match hex_value(digit) {
            Some(v) => value = (value << 4) | u32::from(v),
            None => return Err(ContractError::InvalidColorFormat),
        }
    }

    Ok(value)
}

pub fn encode(env: &Env, c: Color) -> String {
    let mut digits = [0u8; HEX_LEN];
    encode_into(c, &mut digits);

    let s = core::str::from_utf8(&digits).expect("hex digits are ascii");
    String::from_str(env, s)
}

/// Writes `c` as six uppercase hex digits, most significant nibble first.
pub fn encode_into(c: Color, out: &mut [u8; HEX_LEN]) {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    for (idx, slot) in out.iter_mut().enumerate() {
        let shift = 4 * (HEX_LEN - 1 - idx);
        *slot = DIGITS[((c >> shift) & 0xF) as usize];
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
