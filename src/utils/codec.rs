//! Short identifier encoding.
//!
//! Counter values are written in base 36, most significant symbol first,
//! using digits then lowercase letters. The encoding is one-way: identifiers
//! are resolved through the stored forward mapping, never decoded.

/// Symbols used for short identifiers, in digit order.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const BASE: u128 = ALPHABET.len() as u128;

/// Encodes a counter value as a short identifier.
///
/// Store counters are signed 64-bit integers, so `u128` covers every value the
/// counter can reach.
///
/// # Examples
///
/// ```
/// use shortly::utils::codec::encode;
///
/// assert_eq!(encode(0u64), "0");
/// assert_eq!(encode(35u64), "z");
/// assert_eq!(encode(36u64), "10");
/// ```
pub fn encode(n: impl Into<u128>) -> String {
    let mut n = n.into();
    if n == 0 {
        return "0".to_string();
    }

    let mut symbols = Vec::new();
    while n > 0 {
        symbols.push(ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }
    symbols.reverse();

    symbols.into_iter().map(char::from).collect()
}
