//! Secure hash input construction.
//!
//! The gateway verifies `pp_SecureHash` by sorting the submitted keys,
//! joining their values with `&` and computing an HMAC-SHA256 keyed with the
//! merchant's integrity salt. Keys themselves are not part of the input.

use crate::ports::KeyedHasher;

/// Separator placed between values in the hash input.
pub const VALUE_SEPARATOR: &str = "&";

/// Builds the string that is fed to the HMAC.
///
/// Pairs are ordered by key using plain byte-wise comparison. Empty values
/// keep their slot, so a run of empty fields shows up as `&&`.
pub fn secure_hash_input<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut sorted: Vec<(&str, &str)> = fields.into_iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    sorted
        .into_iter()
        .map(|(_, value)| value)
        .collect::<Vec<_>>()
        .join(VALUE_SEPARATOR)
}

/// Signs a field set with the given keyed hasher.
pub fn secure_hash<'a, I>(hasher: &dyn KeyedHasher, fields: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    hasher.sign(secure_hash_input(fields).as_bytes())
}
