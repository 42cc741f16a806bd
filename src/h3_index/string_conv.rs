//! Canonical string form: lowercase hexadecimal without prefix or leading
//! zeros.

use crate::types::{H3Error, H3Index};

/// Parses the canonical string form into an index. Accepts upper and lower
/// case.
pub fn string_to_h3(s: &str) -> Result<H3Index, H3Error> {
  if s.is_empty() {
    return Err(H3Error::Failed);
  }
  u64::from_str_radix(s, 16).map(H3Index).map_err(|_| H3Error::Failed)
}

/// Formats an index in its canonical string form.
#[must_use]
pub fn h3_to_string(h: H3Index) -> String {
  format!("{:x}", h.0)
}
