//! UTF-16 text as the engine expects it: NUL terminated, no byte-order mark.

use widestring::{error::ContainsNul, U16CString};

/// Byte-order mark as a single UTF-16 code unit.
pub const BOM: u16 = 0xFEFF;

/// Drops one leading byte-order mark. Text without a BOM is returned as is,
/// so stripping is idempotent.
pub fn strip_bom(text: &[u16]) -> &[u16] {
    match text.split_first() {
        Some((&BOM, rest)) => rest,
        _ => text,
    }
}

/// Encodes `text` for the engine, removing a leading BOM.
pub fn to_engine_string(text: &str) -> Result<U16CString, ContainsNul<u16>> {
    let units: Vec<u16> = text.encode_utf16().collect();
    U16CString::from_vec(strip_bom(&units))
}

pub fn empty_engine_string() -> U16CString {
    U16CString::new()
}
