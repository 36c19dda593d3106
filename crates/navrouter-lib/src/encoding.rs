//! Percent-encoding of free-text addresses for deep-link query strings.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Encode an address for use as a query value.
///
/// ASCII alphanumerics pass through; every other byte of the UTF-8 text is
/// percent-encoded. With `use_plus_sign`, the address is split on spaces
/// (runs of spaces and leading/trailing spaces produce no empty pieces) and
/// the encoded pieces are joined with a literal `+`.
pub fn encode_address(address: &str, use_plus_sign: bool) -> String {
    if use_plus_sign {
        address
            .split(' ')
            .filter(|piece| !piece.is_empty())
            .map(|piece| utf8_percent_encode(piece, NON_ALPHANUMERIC).to_string())
            .collect::<Vec<_>>()
            .join("+")
    } else {
        utf8_percent_encode(address, NON_ALPHANUMERIC).to_string()
    }
}
