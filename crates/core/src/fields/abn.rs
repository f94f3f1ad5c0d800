//! Australian Business Number checksum validation.

/// Positional weights from the ATO's published ABN checksum algorithm.
const ABN_WEIGHTS: [u32; 11] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

/// Validate an ABN via its checksum.
///
/// The input must be exactly 11 digits. Algorithm: subtract 1 from the
/// first digit, multiply each digit by its positional weight, sum, and
/// check divisibility by 89.
pub fn validate_abn(abn: &str) -> bool {
    if abn.len() != 11 || !abn.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    // The first digit is reduced by 1 before weighting; no valid ABN
    // starts with 0, and rejecting it up front avoids the underflow.
    if abn.starts_with('0') {
        return false;
    }

    let sum: u32 = abn
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let mut digit = u32::from(b - b'0');
            if i == 0 {
                digit -= 1;
            }
            digit * ABN_WEIGHTS[i]
        })
        .sum();

    sum % 89 == 0
}
