/// Number of ANSI palette slots.
pub const SLOT_COUNT: usize = 16;
/// Slots 0-7 are the base colors every other slot derives from.
pub const BASE_COUNT: usize = 8;

const SLOT_PREFIX: &str = "color";

/// Parse a slot key like `color12` into its index.
///
/// Returns `None` for anything that is not `color<N>` with `N < 16`.
pub fn slot_index(name: &str) -> Option<usize> {
    let digits = name.strip_prefix(SLOT_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // `color07` is a distinct key, not slot 7.
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    let index: usize = digits.parse().ok()?;
    (index < SLOT_COUNT).then_some(index)
}

/// The document key for slot `index`.
pub fn slot_name(index: usize) -> String {
    format!("{SLOT_PREFIX}{index}")
}
