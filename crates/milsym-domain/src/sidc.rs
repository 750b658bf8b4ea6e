//! SIDC helpers (APP-6E / MIL-STD-2525E numeric symbol codes)
//!
//! Layout of the code, by character position:
//!
//! | Pos   | Len | Field                                |
//! |-------|-----|--------------------------------------|
//! | 0-1   | 2   | Version (13 = APP-6E / 2525E)        |
//! | 2     | 1   | Context (0 = reality)                |
//! | 3     | 1   | Standard identity (affiliation)      |
//! | 4-5   | 2   | Symbol set (10 = land unit, 01 = air)|
//! | 6     | 1   | Status (0 = present)                 |
//! | 7     | 1   | HQ / task force / dummy              |
//! | 8-9   | 2   | Echelon / mobility                   |
//! | 10-15 | 6   | Entity (function id)                 |
//! | 16-19 | 4   | Modifiers 1 and 2                    |
//!
//! Catalog templates carry `X` at position 3.

use crate::Affiliation;

/// Position of the standard identity digit
pub const AFFILIATION_POS: usize = 3;

/// Placeholder used in templates at [`AFFILIATION_POS`]
pub const PLACEHOLDER: char = 'X';

/// Substitute the affiliation digit into a template
///
/// Templates shorter than the affiliation position are returned unchanged.
pub fn with_affiliation(template: &str, affiliation: Affiliation) -> String {
    template
        .chars()
        .enumerate()
        .map(|(i, c)| if i == AFFILIATION_POS { affiliation.sidc_code() } else { c })
        .collect()
}

/// Check that a template is all ASCII digits apart from the placeholder
pub fn is_valid_template(template: &str) -> bool {
    template.len() >= 20
        && template.chars().enumerate().all(|(i, c)| {
            if i == AFFILIATION_POS {
                c == PLACEHOLDER
            } else {
                c.is_ascii_digit()
            }
        })
}

/// Symbol set digits (positions 4-5)
pub fn symbol_set(sidc: &str) -> Option<&str> {
    sidc.get(4..6)
}

/// Entity digits (positions 10-15)
pub fn entity(sidc: &str) -> Option<&str> {
    sidc.get(10..16)
}
