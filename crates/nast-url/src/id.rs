//! Block id shape helpers.
//!
//! These are length and shape checks only. A 36-character string with a dash
//! is accepted as a dashed id even if it is not a well-formed UUID.

use crate::asset::NOTION_HOST;

/// Length of `0eeee000-cccc-bbbb-aaaa-123450000000`.
const DASH_ID_LEN: usize = 36;

/// Length of `0eeee000ccccbbbbaaaa123450000000`.
const NO_DASH_ID_LEN: usize = 32;

/// Check whether a string looks like a dashed block id.
///
/// True for exactly 36 characters containing at least one dash.
#[must_use]
pub fn is_valid_dash_id(s: &str) -> bool {
    s.chars().count() == DASH_ID_LEN && s.contains('-')
}

/// Convert a no-dash id into dashed `8-4-4-4-12` form.
///
/// Dashed ids and strings that do not reduce to 32 ASCII characters are
/// returned unchanged, so the conversion is idempotent.
#[must_use]
pub fn to_dash_id(s: &str) -> String {
    if is_valid_dash_id(s) {
        return s.to_owned();
    }

    let stripped = to_no_dash_id(s);
    if stripped.len() != NO_DASH_ID_LEN || !stripped.is_ascii() {
        return s.to_owned();
    }

    format!(
        "{}-{}-{}-{}-{}",
        &stripped[..8],
        &stripped[8..12],
        &stripped[12..16],
        &stripped[16..20],
        &stripped[20..]
    )
}

/// Strip every dash from an id.
#[must_use]
pub fn to_no_dash_id(s: &str) -> String {
    s.replace('-', "")
}

/// Canonical web address of a block or page.
#[must_use]
pub fn block_uri(id: &str) -> String {
    format!("{NOTION_HOST}/{}", to_no_dash_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_DASH: &str = "0eeee000ccccbbbbaaaa123450000000";
    const DASH: &str = "0eeee000-cccc-bbbb-aaaa-123450000000";

    #[test]
    fn test_to_dash_id_converts_no_dash_form() {
        assert_eq!(to_dash_id(NO_DASH), DASH);
    }

    #[test]
    fn test_to_dash_id_keeps_dashed_form() {
        assert_eq!(to_dash_id(DASH), DASH);
    }

    #[test]
    fn test_to_dash_id_is_idempotent() {
        for input in [NO_DASH, DASH, "short", "0eeee000ccccbbbbaaaa1234500000001234"] {
            let once = to_dash_id(input);
            assert_eq!(to_dash_id(&once), once, "not idempotent for {input}");
        }
    }

    #[test]
    fn test_to_dash_id_wrong_length_unchanged() {
        assert_eq!(to_dash_id("abc"), "abc");
        let short = "0eeee000ccccbbbbaaaa12345000000";
        assert_eq!(to_dash_id(short), short);
    }

    #[test]
    fn test_to_dash_id_reflows_misplaced_dashes() {
        assert_eq!(to_dash_id("0eeee000cccc-bbbbaaaa123450000000"), DASH);
    }

    #[test]
    fn test_to_dash_id_non_ascii_unchanged() {
        // 32 bytes but not 32 ASCII characters
        let input = "é".repeat(16);
        assert_eq!(to_dash_id(&input), input);
    }

    #[test]
    fn test_is_valid_dash_id() {
        assert!(is_valid_dash_id(DASH));
        assert!(!is_valid_dash_id(NO_DASH));
        // 36 characters without any dash
        assert!(!is_valid_dash_id("0eeee000ccccbbbbaaaa1234500000001234"));
        assert!(!is_valid_dash_id("0eeee000-cccc"));
    }

    #[test]
    fn test_is_valid_dash_id_is_permissive() {
        assert!(is_valid_dash_id(&format!("{}x", "-".repeat(35))));
        assert!(is_valid_dash_id("zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz"));
    }

    #[test]
    fn test_to_no_dash_id() {
        assert_eq!(to_no_dash_id(DASH), NO_DASH);
        assert_eq!(to_no_dash_id(NO_DASH), NO_DASH);
    }

    #[test]
    fn test_block_uri() {
        assert_eq!(
            block_uri(DASH),
            "https://www.notion.so/0eeee000ccccbbbbaaaa123450000000"
        );
    }
}
