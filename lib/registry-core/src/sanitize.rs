//! Virtual-host label sanitization

/// Map a free-form name to a string safe to use as a virtual-host label.
///
/// ASCII letters, digits, '.' and '-' pass through unchanged; every other
/// character becomes '-'. The mapping is one-to-one per character, so the
/// output length always equals the input length; nothing is collapsed,
/// trimmed, or case-folded.
pub fn sanitize_hostname(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_characters_become_dashes() {
        assert_eq!(sanitize_hostname("My.1st-test_app+"), "My.1st-test-app-");
        assert_eq!(sanitize_hostname("my app (v2)"), "my-app--v2-");
    }

    #[test]
    fn test_valid_input_is_unchanged() {
        assert_eq!(sanitize_hostname("my-app.v2"), "my-app.v2");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize_hostname(""), "");
    }

    #[test]
    fn test_entirely_invalid_input() {
        assert_eq!(sanitize_hostname("_+ /"), "----");
    }

    #[test]
    fn test_length_is_preserved_and_output_is_label_safe() {
        for input in ["test-app", "My.1st-test_app+", "a b\tc", "äöü", ""] {
            let output = sanitize_hostname(input);
            assert_eq!(output.chars().count(), input.chars().count());
            assert!(output
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-'));
        }
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for input in ["test-app", "My.1st-test_app+", "_+ /", ""] {
            let once = sanitize_hostname(input);
            assert_eq!(sanitize_hostname(&once), once);
        }
    }
}
