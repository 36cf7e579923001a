//! Key/value scanning over ExAC annotation strings.
//!
//! An annotation looks like an INFO column, e.g. `AC=12;AC_Hom=3,5;DB`:
//! tokens are separated by `;` or whitespace, and each token is either a
//! `key=value` pair or a bare flag.

use crate::utils::TransformError;

pub const HOMOZYGOTE_COUNT_KEY: &str = "AC_Hom";

fn tokens(annotation: &str) -> impl Iterator<Item = &str> {
    annotation
        .split(|c: char| c == ';' || c.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
}

/// Returns the value of the first `key=value` token whose key matches exactly.
pub fn find_value<'a>(annotation: &'a str, key: &str) -> Option<&'a str> {
    tokens(annotation).find_map(|token| match token.split_once('=') {
        Some((k, value)) if k == key => Some(value),
        _ => None,
    })
}

/// Parses a `<int>(,<int>)*` value into its decimal components.
///
/// The components are kept as the original text so that they are echoed
/// back unchanged (no normalization of leading zeros).
pub fn parse_count_list<'a>(key: &str, value: &'a str) -> Result<Vec<&'a str>, TransformError> {
    let counts: Vec<&str> = value.split(',').collect();
    let is_count = |s: &&str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if counts.iter().all(is_count) {
        Ok(counts)
    } else {
        Err(TransformError::MalformedAnnotation {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

pub fn homozygote_counts(annotation: &str) -> Result<Vec<&str>, TransformError> {
    let value = find_value(annotation, HOMOZYGOTE_COUNT_KEY)
        .ok_or_else(|| TransformError::MissingAnnotation(HOMOZYGOTE_COUNT_KEY.to_string()))?;
    parse_count_list(HOMOZYGOTE_COUNT_KEY, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_value_in_info_style_string() {
        let annotation = "AC=12;AC_Het=4;AC_Hom=3,5;DB;AN=1000";
        assert_eq!(find_value(annotation, "AC_Hom"), Some("3,5"));
        assert_eq!(find_value(annotation, "AC"), Some("12"));
        assert_eq!(find_value(annotation, "AN"), Some("1000"));
    }

    #[test]
    fn find_value_requires_exact_key() {
        assert_eq!(find_value("XAC_Hom=7;AC_Homs=1", "AC_Hom"), None);
        assert_eq!(find_value("AC_Hom;DB", "AC_Hom"), None);
    }

    #[test]
    fn find_value_splits_on_whitespace() {
        let annotation = "1\t12345\trs1\tA\tG\t100\tPASS\tAC=1;AC_Hom=0";
        assert_eq!(find_value(annotation, "AC_Hom"), Some("0"));
    }

    #[test]
    fn find_value_returns_first_match() {
        assert_eq!(find_value("AC_Hom=1;AC_Hom=2", "AC_Hom"), Some("1"));
    }

    #[test]
    fn homozygote_counts_ok() {
        assert_eq!(homozygote_counts("AC_Hom=3,5").unwrap(), vec!["3", "5"]);
        assert_eq!(homozygote_counts("AC_Hom=007").unwrap(), vec!["007"]);
    }

    #[test]
    fn homozygote_counts_missing() {
        let err = homozygote_counts("AC=1;AC_Het=0").unwrap_err();
        assert!(matches!(err, TransformError::MissingAnnotation(ref k) if k == "AC_Hom"));
    }

    #[test]
    fn homozygote_counts_malformed() {
        for value in ["AC_Hom=", "AC_Hom=3,", "AC_Hom=3,.", "AC_Hom=-1", "AC_Hom=1,,2"] {
            let err = homozygote_counts(value).unwrap_err();
            assert!(
                matches!(err, TransformError::MalformedAnnotation { .. }),
                "{} should be malformed",
                value
            );
        }
    }
}
