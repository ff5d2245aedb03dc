use validator::ValidateEmail;

use crate::errors::{FieldViolation, ModelError};

/// Field-level checks run at the HTTP boundary, before anything reaches a
/// store.
pub trait Validate {
    /// Fill derivable fields and tidy whitespace. Runs before `validate`.
    fn normalize(&mut self) {}

    fn validate(&self) -> Result<(), ModelError>;
}

/// Collects violations so a caller sees every bad field at once.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    pub fn non_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "is required");
        }
    }

    /// Length in characters of the trimmed value.
    pub fn min_chars(&mut self, field: &str, value: &str, min: usize) {
        if value.trim().chars().count() < min {
            self.push(field, format!("must be at least {min} characters"));
        }
    }

    pub fn non_empty_list(&mut self, field: &str, values: &[String]) {
        if values.is_empty() {
            self.push(field, "must contain at least one entry");
        } else if values.iter().any(|v| v.trim().is_empty()) {
            self.push(field, "must not contain blank entries");
        }
    }

    pub fn finish(self) -> Result<(), ModelError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Validation(self.0))
        }
    }
}

/// HTML5 address shape via `validator`, tightened to what a mail server
/// accepts from a public form: no leading, trailing or doubled dots in the
/// local part, and a dotted domain with an alphabetic TLD.
pub fn is_valid_email(email: &str) -> bool {
    if !email.validate_email() {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((_, tld)) => tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}

/// Lowercase ASCII slug: accents folded, runs of anything else become `-`.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars().flat_map(fold_accent) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn fold_accent(c: char) -> impl Iterator<Item = char> {
    let folded: &'static str = match c {
        'à' | 'â' | 'ä' | 'á' | 'À' | 'Â' | 'Ä' | 'Á' => "a",
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => "e",
        'î' | 'ï' | 'í' | 'Î' | 'Ï' | 'Í' => "i",
        'ô' | 'ö' | 'ó' | 'Ô' | 'Ö' | 'Ó' => "o",
        'ù' | 'û' | 'ü' | 'ú' | 'Ù' | 'Û' | 'Ü' | 'Ú' => "u",
        'ç' | 'Ç' => "c",
        'ñ' | 'Ñ' => "n",
        'œ' | 'Œ' => "oe",
        'æ' | 'Æ' => "ae",
        _ => "",
    };
    let passthrough = if folded.is_empty() { Some(c) } else { None };
    folded.chars().chain(passthrough)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("awa@example.sn"));
        assert!(is_valid_email("first.last+tag@mail.example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@@example.com"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@.com"));
    }

    #[test]
    fn email_rejects_malformed_labels_and_dots() {
        for bad in [
            "a@b..com",
            "a@-x.com",
            "a@x-.com",
            ".a@example.com",
            "a.@example.com",
            "a..b@example.com",
            "a@exa_mple.com",
            "a@example.c0m!",
            "a@example.c0m",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
        assert!(is_valid_email("o'brien@atelier-dakar.sn"));
    }

    #[test]
    fn slug_folds_accents_and_collapses_separators() {
        assert_eq!(slugify("Sac Test"), "sac-test");
        assert_eq!(slugify("  Pochette brodée -- été 2024 "), "pochette-brodee-ete-2024");
        assert_eq!(slugify("Cœur & Âme"), "coeur-ame");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slug_shape() {
        assert!(is_valid_slug("sac-test-2"));
        assert!(!is_valid_slug("Sac-Test"));
        assert!(!is_valid_slug("-sac"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn violations_accumulate() {
        let mut v = Violations::new();
        v.non_empty("name", "  ");
        v.min_chars("message", "short", 10);
        v.non_empty_list("images", &[]);
        let err = v.finish().unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, ["name", "message", "images"]);
    }

    #[test]
    fn min_chars_counts_characters_not_bytes() {
        let mut v = Violations::new();
        v.min_chars("name", "Éa", 2);
        assert!(v.finish().is_ok());
    }
}
