//! Validation Rules
//!
//! Pure checks on a field's current value. No state survives between calls.

use url::Url;

use crate::config::Messages;

/// Semantic type of a field, as far as validation cares
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Url,
}

impl FieldKind {
    /// Kind for an `<input>`'s `type` attribute
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.trim().eq_ignore_ascii_case("url") {
            FieldKind::Url
        } else {
            FieldKind::Text
        }
    }
}

/// What validation looks at
#[derive(Clone, Copy, Debug)]
pub struct FieldSnapshot<'a> {
    pub value: &'a str,
    pub required: bool,
    pub kind: FieldKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Required and blank
    Required,
    /// Url-typed and not an absolute URL
    MalformedUrl,
}

impl Violation {
    pub fn message(self, messages: &Messages) -> &str {
        match self {
            Violation::Required => &messages.required,
            Violation::MalformedUrl => &messages.invalid_url,
        }
    }
}

/// Check a field. The first failing rule wins, so a field reports at most
/// one violation.
pub fn validate(field: &FieldSnapshot<'_>) -> Result<(), Violation> {
    let value = field.value.trim();
    if field.required && value.is_empty() {
        return Err(Violation::Required);
    }
    if field.kind == FieldKind::Url && !value.is_empty() && Url::parse(value).is_err() {
        return Err(Violation::MalformedUrl);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: &str, required: bool, kind: FieldKind) -> Result<(), Violation> {
        validate(&FieldSnapshot { value, required, kind })
    }

    #[test]
    fn test_required_blank_is_invalid() {
        assert_eq!(check("", true, FieldKind::Text), Err(Violation::Required));
        assert_eq!(check("   \t\n", true, FieldKind::Text), Err(Violation::Required));
        assert_eq!(check(" hello ", true, FieldKind::Text), Ok(()));
    }

    #[test]
    fn test_optional_blank_is_valid() {
        assert_eq!(check("", false, FieldKind::Text), Ok(()));
        assert_eq!(check("  ", false, FieldKind::Url), Ok(()));
    }

    #[test]
    fn test_url_fields_need_absolute_urls() {
        assert_eq!(check("https://example.com", false, FieldKind::Url), Ok(()));
        assert_eq!(check("  http://example.com/path?q=1  ", true, FieldKind::Url), Ok(()));
        assert_eq!(check("mailto:someone@example.com", false, FieldKind::Url), Ok(()));

        assert_eq!(check("not a url", false, FieldKind::Url), Err(Violation::MalformedUrl));
        assert_eq!(check("example.com", true, FieldKind::Url), Err(Violation::MalformedUrl));
        assert_eq!(check("/relative/path", false, FieldKind::Url), Err(Violation::MalformedUrl));
    }

    #[test]
    fn test_text_fields_skip_url_rule() {
        assert_eq!(check("not a url", true, FieldKind::Text), Ok(()));
    }

    #[test]
    fn test_required_url_reports_one_violation() {
        assert_eq!(check("", true, FieldKind::Url), Err(Violation::Required));
        assert_eq!(check("nope", true, FieldKind::Url), Err(Violation::MalformedUrl));
    }

    #[test]
    fn test_input_type_mapping() {
        assert_eq!(FieldKind::from_input_type("url"), FieldKind::Url);
        assert_eq!(FieldKind::from_input_type("URL"), FieldKind::Url);
        assert_eq!(FieldKind::from_input_type("text"), FieldKind::Text);
        assert_eq!(FieldKind::from_input_type("email"), FieldKind::Text);
    }

    #[test]
    fn test_messages() {
        let messages = Messages::default();
        assert_eq!(Violation::Required.message(&messages), "This field is required");
        assert_eq!(
            Violation::MalformedUrl.message(&messages),
            "Enter a valid URL (e.g. https://example.com)"
        );
    }
}
