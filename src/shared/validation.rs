use validator::ValidationErrors;

/// Collapse empty or whitespace-only filter values to `None`.
///
/// Non-blank values are kept byte for byte so they still match exactly.
pub fn normalize_filter(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// The configured messages of every failed field, joined in a stable order
pub fn validation_messages(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Point {
        #[validate(range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90"))]
        lat: f64,
        #[validate(range(min = -180.0, max = 180.0))]
        lon: f64,
    }

    #[test]
    fn test_normalize_filter_drops_blank() {
        assert_eq!(normalize_filter(None), None);
        assert_eq!(normalize_filter(Some("".to_string())), None);
        assert_eq!(normalize_filter(Some("  \t".to_string())), None);
    }

    #[test]
    fn test_normalize_filter_keeps_values_verbatim() {
        assert_eq!(
            normalize_filter(Some("Geweld".to_string())),
            Some("Geweld".to_string())
        );
        assert_eq!(
            normalize_filter(Some(" Geweld ".to_string())),
            Some(" Geweld ".to_string())
        );
    }

    #[test]
    fn test_validation_messages() {
        let errors = Point { lat: 95.0, lon: 6.5 }.validate().unwrap_err();
        assert_eq!(validation_messages(&errors), "lat must be between -90 and 90");

        // Falls back to the error code when no message is configured
        let errors = Point { lat: 0.0, lon: 200.0 }.validate().unwrap_err();
        assert_eq!(validation_messages(&errors), "range");
    }
}
