use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationErrors;

lazy_static! {
    /// Absolute http(s) URL with a host part
    /// - Valid: "https://example.com/item?id=1", "http://shop.test"
    /// - Invalid: "example.com", "ftp://files.test", "https://", "http://a b"
    pub static ref HTTP_URL_REGEX: Regex =
        Regex::new(r"^(?i)https?://[^\s/?#]+[^\s]*$").unwrap();
}

/// Trim a free-text field; blank input becomes `None`
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn is_valid_link(link: &str) -> bool {
    HTTP_URL_REGEX.is_match(link)
}

pub fn is_valid_price(price: &Decimal) -> bool {
    *price >= Decimal::ZERO
}

/// Flatten validator errors into one human readable message
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    messages.sort();
    messages.dedup();

    if messages.is_empty() {
        "Invalid input".to_string()
    } else {
        messages.join("; ")
    }
}
