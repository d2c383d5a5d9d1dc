use regex::Regex;
use std::sync::OnceLock;

/// OMDb's marker for a field it has no value for.
pub const NOT_AVAILABLE: &str = "N/A";

/// Extract the leading 4-digit year from OMDb's free-text year field.
/// "1999", "1999–2005" and "2010–" all work; anything else yields 0.
pub fn parse_year(year: &str) -> i32 {
    static LEADING_YEAR: OnceLock<Regex> = OnceLock::new();
    let re = LEADING_YEAR.get_or_init(|| Regex::new(r"^\d{4}").unwrap());
    re.find(year.trim())
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Map a missing poster or the "N/A" sentinel to an empty string.
pub fn normalize_poster(poster: Option<&str>) -> String {
    match poster {
        Some(NOT_AVAILABLE) | None => String::new(),
        Some(url) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2010"), 2010);
        assert_eq!(parse_year("1999–2005"), 1999);
        assert_eq!(parse_year("2019–"), 2019);
        assert_eq!(parse_year("N/A"), 0);
        assert_eq!(parse_year(""), 0);
        assert_eq!(parse_year("99"), 0);
    }

    #[test]
    fn test_normalize_poster() {
        assert_eq!(normalize_poster(Some("N/A")), "");
        assert_eq!(normalize_poster(None), "");
        assert_eq!(
            normalize_poster(Some("https://m.media-amazon.com/images/M/x.jpg")),
            "https://m.media-amazon.com/images/M/x.jpg"
        );
    }
}
