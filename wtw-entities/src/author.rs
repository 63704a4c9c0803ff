/// Name used for contributions without an author.
pub const ANONYMOUS: &str = "Anonymous";

/// Normalizes a free-text author name.
///
/// Surrounding whitespace is removed and missing
/// or blank names become [`ANONYMOUS`].
pub fn author_or_anonymous(name: Option<&str>) -> String {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(ANONYMOUS)
        .to_owned()
}
