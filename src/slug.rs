use unicode_normalization::UnicodeNormalization;

/// Slug used when a name contains no sluggable character.
pub const FALLBACK_SLUG: &str = "organization";

/// Convert a name into a URL-safe, lowercase-hyphenated slug.
///
/// The name is NFKD-decomposed first, so accented letters keep their base
/// letter. ASCII letters, digits, `_` and `-` survive; whitespace and hyphen
/// runs collapse into one `-`; everything else is dropped. Leading and
/// trailing `-`/`_` are stripped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.nfkd() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == '-' || c.is_whitespace() {
            pending_dash = true;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Slug used in URLs: `slugify(name)`, or [`FALLBACK_SLUG`] when that is empty.
pub fn canonical_slug(name: &str) -> String {
    let slug = slugify(name);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}
