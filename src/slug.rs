//! Slug generation for article URLs.
//!
//! A slug is computed once when an article is saved and stored with the
//! record. Editing the title later does not change the slug until the article
//! is saved again.

/// Generate a URL slug from an article title.
///
/// Lowercases the title, drops every character that is not an ASCII word
/// character (`[a-z0-9_]`), a space, or a hyphen, then collapses each run of
/// spaces and hyphens into a single hyphen.
///
/// No uniqueness check is made: two titles that normalize to the same slug
/// collide, and resolving that is left to the caller.
///
/// # Examples
///
/// ```
/// use socsignals::generate_slug;
///
/// assert_eq!(
///     generate_slug("Hello, World!  Security Report"),
///     "hello-world-security-report"
/// );
/// assert_eq!(generate_slug("Patch Tuesday - March 2024"), "patch-tuesday-march-2024");
/// assert_eq!(generate_slug("Zero-Day in libfoo_2"), "zero-day-in-libfoo_2");
/// assert_eq!(generate_slug("Ünïcödé"), "ncd");
/// ```
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_separator = false;

    for c in lowered.chars() {
        if c == ' ' || c == '-' {
            if !in_separator {
                slug.push('-');
                in_separator = true;
            }
            continue;
        }

        // Dropped characters do not end a separator run: "a , b" -> "a-b"
        if is_slug_char(c) {
            slug.push(c);
            in_separator = false;
        }
    }

    slug
}

/// Check whether a string is already in slug form.
///
/// ```
/// use socsignals::slug::is_slug;
///
/// assert!(is_slug("hello-world_2"));
/// assert!(!is_slug("Hello World"));
/// ```
pub fn is_slug(s: &str) -> bool {
    s.chars().all(is_slug_char)
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
}
