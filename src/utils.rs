use crate::slug::slugify;

/// Formats a greeting for a person.
///
/// ```
/// use user_service::utils::say_hello;
///
/// assert_eq!(say_hello("Lera", "Jackson"), "Hello, Lera Jackson!");
/// ```
pub fn say_hello(first_name: &str, last_name: &str) -> String {
    format!("Hello, {} {}!", first_name, last_name)
}

/// Returns `true` when `n` is a multiple of three, zero and negatives included.
///
/// ```
/// use user_service::utils::is_divisible_by_three;
///
/// assert!(is_divisible_by_three(303));
/// assert!(is_divisible_by_three(0));
/// assert!(is_divisible_by_three(-3));
/// assert!(!is_divisible_by_three(1000));
/// ```
pub fn is_divisible_by_three(n: i64) -> bool {
    n % 3 == 0
}

/// Builds an absolute URL for `text` under `base`.
///
/// The path segment is the slug of `text`. When the slug is empty the base
/// itself is returned, so the result is always a usable URL.
///
/// ```
/// use user_service::utils::generate_url;
///
/// assert_eq!(generate_url("https://example.com/", "Hello World"), "https://example.com/hello-world");
/// assert_eq!(generate_url("https://example.com", "&&&"), "https://example.com");
/// ```
pub fn generate_url(base: &str, text: &str) -> String {
    let base = base.trim_end_matches('/');
    let slug = slugify(text);
    if slug.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, slug)
    }
}
