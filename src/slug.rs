use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Any Unicode punctuation (dashes, quotes, middle dots, CJK full stops, ...).
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{P}$").expect("PUNCTUATION is a valid regex"));

/// Latin letters that have no canonical or compatibility decomposition but
/// do have a conventional ASCII spelling.
const TRANSLITERATIONS: &[(char, &str)] = &[
    ('đ', "d"),
    ('ð', "d"),
    ('ø', "o"),
    ('ł', "l"),
    ('ß', "ss"),
    ('æ', "ae"),
    ('œ', "oe"),
    ('þ', "th"),
    ('ħ', "h"),
    ('ı', "i"),
    ('ŀ', "l"),
    ('ŧ', "t"),
];

/// Generates a URL-safe slug from arbitrary text.
///
/// Transforms the text by:
/// - Converting to lowercase
/// - Stripping diacritics and transliterating Latin letters to ASCII
/// - Dropping characters with no ASCII spelling (emoji, CJK, ...)
/// - Replacing runs of whitespace and punctuation (ASCII or Unicode) with a
///   single hyphen
/// - Trimming leading/trailing hyphens
///
/// The output only ever contains `[a-z0-9-]`, never starts or ends with a
/// hyphen and never contains two in a row. Any input is accepted; input with
/// nothing sluggable in it yields an empty string, which callers must handle.
///
/// # Examples
/// ```
/// use user_service::slug::slugify;
///
/// assert_eq!(slugify(" hello world "), "hello-world");
/// assert_eq!(slugify("hello--world"), "hello-world");
/// assert_eq!(slugify("řâñđöḿ text"), "random-text");
/// assert_eq!(slugify("&&&"), "");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = SlugBuilder::with_capacity(text.len());

    for c in text.nfkd().filter(|c| !is_combining_mark(*c)) {
        for c in c.to_lowercase().filter(|c| !is_combining_mark(*c)) {
            if c.is_ascii_alphanumeric() {
                slug.push(c);
            } else if let Some(ascii) = transliterate(c) {
                ascii.chars().for_each(|c| slug.push(c));
            } else if is_separator(c) {
                slug.separate();
            }
        }
    }

    slug.finish()
}

fn is_separator(c: char) -> bool {
    if c.is_whitespace() || c.is_ascii_punctuation() {
        return true;
    }
    let mut buf = [0u8; 4];
    PUNCTUATION.is_match(c.encode_utf8(&mut buf))
}

fn transliterate(c: char) -> Option<&'static str> {
    TRANSLITERATIONS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Accumulates slug characters, deferring hyphens until the next
/// alphanumeric so that separators collapse and never trail.
struct SlugBuilder {
    out: String,
    pending_separator: bool,
}

impl SlugBuilder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            pending_separator: false,
        }
    }

    fn push(&mut self, c: char) {
        if self.pending_separator && !self.out.is_empty() {
            self.out.push('-');
        }
        self.pending_separator = false;
        self.out.push(c);
    }

    fn separate(&mut self) {
        self.pending_separator = true;
    }

    fn finish(self) -> String {
        self.out
    }
}
