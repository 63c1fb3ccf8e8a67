use rustc_hash::FxHashSet;

/// Boundary between sentences inside a document
pub const SENTENCE_SEPARATOR: &str = ". ";

/// Trailing characters removed from document tokens
pub const STRIP_CHARS: &[char] = &[',', '.', '?', '!'];

/// Normalize a document token: lowercase, then trim any run of trailing
/// punctuation from [`STRIP_CHARS`].
///
/// A token made only of punctuation normalizes to the empty string, which is
/// kept as a term.
pub fn normalize_token(word: &str) -> String {
    normalize_token_with(word, STRIP_CHARS)
}

/// Normalize a document token against a custom punctuation set
pub fn normalize_token_with(word: &str, strip: &[char]) -> String {
    word.to_lowercase().trim_end_matches(strip).to_string()
}

/// Normalize a query term. Only case is folded; trailing punctuation is kept.
pub fn normalize_query_term(word: &str) -> String {
    word.to_lowercase()
}

/// Split a document into sentence units.
///
/// Empty pieces are preserved, so `"a. "` yields `["a", ""]` and a document
/// without a separator yields itself.
pub fn split_units<'a>(document: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return vec![document];
    }
    document.split(separator).collect()
}

/// Word boundary: Unicode whitespace plus the ASCII file, group, record and
/// unit separators (U+001C..=U+001F)
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split `text` into words on [`is_word_separator`], dropping empty pieces
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|word| !word.is_empty())
}

/// Split into words and normalize every token of `text`, keeping duplicates
pub fn tokenize<'a>(text: &'a str, strip: &'a [char]) -> impl Iterator<Item = String> + 'a {
    split_words(text).map(move |word| normalize_token_with(word, strip))
}

/// Distinct normalized tokens of a single unit
pub fn unit_terms(text: &str, strip: &[char]) -> FxHashSet<String> {
    tokenize(text, strip).collect()
}
