/// Connectives and budget phrasing that carry no food signal.
const STOPWORDS: &[&str] = &["and", "with", "for", "under", "less", "than"];

/// Splits free text into lowercase keywords.
///
/// Punctuation is stripped per token, tokens of length <= 2 and stopwords
/// are dropped. Repeated words are kept; the scorer counts each occurrence.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|token| token.len() > 2)
        .filter(|token| !STOPWORDS.contains(&token.as_str()))
        .collect()
}
