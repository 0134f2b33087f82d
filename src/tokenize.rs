//! Tokenization and token normalization.
//!
//! Raw tokens keep apostrophes and digits; normalization narrows them to `[a-z]`
//! so they compare against lexicon keys.

/// Split on runs of anything that is neither alphanumeric nor an apostrophe.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|t| !t.is_empty())
        .collect()
}

/// Lowercase and keep only ASCII letters. Digits and apostrophes go too.
pub fn strip_alpha(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// `strip_alpha`, then collapse every run of 3+ identical characters to 2.
/// "soooo" -> "soo", "yayyy" -> "yayy".
pub fn normalize(raw: &str) -> String {
    collapse_repeats(&strip_alpha(raw))
}

fn collapse_repeats(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    let mut run = 0usize;
    for c in s.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run <= 2 {
            out.push(c);
        }
    }
    out
}
