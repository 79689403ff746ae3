use std::sync::LazyLock;

use fancy_regex::Regex;
use tracing::warn;

// Needs a backreference, which the regex crate does not support.
static REPEATED_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\w+)\s?\1\b").unwrap());

/// Collapse an immediately repeated whole word into one occurrence.
///
/// Link labels are often rendered twice (once visible, once for screen
/// readers), so the concatenated text comes out as `SpotifySpotify` or
/// `Spotify Spotify`. Everything else is left as is.
pub fn dedupe_repeated_word(s: &str) -> String {
    match REPEATED_WORD_RE.try_replacen(s, 0, "$1") {
        Ok(cleaned) => cleaned.into_owned(),
        Err(e) => {
            warn!("Repeated-word cleanup failed for {:?}: {}", s, e);
            s.to_string()
        }
    }
}

/// Trim, then collapse a repeated word. Inner whitespace is kept as is.
pub fn clean_label(raw: &str) -> String {
    dedupe_repeated_word(raw.trim())
}
