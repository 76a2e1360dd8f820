//! Tokenizer for chat command lines.
//!
//! A token is exactly a run of non-whitespace characters. There is no
//! quoting: free-form arguments are recovered by rejoining a token suffix.

/// Splits a chat line into whitespace-delimited tokens.
///
/// Runs of whitespace count as one separator, so `"!mark  add\thome"` yields
/// three tokens. Empty or whitespace-only input yields no tokens.
pub fn split(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Rejoins `tokens[from..]` with single spaces.
///
/// Returns an empty string when `from` is past the end.
pub fn join(tokens: &[String], from: usize) -> String {
    tokens.get(from..).map(|rest| rest.join(" ")).unwrap_or_default()
}
