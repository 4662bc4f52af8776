/// Word separators accepted in input files: ASCII comma, Japanese comma, and
/// any Unicode whitespace.
fn is_separator(c: char) -> bool {
    c == ',' || c == '、' || c.is_whitespace()
}

/// Split one input line into word tokens, dropping empties.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|token| !token.is_empty())
}

/// Token count across a whole input text. The batch runner uses this as the
/// progress denominator, so it must agree with `tokenize` exactly.
pub fn count_tokens(text: &str) -> usize {
    text.lines().map(|line| tokenize(line).count()).sum()
}
