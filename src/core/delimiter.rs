use crate::domain::model::DelimiterSet;

/// Prefix announcing a custom delimiter header.
pub const HEADER_MARKER: &str = "//";
/// Separator custom delimiters are rewritten to before splitting.
pub const CANONICAL_SEPARATOR: &str = ",";

const DEFAULT_SEPARATORS: [char; 2] = [',', '\n'];
const LITERAL_SEPARATOR: char = '|';

impl DelimiterSet {
    /// Separates an input into its active delimiter set and the body to split.
    ///
    /// Inputs starting with `//` carry a header that runs up to the first
    /// newline; the body is everything after it. A header without a newline,
    /// or with a blank header or body, yields an empty custom set and an empty
    /// body so the input contributes no tokens.
    pub fn parse(input: &str) -> (Self, &str) {
        let Some(rest) = input.strip_prefix(HEADER_MARKER) else {
            return (Self::Default, input);
        };

        let Some((header, body)) = rest.split_once('\n') else {
            return (Self::Custom(Vec::new()), "");
        };

        if header.trim().is_empty() || body.trim().is_empty() {
            return (Self::Custom(Vec::new()), "");
        }

        let literals = header
            .split(LITERAL_SEPARATOR)
            .filter(|literal| !literal.is_empty())
            .map(str::to_owned)
            .collect();

        (Self::Custom(literals), body)
    }

    /// Splits `body` on this set, trimming tokens and dropping blank ones.
    pub fn split(&self, body: &str) -> Vec<String> {
        match self {
            Self::Default => collect_tokens(body.split(DEFAULT_SEPARATORS)),
            Self::Custom(literals) => {
                // Plain substring replacement: `*`, `?` and friends stay literal.
                let mut normalized = body.to_string();
                for literal in literals {
                    normalized = normalized.replace(literal.as_str(), CANONICAL_SEPARATOR);
                }
                collect_tokens(normalized.split(CANONICAL_SEPARATOR))
            }
        }
    }
}

fn collect_tokens<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Detects the delimiter set of `input` and returns its tokens in order.
pub fn tokenize(input: &str) -> Vec<String> {
    let (delimiters, body) = DelimiterSet::parse(input);
    delimiters.split(body)
}
