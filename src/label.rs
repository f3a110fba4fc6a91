/// The relevance outcome assigned to a single article.
///
/// `Unknown` covers any model response that contains neither a "YES" nor a
/// "NO" token. `Error` marks rows whose remote call failed; they are kept in
/// the output so the row count always matches the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceLabel {
    Yes,
    No,
    Unknown,
    Error,
}

impl RelevanceLabel {
    /// Extracts a label from the raw completion text.
    ///
    /// The scan is case-insensitive and substring-based. When a response
    /// contains both tokens, whichever occurs earliest in the text wins.
    pub fn from_response(content: &str) -> Self {
        let lowered = content.to_lowercase();
        match (lowered.find("yes"), lowered.find("no")) {
            (Some(yes_at), Some(no_at)) => {
                if yes_at < no_at {
                    Self::Yes
                } else {
                    Self::No
                }
            }
            (Some(_), None) => Self::Yes,
            (None, Some(_)) => Self::No,
            (None, None) => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
            Self::Unknown => "UNKNOWN",
            Self::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for RelevanceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
