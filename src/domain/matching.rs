// src/domain/matching.rs

/// Alias comparison policy.
///
/// Lookups, duplicate detection and rename targets all go through the same
/// policy, so `tp del WORK` removes a bookmark stored as `Work` unless the
/// user opted into case-sensitive matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AliasMatching {
    /// Aliases must match byte for byte.
    CaseSensitive,
    /// Aliases match after Unicode lowercasing. The default.
    #[default]
    CaseInsensitive,
}

impl AliasMatching {
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            AliasMatching::CaseSensitive
        } else {
            AliasMatching::CaseInsensitive
        }
    }

    /// Whether two aliases refer to the same bookmark under this policy.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            AliasMatching::CaseSensitive => a == b,
            AliasMatching::CaseInsensitive => a.to_lowercase() == b.to_lowercase(),
        }
    }
}
