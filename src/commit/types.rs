//! Commit Types
//!
//! The fixed set of conventional commit types, in the order they are offered
//! to the user.

use std::{fmt::Display, str::FromStr};

use crate::errors::KommitError;

/// A conventional commit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Test,
    Chore,
    Refactor,
    Docs,
    Style,
    Perf,
    Build,
    Ci,
    Revert,
}

impl CommitType {
    /// Every commit type, in display order.
    pub const ALL: [CommitType; 11] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Test,
        CommitType::Chore,
        CommitType::Refactor,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Perf,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Revert,
    ];

    /// Returns the lowercase token written in the commit header.
    ///
    /// # Examples
    ///
    /// ```
    /// use kommit::commit::CommitType;
    ///
    /// assert_eq!(CommitType::Refactor.as_str(), "refactor");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Refactor => "refactor",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Perf => "perf",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Revert => "revert",
        }
    }
}

impl Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = KommitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::ALL
            .into_iter()
            .find(|commit_type| commit_type.as_str() == s)
            .ok_or_else(|| KommitError::InvalidInput(format!("unknown commit type `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let tokens: Vec<&str> = CommitType::ALL.iter().map(|t| t.as_str()).collect();

        assert_eq!(
            tokens,
            [
                "feat", "fix", "test", "chore", "refactor", "docs", "style", "perf", "build",
                "ci", "revert"
            ]
        );
    }

    #[test]
    fn test_parse_every_token() {
        for commit_type in CommitType::ALL {
            assert_eq!(commit_type.to_string().parse::<CommitType>().unwrap(), commit_type);
        }
    }

    #[test]
    fn test_parse_unknown_token() {
        assert!(matches!(
            "feature".parse::<CommitType>(),
            Err(KommitError::InvalidInput(_))
        ));
        // Tokens are case sensitive
        assert!("Feat".parse::<CommitType>().is_err());
    }
}
