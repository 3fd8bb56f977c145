//! Rating categories and the schemes that group them.
//!
//! A dataset uses exactly one [`RatingScheme`]. The binary scheme only knows
//! likes and dislikes (`1`/`0` in the source tables); the four-level scheme
//! adds `neutral` and `love` and is stored as lowercase labels.
//!
//! # Examples
//! ```
//! use hivemind_core::{Rating, RatingScheme};
//!
//! assert_eq!(RatingScheme::Binary.parse_rating("1"), Ok(Rating::Like));
//! assert_eq!(RatingScheme::FourLevel.parse_rating("love"), Ok(Rating::Love));
//! assert_eq!(Rating::Neutral.ordinal(), 1);
//! ```

use thiserror::Error;

/// A user's preference for a work.
///
/// Variants are declared weakest first so the derived ordering matches
/// `dislike < neutral < like < love`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Rating {
    /// The user did not like the work.
    Dislike,
    /// The user was indifferent.
    Neutral,
    /// The user liked the work.
    Like,
    /// The user loved the work.
    Love,
}

/// Whether a rating counts for or against a work during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Raters in this group add their similarity to the hive-mind sum.
    Positive,
    /// Raters in this group subtract their similarity from the hive-mind sum.
    Negative,
}

impl Rating {
    /// Every category, weakest first.
    pub const ALL: [Self; 4] = [Self::Dislike, Self::Neutral, Self::Like, Self::Love];

    /// Ordinal encoding used by the label Jaccard similarity.
    ///
    /// # Examples
    /// ```
    /// use hivemind_core::Rating;
    ///
    /// assert_eq!(Rating::Dislike.ordinal(), 0);
    /// assert_eq!(Rating::Love.ordinal(), 3);
    /// ```
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Dislike => 0,
            Self::Neutral => 1,
            Self::Like => 2,
            Self::Love => 3,
        }
    }

    /// Return the aggregation polarity of the category.
    #[must_use]
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Like | Self::Love => Polarity::Positive,
            Self::Dislike | Self::Neutral => Polarity::Negative,
        }
    }

    /// Return the category as a lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dislike => "dislike",
            Self::Neutral => "neutral",
            Self::Like => "like",
            Self::Love => "love",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self.ordinal() as usize
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Rating {
    type Err = RatingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RatingScheme::FourLevel.parse_rating(s)
    }
}

/// Vocabulary a ratings dataset is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum RatingScheme {
    /// `0` (dislike) and `1` (like).
    #[default]
    Binary,
    /// `dislike`, `neutral`, `like` and `love`.
    FourLevel,
}

impl RatingScheme {
    /// Categories that belong to the scheme, weakest first.
    #[must_use]
    pub const fn categories(self) -> &'static [Rating] {
        match self {
            Self::Binary => &[Rating::Dislike, Rating::Like],
            Self::FourLevel => &Rating::ALL,
        }
    }

    /// Report whether `rating` is part of this scheme's vocabulary.
    #[must_use]
    pub fn contains(self, rating: Rating) -> bool {
        self.categories().contains(&rating)
    }

    /// Parse a raw table cell into a [`Rating`].
    ///
    /// Surrounding whitespace is ignored. Four-level labels must be
    /// lowercase.
    ///
    /// # Errors
    /// Returns [`RatingParseError`] when the value is outside the scheme's
    /// domain.
    pub fn parse_rating(self, raw: &str) -> Result<Rating, RatingParseError> {
        let value = raw.trim();
        let parsed = match self {
            Self::Binary => match value {
                "0" => Some(Rating::Dislike),
                "1" => Some(Rating::Like),
                _ => None,
            },
            Self::FourLevel => match value {
                "dislike" => Some(Rating::Dislike),
                "neutral" => Some(Rating::Neutral),
                "like" => Some(Rating::Like),
                "love" => Some(Rating::Love),
                _ => None,
            },
        };
        parsed.ok_or_else(|| RatingParseError {
            scheme: self,
            value: value.to_owned(),
        })
    }

    /// Render a rating the way this scheme stores it in a table cell.
    ///
    /// Returns `None` when the rating is not part of the scheme.
    #[must_use]
    pub const fn encode(self, rating: Rating) -> Option<&'static str> {
        match (self, rating) {
            (Self::Binary, Rating::Dislike) => Some("0"),
            (Self::Binary, Rating::Like) => Some("1"),
            (Self::Binary, Rating::Neutral | Rating::Love) => None,
            (Self::FourLevel, other) => Some(other.as_str()),
        }
    }

    /// Return the scheme name accepted by [`str::parse`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::FourLevel => "four-level",
        }
    }
}

impl std::fmt::Display for RatingScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RatingScheme {
    type Err = UnknownSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" => Ok(Self::Binary),
            "four-level" | "four_level" | "fourlevel" => Ok(Self::FourLevel),
            _ => Err(UnknownSchemeError {
                value: s.to_owned(),
            }),
        }
    }
}

/// A rating value fell outside the active scheme's domain.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("rating {value:?} is not valid for the {scheme} scheme")]
pub struct RatingParseError {
    /// Scheme the value was parsed against.
    pub scheme: RatingScheme,
    /// Offending value, trimmed.
    pub value: String,
}

/// A scheme name was not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown rating scheme {value:?} (expected `binary` or `four-level`)")]
pub struct UnknownSchemeError {
    /// Offending value.
    pub value: String,
}
