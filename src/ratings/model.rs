use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub(crate) const MIN_RATING: i64 = 0;
pub(crate) const MAX_RATING: i64 = 10;

/// Bad or missing arguments to a rating command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ValidationError {
    #[error("You need to mention a user to {action}.")]
    MissingUser { action: &'static str },
    #[error("You need to specify the elo as a number.")]
    NotANumber,
    #[error("The elo has to be a positive number.")]
    Negative(i64),
    #[error("The elo has to be smaller or equal to {}.", MAX_RATING)]
    TooHigh(i64),
}

/// A skill rating, always within `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub(crate) struct Rating(u8);

impl Rating {
    pub(crate) fn get(self) -> u8 {
        self.0
    }

    /// Parses a rating typed by a user.
    ///
    /// Anything that isn't an integer is [`ValidationError::NotANumber`]; integers too large for
    /// an `i64` still count as out of range rather than as garbage.
    pub(crate) fn parse_arg(raw: Option<&str>) -> Result<Rating, ValidationError> {
        let raw = raw.map(str::trim).unwrap_or_default();
        let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NotANumber);
        }

        match raw.parse::<i64>() {
            Ok(value) => Rating::try_from(value),
            Err(_) if raw.starts_with('-') => Err(ValidationError::Negative(i64::MIN)),
            Err(_) => Err(ValidationError::TooHigh(i64::MAX)),
        }
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < MIN_RATING {
            Err(ValidationError::Negative(value))
        } else if value > MAX_RATING {
            Err(ValidationError::TooHigh(value))
        } else {
            Ok(Rating(value as u8))
        }
    }
}

impl From<Rating> for i64 {
    fn from(value: Rating) -> Self {
        i64::from(value.0)
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry of the ratings file.
///
/// `name` is whatever the player was called when last rated and may be stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PlayerRating {
    pub(crate) id: u64,
    pub(crate) name: String,
    #[serde(rename = "elo")]
    pub(crate) rating: Rating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert_eq!(Rating::try_from(0_i64).map(Rating::get), Ok(0));
        assert_eq!(Rating::try_from(10_i64).map(Rating::get), Ok(10));
        assert_eq!(Rating::try_from(-1_i64), Err(ValidationError::Negative(-1)));
        assert_eq!(Rating::try_from(11_i64), Err(ValidationError::TooHigh(11)));
    }

    #[test]
    fn parse_arg_classifies_input() {
        assert_eq!(Rating::parse_arg(Some(" 7 ")).map(Rating::get), Ok(7));
        assert_eq!(Rating::parse_arg(None), Err(ValidationError::NotANumber));
        assert_eq!(Rating::parse_arg(Some("")), Err(ValidationError::NotANumber));
        assert_eq!(Rating::parse_arg(Some("five")), Err(ValidationError::NotANumber));
        assert_eq!(Rating::parse_arg(Some("4.5")), Err(ValidationError::NotANumber));
        assert_eq!(Rating::parse_arg(Some("-")), Err(ValidationError::NotANumber));
        assert_eq!(Rating::parse_arg(Some("-3")), Err(ValidationError::Negative(-3)));
        assert_eq!(Rating::parse_arg(Some("12")), Err(ValidationError::TooHigh(12)));
        assert!(matches!(
            Rating::parse_arg(Some("99999999999999999999999")),
            Err(ValidationError::TooHigh(_))
        ));
    }

    #[test]
    fn file_format_uses_elo_key() {
        let player = PlayerRating {
            id: 288046943398363136,
            name: String::from("ana"),
            rating: Rating::try_from(5_i64).unwrap(),
        };
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 288046943398363136u64, "name": "ana", "elo": 5})
        );
    }

    #[test]
    fn out_of_range_elo_in_file_is_rejected() {
        let parsed = serde_json::from_str::<PlayerRating>(r#"{"id": 1, "name": "x", "elo": 11}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ValidationError::MissingUser { action: "rate them" }.to_string(),
            "You need to mention a user to rate them."
        );
        assert_eq!(
            ValidationError::TooHigh(11).to_string(),
            "The elo has to be smaller or equal to 10."
        );
    }
}
