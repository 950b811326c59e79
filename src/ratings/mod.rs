pub(crate) mod leaderboard;
pub(crate) mod model;
pub(crate) mod rate;
pub(crate) mod stats;
pub(crate) mod store;

use crate::ratings::model::ValidationError;
use serenity::all::User;

/// The user a rating command was pointed at, detached from the serenity model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MentionedUser {
    pub(crate) id: u64,
    pub(crate) display_name: String,
}

impl MentionedUser {
    /// Fails with [`ValidationError::MissingUser`] when nobody was mentioned.
    pub(crate) fn require(
        user: Option<MentionedUser>,
        action: &'static str,
    ) -> Result<MentionedUser, ValidationError> {
        user.ok_or(ValidationError::MissingUser { action })
    }
}

impl From<&User> for MentionedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            display_name: user.global_name.clone().unwrap_or_else(|| user.name.clone()),
        }
    }
}
