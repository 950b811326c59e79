use crate::ratings::MentionedUser;
use crate::ratings::model::{PlayerRating, Rating, ValidationError};
use crate::ratings::store::StoreError;
use crate::util::text::mention;
use crate::util::{ContextExtras, error_embed, success_embed};
use crate::{AppError, Context};
use serenity::all::User;
use tracing::{info, warn};

/// Parsed arguments of the `rate` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RateArgs {
    pub(crate) user: MentionedUser,
    pub(crate) rating: Rating,
}

impl RateArgs {
    pub(crate) fn parse(
        user: Option<MentionedUser>,
        raw_rating: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let user = MentionedUser::require(user, "rate them")?;
        let rating = Rating::parse_arg(raw_rating)?;
        Ok(Self { user, rating })
    }
}

async fn handle_rate(
    ctx: Context<'_>,
    user: Option<&User>,
    elo: Option<&str>,
) -> Result<PlayerRating, StoreError> {
    let args = RateArgs::parse(user.map(MentionedUser::from), elo)?;
    ctx.data()
        .ratings
        .set_rating(args.user.id, args.user.display_name, args.rating.into())
        .await
}

/// Change a player's elo, or add them with that elo if they aren't rated yet
#[poise::command(prefix_command, slash_command, guild_only)]
pub(crate) async fn rate(
    ctx: Context<'_>,
    #[description = "Player to rate"] user: Option<User>,
    #[description = "Elo from 0 to 10"] elo: Option<String>,
) -> Result<(), AppError> {
    let embed = match handle_rate(ctx, user.as_ref(), elo.as_deref()).await {
        Ok(player) => {
            info!(rater = %ctx.author().id, id = player.id, rating = %player.rating, "rated player");
            success_embed(
                "Rating Successful",
                format!("Rated {} with {} elo.", mention(player.id), player.rating),
            )
        }
        Err(err) => {
            if err.is_unavailable() {
                warn!("rate failed: {err}");
            }
            error_embed("Rating Error", err.user_message())
        }
    };

    ctx.reply_embed(embed).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> MentionedUser {
        MentionedUser {
            id: 7,
            display_name: String::from("ana"),
        }
    }

    #[test]
    fn parses_valid_arguments() {
        let args = RateArgs::parse(Some(ana()), Some("8")).unwrap();
        assert_eq!(args.user, ana());
        assert_eq!(args.rating.get(), 8);
    }

    #[test]
    fn missing_user_is_checked_first() {
        assert_eq!(
            RateArgs::parse(None, Some("nope")),
            Err(ValidationError::MissingUser { action: "rate them" })
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            RateArgs::parse(Some(ana()), None),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            RateArgs::parse(Some(ana()), Some("x")),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            RateArgs::parse(Some(ana()), Some("-2")),
            Err(ValidationError::Negative(-2))
        );
        assert_eq!(
            RateArgs::parse(Some(ana()), Some("11")),
            Err(ValidationError::TooHigh(11))
        );
    }
}
