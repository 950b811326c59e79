use crate::ratings::MentionedUser;
use crate::ratings::model::{PlayerRating, ValidationError};
use crate::util::{ContextExtras, error_embed, info_embed};
use crate::{AppError, Context};
use serenity::all::{CreateEmbed, User};
use tracing::warn;

/// Parsed arguments of the `stats` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatsArgs {
    pub(crate) user: MentionedUser,
}

impl StatsArgs {
    pub(crate) fn parse(user: Option<MentionedUser>) -> Result<Self, ValidationError> {
        Ok(Self {
            user: MentionedUser::require(user, "show their stats")?,
        })
    }
}

/// Title and body for a lookup result; `Err` carries the body of an error embed.
fn describe_stats(
    user: &MentionedUser,
    found: Option<&PlayerRating>,
) -> Result<(String, String), String> {
    match found {
        Some(player) => Ok((
            format!("Stats of {}", user.display_name),
            format!("Current elo: {}", player.rating),
        )),
        None => Err(format!("{} is not yet rated.", user.display_name)),
    }
}

fn stats_embed(user: &MentionedUser, found: Option<&PlayerRating>) -> CreateEmbed {
    match describe_stats(user, found) {
        Ok((title, description)) => info_embed(title, description),
        Err(description) => error_embed("Stats Error", description),
    }
}

/// Show a player's current elo
#[poise::command(prefix_command, slash_command, guild_only)]
pub(crate) async fn stats(
    ctx: Context<'_>,
    #[description = "Player to look up"] user: Option<User>,
) -> Result<(), AppError> {
    let embed = match StatsArgs::parse(user.as_ref().map(MentionedUser::from)) {
        Err(err) => error_embed("Stats Error", err.to_string()),
        Ok(StatsArgs { user }) => match ctx.data().ratings.get_rating(user.id).await {
            Ok(found) => stats_embed(&user, found.as_ref()),
            Err(err) => {
                warn!("stats failed: {err}");
                error_embed("Stats Error", err.user_message())
            }
        },
    };

    ctx.reply_embed(embed).await?;
    Ok(())
}
