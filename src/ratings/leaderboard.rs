use crate::ratings::model::PlayerRating;
use crate::util::text::mention;
use crate::util::{ContextExtras, error_embed, info_embed};
use crate::{AppError, Context};
use itertools::Itertools;
use tracing::warn;

pub(crate) const LEADERBOARD_SIZE: usize = 20;

fn leaderboard_lines(ranked: &[PlayerRating]) -> String {
    if ranked.is_empty() {
        return String::from("Nobody has been rated yet.");
    }

    ranked
        .iter()
        .enumerate()
        .map(|(i, player)| format!("{}. {}: {}", i + 1, mention(player.id), player.rating))
        .join("\n")
}

/// Show the top 20 players with the highest elo
#[poise::command(prefix_command, slash_command, guild_only)]
pub(crate) async fn leaderboard(ctx: Context<'_>) -> Result<(), AppError> {
    let embed = match ctx.data().ratings.leaderboard(LEADERBOARD_SIZE).await {
        Ok(ranked) => info_embed("Leaderboard", leaderboard_lines(&ranked)),
        Err(err) => {
            warn!("leaderboard failed: {err}");
            error_embed("Leaderboard Error", err.user_message())
        }
    };

    ctx.reply_embed(embed).await?;
    Ok(())
}
