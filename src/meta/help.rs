use crate::ratings::leaderboard::LEADERBOARD_SIZE;
use crate::ratings::model::{MAX_RATING, MIN_RATING};
use crate::util::{ContextExtras, info_embed};
use crate::{AppError, Context};

fn help_text(prefix: &str) -> String {
    format!(
        "**{prefix}rate @user elo**
Rates a player with the given elo ({MIN_RATING} to {MAX_RATING}). If the player is already rated, their elo will be updated.
Example:
`{prefix}rate @user 5`

**{prefix}leaderboard**
Shows the top {LEADERBOARD_SIZE} players with the highest elo.
Example:
`{prefix}leaderboard`

**{prefix}stats @user**
Shows the stats of a player.
Example:
`{prefix}stats @user`

**{prefix}generate_teams**
Creates balanced teams with the users in the voice channel you are in.
Example:
`{prefix}generate_teams`"
    )
}

/// List the available commands
#[poise::command(prefix_command, slash_command)]
pub(crate) async fn command_list(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.reply_embed(info_embed("Help", help_text(&ctx.data().env.command_prefix)))
        .await?;
    Ok(())
}
