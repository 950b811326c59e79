use crate::util::text::bot_invite_url;
use itertools::Itertools;
use serenity::all::{Context, EventHandler, Permissions, Ready};
use serenity::async_trait;
use tracing::info;

pub(crate) struct TeamBalancerEventHandler;

#[async_trait]
impl EventHandler for TeamBalancerEventHandler {
    async fn ready(&self, _ctx: Context, ready_info: Ready) {
        info!(
            "ok, connected as {} (UID {})",
            ready_info.user.tag(),
            ready_info.user.id
        );
        info!("using discord API version {}", ready_info.version);
        info!(
            guilds = %ready_info.guilds.iter().map(|guild| guild.id).join(", "),
            "present in {} guild(s)",
            ready_info.guilds.len()
        );
        info!(
            "invite link: {}",
            bot_invite_url(
                ready_info.user.id,
                Permissions::VIEW_CHANNEL
                    | Permissions::SEND_MESSAGES
                    | Permissions::EMBED_LINKS
                    | Permissions::READ_MESSAGE_HISTORY,
                true
            )
        );
    }
}
