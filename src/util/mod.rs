pub(crate) mod text;

use crate::Context;
use poise::{CreateReply, ReplyHandle};
use serenity::all::CreateEmbed;

pub(crate) const INFO_COLOR: u32 = 0x3498db;
const SUCCESS_COLOR: u32 = 0x2ecc71;
const ERROR_COLOR: u32 = 0xe74c3c;

pub(crate) fn base_embed(title: impl Into<String>, color: u32) -> CreateEmbed {
    CreateEmbed::default().title(title).color(color)
}

pub(crate) fn info_embed(title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
    base_embed(title, INFO_COLOR).description(description)
}

pub(crate) fn success_embed(
    title: impl Into<String>,
    description: impl Into<String>,
) -> CreateEmbed {
    base_embed(title, SUCCESS_COLOR).description(description)
}

pub(crate) fn error_embed(title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
    base_embed(title, ERROR_COLOR).description(description)
}

pub trait ContextExtras<'a> {
    async fn reply_ephemeral(
        self,
        text: impl Into<String>,
    ) -> Result<ReplyHandle<'a>, serenity::Error>;

    async fn reply_embed(self, embed: CreateEmbed) -> Result<ReplyHandle<'a>, serenity::Error>;
}

impl<'a> ContextExtras<'a> for Context<'a> {
    async fn reply_ephemeral(
        self,
        text: impl Into<String>,
    ) -> Result<ReplyHandle<'a>, serenity::Error> {
        self.send(
            CreateReply::default()
                .content(text)
                .reply(true)
                .ephemeral(true),
        )
        .await
    }

    async fn reply_embed(self, embed: CreateEmbed) -> Result<ReplyHandle<'a>, serenity::Error> {
        self.send(CreateReply::default().embed(embed).reply(true))
            .await
    }
}
