mod handler;
mod meta;
mod ratings;
mod setup;
mod teams;
mod util;

use crate::handler::TeamBalancerEventHandler;
use crate::ratings::store::RatingStore;
use crate::setup::Vars;
use anyhow::Context as _;
use poise::Framework;
use serenity::all::GatewayIntents;
use std::sync::Arc;
use tracing::info;

pub(crate) struct AppVarsInner {
    pub(crate) env: Vars,
    pub(crate) ratings: RatingStore,
}

pub(crate) type AppVars = Arc<AppVarsInner>;
pub(crate) type AppError = anyhow::Error;
pub(crate) type Context<'a> = poise::Context<'a, AppVars, AppError>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = setup::cli().get_matches();
    setup::load_env(&args);
    setup::init_logging();

    let env = Vars::from_env().context("read bot configuration")?;

    let token = env.bot_token.clone();
    let options = setup::create_bot_framework_options(&env);
    let data: AppVars = Arc::new(AppVarsInner {
        ratings: RatingStore::new(&env.ratings_path),
        env,
    });
    info!(path = %data.ratings.path().display(), "using ratings file");

    let framework = Framework::builder()
        .options(options)
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                setup::register_commands(&data, ctx, framework).await?;
                Ok(data)
            })
        })
        .build();

    let intents = GatewayIntents::non_privileged()
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::Client::builder(&token, intents)
        .event_handler(TeamBalancerEventHandler)
        .framework(framework)
        .await
        .context("couldn't make client")?;

    client.start().await.context("client error")?;
    Ok(())
}
