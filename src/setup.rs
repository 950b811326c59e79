use crate::util::ContextExtras;
use crate::{AppError, AppVars, AppVarsInner};
use crate::{meta, ratings, teams};
use anyhow::{Context as _, bail};
use clap::{Arg, ArgMatches, Command as CliCommand, value_parser};
use pluralizer::pluralize;
use poise::{BoxFuture, Command, Framework, FrameworkError, FrameworkOptions, PrefixFrameworkOptions};
use serenity::FutureExt;
use serenity::all::{Context, GuildId};
use std::env;
use std::num::NonZeroU64;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub(crate) fn cli() -> CliCommand {
    CliCommand::new("teambalancer-bot")
        .about("Discord bot that rates players and generates balanced teams")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to a dotenv file with the bot configuration")
                .value_parser(value_parser!(PathBuf))
                .default_value(".env"),
        )
}

pub(crate) fn load_env(args: &ArgMatches) {
    if let Some(path) = args.get_one::<PathBuf>("config") {
        dotenv::from_filename(path).ok();
    }
}

pub(crate) fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// Env Setup
const DEFAULT_RATINGS_PATH: &str = "data/ratings.json";
const DEFAULT_PREFIX: &str = "!";

pub(crate) struct Vars {
    pub(crate) bot_token: String,
    pub(crate) ratings_path: PathBuf,
    pub(crate) command_prefix: String,
    pub(crate) register_globally: bool,
    pub(crate) command_guilds: Vec<GuildId>,
}

impl Vars {
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let Some(bot_token) = non_empty("BOT_TOKEN") else {
            bail!("BOT_TOKEN must be set");
        };

        let command_guilds: Vec<GuildId> = non_empty("COMMAND_GUILDS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|id| {
                id.parse::<NonZeroU64>()
                    .map(|id| GuildId::new(id.get()))
                    .with_context(|| format!("COMMAND_GUILDS entry {id:?} is not a valid snowflake"))
            })
            .collect::<anyhow::Result<_>>()?;

        Ok(Self {
            bot_token,
            ratings_path: non_empty("RATINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RATINGS_PATH)),
            command_prefix: non_empty("COMMAND_PREFIX")
                .map(|prefix| prefix.trim().to_owned())
                .unwrap_or_else(|| String::from(DEFAULT_PREFIX)),
            register_globally: non_empty("REGISTER_GLOBALLY").is_some(),
            command_guilds,
        })
    }
}

// Bot setup

pub(crate) async fn register_commands(
    data: &AppVarsInner,
    ctx: &Context,
    framework: &Framework<AppVars, AppError>,
) -> Result<(), AppError> {
    let is_global = data.env.register_globally;
    let no_commands = &[] as &[Command<AppVars, AppError>];
    let commands = &framework.options().commands;
    let global_registration = if is_global { commands } else { no_commands };
    let local_registration = if is_global { no_commands } else { commands };
    let guilds = &data.env.command_guilds;

    poise::builtins::register_globally(ctx, global_registration).await?;

    for id in guilds.iter() {
        poise::builtins::register_in_guild(ctx, local_registration, *id).await?;
    }

    let commands_text = pluralize("command", commands.len() as isize, true);
    if is_global {
        info!("registered {commands_text} globally");
    } else {
        let guilds_text = pluralize("guild", guilds.len() as isize, true);
        info!("registered {commands_text} locally in {guilds_text}");
    }

    Ok(())
}

fn handle_framework_error(error: FrameworkError<'_, AppVars, AppError>) -> BoxFuture<'_, ()> {
    async move {
        error!("framework error: {error}");

        let Some(ctx) = error.ctx() else { return };
        let error_res = match error {
            FrameworkError::Command {
                error: wrapped_error,
                ..
            } => {
                ctx.reply_ephemeral(format!("An unexpected error occurred: {wrapped_error:?}"))
                    .await
            }
            FrameworkError::ArgumentParse { .. } => {
                ctx.reply_ephemeral(format!(
                    "Couldn't understand those arguments, try `{}command_list`",
                    ctx.data().env.command_prefix
                ))
                .await
            }
            _ => ctx.reply_ephemeral("An unknown error occurred").await,
        };
        if let Err(e) = error_res {
            error!("a further error occurred sending the error message to discord: {e:?}")
        }
    }
    .boxed()
}

fn get_bot_commands() -> Vec<Command<AppVars, AppError>> {
    vec![
        ratings::rate::rate(),
        ratings::leaderboard::leaderboard(),
        ratings::stats::stats(),
        teams::generate::generate_teams(),
        meta::help::command_list(),
        meta::ping::ping(),
    ]
}

pub(crate) fn create_bot_framework_options(env: &Vars) -> FrameworkOptions<AppVars, AppError> {
    FrameworkOptions {
        on_error: handle_framework_error,
        commands: get_bot_commands(),
        prefix_options: PrefixFrameworkOptions {
            prefix: Some(env.command_prefix.clone()),
            mention_as_prefix: true,
            ..Default::default()
        },
        ..Default::default()
    }
}
