use crate::ratings::store::StoreError;
use crate::teams::RosterError;
use crate::teams::balance::{Team, TeamSplit, balance};
use crate::teams::roster::{Participant, VoiceMember, build_roster, check_headcount};
use crate::util::{ContextExtras, INFO_COLOR, base_embed, error_embed};
use crate::{AppError, Context};
use itertools::Itertools;
use pluralizer::pluralize;
use serenity::all::{CreateEmbed, CreateEmbedFooter};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
enum GenerateError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error("{}", .0.user_message())]
    Store(#[from] StoreError),
}

/// Members of the voice channel the author is connected to, sorted by name.
fn voice_channel_members(ctx: Context<'_>) -> Result<Vec<VoiceMember>, RosterError> {
    let guild = ctx.guild().ok_or(RosterError::GuildUnavailable)?;
    let channel_id = guild
        .voice_states
        .get(&ctx.author().id)
        .and_then(|state| state.channel_id)
        .ok_or(RosterError::NotInVoice)?;

    Ok(guild
        .voice_states
        .values()
        .filter(|state| state.channel_id == Some(channel_id))
        .map(|state| VoiceMember {
            id: state.user_id.get(),
            display_name: guild
                .members
                .get(&state.user_id)
                .or(state.member.as_ref())
                .map(|member| member.display_name().to_owned())
                .unwrap_or_else(|| state.user_id.to_string()),
        })
        .sorted_by_key(|member| member.display_name.to_lowercase())
        .collect_vec())
}

async fn handle_generate_teams(ctx: Context<'_>) -> Result<TeamSplit<Participant>, GenerateError> {
    let members = voice_channel_members(ctx)?;
    check_headcount(&members)?;

    let ratings = ctx.data().ratings.load_all().await?;
    let roster = build_roster(members, &ratings)?;

    let split = balance(&roster, &mut rand::rng())?;
    Ok(split)
}

fn team_field(index: usize, team: &Team<Participant>) -> (String, String, bool) {
    (
        format!("Team {} ({})", index + 1, team.rating_sum),
        team.members
            .iter()
            .map(|member| format!("{}: {}", member.display_name, member.rating))
            .join("\n"),
        true,
    )
}

fn summary_footer<T>(split: &TeamSplit<T>) -> String {
    format!(
        "Found {} possible team {} of which {} the optimal elo distribution.",
        split.examined,
        pluralize("combination", split.examined as isize, false),
        if split.optimal == 1 {
            String::from("1 has")
        } else {
            format!("{} have", split.optimal)
        },
    )
}

fn teams_embed(split: &TeamSplit<Participant>) -> CreateEmbed {
    base_embed("Team Generation", INFO_COLOR)
        .fields(
            split
                .teams
                .iter()
                .enumerate()
                .map(|(i, team)| team_field(i, team)),
        )
        .footer(CreateEmbedFooter::new(summary_footer(split)))
}

/// Create balanced teams out of everyone in your voice channel
#[poise::command(prefix_command, slash_command, guild_only)]
pub(crate) async fn generate_teams(ctx: Context<'_>) -> Result<(), AppError> {
    let embed = match handle_generate_teams(ctx).await {
        Ok(split) => {
            info!(
                players = split.teams.iter().map(|t| t.members.len()).sum::<usize>(),
                difference = split.difference,
                examined = split.examined,
                optimal = split.optimal,
                "generated teams"
            );
            teams_embed(&split)
        }
        Err(err) => {
            if let GenerateError::Store(store_err) = &err {
                warn!("team generation failed: {store_err}");
            }
            error_embed("Team Generation Error", err.to_string())
        }
    };

    ctx.reply_embed(embed).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratings::model::Rating;

    fn participant(name: &str, rating: i64) -> Participant {
        Participant {
            id: 0,
            display_name: name.to_owned(),
            rating: Rating::try_from(rating).unwrap(),
        }
    }

    #[test]
    fn field_lists_members_with_ratings() {
        let team = Team {
            members: vec![participant("ana", 10), participant("bo", 1)],
            rating_sum: 11,
        };
        assert_eq!(
            team_field(1, &team),
            (String::from("Team 2 (11)"), String::from("ana: 10\nbo: 1"), true)
        );
    }

    #[test]
    fn footer_counts_combinations() {
        let split = TeamSplit {
            teams: [
                Team {
                    members: vec![1u32, 2],
                    rating_sum: 3,
                },
                Team {
                    members: vec![3u32, 4],
                    rating_sum: 7,
                },
            ],
            difference: 4,
            examined: 3,
            optimal: 1,
        };
        assert_eq!(
            summary_footer(&split),
            "Found 3 possible team combinations of which 1 has the optimal elo distribution."
        );

        let split = TeamSplit { optimal: 3, ..split };
        assert_eq!(
            summary_footer(&split),
            "Found 3 possible team combinations of which 3 have the optimal elo distribution."
        );
    }

    #[test]
    fn roster_errors_pass_through_unchanged() {
        let err = GenerateError::from(RosterError::NotInVoice);
        assert_eq!(err.to_string(), "You are not in a voice channel.");

        let err = GenerateError::from(StoreError::Missing {
            path: "data/ratings.json".into(),
        });
        assert_eq!(
            err.to_string(),
            "Error loading ratings: ratings file data/ratings.json does not exist"
        );
    }
}
