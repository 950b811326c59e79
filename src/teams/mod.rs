pub(crate) mod balance;
pub(crate) mod generate;
pub(crate) mod roster;

use crate::util::text::comma_join;

/// Largest roster the exhaustive split search is allowed to run on
pub(crate) const MAX_ROSTER_SIZE: usize = 16;

/// Why a voice channel can't be split into teams
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum RosterError {
    #[error("Couldn't read this server's voice channels, try again in a moment.")]
    GuildUnavailable,
    #[error("You are not in a voice channel.")]
    NotInVoice,
    #[error("There are not enough people in the voice channel.")]
    TooFew(usize),
    #[error("The following players are not rated: {}", comma_join(.0.iter()))]
    Unrated(Vec<String>),
    #[error("The amount of players has to be even.")]
    OddCount(usize),
    #[error(
        "There are too many people in the voice channel ({0}), at most {} can be split into teams.",
        MAX_ROSTER_SIZE
    )]
    TooLarge(usize),
}
