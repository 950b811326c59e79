//! Exhaustive search for the fairest split of a roster into two equal teams.
//!
//! Every group of half the roster is a candidate team. Every two candidates are paired up and
//! pairs that share a player are thrown out, which leaves each team together with its
//! complement exactly once. Among those, the pairs with the smallest difference in total rating
//! are optimal and one of them is picked at random.

use crate::teams::{MAX_ROSTER_SIZE, RosterError};
use itertools::Itertools;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::cmp::Ordering;

/// Anything with a rating that can be summed into a team total.
pub(crate) trait Rated {
    fn rating(&self) -> u32;
}

/// A set of roster positions, bit `i` meaning the `i`th participant.
type Group = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Team<T> {
    pub(crate) members: Vec<T>,
    pub(crate) rating_sum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TeamSplit<T> {
    pub(crate) teams: [Team<T>; 2],
    pub(crate) difference: u32,
    /// Number of valid splits that were scored
    pub(crate) examined: usize,
    /// Number of splits tied for the smallest difference
    pub(crate) optimal: usize,
}

pub(crate) fn check_roster_size(n: usize) -> Result<(), RosterError> {
    if n < 2 {
        Err(RosterError::TooFew(n))
    } else if n % 2 != 0 {
        Err(RosterError::OddCount(n))
    } else if n > MAX_ROSTER_SIZE {
        Err(RosterError::TooLarge(n))
    } else {
        Ok(())
    }
}

/// All groups holding exactly half of `n` participants.
fn candidate_groups(n: usize) -> Vec<Group> {
    (0..n)
        .combinations(n / 2)
        .map(|positions| positions.into_iter().fold(0, |group: Group, i| group | (1 << i)))
        .collect_vec()
}

/// Every unordered pair of candidate groups that don't share a participant.
fn disjoint_pairs(groups: &[Group]) -> impl Iterator<Item = (Group, Group)> + '_ {
    groups
        .iter()
        .copied()
        .tuple_combinations()
        .filter(|(a, b)| a & b == 0)
}

fn contains(group: Group, position: usize) -> bool {
    group & (1 << position) != 0
}

fn group_sum(ratings: &[u32], group: Group) -> u32 {
    ratings
        .iter()
        .enumerate()
        .filter(|&(i, _)| contains(group, i))
        .map(|(_, rating)| rating)
        .sum()
}

fn team_of<T: Clone>(participants: &[T], ratings: &[u32], group: Group) -> Team<T> {
    Team {
        members: participants
            .iter()
            .enumerate()
            .filter(|&(i, _)| contains(group, i))
            .map(|(_, member)| member.clone())
            .collect_vec(),
        rating_sum: group_sum(ratings, group),
    }
}

/// Splits `participants` into the two most evenly rated halves.
///
/// Re-running on the same roster can give a different, equally fair, split when several are tied.
pub(crate) fn balance<T, R>(participants: &[T], rng: &mut R) -> Result<TeamSplit<T>, RosterError>
where
    T: Rated + Clone,
    R: Rng + ?Sized,
{
    check_roster_size(participants.len())?;

    let ratings = participants.iter().map(Rated::rating).collect_vec();
    let groups = candidate_groups(participants.len());

    let mut examined = 0usize;
    let mut best = u32::MAX;
    let mut optimal: Vec<(Group, Group)> = Vec::new();
    for (a, b) in disjoint_pairs(&groups) {
        examined += 1;
        let difference = group_sum(&ratings, a).abs_diff(group_sum(&ratings, b));
        match difference.cmp(&best) {
            Ordering::Less => {
                best = difference;
                optimal.clear();
                optimal.push((a, b));
            }
            Ordering::Equal => optimal.push((a, b)),
            Ordering::Greater => {}
        }
    }

    let &(a, b) = optimal
        .choose(rng)
        .expect("a roster of at least two always has a split");

    Ok(TeamSplit {
        teams: [
            team_of(participants, &ratings, a),
            team_of(participants, &ratings, b),
        ],
        difference: best,
        examined,
        optimal: optimal.len(),
    })
}
