use crate::ratings::model::{PlayerRating, Rating};
use crate::teams::RosterError;
use crate::teams::balance::Rated;
use itertools::Itertools;
use std::collections::HashMap;

/// Someone currently connected to the caller's voice channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VoiceMember {
    pub(crate) id: u64,
    pub(crate) display_name: String,
}

/// A voice member together with their stored rating
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Participant {
    pub(crate) id: u64,
    pub(crate) display_name: String,
    pub(crate) rating: Rating,
}

impl Rated for Participant {
    fn rating(&self) -> u32 {
        u32::from(self.rating.get())
    }
}

pub(crate) fn check_headcount(members: &[VoiceMember]) -> Result<(), RosterError> {
    if members.len() < 2 {
        return Err(RosterError::TooFew(members.len()));
    }
    Ok(())
}

/// Attaches ratings to every voice member.
///
/// Fails listing every unrated member by name, then on an odd headcount.
pub(crate) fn build_roster(
    members: Vec<VoiceMember>,
    ratings: &[PlayerRating],
) -> Result<Vec<Participant>, RosterError> {
    let by_id: HashMap<u64, Rating> = ratings.iter().map(|p| (p.id, p.rating)).collect();

    let unrated = members
        .iter()
        .filter(|member| !by_id.contains_key(&member.id))
        .map(|member| member.display_name.clone())
        .collect_vec();
    if !unrated.is_empty() {
        return Err(RosterError::Unrated(unrated));
    }

    if members.len() % 2 != 0 {
        return Err(RosterError::OddCount(members.len()));
    }

    Ok(members
        .into_iter()
        .filter_map(|member| {
            let rating = *by_id.get(&member.id)?;
            Some(Participant {
                id: member.id,
                display_name: member.display_name,
                rating,
            })
        })
        .collect_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: u64, name: &str) -> VoiceMember {
        VoiceMember {
            id,
            display_name: name.to_owned(),
        }
    }

    fn rated(id: u64, rating: i64) -> PlayerRating {
        PlayerRating {
            id,
            name: format!("cached{id}"),
            rating: Rating::try_from(rating).unwrap(),
        }
    }

    #[test]
    fn headcount_needs_two() {
        assert_eq!(check_headcount(&[]), Err(RosterError::TooFew(0)));
        assert_eq!(
            check_headcount(&[member(1, "ana")]),
            Err(RosterError::TooFew(1))
        );
        assert_eq!(check_headcount(&[member(1, "ana"), member(2, "bo")]), Ok(()));
    }

    #[test]
    fn unrated_members_are_listed_in_order() {
        let members = vec![member(1, "ana"), member(2, "bo"), member(3, "cy")];
        let err = build_roster(members, &[rated(2, 5)]).unwrap_err();
        assert_eq!(
            err,
            RosterError::Unrated(vec![String::from("ana"), String::from("cy")])
        );
        assert_eq!(
            err.to_string(),
            "The following players are not rated: ana and cy"
        );
    }

    #[test]
    fn unrated_check_comes_before_odd_check() {
        let members = vec![member(1, "ana"), member(2, "bo"), member(3, "cy")];
        assert!(matches!(
            build_roster(members, &[rated(1, 1)]),
            Err(RosterError::Unrated(_))
        ));
    }

    #[test]
    fn odd_roster_is_rejected() {
        let members = vec![member(1, "ana"), member(2, "bo"), member(3, "cy")];
        let ratings = [rated(1, 1), rated(2, 2), rated(3, 3)];
        assert_eq!(
            build_roster(members, &ratings),
            Err(RosterError::OddCount(3))
        );
    }

    #[test]
    fn participants_use_current_names() {
        let members = vec![member(2, "bo"), member(1, "ana")];
        let ratings = [rated(1, 4), rated(2, 9), rated(3, 0)];
        let roster = build_roster(members, &ratings).unwrap();

        assert_eq!(
            roster,
            vec![
                Participant {
                    id: 2,
                    display_name: String::from("bo"),
                    rating: Rating::try_from(9_i64).unwrap(),
                },
                Participant {
                    id: 1,
                    display_name: String::from("ana"),
                    rating: Rating::try_from(4_i64).unwrap(),
                },
            ]
        );
        assert_eq!(roster[0].rating(), 9);
    }
}
