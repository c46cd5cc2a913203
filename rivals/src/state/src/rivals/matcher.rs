use std::cmp::Ordering;
use std::collections::HashMap;

use super::models::{Battle, RivalryFriend, Standing};

/// Compares the caller's standings with a friend's for one game.
///
/// Walks the caller's standings in order. Leaderboards the friend never placed
/// on and ties are skipped; every other leaderboard becomes a win when the
/// caller's rank is numerically lower, otherwise a loss. Returns `None` when
/// nothing was comparable.
pub fn build_rivalry_friend(
    username: &str,
    my_standings: &[Standing],
    friend_standings: &[Standing],
) -> Option<RivalryFriend> {
    let friend_by_leaderboard: HashMap<u32, &Standing> = friend_standings
        .iter()
        .map(|standing| (standing.leaderboard_id, standing))
        .collect();

    let mut wins = Vec::new();
    let mut losses = Vec::new();

    for mine in my_standings {
        let Some(theirs) = friend_by_leaderboard.get(&mine.leaderboard_id) else {
            continue;
        };

        let battle = || Battle {
            leaderboard_id: mine.leaderboard_id,
            leaderboard_title: mine.leaderboard_title.clone(),
            my_rank: mine.rank,
            friend_rank: theirs.rank,
            my_score: mine.formatted_score.clone(),
            friend_score: theirs.formatted_score.clone(),
        };

        match mine.rank.cmp(&theirs.rank) {
            Ordering::Equal => continue,
            Ordering::Less => wins.push(battle()),
            Ordering::Greater => losses.push(battle()),
        }
    }

    if wins.is_empty() && losses.is_empty() {
        return None;
    }

    Some(RivalryFriend {
        username: username.to_string(),
        wins,
        losses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(id: u32, rank: u32) -> Standing {
        Standing {
            leaderboard_id: id,
            leaderboard_title: format!("L{id}"),
            rank,
            formatted_score: format!("{}", rank * 100),
        }
    }

    #[test]
    fn ties_are_excluded_and_higher_rank_is_a_loss() {
        let mine = vec![standing(1, 5), standing(2, 2)];
        let theirs = vec![standing(1, 3), standing(2, 2)];

        let rivalry = build_rivalry_friend("friend", &mine, &theirs).unwrap();

        assert!(rivalry.wins.is_empty());
        assert_eq!(
            rivalry.losses,
            vec![Battle {
                leaderboard_id: 1,
                leaderboard_title: "L1".into(),
                my_rank: 5,
                friend_rank: 3,
                my_score: "500".into(),
                friend_score: "300".into(),
            }]
        );
    }

    #[test]
    fn wins_and_losses_partition_comparable_leaderboards() {
        let mine = vec![
            standing(1, 1),
            standing(2, 9),
            standing(3, 4),
            standing(4, 7),
            standing(5, 2),
        ];
        // 4 is a tie, 5 is missing on the friend's side, 6 is missing on ours
        let theirs = vec![
            standing(6, 1),
            standing(3, 8),
            standing(2, 3),
            standing(1, 2),
            standing(4, 7),
        ];

        let rivalry = build_rivalry_friend("friend", &mine, &theirs).unwrap();

        let win_ids: Vec<u32> = rivalry.wins.iter().map(|b| b.leaderboard_id).collect();
        let loss_ids: Vec<u32> = rivalry.losses.iter().map(|b| b.leaderboard_id).collect();
        assert_eq!(win_ids, vec![1, 3]);
        assert_eq!(loss_ids, vec![2]);

        assert!(rivalry.wins.iter().all(Battle::is_win));
        assert!(rivalry.losses.iter().all(|b| !b.is_win()));
        assert!(rivalry
            .wins
            .iter()
            .chain(rivalry.losses.iter())
            .all(|b| b.my_rank != b.friend_rank));
    }

    #[test]
    fn nothing_comparable_yields_none() {
        let mine = vec![standing(1, 4), standing(2, 6)];

        assert_eq!(build_rivalry_friend("friend", &mine, &[]), None);
        assert_eq!(
            build_rivalry_friend("friend", &mine, &[standing(1, 4), standing(3, 1)]),
            None
        );
        assert_eq!(build_rivalry_friend("friend", &[], &[standing(1, 1)]), None);
    }

    #[test]
    fn keeps_caller_order_and_username() {
        let mine = vec![standing(7, 10), standing(3, 1)];
        let theirs = vec![standing(3, 2), standing(7, 1)];

        let rivalry = build_rivalry_friend("Jamiras", &mine, &theirs).unwrap();

        assert_eq!(rivalry.username, "Jamiras");
        assert_eq!(rivalry.losses[0].leaderboard_id, 7);
        assert_eq!(rivalry.wins[0].leaderboard_id, 3);
        assert_eq!(rivalry.battle_count(), 2);
    }
}
