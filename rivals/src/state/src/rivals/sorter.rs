use std::cmp::Reverse;

use super::models::RivalryGame;

/// Most contested games first. Stable, so equal totals keep insertion order.
pub fn sort_rivalries(games: &mut [RivalryGame]) {
    games.sort_by_key(|game| Reverse(game.battle_count()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rivals::models::{Battle, RivalryFriend};

    fn battle(id: u32) -> Battle {
        Battle {
            leaderboard_id: id,
            leaderboard_title: String::new(),
            my_rank: 1,
            friend_rank: 2,
            my_score: String::new(),
            friend_score: String::new(),
        }
    }

    fn game(game_id: u32, battles_per_rival: &[usize]) -> RivalryGame {
        let rivals = battles_per_rival
            .iter()
            .enumerate()
            .map(|(i, &n)| RivalryFriend {
                username: format!("friend{i}"),
                wins: (0..n as u32).map(battle).collect(),
                losses: vec![],
            })
            .collect();

        RivalryGame {
            game_id,
            game_name: game_id.to_string(),
            image_icon: String::new(),
            rivals,
            total_leaderboards: 10,
        }
    }

    #[test]
    fn orders_by_total_battles_across_rivals() {
        let mut games = vec![game(1, &[1]), game(2, &[2, 3]), game(3, &[4])];
        sort_rivalries(&mut games);

        let ids: Vec<u32> = games.iter().map(|g| g.game_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn equal_totals_keep_insertion_order() {
        let mut games = vec![
            game(1, &[2]),
            game(2, &[5]),
            game(3, &[1, 1]),
            game(4, &[2]),
        ];
        sort_rivalries(&mut games);

        let ids: Vec<u32> = games.iter().map(|g| g.game_id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
        assert!(games
            .windows(2)
            .all(|w| w[0].battle_count() >= w[1].battle_count()));
    }
}
