use crate::game::Game;
use crate::r#move::Move;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A game is stored as its move list, e.g. `"d3;c3;pass;c5"`, and is rebuilt
/// by replaying those moves from the starting position.
impl Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let moves: Vec<String> = self.move_history().iter().map(|m| m.to_string()).collect();
        serializer.serialize_str(&moves.join(";"))
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut game = Game::new();

        if s.is_empty() {
            return Ok(game);
        }

        for (ply, move_str) in s.split(';').enumerate() {
            let mv: Move = move_str.trim().parse().map_err(serde::de::Error::custom)?;

            if !game.make_move(&mv) {
                return Err(serde::de::Error::custom(format!(
                    "illegal move {} at ply {}",
                    mv,
                    ply + 1
                )));
            }
        }

        Ok(game)
    }
}

impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    fn play(moves: &[&str]) -> Game {
        let mut game = Game::new();
        for m in moves {
            let mv: Move = m.parse().expect("valid move");
            assert!(game.make_move(&mv), "{}", m);
        }
        game
    }

    #[test]
    fn test_game_serde_empty() {
        let game = Game::new();

        let json = serde_json::to_string(&game).expect("serialize");
        assert_eq!(json, r#""""#);

        let game2: Game = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(game2, game);
    }

    #[test]
    fn test_game_serde_with_moves_and_pass() {
        let game = play(&["d3", "c3", "-", "c5"]);

        let json = serde_json::to_string(&game).expect("serialize");
        assert_eq!(json, r#""d3;c3;pass;c5""#);

        let game2: Game = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(game2.board(), game.board());
        assert_eq!(game2.turn(), Player::Black);
        assert!(game2.move_history()[2].is_pass());
    }

    #[test]
    fn test_game_rejects_illegal_replay() {
        let result: Result<Game, _> = serde_json::from_str(r#""d3;a1""#);
        let err = result.expect_err("a1 is not legal for White");
        assert!(err.to_string().contains("ply 2"), "{}", err);
    }

    #[test]
    fn test_game_rejects_garbage() {
        assert!(serde_json::from_str::<Game>(r#""d3;zz""#).is_err());
    }

    #[test]
    fn test_move_serde() {
        let json = serde_json::to_string(&Move::place(3, 4)).expect("serialize");
        assert_eq!(json, r#""d5""#);
        assert_eq!(
            serde_json::from_str::<Move>(&json).expect("deserialize"),
            Move::place(3, 4)
        );

        let json = serde_json::to_string(&Move::pass()).expect("serialize");
        assert_eq!(json, r#""pass""#);
        assert!(serde_json::from_str::<Move>(&json)
            .expect("deserialize")
            .is_pass());
    }
}
