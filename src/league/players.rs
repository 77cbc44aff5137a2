//! Player directory: player id → name and position category.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    cli::types::{PlayerId, Position},
    fpl::{source::DataSource, types::PlayerElement},
    FplError, Result,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerInfo {
    pub first_name: String,
    pub second_name: String,
    pub position: Position,
}

/// Every player in the game, keyed by player id. Serializes as a flat JSON
/// object `{ "<id>": { first_name, second_name, position } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlayerDirectory {
    players: BTreeMap<PlayerId, PlayerInfo>,
}

impl PlayerDirectory {
    /// Fetch `bootstrap-static/` and index its elements.
    pub async fn build(source: &dyn DataSource) -> Result<Self> {
        let elements = source.get_bootstrap().await?;
        Self::from_elements(&elements)
    }

    /// Fails on the first element whose `element_type` is not 1-4.
    pub fn from_elements(elements: &[PlayerElement]) -> Result<Self> {
        let mut players = BTreeMap::new();
        for el in elements {
            players.insert(
                el.id,
                PlayerInfo {
                    first_name: el.first_name.clone(),
                    second_name: el.second_name.clone(),
                    position: Position::try_from(el.element_type)?,
                },
            );
        }
        Ok(Self { players })
    }

    pub fn get(&self, player: PlayerId) -> Option<&PlayerInfo> {
        self.players.get(&player)
    }

    pub fn position_of(&self, player: PlayerId) -> Result<Position> {
        self.get(player)
            .map(|p| p.position)
            .ok_or(FplError::UnknownPlayer { player })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSource;

    #[test]
    fn test_two_players_map_to_positions() {
        let directory = PlayerDirectory::from_elements(&[
            FakeSource::element(1, "Alisson", "Becker", 1),
            FakeSource::element(2, "Bukayo", "Saka", 3),
        ])
        .unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(
            directory.get(PlayerId::new(1)),
            Some(&PlayerInfo {
                first_name: "Alisson".to_string(),
                second_name: "Becker".to_string(),
                position: Position::Goalkeeper,
            })
        );
        assert_eq!(
            directory.position_of(PlayerId::new(2)).unwrap(),
            Position::Midfielder
        );
    }

    #[test]
    fn test_unknown_element_type_fails() {
        let result = PlayerDirectory::from_elements(&[
            FakeSource::element(1, "A", "B", 2),
            FakeSource::element(2, "C", "D", 5),
        ]);

        assert!(matches!(
            result,
            Err(FplError::UnknownPositionCode { code: 5 })
        ));
    }

    #[test]
    fn test_position_of_unknown_player() {
        let directory = PlayerDirectory::default();
        assert!(directory.is_empty());
        assert!(matches!(
            directory.position_of(PlayerId::new(9)),
            Err(FplError::UnknownPlayer { .. })
        ));
    }

    #[test]
    fn test_directory_serializes_as_id_keyed_object() {
        let directory =
            PlayerDirectory::from_elements(&[FakeSource::element(4, "Erling", "Haaland", 4)])
                .unwrap();

        let json = serde_json::to_value(&directory).unwrap();
        assert_eq!(json["4"]["second_name"], "Haaland");
        assert_eq!(json["4"]["position"], "forward");
    }

    #[tokio::test]
    async fn test_build_reads_bootstrap_once() {
        let source = FakeSource::new().with_elements(vec![
            FakeSource::element(1, "Alisson", "Becker", 1),
            FakeSource::element(2, "Bukayo", "Saka", 3),
        ]);

        let directory = PlayerDirectory::build(&source).await.unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(source.calls("bootstrap"), 1);
    }
}
