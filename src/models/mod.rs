use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A player document.
///
/// Only `id` is known to the service; every other field is carried through
/// untouched, so whatever the client stores is what it reads back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Row from the `players` table
#[derive(Debug, sqlx::FromRow)]
pub struct PlayerRow {
    pub document: String,
}

impl PlayerRow {
    /// Convert database row to API response format
    pub fn to_player(&self) -> Result<Player, serde_json::Error> {
        serde_json::from_str(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_unknown_fields() {
        let body = json!({"id": "p1", "name": "Ada", "rating": 1500, "tags": ["a"]});
        let player: Player = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(player.id, "p1");
        assert_eq!(player.fields.len(), 3);
        assert_eq!(serde_json::to_value(&player).unwrap(), body);
    }

    #[test]
    fn id_is_required() {
        assert!(serde_json::from_value::<Player>(json!({"name": "Ada"})).is_err());
        assert!(serde_json::from_value::<Player>(json!({"id": 7})).is_err());
        assert!(serde_json::from_value::<Player>(json!(["p1"])).is_err());
    }

    #[test]
    fn row_with_corrupt_document_fails() {
        let row = PlayerRow {
            document: "{not json".to_string(),
        };
        assert!(row.to_player().is_err());
    }
}
