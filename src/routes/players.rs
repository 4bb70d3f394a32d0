use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    response::Json,
};
use serde::Serialize;
use crate::db::PlayerDao;
use crate::error::ApiError;
use crate::models::Player;

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    result: &'static str,
}

impl ResultResponse {
    fn success() -> Json<Self> {
        Json(Self { result: "success" })
    }
}

// Extractor rejections and bad payloads are folded into ApiError so they
// get the same error shape as a database failure.
fn decode_player(body: Result<Bytes, BytesRejection>) -> Result<Player, ApiError> {
    let body = body?;
    Ok(serde_json::from_slice(&body)?)
}

// GET /players - List all players
pub async fn get_players(
    State(dao): State<PlayerDao>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = dao.find_all().await?;

    Ok(Json(players))
}

// POST /players - Store a new player
pub async fn create_player(
    State(dao): State<PlayerDao>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let player = decode_player(body)?;
    dao.insert(&player).await?;

    Ok(ResultResponse::success())
}

// PUT /players - Replace a player document
pub async fn update_player(
    State(dao): State<PlayerDao>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let player = decode_player(body)?;
    dao.update(&player).await?;

    Ok(ResultResponse::success())
}

// DELETE /players - Remove the player with the body's id
pub async fn delete_player(
    State(dao): State<PlayerDao>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let player = decode_player(body)?;
    dao.delete(&player).await?;

    Ok(ResultResponse::success())
}

// GET /players/:id - Get player by ID
pub async fn get_player_by_id(
    State(dao): State<PlayerDao>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(player_id) = path?;
    tracing::info!(id = %player_id, "looking up player");

    let player = dao.find_by_id(&player_id).await?;

    Ok(Json(player))
}
