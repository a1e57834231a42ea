pub mod validation;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{post, put},
};
use mongodb::bson::{Document, doc, oid::ObjectId};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::AppState;
use crate::db_mongo::{models::CrewRecord, queries};

/// Inbound crew member payload. Fields deserialize as optional so an absent
/// field fails validation like an empty one instead of rejecting the request
/// before validation runs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrewMember {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default, rename = "crewID")]
    pub crew_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum CrewError {
    #[error("crew member failed validation")]
    Validation(Vec<String>),
    #[error("invalid object id")]
    MalformedId,
    #[error("_id was not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] anyhow::Error),
}

impl IntoResponse for CrewError {
    fn into_response(self) -> Response {
        match self {
            CrewError::Validation(messages) => {
                (StatusCode::BAD_REQUEST, Json(messages)).into_response()
            }
            CrewError::MalformedId => {
                (StatusCode::BAD_REQUEST, Json(json!(["Invalid object id!"]))).into_response()
            }
            CrewError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!(["_id was not found!"]))).into_response()
            }
            CrewError::Database(err) => {
                tracing::error!("Storage operation failed: {:#}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(add).get(retrieve))
        .route("/{id}", put(update).delete(remove))
}

fn validate(crew_member: &CrewMember) -> Result<(), CrewError> {
    let violations = validation::violations(crew_member);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(CrewError::Validation(violations))
    }
}

fn to_record(crew_member: CrewMember) -> CrewRecord {
    CrewRecord::new(
        crew_member.name.unwrap_or_default(),
        crew_member.rank.unwrap_or_default(),
        crew_member.crew_id.unwrap_or_default(),
    )
}

pub async fn add(
    State(state): State<AppState>,
    Json(crew_member): Json<CrewMember>,
) -> Result<Json<CrewRecord>, CrewError> {
    validate(&crew_member)?;

    let record = queries::insert_crew_member(&state.db, to_record(crew_member)).await?;

    Ok(Json(record))
}

/// The one operation with a catch-and-degrade path: any storage failure is
/// logged and turned into a generic 500 body. Mutating operations surface
/// storage failures as bare 500s instead.
pub async fn retrieve(State(state): State<AppState>) -> Response {
    match queries::list_crew_members(&state.db).await {
        Ok(records) => Json(records).into_response(),
        Err(err) => {
            tracing::error!("Failed to list crew members: {:#}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!(["Unable to list crew members!"])),
            )
                .into_response()
        }
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(crew_member): Json<CrewMember>,
) -> Result<Json<CrewRecord>, CrewError> {
    validate(&crew_member)?;

    let oid = ObjectId::parse_str(&id).map_err(|_| CrewError::MalformedId)?;

    let mut record = to_record(crew_member);
    let matched = queries::replace_crew_member(&state.db, oid, &record).await?;
    if matched == 0 {
        return Err(CrewError::NotFound);
    }

    record.id = Some(oid);
    Ok(Json(record))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, CrewError> {
    let oid = ObjectId::parse_str(&id).map_err(|_| CrewError::MalformedId)?;

    let deleted = queries::delete_crew_member(&state.db, oid).await?;
    if deleted == 0 {
        return Err(CrewError::NotFound);
    }

    // Echo the delete criterion, id included.
    Ok(Json(doc! { "_id": oid }))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_lists_messages() {
        let response = CrewError::Validation(vec![
            "All crew members must have a name!".to_string(),
            "All crew members must have a rank!".to_string(),
        ])
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!([
                "All crew members must have a name!",
                "All crew members must have a rank!"
            ])
        );
    }

    #[tokio::test]
    async fn test_malformed_id_error_response() {
        let response = CrewError::MalformedId.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!(["Invalid object id!"]));
    }

    #[tokio::test]
    async fn test_not_found_error_response() {
        let response = CrewError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!(["_id was not found!"]));
    }

    #[tokio::test]
    async fn test_database_error_is_a_bare_500() {
        let response = CrewError::Database(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_object_id_parsing() {
        assert!(ObjectId::parse_str("507f1f77bcf86cd799439011").is_ok());
        assert!(ObjectId::parse_str("not-an-id").is_err());
        assert!(ObjectId::parse_str("").is_err());
    }

    #[test]
    fn test_to_record_carries_fields() {
        let record = to_record(CrewMember {
            name: Some("Alice".to_string()),
            rank: Some("Captain".to_string()),
            crew_id: Some("A1".to_string()),
        });

        assert_eq!(record.name, "Alice");
        assert_eq!(record.rank, "Captain");
        assert_eq!(record.crew_id, "A1");
        assert!(record.id.is_none());
    }

    #[test]
    fn test_crew_member_deserializes_with_missing_fields() {
        let crew_member: CrewMember = serde_json::from_str("{}").unwrap();
        assert!(crew_member.name.is_none());
        assert!(crew_member.rank.is_none());
        assert!(crew_member.crew_id.is_none());

        let crew_member: CrewMember =
            serde_json::from_str(r#"{"name":"Alice","rank":"Captain","crewID":"A1"}"#).unwrap();
        assert_eq!(crew_member.crew_id.as_deref(), Some("A1"));
    }
}
