use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};
use serde::{Deserialize, Serialize};

use crate::db::AppState;
use crate::handlers::{require_valid, AppError};
use crate::models::SubscriptionDto;
use crate::services::{subscription, validation};
use crate::types::Subscription;

const SUBSCRIPTION_COLLECTION: &str = "subscriptionData";

pub async fn list_subscribers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Subscription>>, AppError> {
    let collection: Collection<Subscription> = state.collection(SUBSCRIPTION_COLLECTION);

    let subscribers = collection
        .find(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .try_collect()
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    Ok(Json(subscribers))
}

pub async fn get_subscriber(
    State(state): State<AppState>,
    Path(ue_id): Path<String>,
) -> Result<Json<Subscription>, AppError> {
    let record = find_subscriber(&state, &ue_id).await?;

    Ok(Json(record))
}

pub async fn create_subscriber(
    State(state): State<AppState>,
    Json(payload): Json<Subscription>,
) -> Result<Json<Subscription>, AppError> {
    require_valid(validation::validate_subscription(&payload))?;

    let collection: Collection<Subscription> = state.collection(SUBSCRIPTION_COLLECTION);

    let existing = collection
        .find_one(doc! { "ueId": &payload.ue_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    if existing.is_some() {
        return Err(AppError::Conflict(format!(
            "Subscriber {} already exists",
            payload.ue_id
        )));
    }

    collection
        .insert_one(&payload)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    tracing::info!("Created subscriber {} in PLMN {}", payload.ue_id, payload.plmn_id);

    Ok(Json(payload))
}

pub async fn update_subscriber(
    State(state): State<AppState>,
    Path(ue_id): Path<String>,
    Json(payload): Json<Subscription>,
) -> Result<Json<Subscription>, AppError> {
    require_valid(validation::validate_subscription(&payload))?;

    let collection: Collection<Subscription> = state.collection(SUBSCRIPTION_COLLECTION);

    let result = collection
        .replace_one(doc! { "ueId": &ue_id }, &payload)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound(format!(
            "Subscriber {} not found",
            ue_id
        )));
    }

    tracing::info!("Updated subscriber {}", ue_id);

    Ok(Json(payload))
}

pub async fn delete_subscriber(
    State(state): State<AppState>,
    Path(ue_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let collection: Collection<Subscription> = state.collection(SUBSCRIPTION_COLLECTION);

    let result = collection
        .delete_one(doc! { "ueId": &ue_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound(format!(
            "Subscriber {} not found",
            ue_id
        )));
    }

    tracing::info!("Deleted subscriber {}", ue_id);

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_subscriber_dto(
    State(state): State<AppState>,
    Path(ue_id): Path<String>,
) -> Result<Json<SubscriptionDto>, AppError> {
    let record = find_subscriber(&state, &ue_id).await?;

    Ok(Json(subscription::map_from_subscription(&record)))
}

pub async fn create_subscriber_from_dto(
    State(state): State<AppState>,
    Json(payload): Json<SubscriptionDto>,
) -> Result<Json<Subscription>, AppError> {
    let record = subscription::map_from_dto(&payload);

    create_subscriber(State(state), Json(record)).await
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySupiRequest {
    pub ue_id: String,
    #[serde(rename = "plmnID")]
    pub plmn_id: String,
}

#[derive(Debug, Serialize)]
pub struct VerifySupiResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn verify_supi(Json(payload): Json<VerifySupiRequest>) -> Json<VerifySupiResponse> {
    let outcome = validation::supi_prefix_matches_plmn(&payload.ue_id, &payload.plmn_id);

    Json(VerifySupiResponse {
        valid: outcome.is_valid,
        error: outcome.error,
    })
}

async fn find_subscriber(state: &AppState, ue_id: &str) -> Result<Subscription, AppError> {
    let collection: Collection<Subscription> = state.collection(SUBSCRIPTION_COLLECTION);

    collection
        .find_one(doc! { "ueId": ue_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("Subscriber {} not found", ue_id)))
}
