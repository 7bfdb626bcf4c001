use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::db::AppState;
use crate::handlers::{require_valid, AppError};
use crate::models::ProfileDto;
use crate::services::{profile, validation};
use crate::types::Profile;

const PROFILE_COLLECTION: &str = "profileData";

pub async fn list_profiles(State(state): State<AppState>) -> Result<Json<Vec<Profile>>, AppError> {
    let collection: Collection<Profile> = state.collection(PROFILE_COLLECTION);

    let profiles = collection
        .find(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .try_collect()
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    Ok(Json(profiles))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(profile_name): Path<String>,
) -> Result<Json<Profile>, AppError> {
    let record = find_profile(&state, &profile_name).await?;

    Ok(Json(record))
}

pub async fn create_profile(
    State(state): State<AppState>,
    Json(payload): Json<Profile>,
) -> Result<Json<Profile>, AppError> {
    require_valid(validation::validate_profile(&payload))?;

    let collection: Collection<Profile> = state.collection(PROFILE_COLLECTION);

    let existing = collection
        .find_one(doc! { "profileName": &payload.profile_name })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    if existing.is_some() {
        return Err(AppError::Conflict(format!(
            "Profile {} already exists",
            payload.profile_name
        )));
    }

    collection
        .insert_one(&payload)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    tracing::info!("Created profile {}", payload.profile_name);

    Ok(Json(payload))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(profile_name): Path<String>,
    Json(payload): Json<Profile>,
) -> Result<Json<Profile>, AppError> {
    require_valid(validation::validate_profile(&payload))?;

    let collection: Collection<Profile> = state.collection(PROFILE_COLLECTION);

    let result = collection
        .replace_one(doc! { "profileName": &profile_name }, &payload)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound(format!(
            "Profile {} not found",
            profile_name
        )));
    }

    tracing::info!("Updated profile {}", profile_name);

    Ok(Json(payload))
}

pub async fn delete_profile(
    State(state): State<AppState>,
    Path(profile_name): Path<String>,
) -> Result<StatusCode, AppError> {
    let collection: Collection<Profile> = state.collection(PROFILE_COLLECTION);

    let result = collection
        .delete_one(doc! { "profileName": &profile_name })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound(format!(
            "Profile {} not found",
            profile_name
        )));
    }

    tracing::info!("Deleted profile {}", profile_name);

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_profile_dto(
    State(state): State<AppState>,
    Path(profile_name): Path<String>,
) -> Result<Json<ProfileDto>, AppError> {
    let record = find_profile(&state, &profile_name).await?;

    Ok(Json(profile::map_from_profile(&record)))
}

pub async fn create_profile_from_dto(
    State(state): State<AppState>,
    Json(payload): Json<ProfileDto>,
) -> Result<Json<Profile>, AppError> {
    let record = profile::map_from_dto(&payload);

    create_profile(State(state), Json(record)).await
}

async fn find_profile(state: &AppState, profile_name: &str) -> Result<Profile, AppError> {
    let collection: Collection<Profile> = state.collection(PROFILE_COLLECTION);

    collection
        .find_one(doc! { "profileName": profile_name })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", profile_name)))
}
