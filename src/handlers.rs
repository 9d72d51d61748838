use crate::errors::AppError;
use crate::models::{
    ActivityRequest, CardRequest, CardResponse, CustomCard, MetricsResponse, ProfileRequest,
    ProfileResponse, StepsRequest, StreakRequest,
};
use crate::state::AppState;
use crate::sync::persist;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data, &today_string()))
}

pub async fn get_metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let data = state.data.lock().await;
    Json(MetricsResponse::project(&data.metrics))
}

pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    let data = state.data.lock().await;
    Json(ProfileResponse::project(&data.profile))
}

pub async fn save_streak(
    State(state): State<AppState>,
    Json(payload): Json<StreakRequest>,
) -> Result<Json<MetricsResponse>, AppError> {
    if payload.streak > 30 {
        return Err(AppError::bad_request("streak must be between 0 and 30"));
    }

    let mut data = state.data.lock().await;
    data.metrics.streak = payload.streak;
    persist(state.store.as_ref(), &data).await;
    Ok(Json(MetricsResponse::project(&data.metrics)))
}

pub async fn save_steps(
    State(state): State<AppState>,
    Json(payload): Json<StepsRequest>,
) -> Result<Json<MetricsResponse>, AppError> {
    if payload.percentile > 100 {
        return Err(AppError::bad_request("percentile must be between 0 and 100"));
    }

    let mut data = state.data.lock().await;
    data.metrics.steps = payload.steps;
    data.metrics.percentile = payload.percentile;
    persist(state.store.as_ref(), &data).await;
    Ok(Json(MetricsResponse::project(&data.metrics)))
}

pub async fn save_activity(
    State(state): State<AppState>,
    Json(payload): Json<ActivityRequest>,
) -> Result<Json<MetricsResponse>, AppError> {
    let activity: [u64; 7] = payload
        .activity
        .try_into()
        .map_err(|_| AppError::bad_request("activity must have exactly 7 values, Monday first"))?;

    let mut data = state.data.lock().await;
    data.metrics.activity = activity;
    persist(state.store.as_ref(), &data).await;
    Ok(Json(MetricsResponse::project(&data.metrics)))
}

pub async fn save_profile(
    State(state): State<AppState>,
    Json(payload): Json<ProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let name = payload.name.trim();
    let education = payload.education.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }
    if payload.age == 0 {
        return Err(AppError::bad_request("age must be greater than zero"));
    }
    if education.is_empty() {
        return Err(AppError::bad_request("education must not be empty"));
    }

    let mut data = state.data.lock().await;
    data.profile.name = name.to_string();
    data.profile.age = payload.age;
    data.profile.education = education.to_string();
    persist(state.store.as_ref(), &data).await;
    Ok(Json(ProfileResponse::project(&data.profile)))
}

/// Custom cards live only for the current session; they are appended to
/// state but never persisted.
pub async fn add_card(
    State(state): State<AppState>,
    Json(payload): Json<CardRequest>,
) -> Result<Json<CardResponse>, AppError> {
    let name = payload.name.trim();
    let value = payload.value.trim();
    if name.is_empty() || value.is_empty() {
        return Err(AppError::bad_request("card name and value must not be empty"));
    }

    let card = CustomCard {
        name: name.to_string(),
        value: value.to_string(),
        unit: payload.unit.trim().to_string(),
        icon: payload.icon,
    };
    let response = CardResponse {
        name: card.name.clone(),
        value: card.value.clone(),
        unit: card.unit.clone(),
        glyph: card.icon.glyph(),
    };

    let mut data = state.data.lock().await;
    data.cards.push(card);
    Ok(Json(response))
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
