use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    CommuteError,
    models::{ModeConfig, TransportMode, WeatherCondition},
    recommendation::{Recommendation, RecommendationRequest, Recommender},
};

#[derive(Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

impl From<&CommuteError> for ApiError {
    fn from(err: &CommuteError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.user_message(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiLocations {
    pub sources: Vec<String>,
    pub destinations: Vec<String>,
    pub weather_conditions: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiMode {
    pub transport_mode: TransportMode,
    #[serde(flatten)]
    pub config: ModeConfig,
}

pub fn router(recommender: Arc<Recommender>) -> Router {
    Router::new()
        .route("/recommend", post(recommend))
        .route("/locations", get(get_locations))
        .route("/modes", get(get_modes))
        .with_state(recommender)
}

fn status_for(err: &CommuteError) -> StatusCode {
    match err {
        CommuteError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        CommuteError::UnknownCategory { .. } | CommuteError::NoFeasibleOption { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: &CommuteError) -> (StatusCode, Json<ApiError>) {
    (status_for(err), Json(ApiError::from(err)))
}

async fn recommend(
    State(recommender): State<Arc<Recommender>>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<Recommendation>, (StatusCode, Json<ApiError>)> {
    let Json(request) = payload.map_err(|rejection| {
        let err = CommuteError::invalid_input(rejection.body_text());
        tracing::debug!("Rejected request body: {}", err);
        error_response(&err)
    })?;

    recommender
        .recommend_request(&request)
        .map(Json)
        .map_err(|err| {
            tracing::debug!("Recommendation failed: {}", err);
            error_response(&err)
        })
}

async fn get_locations(State(recommender): State<Arc<Recommender>>) -> Json<ApiLocations> {
    let distances = recommender.distances();
    Json(ApiLocations {
        sources: distances.sources().into_iter().map(str::to_string).collect(),
        destinations: distances
            .destinations()
            .into_iter()
            .map(str::to_string)
            .collect(),
        weather_conditions: WeatherCondition::KNOWN
            .iter()
            .map(|w| w.as_str().to_string())
            .collect(),
    })
}

async fn get_modes() -> Json<Vec<ApiMode>> {
    Json(
        TransportMode::ALL
            .iter()
            .map(|&mode| ApiMode {
                transport_mode: mode,
                config: mode.config(),
            })
            .collect(),
    )
}
