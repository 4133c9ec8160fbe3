//! Recommendation pipeline
//!
//! Distance lookup and context inference feed the option generator, the
//! feasibility rules prune the candidates, the emissions model scores the
//! survivors and the selector ranks them. Each stage consumes the previous
//! stage's output, so a request runs strictly in sequence; separate requests
//! share nothing but the read-only table and model.

use crate::context::{infer_traffic, resolve_weather};
use crate::emissions::EmissionsPredictor;
use crate::feasibility::{Exclusion, partition_feasible};
use crate::geography::DistanceTable;
use crate::models::{Location, ScoredOption, TimeOfDay, TrafficLevel, WeatherCondition};
use crate::options::build_options;
use crate::selector::{Ranking, select};
use crate::{CommuteError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Raw request as it arrives from a caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub source: String,
    pub destination: String,
    /// Morning, Afternoon, Evening or Night; the current local time when absent
    #[serde(default)]
    pub time_of_day: Option<String>,
    /// Weather override; Sunny when absent or empty
    #[serde(default)]
    pub weather: Option<String>,
}

/// Outcome of one recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub source: Location,
    pub destination: Location,
    pub distance_km: f64,
    pub time_of_day: TimeOfDay,
    pub traffic_level: TrafficLevel,
    pub weather_condition: WeatherCondition,
    /// Lowest predicted emissions among feasible options
    pub best: ScoredOption,
    /// Every feasible option, ascending by predicted emissions
    pub ranked: Vec<ScoredOption>,
    /// Modes ruled out before scoring
    pub excluded: Vec<Exclusion>,
}

/// Runs the recommendation pipeline against a fixed table and model
#[derive(Clone)]
pub struct Recommender {
    distances: DistanceTable,
    predictor: Arc<dyn EmissionsPredictor>,
    strict_locations: bool,
}

impl Recommender {
    #[must_use]
    pub fn new(distances: DistanceTable, predictor: Arc<dyn EmissionsPredictor>) -> Self {
        Self {
            distances,
            predictor,
            strict_locations: false,
        }
    }

    /// Reject locations that appear neither in the table nor in the offered
    /// lists instead of falling back to the default distance
    #[must_use]
    pub fn with_strict_locations(mut self, strict: bool) -> Self {
        self.strict_locations = strict;
        self
    }

    #[must_use]
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Validate a raw request and run the pipeline on it
    pub fn recommend_request(&self, request: &RecommendationRequest) -> Result<Recommendation> {
        let source = Location::new(request.source.as_str());
        let destination = Location::new(request.destination.as_str());
        self.validate_location("source", &source)?;
        self.validate_location("destination", &destination)?;

        let time_of_day = match request.time_of_day.as_deref() {
            Some(value) => value.parse()?,
            None => TimeOfDay::now(),
        };

        self.recommend(
            &source,
            &destination,
            time_of_day,
            request.weather.as_deref(),
        )
    }

    fn validate_location(&self, role: &str, location: &Location) -> Result<()> {
        if location.is_blank() {
            return Err(CommuteError::invalid_input(format!(
                "{role} location cannot be empty"
            )));
        }
        if self.strict_locations && !self.distances.is_known(location) {
            return Err(CommuteError::invalid_input(format!(
                "Unknown {role} location '{location}'"
            )));
        }
        Ok(())
    }

    /// Recommend the lowest-emission feasible commute between two places
    #[instrument(skip(self), fields(distance_km = tracing::field::Empty))]
    pub fn recommend(
        &self,
        source: &Location,
        destination: &Location,
        time_of_day: TimeOfDay,
        user_weather: Option<&str>,
    ) -> Result<Recommendation> {
        let distance_km = self.distances.get_distance(source, destination);
        tracing::Span::current().record("distance_km", distance_km);

        let traffic_level = infer_traffic(time_of_day);
        let weather_condition = resolve_weather(user_weather);
        debug!(
            "Context: {} km, {} traffic, {} weather",
            distance_km, traffic_level, weather_condition
        );

        let options = build_options(distance_km, traffic_level, &weather_condition);
        let (feasible, excluded) = partition_feasible(&options, &weather_condition, distance_km);
        if feasible.is_empty() {
            warn!("Every mode was excluded for {} -> {}", source, destination);
            return Err(CommuteError::no_feasible_option(format!(
                "every mode is excluded for {distance_km} km in {weather_condition} weather"
            )));
        }
        debug!("{} of {} options feasible", feasible.len(), options.len());

        let scored = feasible
            .into_iter()
            .map(|option| {
                let co2 = self.predictor.predict(&option)?;
                Ok(option.scored(co2))
            })
            .collect::<Result<Vec<_>>>()?;

        let Ranking { best, ranked } = select(scored)?;
        info!("Recommended {}", best.summary());

        Ok(Recommendation {
            source: source.clone(),
            destination: destination.clone(),
            distance_km,
            time_of_day,
            traffic_level,
            weather_condition,
            best,
            ranked,
            excluded,
        })
    }
}
