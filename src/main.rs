use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use green_commute::{DistanceTable, GreenCommuteConfig, ModelArtifacts, Recommender, logging, web};

/// Build the process-wide recommender from configuration. Loaded once and
/// shared read-only by every request.
fn build_recommender(config: &GreenCommuteConfig) -> Result<Recommender> {
    let artifacts = ModelArtifacts::load_or_embedded(config.model.artifacts_path.as_deref())
        .context("Failed to load emissions model")?;

    let distances = DistanceTable::pune()
        .with_default_km(config.geography.default_distance_km)?
        .with_symmetric(config.geography.symmetric);

    Ok(Recommender::new(distances, Arc::new(artifacts))
        .with_strict_locations(config.geography.strict_locations))
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GreenCommuteConfig::load_from_path(config_path)?;
    logging::init(&config.logging)?;

    let recommender = build_recommender(&config)?;
    tracing::info!(
        "Green Commute {} ready with {} known routes",
        green_commute::VERSION,
        recommender.distances().len()
    );

    web::run(&config.bind_address(), Arc::new(recommender)).await
}
