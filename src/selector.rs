//! Ranking of scored options and selection of the lowest-emission one

use crate::models::ScoredOption;
use crate::{CommuteError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Scored options in ascending emission order plus the winner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub best: ScoredOption,
    pub ranked: Vec<ScoredOption>,
}

/// Rank options by predicted CO2, lowest first.
///
/// The sort is stable, so equal scores keep their incoming (generator)
/// order, with `-0.0` equal to `0.0`. An empty input is a
/// [`CommuteError::NoFeasibleOption`].
pub fn select(mut scored: Vec<ScoredOption>) -> Result<Ranking> {
    scored.sort_by(|a, b| {
        a.predicted_co2
            .partial_cmp(&b.predicted_co2)
            .unwrap_or(Ordering::Equal)
    });

    let best = scored
        .first()
        .cloned()
        .ok_or_else(|| CommuteError::no_feasible_option("there are no scored options to rank"))?;

    Ok(Ranking {
        best,
        ranked: scored,
    })
}
