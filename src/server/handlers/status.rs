//! JSON status handler.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use strum::IntoEnumIterator;

use super::super::types::{AppState, Counts, StatusResponse};
use crate::error_handling::{ErrorType, InfoType};

/// Cumulative probe counters since the server started
pub async fn status_handler<P>(State(state): State<AppState<P>>) -> Json<StatusResponse>
where
    P: Send + Sync + 'static,
{
    let stats = &state.stats;

    let mut errors = BTreeMap::new();
    for error_type in ErrorType::iter() {
        let count = stats.get_error_count(error_type);
        if count > 0 {
            errors.insert(error_type.as_str(), count);
        }
    }

    let mut info = BTreeMap::new();
    for info_type in InfoType::iter() {
        let count = stats.get_info_count(info_type);
        if count > 0 {
            info.insert(info_type.as_str(), count);
        }
    }

    Json(StatusResponse {
        elapsed_seconds: state.start_time.elapsed().as_secs_f64(),
        probes: stats.total_probes(),
        errors: Counts {
            total: stats.total_errors(),
            by_type: errors,
        },
        info: Counts {
            total: stats.total_info(),
            by_type: info,
        },
    })
}
