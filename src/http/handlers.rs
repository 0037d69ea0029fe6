//! HTTP handlers for the REST API.
//!
//! Each handler validates the sheet URL, fetches the workbook once,
//! and runs the loader and engine inside `spawn_blocking`, since the
//! normalization is synchronous CPU work.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{HealthResponse, SheetQuery};
use super::error::AppError;
use super::state::AppState;
use crate::engine::{assemble_group_schedules, assemble_teacher_schedules};
use crate::models::{GroupSchedules, TeacherSchedules};
use crate::source::csv::{load_students_grid, load_teachers_grid};
use crate::source::url::normalize_sheet_url;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

/// GET /v1/schedules/groups
///
/// Fetch the students workbook behind `sheet_url` and return the
/// normalized per-group document.
pub async fn get_group_schedules(
    State(state): State<AppState>,
    Query(query): Query<SheetQuery>,
) -> HandlerResult<GroupSchedules> {
    let url = normalize_sheet_url(&query.sheet_url)?;
    let bytes = state.fetcher.fetch(&url).await?;

    let document = tokio::task::spawn_blocking(move || {
        let grid = load_students_grid(&bytes)?;
        assemble_group_schedules(&grid)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(document))
}

/// GET /v1/schedules/teachers
///
/// Fetch the teachers workbook behind `sheet_url` and return the
/// normalized per-teacher document.
pub async fn get_teacher_schedules(
    State(state): State<AppState>,
    Query(query): Query<SheetQuery>,
) -> HandlerResult<TeacherSchedules> {
    let url = normalize_sheet_url(&query.sheet_url)?;
    let bytes = state.fetcher.fetch(&url).await?;

    let document = tokio::task::spawn_blocking(move || {
        let grid = load_teachers_grid(&bytes)?;
        assemble_teacher_schedules(&grid)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(document))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use reqwest::Url;

    use super::*;
    use crate::source::fetch::{DocumentFetcher, FetchError};

    const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/abc/export?format=csv";

    /// Serves canned bytes regardless of the URL.
    struct StaticFetcher {
        bytes: Vec<u8>,
    }

    #[async_trait]
    impl DocumentFetcher for StaticFetcher {
        async fn fetch(&self, _url: &Url) -> Result<Vec<u8>, FetchError> {
            Ok(self.bytes.clone())
        }
    }

    /// Always fails with an upstream status error.
    struct FailingFetcher;

    #[async_trait]
    impl DocumentFetcher for FailingFetcher {
        async fn fetch(&self, _url: &Url) -> Result<Vec<u8>, FetchError> {
            Err(FetchError::Status {
                status: reqwest::StatusCode::NOT_FOUND,
            })
        }
    }

    fn state_with(fetcher: impl DocumentFetcher + 'static) -> AppState {
        AppState::new(Arc::new(fetcher))
    }

    fn students_csv() -> Vec<u8> {
        "\
,,Розклад,
,,КН-21/1,КН-21/2
Понеділок,08:30_ч,\"Матаналіз лек.\nПроцах Н.П.\nа.4 к.А\",\"Матаналіз лек.\nПроцах Н.П.\nа.4 к.А\"
,08:30_з,,
note,,,
"
        .as_bytes()
        .to_vec()
    }

    #[tokio::test]
    async fn test_group_schedules_handler() {
        let state = state_with(StaticFetcher {
            bytes: students_csv(),
        });
        let query = Query(SheetQuery {
            sheet_url: SHEET_URL.to_owned(),
        });

        let Json(document) = get_group_schedules(State(state), query)
            .await
            .expect("handler succeeds");

        let entry = &document["КН-21"];
        assert_eq!(entry.subgroups, vec!["КН-21/1", "КН-21/2"]);
        assert_eq!(entry.schedule.len(), 1);
    }

    #[tokio::test]
    async fn test_bad_sheet_url_is_rejected() {
        let state = state_with(StaticFetcher {
            bytes: students_csv(),
        });
        let query = Query(SheetQuery {
            sheet_url: "https://example.com/not-a-sheet".to_owned(),
        });

        let result = get_group_schedules(State(state), query).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_fetch_failure_maps_to_fetch_error() {
        let state = state_with(FailingFetcher);
        let query = Query(SheetQuery {
            sheet_url: SHEET_URL.to_owned(),
        });

        let result = get_group_schedules(State(state), query).await;
        assert!(matches!(result, Err(AppError::Fetch(_))));
    }

    #[tokio::test]
    async fn test_malformed_workbook_maps_to_malformed_error() {
        let csv = "\
,,Розклад,
,,КН-21
Понеділок,08:30_ч,\"лише два\nрядки\"
note,,
";
        let state = state_with(StaticFetcher {
            bytes: csv.as_bytes().to_vec(),
        });
        let query = Query(SheetQuery {
            sheet_url: SHEET_URL.to_owned(),
        });

        let result = get_group_schedules(State(state), query).await;
        assert!(matches!(result, Err(AppError::Malformed(_))));
    }
}
