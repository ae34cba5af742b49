use crate::infra::{deserialize_optional_date, AppState};
use arrears_engine::error::AppError;
use arrears_engine::grounds::{assess_grounds, GroundAssessment, Jurisdiction};
use arrears_engine::schedule::{
    compute_arrears, create_empty_arrears_schedule, validate_schedule, ArrearsItem,
    ArrearsScheduleInput, ComputedArrears, PaymentLedgerImporter, RentFrequency,
    ScheduleViolation,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

#[derive(Debug, Deserialize)]
pub(crate) struct ScheduleRequest {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) tenancy_start_date: Option<NaiveDate>,
    pub(crate) rent_amount: Option<Decimal>,
    pub(crate) rent_frequency: Option<RentFrequency>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) notice_date: Option<NaiveDate>,
    /// Override for "today" so callers can pin the cutoff in tests and
    /// previews. Defaults to the server's current date.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScheduleResponse {
    pub(crate) items: Vec<ArrearsItem>,
    pub(crate) computed: ComputedArrears,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    #[serde(default)]
    pub(crate) items: Vec<ArrearsItem>,
    /// Exported payment history; when present it replaces `items`.
    #[serde(default)]
    pub(crate) ledger_csv: Option<String>,
    pub(crate) rent_amount: Decimal,
    pub(crate) rent_frequency: RentFrequency,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) notice_date: Option<NaiveDate>,
    /// Restricts the assessment to one jurisdiction; omitted means all three.
    #[serde(default)]
    pub(crate) jurisdiction: Option<Jurisdiction>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) violations: Vec<ScheduleViolation>,
    pub(crate) computed: ComputedArrears,
    /// Omitted while integrity violations remain: the ledger must be fixed
    /// before any eligibility decision is worth showing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) assessments: Option<Vec<GroundAssessment>>,
}

pub(crate) fn with_engine_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/arrears/schedule",
            axum::routing::post(schedule_endpoint),
        )
        .route(
            "/api/v1/arrears/assessment",
            axum::routing::post(assessment_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn schedule_endpoint(
    Json(payload): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let ScheduleRequest {
        tenancy_start_date,
        rent_amount,
        rent_frequency,
        notice_date,
        today,
    } = payload;

    let input = ArrearsScheduleInput {
        tenancy_start_date,
        rent_amount,
        rent_frequency,
        notice_date,
    };
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let items = create_empty_arrears_schedule(&input, today)?;
    let computed = compute_arrears(
        &items,
        input.rent_frequency.unwrap_or(RentFrequency::Monthly),
        input.rent_amount.unwrap_or(Decimal::ZERO),
        input.notice_date,
    );

    Ok(Json(ScheduleResponse { items, computed }))
}

pub(crate) async fn assessment_endpoint(
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let AssessmentRequest {
        items,
        ledger_csv,
        rent_amount,
        rent_frequency,
        notice_date,
        jurisdiction,
    } = payload;

    let items = match ledger_csv {
        Some(csv) => PaymentLedgerImporter::from_reader(Cursor::new(csv.into_bytes()))?,
        None => items,
    };

    let violations = validate_schedule(&items);
    let computed = compute_arrears(&items, rent_frequency, rent_amount, notice_date);

    let assessments = if violations.is_empty() {
        let jurisdictions = match jurisdiction {
            Some(only) => vec![only],
            None => Jurisdiction::ordered().to_vec(),
        };
        Some(
            jurisdictions
                .into_iter()
                .flat_map(|jurisdiction| {
                    assess_grounds(jurisdiction, &computed, rent_amount, rent_frequency)
                })
                .collect(),
        )
    } else {
        None
    };

    Ok(Json(AssessmentResponse {
        violations,
        computed,
        assessments,
    }))
}
