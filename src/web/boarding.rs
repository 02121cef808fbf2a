use crate::adapters::tabular::{parse_bookings, write_sequence, DEFAULT_HEADER_TOKEN};
use crate::core::sequencer::Sequencer;
use crate::domain::model::{BoardingReport, SequenceEntry};
use crate::web::error::WebError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Multipart, Request},
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::info;

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["txt", "csv", "tsv"];
pub const EXPORT_FILE_NAME: &str = "boarding_sequence.txt";

const NO_DATA: &str = "No data provided. Please upload a file or enter manual data.";
const INVALID_FILE_TYPE: &str = "Invalid file type. Please upload .txt, .csv, or .tsv files.";

#[derive(Debug, Deserialize)]
struct ManualEntry {
    /// A JSON number or a numeric string.
    booking_id: Value,
    seats: String,
}

impl ManualEntry {
    fn parse_booking_id(&self) -> Result<i64, WebError> {
        let parsed = match &self.booking_id {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| WebError::BadRequest(format!("Invalid booking ID: {}", self.booking_id)))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    manual_data: Option<Vec<ManualEntry>>,
}

#[derive(Debug, Default, Deserialize)]
struct ExportRequest {
    #[serde(default)]
    sequence: Vec<(usize, i64)>,
}

pub fn routes() -> Router {
    Router::new()
        .route("/api/generate", post(generate_sequence))
        .route("/api/export", post(export_sequence))
}

pub fn allowed_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

/// Text of the `file` field. Fields without a file name are ignored.
async fn read_upload(mut multipart: Multipart) -> Result<String, WebError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebError::BadRequest(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            continue;
        }
        if !allowed_file(&file_name) {
            return Err(WebError::BadRequest(INVALID_FILE_TYPE.to_string()));
        }

        info!("Received upload: {}", file_name);
        return field
            .text()
            .await
            .map_err(|e| WebError::BadRequest(e.body_text()));
    }

    Err(WebError::BadRequest(NO_DATA.to_string()))
}

async fn generate_sequence(request: Request) -> Result<Json<BoardingReport>, WebError> {
    let mut sequencer = Sequencer::new();

    if is_multipart(&request) {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| WebError::BadRequest(e.body_text()))?;
        let content = read_upload(multipart).await?;
        sequencer.load_bookings(parse_bookings(&content, DEFAULT_HEADER_TOKEN)?);
    } else {
        let Json(body) = Json::<GenerateRequest>::from_request(request, &())
            .await
            .map_err(|e| WebError::BadRequest(e.body_text()))?;
        let manual_data = body
            .manual_data
            .ok_or_else(|| WebError::BadRequest(NO_DATA.to_string()))?;

        let records = manual_data
            .iter()
            .map(|entry| Ok((entry.parse_booking_id()?, entry.seats.as_str())))
            .collect::<Result<Vec<_>, WebError>>()?;
        sequencer.load(records);
    }

    let report = sequencer.report();
    info!("Generated boarding sequence for {} bookings", report.total_bookings);
    Ok(Json(report))
}

async fn export_sequence(
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<impl IntoResponse, WebError> {
    let Json(req) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;

    let entries: Vec<SequenceEntry> = req
        .sequence
        .into_iter()
        .map(|(sequence, booking_id)| SequenceEntry {
            sequence,
            booking_id,
        })
        .collect();
    let data = write_sequence(&entries)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        data,
    ))
}
