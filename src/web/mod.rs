//! HTTP front end: upload or post bookings, get the sequence back as JSON,
//! and download it as a tab-separated file.

pub mod boarding;
pub mod error;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

pub fn app() -> Router {
    Router::new()
        .merge(boarding::routes())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const BOUNDARY: &str = "BOARDINGBOUNDARY";

    fn multipart_request(file_name: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\n\
             Content-Type: text/plain\r\n\r\n{c}\r\n--{b}--\r\n",
            b = BOUNDARY,
            f = file_name,
            c = content
        );
        Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_from_manual_data() {
        let request = json_request(
            "/api/generate",
            json!({
                "manual_data": [
                    {"booking_id": 105, "seats": "A10,B10"},
                    {"booking_id": "101", "seats": "A10,C10"},
                    {"booking_id": 120, "seats": "A20,C2"}
                ]
            }),
        );

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["total_bookings"], 3);
        assert_eq!(body["sequence"], json!([[1, 120], [2, 101], [3, 105]]));
        assert_eq!(body["details"][0]["seats"], json!(["A20", "C2"]));
        assert_eq!(body["details"][2]["furthest_seat_distance"], 10);
    }

    #[tokio::test]
    async fn test_generate_from_upload() {
        let request = multipart_request(
            "bookings.tsv",
            "Booking_ID\tSeats\n101\tA1,B1\n120\tA20,C2\n105\tA15,B15",
        );

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["sequence"], json!([[1, 120], [2, 105], [3, 101]]));
    }

    #[tokio::test]
    async fn test_generate_rejects_unknown_file_type() {
        let response = app()
            .oneshot(multipart_request("bookings.xlsx", "101\tA1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "Invalid file type. Please upload .txt, .csv, or .tsv files."
        );
    }

    #[tokio::test]
    async fn test_generate_without_data() {
        let response = app()
            .oneshot(json_request("/api/generate", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "No data provided. Please upload a file or enter manual data."
        );
    }

    #[tokio::test]
    async fn test_generate_with_bad_upload_id() {
        let response = app()
            .oneshot(multipart_request("bookings.txt", "101\tA1\nxyz\tB2"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("xyz"));
    }

    #[tokio::test]
    async fn test_export_download() {
        let request = json_request("/api/export", json!({"sequence": [[1, 120], [2, 101]]}));

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"boarding_sequence.txt\""
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Seq\tBooking_ID\n1\t120\n2\t101\n");
    }

    #[tokio::test]
    async fn test_export_without_sequence_keeps_header() {
        let response = app()
            .oneshot(json_request("/api/export", json!({})))
            .await
            .unwrap();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Seq\tBooking_ID\n");
    }

    #[test]
    fn test_allowed_file() {
        assert!(boarding::allowed_file("bookings.txt"));
        assert!(boarding::allowed_file("BOOKINGS.TSV"));
        assert!(boarding::allowed_file("data.csv"));
        assert!(!boarding::allowed_file("bookings"));
        assert!(!boarding::allowed_file("bookings.xlsx"));
    }
}
