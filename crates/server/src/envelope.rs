//! The JSON envelope every endpoint returns.
//!
//! Success:
//!
//! ```json
//! {"status": 200, "response": <payload>}
//! ```
//!
//! Failure:
//!
//! ```json
//! {"status": 400, "response": {"error": {"code": 400, "message": "Bad Request", "description": "..."}}}
//! ```
//!
//! The `status` field mirrors the HTTP status code so clients that lose the
//! transport status (proxies, logs) can still read it from the body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Envelope wrapper.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: u16,
    pub response: T,
}

/// Failure payload carried inside the envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// The error object itself.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
    pub description: String,
}

/// Wrap a success payload in the envelope with the given status.
pub fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    (
        status,
        Json(Envelope {
            status: status.as_u16(),
            response: data,
        }),
    )
        .into_response()
}

/// Wrap a failure in the envelope. `message` is the canonical reason phrase
/// for the status; `description` carries the specific problem.
pub fn failure(status: StatusCode, description: impl Into<String>) -> Response {
    (
        status,
        Json(Envelope {
            status: status.as_u16(),
            response: ErrorBody {
                error: ErrorDetail {
                    code: status.as_u16(),
                    message: status
                        .canonical_reason()
                        .unwrap_or("Unknown Status")
                        .to_string(),
                    description: description.into(),
                },
            },
        }),
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_success_envelope_shape() {
        let envelope = Envelope {
            status: 200,
            response: json!({"employees": []}),
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"status": 200, "response": {"employees": []}}));
    }

    #[test]
    fn test_failure_envelope_shape() {
        let envelope = Envelope {
            status: 404,
            response: ErrorBody {
                error: ErrorDetail {
                    code: 404,
                    message: "Not Found".to_string(),
                    description: "No such employee".to_string(),
                },
            },
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "status": 404,
                "response": {
                    "error": {
                        "code": 404,
                        "message": "Not Found",
                        "description": "No such employee"
                    }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_failure_sets_transport_status() {
        let response = failure(StatusCode::BAD_REQUEST, "Missing fields: email");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["status"], 400);
        assert_eq!(value["response"]["error"]["message"], "Bad Request");
        assert_eq!(
            value["response"]["error"]["description"],
            "Missing fields: email"
        );
    }
}
