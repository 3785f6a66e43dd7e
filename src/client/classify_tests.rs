//! Tests for error response classification.

use http::StatusCode;

use super::classify::classify;
use crate::Error;
use crate::transport::HttpResponse;

fn respond(status: StatusCode, body: &str) -> HttpResponse {
    HttpResponse::json(status, body)
}

mod invalid_request {
    use super::*;

    #[test]
    fn bad_request_carries_server_message() {
        let err = classify(&respond(
            StatusCode::BAD_REQUEST,
            r#"{"statusCode":400,"name":"BadRequestException","message":"amount must be positive"}"#,
        ));

        match err {
            Error::InvalidRequest {
                status,
                name,
                message,
            } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(name, "BadRequestException");
                assert_eq!(message, "amount must be positive");
            }
            other => panic!("Expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn unprocessable_entity_is_invalid_request() {
        let err = classify(&respond(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message":"X"}"#,
        ));

        assert_eq!(err.message(), Some("X"));
        assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(err.to_string(), "[ERROR]: X");
    }

    #[test]
    fn status_comes_from_response_not_body() {
        let err = classify(&respond(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"statusCode":400,"message":"bvn is required"}"#,
        ));

        assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(err.message(), Some("bvn is required"));
    }

    #[test]
    fn undecodable_body_surfaces_decode_error() {
        let err = classify(&respond(StatusCode::BAD_REQUEST, "<html>oops</html>"));

        assert!(matches!(err, Error::Decode(_)));
    }
}

mod not_found {
    use super::*;

    #[test]
    fn not_found_ignores_body() {
        for body in ["", "not json", r#"{"message":"customer missing"}"#] {
            let err = classify(&respond(StatusCode::NOT_FOUND, body));

            assert!(err.is_not_found(), "body {body:?} gave {err:?}");
            assert_eq!(err.to_string(), "[ERROR]: Not Found");
            assert_eq!(err.message(), None);
        }
    }
}

mod other_statuses {
    use super::*;

    #[test]
    fn message_becomes_api_error() {
        let err = classify(&respond(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message":"upstream bank unavailable"}"#,
        ));

        assert!(matches!(
            err,
            Error::Api { status, ref message }
                if status == StatusCode::INTERNAL_SERVER_ERROR
                    && message == "upstream bank unavailable"
        ));
    }

    #[test]
    fn empty_message_is_unknown() {
        let err = classify(&respond(StatusCode::FORBIDDEN, r#"{"message":""}"#));

        assert!(matches!(err, Error::Unknown { status } if status == StatusCode::FORBIDDEN));
        assert_eq!(err.to_string(), "[ERROR]: Unknown Error");
    }

    #[test]
    fn missing_message_is_unknown() {
        let err = classify(&respond(StatusCode::CONFLICT, r#"{"error":"duplicate"}"#));

        assert!(matches!(err, Error::Unknown { .. }));
    }

    #[test]
    fn empty_body_is_decode_error() {
        let err = classify(&respond(StatusCode::BAD_GATEWAY, ""));

        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn redirect_without_body_is_decode_error() {
        let err = classify(&respond(StatusCode::MOVED_PERMANENTLY, "not json"));

        assert!(matches!(err, Error::Decode(_)));
    }
}
