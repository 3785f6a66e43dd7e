//! Mapping of error responses to [`Error`] variants.

use http::StatusCode;
use serde::Deserialize;

use crate::Error;
use crate::transport::HttpResponse;

/// Body of a 400/422 response. Its `statusCode` repeats the HTTP status.
#[derive(Debug, Deserialize)]
struct InvalidRequestBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    message: String,
}

/// Body of any other error response.
#[derive(Debug, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: String,
}

/// Classifies a non-2xx, non-401 response.
///
/// The body is only inspected where the status calls for it; a body that
/// fails to decode yields [`Error::Decode`] rather than a guessed variant.
pub(crate) fn classify(response: &HttpResponse) -> Error {
    match response.status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            match serde_json::from_slice::<InvalidRequestBody>(&response.body) {
                Ok(body) => Error::InvalidRequest {
                    status: response.status,
                    name: body.name,
                    message: body.message,
                },
                Err(e) => Error::Decode(e),
            }
        }
        StatusCode::NOT_FOUND => Error::NotFound,
        status => match serde_json::from_slice::<MessageBody>(&response.body) {
            Ok(body) if !body.message.is_empty() => Error::Api {
                status,
                message: body.message,
            },
            Ok(_) => Error::Unknown { status },
            Err(e) => Error::Decode(e),
        },
    }
}
