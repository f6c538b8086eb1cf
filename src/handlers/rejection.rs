// Rejection recovery

use std::convert::Infallible;

use log::error;
use warp::http::StatusCode;

use crate::store;

/// Rejection carrying a store failure out of a handler
#[derive(Debug)]
pub struct StoreFailure(pub store::Error);

impl warp::reject::Reject for StoreFailure {}

/// Convert rejections into JSON error replies
///
/// Store failures are logged with their cause but surface to the client as
/// a generic 500; generation failures never reach this point because the
/// chat service absorbs them into fallback replies.
pub async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let (code, message) = if let Some(StoreFailure(store_err)) = err.find::<StoreFailure>() {
        error!("Store error: {}", store_err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(body_err) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, body_err.to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unhandled rejection".to_string(),
        )
    };

    let json = warp::reply::json(&serde_json::json!({ "error": message }));
    Ok(warp::reply::with_status(json, code))
}
