// POST /chat handler

use std::sync::Arc;

use log::info;

use crate::chat::ChatService;
use crate::handlers::rejection::StoreFailure;
use crate::models::{ChatRequest, ChatResponse};

pub async fn chat_handler(
    request: ChatRequest,
    service: Arc<ChatService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    info!("POST /chat [{}]: {}", request.student_id, request.message);

    let reply = service
        .chat_turn(&request.student_id, &request.message)
        .await
        .map_err(|e| warp::reject::custom(StoreFailure(e)))?;

    Ok(warp::reply::json(&ChatResponse { reply }))
}
