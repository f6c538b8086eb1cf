// Route definitions and handlers

use std::sync::Arc;

use warp::Filter;

use crate::chat::ChatService;
use crate::handlers;

pub fn configure_routes(
    service: Arc<ChatService>,
) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
    // GET /
    let index = warp::path::end()
        .and(warp::get())
        .and_then(handlers::index_handler);

    // POST /chat
    let with_service = warp::any().map(move || service.clone());
    let chat = warp::path("chat")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_service)
        .and_then(handlers::chat_handler);

    // Combine routes
    index.or(chat).recover(handlers::handle_rejection)
}
