// GET / handler

use std::convert::Infallible;

/// Embedded single-page chat client
const CHAT_PAGE: &str = include_str!("../../static/index.html");

pub async fn index_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::html(CHAT_PAGE))
}
