use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::{AppError, Result};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    version: &'static str,
}

pub async fn index() -> Result<Response> {
    let template = IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
    };
    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}
