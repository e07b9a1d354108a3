//! HTTP surface: `POST /generate-article` and `GET /health`.

mod handlers;
mod router;
mod state;
mod types;

pub use handlers::{generate_article_handler, health_handler};
pub use router::create_router;
pub use state::{AppState, SharedGenerator};
pub use types::{ErrorResponse, GenerateArticleResponse};
