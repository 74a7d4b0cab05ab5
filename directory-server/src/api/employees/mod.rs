//! Employee API Module
//!
//! | Verb | Path | Result |
//! |------|------|--------|
//! | GET | /api/employees | all records |
//! | POST | /api/employees | 201 + created record |
//! | GET | /api/employees/{id} | record or `null` |
//! | PUT | /api/employees/{id} | `{"status":"updated"}` |
//! | DELETE | /api/employees/{id} | `{"status":"deleted"}` |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Base path of the employee resource
pub const BASE_PATH: &str = "/api/employees";

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest(BASE_PATH, routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
