use crate::api::models::AppState;
use crate::api::sloths::handlers::{
    create_sloth_handler, delete_sloth_handler, get_sloth_handler, list_sloths_handler,
    update_sloth_handler,
};
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sloths",
            get(list_sloths_handler).post(create_sloth_handler),
        )
        .route(
            "/sloths/{id}",
            get(get_sloth_handler)
                .put(update_sloth_handler)
                .delete(delete_sloth_handler),
        )
}
