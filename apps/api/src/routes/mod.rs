pub mod health;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::chatbot::handlers as chatbot;
use crate::pages::{analytics, explore, overview};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let media = ServeDir::new(&state.config.media_root);

    Router::new()
        .route("/health", get(health::health_handler))
        // Overview
        .route("/", get(overview::handle_home))
        .route("/branches/", get(overview::handle_branches))
        .route("/branch/:id/", get(overview::handle_branch_detail))
        .route("/about/", get(overview::handle_about))
        .route("/load-data/", get(overview::handle_load_data))
        // Analytics (render charts on demand)
        .route("/placement/", get(analytics::handle_placement))
        .route("/salary/", get(analytics::handle_salary))
        .route("/market/", get(analytics::handle_market))
        // Exploration
        .route(
            "/compare/",
            get(explore::handle_compare_form).post(explore::handle_compare),
        )
        .route(
            "/suggestion/",
            get(explore::handle_suggestion_form).post(explore::handle_suggestion),
        )
        .route("/courses/", get(explore::handle_courses))
        .route("/projects/", get(explore::handle_projects))
        // Chatbot
        .route("/chatbot/", get(chatbot::handle_chat_page))
        .route(
            "/api/chatbot/",
            axum::routing::post(chatbot::handle_chat_message)
                .fallback(chatbot::handle_invalid_method),
        )
        .nest_service("/media", media)
        .with_state(state)
}
