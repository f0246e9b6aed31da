mod config;
mod contact;
mod error;
mod response;
mod send_email;
mod template;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    routing::post,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt};

use config::Config;
use contact::ContactRequest;
use error::Error;
use response::{ApiResponse, Lang};
use send_email::Mailer;

struct AppState {
    config: Config,
    mailer: Mailer,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv::dotenv().ok();

    let config = Config::from_env().expect("cannot run without mail configuration");
    let mailer = Mailer::from_config(&config).expect("cannot set up mail transport");
    let app = app(Arc::new(AppState { config, mailer }));

    let ip = std::env::var("BACKEND_ADDR").expect("cannot run without specified address");
    let port = std::env::var("BACKEND_PORT").expect("cannot run without specified port");
    let addr: SocketAddr = format!("{ip}:{port}")
        .parse()
        .expect("invalid format for ip and/or port");
    tracing::debug!("listening on {addr}");
    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(86400));

    Router::new()
        .route(
            "/send_email",
            post(send_email)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(cors)
        .with_state(state)
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> (StatusCode, Json<ApiResponse>) {
    tracing::warn!("rejected request with unsupported method");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiResponse::method_not_allowed()),
    )
}

async fn send_email(
    State(state): State<Arc<AppState>>,
    body: String,
) -> (StatusCode, Json<ApiResponse>) {
    let contact: ContactRequest = match serde_json::from_str(&body) {
        Ok(contact) => contact,
        Err(err) => {
            tracing::error!("failed to parse request body: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::send_failed(
                    Lang::Ar,
                    &Error::from(err),
                    state.config.debug,
                )),
            );
        }
    };

    let lang = contact.lang();

    let missing = contact.missing_fields();
    if !missing.is_empty() {
        tracing::warn!("rejected submission with missing fields: {missing:?}");
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::missing_fields(lang, missing)),
        );
    }

    let reply_to = match contact.email.parse::<lettre::Address>() {
        Ok(address) => address,
        Err(err) => {
            tracing::warn!("rejected submission with invalid email {:?}: {err}", contact.email);
            return (StatusCode::BAD_REQUEST, Json(ApiResponse::invalid_email(lang)));
        }
    };

    match send_email::send_contact_email(&state.config, &state.mailer, &contact, reply_to) {
        Ok(()) => {
            tracing::debug!("email sent for {} ({})", contact.name, contact.email);
            (StatusCode::OK, Json(ApiResponse::sent(lang)))
        }
        Err(err) => {
            tracing::error!("email sending failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::send_failed(lang, &err, state.config.debug)),
            )
        }
    }
}
