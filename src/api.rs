use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::constants::auth::{LOGIN_EMAIL, LOGIN_PASSWORD, SESSION_FLASH_KEY, SESSION_USER_KEY};
use crate::constants::server::SESSION_IDLE_MINUTES;
use crate::llm::LlmClient;
use crate::scrape::stats::{extract_stats, ProfileStats};
use crate::scrape::trades::extract_trades;
use crate::scrape::ScrapeClient;
use crate::views;

pub struct AppState {
    pub config: AppConfig,
    pub scraper: ScrapeClient,
    pub llm: LlmClient,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(SESSION_IDLE_MINUTES)));

    Router::new()
        .route("/", get(home))
        .route("/login", get(login_form).post(login_submit))
        .route("/dashboard", get(dashboard))
        .route("/reports", get(reports))
        .route("/raw_reports_capitol", get(raw_reports_capitol))
        .route("/agent", get(agent))
        .route("/agent_chat", post(agent_chat))
        .route("/profile", get(profile))
        .route("/signup", get(signup))
        .route("/logout", get(logout))
        .route("/health", get(health))
        .layer(session_layer)
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>) {
    let bind_addr = state.config.bind_addr.clone();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    info!("Server listening on {}", bind_addr);
    axum::serve(listener, app).await.unwrap();
}

// Session helpers

async fn current_user(session: &Session) -> Option<String> {
    session
        .get::<String>(SESSION_USER_KEY)
        .await
        .unwrap_or(None)
}

async fn flash(session: &Session, message: impl Into<String>) {
    let mut queued: Vec<String> = session
        .get(SESSION_FLASH_KEY)
        .await
        .unwrap_or(None)
        .unwrap_or_default();
    queued.push(message.into());
    if let Err(e) = session.insert(SESSION_FLASH_KEY, queued).await {
        warn!("Failed to queue flash message: {}", e);
    }
}

async fn take_flashes(session: &Session) -> Vec<String> {
    session
        .remove::<Vec<String>>(SESSION_FLASH_KEY)
        .await
        .unwrap_or(None)
        .unwrap_or_default()
}

/// Page routes bounce anonymous visitors back to the login form.
async fn require_login(session: &Session) -> Result<String, Redirect> {
    match current_user(session).await {
        Some(user_email) => Ok(user_email),
        None => {
            flash(session, "Please log in first.").await;
            Err(Redirect::to("/login"))
        }
    }
}

// Handlers

async fn home() -> Redirect {
    Redirect::to("/login")
}

async fn login_form(session: Session) -> Html<String> {
    let flashes = take_flashes(&session).await;
    Html(views::login_page(None, &flashes))
}

#[derive(Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
}

async fn login_submit(session: Session, Form(form): Form<LoginForm>) -> Response {
    if form.email == LOGIN_EMAIL && form.password == LOGIN_PASSWORD {
        if let Err(e) = session.insert(SESSION_USER_KEY, &form.email).await {
            error!("Failed to persist session: {}", e);
        }
        info!("User {} logged in", form.email);
        return Redirect::to("/dashboard").into_response();
    }

    // Re-render the form, no redirect, same page
    Html(views::login_page(Some("Invalid credentials. Try again."), &[])).into_response()
}

async fn dashboard(session: Session, State(state): State<Arc<AppState>>) -> Response {
    let user_email = match require_login(&session).await {
        Ok(user_email) => user_email,
        Err(redirect) => return redirect.into_response(),
    };

    let stats = match state.scraper.fetch_profile_page().await {
        Ok(body) => {
            let stats = extract_stats(&body);
            info!("Parsed profile stats: {:?}", stats);
            stats
        }
        Err(e) => {
            // Degrade to defaults, never a 5xx for a scrape failure
            error!("Dashboard scrape error: {}", e);
            flash(&session, format!("Error fetching Pelosi profile stats: {}", e)).await;
            ProfileStats::fallback()
        }
    };

    let flashes = take_flashes(&session).await;
    Html(views::dashboard_page(&user_email, &stats, &flashes)).into_response()
}

async fn reports(session: Session, State(state): State<Arc<AppState>>) -> Response {
    let user_email = match require_login(&session).await {
        Ok(user_email) => user_email,
        Err(redirect) => return redirect.into_response(),
    };

    let trades = match state.scraper.fetch_profile_page().await {
        Ok(body) => match extract_trades(&body) {
            Ok(trades) => trades,
            Err(e) => {
                warn!("Reports parse error: {}", e);
                flash(&session, e.to_string()).await;
                Vec::new()
            }
        },
        Err(e) => {
            error!("Reports scrape error: {}", e);
            flash(&session, format!("Error fetching Pelosi trades: {}", e)).await;
            Vec::new()
        }
    };

    let flashes = take_flashes(&session).await;
    Html(views::reports_page(&user_email, &trades, &flashes)).into_response()
}

/// Debug passthrough of the raw fetched markup.
async fn raw_reports_capitol(State(state): State<Arc<AppState>>) -> Response {
    match state.scraper.fetch_profile_page().await {
        Ok(body) => Html(body).into_response(),
        Err(e) => Html(format!("<pre>Error: {}</pre>", e)).into_response(),
    }
}

async fn agent(session: Session) -> Response {
    let user_email = match require_login(&session).await {
        Ok(user_email) => user_email,
        Err(redirect) => return redirect.into_response(),
    };

    let flashes = take_flashes(&session).await;
    Html(views::agent_page(&user_email, &flashes)).into_response()
}

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    message: String,
}

async fn agent_chat(
    session: Session,
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Response {
    if current_user(&session).await.is_none() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"reply": "Please log in first."})),
        )
            .into_response();
    }

    let message = req.message.trim();
    if message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"reply": "Please enter a message."})),
        )
            .into_response();
    }

    if !state.llm.is_configured() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"reply": "OpenAI API key is missing. Set OPENAI_API_KEY in your .env."})),
        )
            .into_response();
    }

    match state.llm.chat(message).await {
        Ok(reply) => Json(json!({"reply": reply})).into_response(),
        Err(e) => {
            error!("OpenAI error: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"reply": format!("⚠️ {}", e)})),
            )
                .into_response()
        }
    }
}

async fn profile(session: Session) -> Response {
    let user_email = match require_login(&session).await {
        Ok(user_email) => user_email,
        Err(redirect) => return redirect.into_response(),
    };

    let flashes = take_flashes(&session).await;
    Html(views::profile_page(&user_email, &flashes)).into_response()
}

async fn signup() -> Html<String> {
    Html(views::signup_page())
}

async fn logout(session: Session) -> Redirect {
    let _ = session.remove::<String>(SESSION_USER_KEY).await;
    flash(&session, "You have been signed out.").await;
    Redirect::to("/login")
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}
