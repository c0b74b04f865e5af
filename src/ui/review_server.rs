use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::Filter;
use crate::config::constants::{
    sleep_duration_millis, MAX_REVIEW_REQUEST_BYTES, SERVER_PORT_SEARCH_SPAN, SERVER_SHUTDOWN_GRACE_PERIOD_MS,
};
use crate::errors::{EngineerError, EngineerResult};
use crate::services::code_reviewer::CodeReviewer;
use crate::structs::review_request::ReviewRequest;

const INDEX_HTML: &str = include_str!("static/index.html");
const LANGUAGE_OPTIONS_PLACEHOLDER: &str = "{{LANGUAGE_OPTIONS}}";

type JsonReply = warp::reply::WithStatus<warp::reply::Json>;

/// Local web UI: one page plus a JSON endpoint running one review per click.
pub struct ReviewServer {
    reviewer: Arc<CodeReviewer>,
    languages: Arc<Vec<String>>,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ReviewServer {
    pub fn new(reviewer: CodeReviewer, languages: Vec<String>) -> Self {
        Self {
            reviewer: Arc::new(reviewer),
            languages: Arc::new(languages),
            port: None,
            shutdown_tx: None,
        }
    }

    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn url(&self) -> Option<String> {
        self.port.map(|port| format!("http://127.0.0.1:{port}/"))
    }

    pub async fn start(&mut self, preferred_port: u16) -> EngineerResult<u16> {
        let port = Self::find_available_port(preferred_port).await?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (bound_addr, server) = warp::serve(self.routes())
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| EngineerError::system_error("start review server", &e.to_string()))?;

        tokio::spawn(server);

        self.port = Some(bound_addr.port());
        self.shutdown_tx = Some(shutdown_tx);

        log::info!("🌐 Review server started on port {}", bound_addr.port());
        Ok(bound_addr.port())
    }

    pub async fn shutdown(&mut self) -> EngineerResult<()> {
        log::info!("🛑 Shutting down review server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|()| EngineerError::system_error("shutdown", "Failed to send shutdown signal"))?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Review server shutdown complete");

        Ok(())
    }

    pub fn routes(&self) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
        let languages = Arc::clone(&self.languages);
        let languages_filter = warp::any().map(move || Arc::clone(&languages));
        let reviewer = Arc::clone(&self.reviewer);
        let reviewer_filter = warp::any().map(move || Arc::clone(&reviewer));

        let index = warp::path::end()
            .and(warp::get())
            .and(languages_filter.clone())
            .map(|languages: Arc<Vec<String>>| warp::reply::html(render_index_page(&languages)));

        let list_languages = warp::path!("api" / "languages")
            .and(warp::get())
            .and(languages_filter.clone())
            .map(|languages: Arc<Vec<String>>| warp::reply::json(&*languages));

        let review = warp::path!("api" / "review")
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_REVIEW_REQUEST_BYTES))
            .and(warp::body::json())
            .and(reviewer_filter)
            .and(languages_filter)
            .and_then(review_handler);

        index.or(list_languages).or(review).recover(handle_rejection)
    }

    async fn find_available_port(preferred_port: u16) -> EngineerResult<u16> {
        let last_port = preferred_port.saturating_add(SERVER_PORT_SEARCH_SPAN);
        for port in preferred_port..=last_port {
            if let Ok(listener) = tokio::net::TcpListener::bind(("127.0.0.1", port)).await {
                drop(listener);
                return Ok(port);
            }
        }
        Err(EngineerError::validation_error(
            "server.port",
            &format!("{preferred_port}-{last_port}"),
            "No available ports found",
            Some("Choose another port with --port"),
        ))
    }
}

async fn review_handler(
    request: ReviewRequest,
    reviewer: Arc<CodeReviewer>,
    languages: Arc<Vec<String>>,
) -> Result<JsonReply, Infallible> {
    if let Some(reason) = request.rejection_reason(&languages) {
        return Ok(warp::reply::with_status(
            warp::reply::json(&json!({ "error": reason })),
            StatusCode::BAD_REQUEST,
        ));
    }

    match reviewer
        .review_code(&request.language, &request.code, &request.extra_context)
        .await
    {
        Ok(result) => Ok(warp::reply::with_status(warp::reply::json(&result), StatusCode::OK)),
        Err(e) => {
            log::error!("❌ Review failed: {}", e.technical_details());
            Ok(warp::reply::with_status(
                warp::reply::json(&json!({ "error": e.user_message() })),
                StatusCode::BAD_GATEWAY,
            ))
        }
    }
}

/// Every failure the page can trigger answers with `{"error": message}`.
async fn handle_rejection(rejection: warp::Rejection) -> Result<JsonReply, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "Code is too large to review (limit {} MiB).",
                MAX_REVIEW_REQUEST_BYTES / (1024 * 1024)
            ),
        )
    } else if let Some(e) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Invalid review request: {e}"))
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Request body length is required".to_string())
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Send the review request as JSON".to_string())
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        log::error!("❌ Unhandled request rejection: {rejection:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&json!({ "error": message })),
        status,
    ))
}

fn render_index_page(languages: &[String]) -> String {
    let options: String = languages
        .iter()
        .map(|language| {
            let escaped = escape_html(language);
            format!("<option value=\"{escaped}\">{escaped}</option>")
        })
        .collect();

    INDEX_HTML.replace(LANGUAGE_OPTIONS_PLACEHOLDER, &options)
}

fn escape_html(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut escaped, c| {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                other => escaped.push(other),
            }
            escaped
        })
}
