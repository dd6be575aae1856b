use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{Html, IntoResponse, Response};
use chrono::Datelike;
use futures::StreamExt;
use serde::Serialize;
use tracing::debug;
use vinewood_domain::status::ServerStatus;
use vinewood_kernel::server::AppState;
use vinewood_sections::{PageContext, SectionError, SectionKind, Selection, SiteView};
use vinewood_status::loading::loading_stream;

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Query-string selection applied to the current site and status.
fn context<'a>(state: &'a AppState, selection: &'a Selection) -> PageContext<'a> {
    PageContext { site: &state.site, status: state.status(), year: current_year(), selection }
}

pub(crate) async fn page(
    State(state): State<AppState>,
    Query(selection): Query<Selection>,
) -> Html<String> {
    let view = SiteView::project(&context(&state, &selection));
    Html(vinewood_ui::render_page(view, selection))
}

pub(crate) async fn site(
    State(state): State<AppState>,
    Query(selection): Query<Selection>,
) -> Json<SiteView> {
    Json(SiteView::project(&context(&state, &selection)))
}

pub(crate) async fn section(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(selection): Query<Selection>,
) -> Response {
    match name.parse::<SectionKind>() {
        Ok(kind) => Json(kind.project(&context(&state, &selection))).into_response(),
        Err(err) => ApiError::from(err).into_response(),
    }
}

pub(crate) async fn status(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CACHE_CONTROL, "no-store")], Json::<ServerStatus>(state.status()))
}

/// Loading sequence as Server-Sent Events; the stream closes after `ready`.
pub(crate) async fn loading(State(state): State<AppState>) -> impl IntoResponse {
    let tips = state.site.server.loading_tips.clone();
    debug!(tips = tips.len(), "Loading stream opened");

    let events = loading_stream(tips)
        .map(|event| Event::default().event(event.name()).json_data(&event));
    Sse::new(events).keep_alive(KeepAlive::default())
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Request failures rendered as JSON.
#[derive(Debug)]
pub(crate) enum ApiError {
    UnknownSection(SectionError),
}

impl From<SectionError> for ApiError {
    fn from(err: SectionError) -> Self {
        Self::UnknownSection(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::UnknownSection(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };
        debug!(%status, %message, "Request rejected");
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
