use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::ACCEPT_LANGUAGE;
use axum::middleware::Next;
use axum::response::Response;
use tokio::task_local;

use super::negotiator::{LocaleNegotiator, RequestCulture};

task_local! {
    pub static CURRENT_CULTURE: RequestCulture;
}

/// Culture of the request being handled, if the i18n layer set one.
pub fn current_culture() -> Option<RequestCulture> {
    CURRENT_CULTURE.try_with(|c| c.clone()).ok()
}

/// Negotiates the request culture from `Accept-Language`.
///
/// The result is available to handlers as `Extension<RequestCulture>` and
/// through [`current_culture`]. With internationalization disabled the
/// request passes through untouched.
pub async fn handle_i18n(
    State(negotiator): State<Arc<LocaleNegotiator>>,
    mut req: Request,
    next: Next,
) -> Response {
    let languages = accept_languages(req.headers());
    let Some(culture) = negotiator.select_for_request(languages.as_slice()) else {
        return next.run(req).await;
    };

    tracing::debug!(
        "Request culture: content={} ui={}",
        culture.content,
        culture.ui
    );
    req.extensions_mut().insert(culture.clone());
    CURRENT_CULTURE.scope(culture, next.run(req)).await
}

/// "fr-CA,fr;q=0.9, en;q=0.8" -> ["fr-CA", "fr;q=0.9", "en;q=0.8"]
fn accept_languages(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(ACCEPT_LANGUAGE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
