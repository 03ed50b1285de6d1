use std::future::Future;
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::{self, Next, from_fn_with_state};
use axum::response::Response;
use axum::{Extension, Router};
use tokio::signal;
use verba_core::{I18nSettings, Settings};

use crate::i18n::catalog::LocaleCatalog;
use crate::i18n::middleware::handle_i18n;
use crate::i18n::negotiator::LocaleNegotiator;
use crate::i18n::store::DirStore;

pub struct WebServer {
    router: Router,
    addr: String,
    middlewares: Vec<Box<dyn FnOnce(Router) -> Router + Send>>,
}

impl WebServer {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            router: Router::new(),
            addr: addr.into(),
            middlewares: Vec::new(),
        }
    }

    /// Server with a catalog over `i18n.resources_dir`, negotiating every
    /// request with the configured switches.
    pub fn from_settings(settings: &Settings) -> Self {
        let store = Arc::new(DirStore::new(&settings.i18n.resources_dir));
        let catalog = Arc::new(LocaleCatalog::new(store));
        Self::new(settings.server.addr.clone()).i18n(catalog, settings.i18n.clone())
    }

    /// Negotiates request cultures against `catalog` and exposes the catalog
    /// to handlers as `Extension<Arc<LocaleCatalog>>`.
    pub fn i18n(self, catalog: Arc<LocaleCatalog>, settings: I18nSettings) -> Self {
        let negotiator = Arc::new(LocaleNegotiator::new(catalog.clone(), settings));
        let mut server = self.layer_i18n(negotiator);
        server
            .middlewares
            .push(Box::new(move |r: Router| r.layer(Extension(catalog))));
        server
    }

    pub fn layer_i18n(mut self, negotiator: Arc<LocaleNegotiator>) -> Self {
        self.middlewares
            .push(Box::new(move |r: Router| {
                r.layer(from_fn_with_state(negotiator, handle_i18n))
            }));
        self
    }

    pub fn layer_fn<F, Fut>(mut self, f: F) -> Self
    where
        F: Clone + Send + Sync + 'static + Fn(Request, Next) -> Fut,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.middlewares
            .push(Box::new(move |r: Router| r.layer(middleware::from_fn(f))));
        self
    }

    pub fn mount(mut self, router: Router) -> Self {
        self.router = self.router.merge(router);
        self
    }

    /// The final router. Layers wrap every mounted route, whatever the order
    /// of `mount` and `layer_*` calls.
    pub fn into_router(self) -> Router {
        self.middlewares
            .into_iter()
            .fold(self.router, |router, layer| layer(router))
    }

    pub async fn start(self) -> anyhow::Result<()> {
        let addr = self.addr.clone();
        log::info!("Starting web server at {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;

        let server =
            axum::serve(listener, self.into_router()).with_graceful_shutdown(wait_for_shutdown());
        if let Err(e) = server.await {
            log::error!("Server error: {}", e);
            return Err(anyhow::anyhow!("Server error: {}", e));
        }

        log::info!("Server stopped");
        Ok(())
    }
}

async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log::info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            log::info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
