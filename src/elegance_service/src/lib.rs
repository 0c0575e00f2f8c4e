//! HTTP service wiring the elegance adapters into an axum application.

pub mod helpers;
pub mod tracing;

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
        request,
    },
    routing::{get, post},
};
use elegance_adapters::{
    config::AllowedOrigins,
    http::{
        AppState,
        routes::{
            add_favorite, add_to_cart, change_password, health, list_favorites, login, logout,
            remove_favorite, remove_from_cart, signup, update_address, update_name,
        },
    },
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The e-commerce API: account, favorites and cart routes over shared store handles.
pub struct EleganceService {
    router: Router,
}

impl EleganceService {
    pub fn new(state: AppState) -> Self {
        let router = Router::new()
            .route("/signup", post(signup))
            .route("/login", post(login))
            .route("/logout", post(logout))
            .route("/address", post(update_address))
            .route("/password", post(change_password))
            .route("/name", post(update_name))
            .route("/favorite", post(add_favorite))
            .route("/favorite/remove", post(remove_favorite))
            .route("/favorite/list", post(list_favorites))
            .route("/cart", post(add_to_cart))
            .route("/cart/remove", post(remove_from_cart))
            .route("/health", get(health))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Mounts the routes under `base_path` (e.g. `/v1/ecommerce`).
    ///
    /// Without `allowed_origins` any origin may call the API.
    pub fn as_nested_router(
        mut self,
        base_path: &str,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Router {
        let cors = match allowed_origins {
            Some(allowed_origins) => CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                )),
            None => CorsLayer::permissive(),
        };
        self.router = self.router.layer(cors);

        let router = self.with_trace_layer().router;
        Router::new().nest(base_path, router)
    }

    /// Serves until Ctrl+C or SIGTERM, then drains in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        base_path: &str,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(base_path, allowed_origins);

        ::tracing::info!(
            "Elegance service listening on {}{}",
            listener.local_addr()?,
            base_path
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            ::tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                ::tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    ::tracing::info!("Shutdown signal received, starting graceful shutdown");
}
