use axum::extract::ConnectInfo;
use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{governor::GovernorConfigBuilder, key_extractor::KeyExtractor, GovernorLayer};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::api::handlers::{self, AppState};
use crate::config::Settings;
use crate::{Error, Result};

/// Rate-limit key: the peer IP when the server was started with connect info,
/// localhost otherwise (in-process tests).
#[derive(Clone, Copy, Debug)]
struct PeerIpOrLocalhost;

impl KeyExtractor for PeerIpOrLocalhost {
    type Key = IpAddr;

    fn extract<B>(
        &self,
        req: &axum::http::Request<B>,
    ) -> std::result::Result<Self::Key, tower_governor::GovernorError> {
        if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
            return Ok(addr.ip());
        }

        Ok(IpAddr::V4(Ipv4Addr::LOCALHOST))
    }
}

/// Burst allowance for a per-second rate: twice the rate, saturating at
/// `u32::MAX`.
fn burst_size(rate: u64) -> u32 {
    u32::try_from(rate).unwrap_or(u32::MAX).saturating_mul(2)
}

/// Create the router with all endpoints
pub fn create_router(state: AppState, settings: &Settings) -> Result<Router> {
    // Replenish one request every 1/rate seconds, allow a burst of twice the rate
    let rate = settings.server.api_rate_limit.max(1);
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpOrLocalhost)
            .per_millisecond((1000 / rate).max(1))
            .burst_size(burst_size(rate))
            .finish()
            .ok_or_else(|| Error::Config("Invalid rate limit configuration".to_string()))?,
    );

    let lookup_routes = Router::new()
        .route("/predict_allergen", post(handlers::predict_allergen))
        .route("/predict_nutrition", post(handlers::predict_nutrition))
        .route("/recommend_recipes", post(handlers::recommend_recipes))
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .with_state(state);

    let router = Router::new()
        .merge(lookup_routes)
        .merge(health_routes)
        .layer(RequestBodyLimitLayer::new(
            settings.server.max_request_body_size,
        ))
        .layer(
            // Any origin may call the lookups
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
