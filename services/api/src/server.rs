use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use front_desk::booking::{BillingCalculator, FrontDeskService};
use front_desk::config::AppConfig;
use front_desk::error::AppError;
use front_desk::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{seed_rooms, AppState};
use crate::routes::with_booking_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(rooms) = args.rooms.take() {
        config.inventory.rooms_file = Some(rooms);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let rooms = seed_rooms(config.inventory.rooms_file.as_deref())?;
    let room_count = rooms.len();
    let front_desk = Arc::new(FrontDeskService::with_rooms(
        BillingCalculator::default(),
        rooms,
    )?);

    let app = with_booking_routes(front_desk)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, rooms = room_count, "front desk ready");

    axum::serve(listener, app).await?;
    Ok(())
}
