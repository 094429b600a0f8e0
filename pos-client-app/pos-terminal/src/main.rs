use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use pos_core::events::PosEvent;
use pos_core::services::{CatalogService, KitchenBoard, OrderService, Poller};
use pos_infrastructure::{HttpCatalogRepository, HttpClient, HttpOrderRepository};
use pos_shared::config::AppConfig;
use pos_shared::utils::{format_elapsed, format_money};

const EVENT_BUFFER: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env, config/ files, POS__* overrides)
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes the file writer on exit
    let _log_guard = pos_shared::telemetry::init_telemetry(&config.logging, &config.app.name)?;

    info!("POS terminal starting ({} env)...", config.app.env);
    info!(
        "Backend at {}, combo pricing {}",
        config.backend.base_url,
        config.pricing.combo_policy.as_str()
    );

    let client = HttpClient::new(&config.backend)?;
    let catalog_service = Arc::new(CatalogService::new(Arc::new(HttpCatalogRepository::new(client.clone()))));
    let order_service = Arc::new(OrderService::new(Arc::new(HttpOrderRepository::new(client))));

    // Initial catalog load; a failure here is not fatal, the poller retries
    match catalog_service.fetch_snapshot().await {
        Ok(snapshot) => info!(
            "Catalog loaded: {} products, {} purchasable combos, {} free spaces",
            snapshot.available_products(None).len(),
            snapshot.purchasable_combos(None).len(),
            snapshot.free_spaces().len()
        ),
        Err(e) => warn!("Initial catalog load failed: {}", e),
    }

    let (event_tx, mut event_rx) = mpsc::channel(EVENT_BUFFER);
    let poller = Poller::new(event_tx);
    let _catalog_poll = poller.poll_catalog(catalog_service, config.polling.catalog_interval());
    let _orders_poll = poller.poll_orders(order_service, config.polling.orders_interval());
    let _clock = poller.tick(config.polling.clock_tick());

    let mut board = KitchenBoard::new(config.kitchen.overdue_minutes);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutting down POS terminal");
                break;
            }
            event = event_rx.recv() => {
                let Some(event) = event else { break };
                match event {
                    PosEvent::CatalogRefreshed(snapshot) => {
                        info!("Catalog refreshed: {} products, {} combos", snapshot.products.len(), snapshot.combos.len());
                    }
                    PosEvent::OrdersRefreshed(orders) => {
                        board.handle(PosEvent::OrdersRefreshed(orders));
                        log_queue(&board);
                    }
                    PosEvent::RefreshFailed(reason) => error!("Refresh failed: {}", reason),
                    tick @ PosEvent::Tick(_) => {
                        board.handle(tick);
                    }
                }
            }
        }
    }

    Ok(())
}

fn log_queue(board: &KitchenBoard) {
    let queue = board.active_queue();
    info!("Kitchen queue: {} active orders", queue.len());
    for order in queue {
        let elapsed = format_elapsed(board.elapsed(order));
        if board.is_overdue(order) {
            warn!("#{} {} {} {} (overdue)", order.order_number, order.status, format_money(order.total_amount), elapsed);
        } else {
            info!("#{} {} {} {}", order.order_number, order.status, format_money(order.total_amount), elapsed);
        }
    }
}
