mod server;

use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry};

pub use server::metrics_handler;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Scraped via GET /metrics on the main HTTP server. Covers order placement
// outcomes and transaction latency.
//
// ============================================================================

/// Central metrics registry for the service.
pub struct Metrics {
    registry: Registry,

    pub orders_placed: IntCounter,
    pub orders_rejected: IntCounterVec,
    pub order_placement_duration: Histogram,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_placed = IntCounter::new(
            "orders_placed_total",
            "Total orders placed successfully",
        )?;
        registry.register(Box::new(orders_placed.clone()))?;

        let orders_rejected = IntCounterVec::new(
            Opts::new("orders_rejected_total", "Total rejected order placements"),
            &["reason"],
        )?;
        registry.register(Box::new(orders_rejected.clone()))?;

        let order_placement_duration = Histogram::with_opts(
            HistogramOpts::new(
                "order_placement_duration_seconds",
                "Order placement transaction duration",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
        )?;
        registry.register(Box::new(order_placement_duration.clone()))?;

        Ok(Self {
            registry,
            orders_placed,
            orders_rejected,
            order_placement_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record one placement attempt. `reason` is None on success.
    pub fn record_order_placement(&self, duration_secs: f64, reason: Option<&str>) {
        match reason {
            None => self.orders_placed.inc(),
            Some(reason) => self.orders_rejected.with_label_values(&[reason]).inc(),
        }
        self.order_placement_duration.observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        assert!(metrics.registry.gather().len() > 0);
    }

    #[test]
    fn test_record_successful_placement() {
        let metrics = Metrics::new().unwrap();
        metrics.record_order_placement(0.05, None);

        let gathered = metrics.registry.gather();
        let placed = gathered
            .iter()
            .find(|m| m.name() == "orders_placed_total")
            .unwrap();
        assert_eq!(placed.metric[0].counter.value, Some(1.0));
    }

    #[test]
    fn test_record_rejections_by_reason() {
        let metrics = Metrics::new().unwrap();
        metrics.record_order_placement(0.01, Some("validation"));
        metrics.record_order_placement(0.02, Some("missing_products"));
        metrics.record_order_placement(0.03, Some("validation"));

        let gathered = metrics.registry.gather();
        let rejected = gathered
            .iter()
            .find(|m| m.name() == "orders_rejected_total")
            .unwrap();
        assert_eq!(rejected.metric.len(), 2); // Two distinct reason labels
    }
}
