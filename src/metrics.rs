use lazy_static::lazy_static;
use prometheus::{
    Counter, Encoder, Histogram, TextEncoder, register_counter, register_histogram,
};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("explain_requests_total", "Total number of explain requests").unwrap();
    pub static ref INVALID_SCENARIO_TOTAL: Counter = register_counter!(
        "explain_invalid_scenario_total",
        "Requests rejected for an unknown scenario"
    )
    .unwrap();
    pub static ref MALFORMED_TOTAL: Counter =
        register_counter!("explain_malformed_total", "Requests with an unreadable body").unwrap();
    pub static ref FALLBACK_TOTAL: Counter = register_counter!(
        "explain_fallback_total",
        "Explanations served from the local fallback text"
    )
    .unwrap();
    pub static ref GENERATION_LATENCY: Histogram = register_histogram!(
        "explain_generation_latency_seconds",
        "Generation service call latency in seconds"
    )
    .unwrap();
}

// Render every registered metric in the Prometheus text format
pub fn render() -> Result<String, String> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| e.to_string())?;
    String::from_utf8(buffer).map_err(|e| e.to_string())
}
