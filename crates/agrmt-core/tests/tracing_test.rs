use agrmt_core::config::ObservabilityConfig;
use agrmt_core::tracing_setup::{self, spans::names};

#[test]
fn repeated_initialization_is_harmless() {
    tracing_setup::init_tracing_from_config(&ObservabilityConfig {
        log_level: "debug".to_string(),
        json: true,
    });
    tracing_setup::init_tracing_from_config(&ObservabilityConfig::default());
    tracing_setup::init_tracing();
    tracing::info!("tracing initialized");
}

#[test]
fn span_macros_use_named_spans() {
    let span = agrmt_core::batch_span!(10usize, false);
    if let Some(meta) = span.metadata() {
        assert_eq!(meta.name(), names::BATCH);
    }
    let span = agrmt_core::agreement_span!(7usize);
    if let Some(meta) = span.metadata() {
        assert_eq!(meta.name(), names::AGREEMENT);
    }
}
