//! Observability setup: tracing subscriber with text or JSON output and
//! optional OpenTelemetry span export.

pub mod tracing_setup;

pub use tracing_setup::{
    LogFormat, TracingOptions, filter_for_verbosity, init_tracing, shutdown_tracing,
};
