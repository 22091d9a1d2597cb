//! Tracing setup for the verification stub.
//!
//! Logs go to stderr: stdout carries the JSON result the caller parses.
//! `RUST_LOG` sets the filter and `LOG_FORMAT=json` switches to JSON lines.
//! With the `otel` feature, spans are also exported over OTLP when
//! `OTEL_ENABLED` or `OTEL_EXPORTER_OTLP_ENDPOINT` is set.

use std::env;

use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "face_verifier=warn";

fn json_logs() -> bool {
    env::var("LOG_FORMAT")
        .map(|value| value.trim().eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn fmt_layer<S>() -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    if json_logs() {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer());

    #[cfg(feature = "otel")]
    let registry = registry.with(otel::layer());

    registry.init();
}

/// Flush exported spans before the process exits.
pub fn shutdown_tracing() {
    #[cfg(feature = "otel")]
    otel::shutdown();
}

#[cfg(feature = "otel")]
mod otel {
    use std::env;
    use std::sync::OnceLock;

    use opentelemetry::KeyValue;
    use opentelemetry::global;
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::Resource;
    use opentelemetry_sdk::trace::{SdkTracer, SdkTracerProvider};
    use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
    use tracing::Subscriber;
    use tracing_opentelemetry::OpenTelemetryLayer;
    use tracing_subscriber::registry::LookupSpan;

    static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

    fn is_enabled() -> bool {
        if let Ok(enabled) = env::var("OTEL_ENABLED")
            && matches!(enabled.trim(), "true" | "1" | "yes")
        {
            return true;
        }
        env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    }

    fn service_name() -> String {
        env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "face-verifier".to_string())
    }

    pub(super) fn layer<S>() -> Option<OpenTelemetryLayer<S, SdkTracer>>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        if !is_enabled() {
            return None;
        }

        let mut exporter_builder = opentelemetry_otlp::SpanExporter::builder().with_http();
        if let Ok(endpoint) = env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                exporter_builder = exporter_builder.with_endpoint(endpoint.to_string());
            }
        }

        // The subscriber is not installed yet, so this is the only place
        // an exporter failure can be reported.
        let exporter = match exporter_builder.build() {
            Ok(exporter) => exporter,
            Err(err) => {
                eprintln!("OTLP exporter disabled: {err}");
                return None;
            }
        };

        let resource = Resource::builder()
            .with_attribute(KeyValue::new(SERVICE_NAME, service_name()))
            .with_attribute(KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")))
            .build();

        let tracer_provider = SdkTracerProvider::builder()
            .with_batch_exporter(exporter)
            .with_resource(resource)
            .build();

        let _ = TRACER_PROVIDER.set(tracer_provider.clone());
        global::set_tracer_provider(tracer_provider.clone());

        Some(OpenTelemetryLayer::new(tracer_provider.tracer("face_verifier")))
    }

    pub(super) fn shutdown() {
        if let Some(provider) = TRACER_PROVIDER.get()
            && let Err(err) = provider.shutdown()
        {
            tracing::warn!("Failed to shutdown tracer provider: {err}");
        }
    }
}
