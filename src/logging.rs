use crate::errors::Error;
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{Tracer, TracerProvider};
use opentelemetry_sdk::{Resource, trace};
use std::env;
use tracing::info;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Layer, Registry};

const SERVICE_NAME: &str = "vmctl";

/// Create a tracing_subscriber layer which exports traces to the given OTLP endpoint.
/// In addition to the tracing_subscriber layer, it also returns a TracerProvider which should be
/// kept in scope in order for the exporter to stay alive. Dropping that will cause the exporter
/// to silenty stop sending traces
fn setup_otlp_layer(
    endpoint: &str,
) -> Result<(TracerProvider, OpenTelemetryLayer<Registry, Tracer>), Error> {
    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .http()
        .with_endpoint(endpoint)
        .build_span_exporter()?;

    let provider = TracerProvider::builder()
        .with_simple_exporter(otlp_exporter)
        .with_config(
            trace::config().with_resource(Resource::new(vec![KeyValue::new(
                "service.name",
                SERVICE_NAME,
            )])),
        )
        .build();

    let tracer = provider.tracer(SERVICE_NAME);
    let layer = tracing_opentelemetry::layer().with_tracer(tracer);

    Ok((provider, layer))
}

/// Install the global subscriber: a compact console layer filtered by `RUST_LOG`, plus OTLP
/// span export when `OTLP_ENDPOINT` is set.
pub fn setup_tracing() -> Result<Option<TracerProvider>, Error> {
    let console_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(tracing_subscriber::EnvFilter::from_default_env());

    let subscriber = Registry::default();
    let mut layers = Vec::new();

    let mut provider = None;
    let endpoint = env::var("OTLP_ENDPOINT").ok();
    if let Some(endpoint) = endpoint.as_deref() {
        let (tracer_provider, exporter_layer) = setup_otlp_layer(endpoint)?;
        layers.push(
            exporter_layer
                .with_filter(tracing_subscriber::EnvFilter::from_default_env())
                .boxed(),
        );
        provider = Some(tracer_provider);
    }
    layers.push(console_layer.boxed());
    tracing::subscriber::set_global_default(subscriber.with(layers))?;

    if let Some(endpoint) = endpoint {
        info!("Exporting traces to {}", endpoint);
    }

    Ok(provider)
}
