use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    // Local identity
    #[error("unable to find pod name in {path:?}: {reason}")]
    IdentityUnavailable { path: PathBuf, reason: String },
    #[error("unable to get pod {namespace}/{pod}: {reason}")]
    NodeResolutionFailed {
        namespace: String,
        pod: String,
        reason: String,
    },

    // VirtualMachine lifecycle
    #[error("unable to fetch prototype VM {namespace}/{name}: {source}")]
    PrototypeNotFound {
        namespace: String,
        name: String,
        source: kube::Error,
    },
    #[error("unable to create VM {namespace}/{name}: {source}")]
    CreateFailed {
        namespace: String,
        name: String,
        source: kube::Error,
    },
    #[error("unable to delete VM {namespace}/{name}: {source}")]
    DeleteFailed {
        namespace: String,
        name: String,
        source: kube::Error,
    },

    // Kubernetes
    #[error("Kubernetes error {0}")]
    Kube(#[from] kube::Error),
    #[error("kubeconfig error {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    // Misc libs
    #[error("YAML error {0}")]
    Yaml(#[from] serde_yaml::Error),

    // Process
    #[error("Failed to register signal handler: {0}")]
    Signal(#[from] std::io::Error),

    // Tracing
    #[error("Failed to install tracing subscriber: {0}")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error("Failed to set up OTLP exporter: {0}")]
    Otlp(#[from] opentelemetry::trace::TraceError),
}
