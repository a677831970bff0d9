use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

use crate::cluster::ClusterApi;
use crate::errors::Error;

/// Read the name of the pod we are running in, as exposed by the downward API volume at `path`
#[instrument]
pub fn read_pod_name(path: &Path) -> Result<String, Error> {
    let contents = fs::read_to_string(path).map_err(|e| Error::IdentityUnavailable {
        path: path.to_owned(),
        reason: e.to_string(),
    })?;

    let name = contents.trim_end();
    debug!("Pod name: {}", name);
    Ok(name.to_string())
}

/// Find the node the given pod has been scheduled to. A pod not bound to a node yet yields an
/// empty name.
#[instrument(skip(cluster))]
pub async fn resolve_node_name(
    cluster: &impl ClusterApi,
    namespace: &str,
    pod_name: &str,
) -> Result<String, Error> {
    let pod = cluster
        .get_pod(namespace, pod_name)
        .await
        .map_err(|e| Error::NodeResolutionFailed {
            namespace: namespace.to_string(),
            pod: pod_name.to_string(),
            reason: e.to_string(),
        })?;

    Ok(pod
        .spec
        .and_then(|spec| spec.node_name)
        .unwrap_or_default())
}
