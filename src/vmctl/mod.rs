use kube::ResourceExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use crate::cluster::ClusterApi;
use crate::config::VmctlConfig;
use crate::crd::virtualmachine::VirtualMachine;
use crate::errors::Error;
use crate::utils::traits::virtualmachine::VirtualMachineExt;

pub mod derive;
pub mod identity;

use derive::derive_vm;

/// Where a run currently is. Runs only ever move forward through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    /// Looking up our pod and node, fetching the prototype and creating the clone
    Resolving,
    /// Clone created, waiting for the stop signal
    Running,
    Cleaning,
    Done,
}

/// Clones a prototype VirtualMachine onto the node this pod runs on for as long as the run lasts
pub struct Vmctl<C> {
    cluster: C,
    config: VmctlConfig,
    phase: Phase,
}

impl<C: ClusterApi> Vmctl<C> {
    pub fn new(cluster: C, config: VmctlConfig) -> Self {
        Vmctl {
            cluster,
            config,
            phase: Phase::Init,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn enter(&mut self, phase: Phase) {
        debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Create the clone, wait until `stop` is cancelled, then delete the clone.
    ///
    /// Errors before the clone exists end the run immediately. A failed delete is only logged,
    /// the run still counts as successful.
    #[instrument(skip_all, fields(prototype = %self.config.prototype_name, namespace = %self.config.namespace))]
    pub async fn run(&mut self, stop: CancellationToken) -> Result<(), Error> {
        self.enter(Phase::Resolving);
        let vm = match self.launch().await {
            Ok(vm) => vm,
            Err(e) => {
                self.enter(Phase::Done);
                return Err(e);
            }
        };
        self.enter(Phase::Running);

        stop.cancelled().await;

        self.enter(Phase::Cleaning);
        self.cleanup(&vm.name_any()).await;
        self.enter(Phase::Done);
        Ok(())
    }

    /// Resolve and derive the clone without creating anything
    #[instrument(skip_all, fields(prototype = %self.config.prototype_name))]
    pub async fn preview(&mut self) -> Result<VirtualMachine, Error> {
        self.enter(Phase::Resolving);
        let result = self.derive().await;
        self.enter(Phase::Done);
        result
    }

    async fn launch(&self) -> Result<VirtualMachine, Error> {
        let vm = self.derive().await?;
        let name = vm.name_any();
        let namespace = &self.config.namespace;

        self.cluster
            .create_vm(namespace, &vm)
            .await
            .map_err(|source| Error::CreateFailed {
                namespace: namespace.clone(),
                name: name.clone(),
                source,
            })?;

        info!(
            running = vm.is_running(),
            node_selector = ?vm.node_selector(),
            "Virtual machine launched: {}/{}",
            namespace,
            name
        );
        Ok(vm)
    }

    async fn derive(&self) -> Result<VirtualMachine, Error> {
        let pod_name = identity::read_pod_name(&self.config.pod_name_path)?;
        let node_name = self.node_name(&pod_name).await?;
        info!("Running on node: {}", node_name);

        let prototype = self.fetch_prototype().await?;
        Ok(derive_vm(&prototype, &pod_name, &node_name))
    }

    async fn node_name(&self, pod_name: &str) -> Result<String, Error> {
        match self.config.hostname_override() {
            Some(node_name) => Ok(node_name.to_string()),
            None => {
                identity::resolve_node_name(&self.cluster, &self.config.namespace, pod_name).await
            }
        }
    }

    #[instrument(skip(self))]
    async fn fetch_prototype(&self) -> Result<VirtualMachine, Error> {
        let namespace = self.config.prototype_namespace();
        let name = &self.config.prototype_name;

        self.cluster
            .get_vm(namespace, name)
            .await
            .map_err(|source| Error::PrototypeNotFound {
                namespace: namespace.to_string(),
                name: name.clone(),
                source,
            })
    }

    async fn cleanup(&self, name: &str) {
        let namespace = &self.config.namespace;
        match self.cluster.delete_vm(namespace, name).await {
            Ok(()) => info!("VM deleted: {}/{}", namespace, name),
            Err(source) => {
                let err = Error::DeleteFailed {
                    namespace: namespace.clone(),
                    name: name.to_string(),
                    source,
                };
                error!("{}", err);
            }
        }
    }
}
