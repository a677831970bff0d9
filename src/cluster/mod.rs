use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{DeleteParams, PostParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use std::path::PathBuf;
use tracing::{debug, instrument};

use crate::crd::virtualmachine::VirtualMachine;
use crate::errors::Error;

#[cfg(test)]
pub mod fake;

const FIELD_MANAGER: &str = "vmctl";

/// The Kubernetes API calls vmctl makes. Every call is a single request, never retried.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod, kube::Error>;
    async fn get_vm(&self, namespace: &str, name: &str) -> Result<VirtualMachine, kube::Error>;
    async fn create_vm(
        &self,
        namespace: &str,
        vm: &VirtualMachine,
    ) -> Result<VirtualMachine, kube::Error>;
    async fn delete_vm(&self, namespace: &str, name: &str) -> Result<(), kube::Error>;
}

pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    pub fn new(client: Client) -> Self {
        KubeCluster { client }
    }

    /// Connect using the given kubeconfig file, or the in-cluster / default configuration
    #[instrument]
    pub async fn connect(kubeconfig: Option<PathBuf>) -> Result<Self, Error> {
        let client = match kubeconfig {
            Some(path) => {
                debug!("Loading kubeconfig from {}", path.display());
                let kubeconfig = Kubeconfig::read_from(&path)?;
                let config =
                    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                        .await?;
                Client::try_from(config)?
            }
            None => Client::try_default().await?,
        };
        Ok(KubeCluster::new(client))
    }

    fn vms(&self, namespace: &str) -> Api<VirtualMachine> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl ClusterApi for KubeCluster {
    #[instrument(skip(self))]
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod, kube::Error> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        pods.get(name).await
    }

    #[instrument(skip(self))]
    async fn get_vm(&self, namespace: &str, name: &str) -> Result<VirtualMachine, kube::Error> {
        self.vms(namespace).get(name).await
    }

    #[instrument(skip(self, vm), fields(name = ?vm.metadata.name))]
    async fn create_vm(
        &self,
        namespace: &str,
        vm: &VirtualMachine,
    ) -> Result<VirtualMachine, kube::Error> {
        self.vms(namespace)
            .create(
                &PostParams {
                    dry_run: false,
                    field_manager: Some(String::from(FIELD_MANAGER)),
                },
                vm,
            )
            .await
    }

    #[instrument(skip(self))]
    async fn delete_vm(&self, namespace: &str, name: &str) -> Result<(), kube::Error> {
        self.vms(namespace)
            .delete(name, &DeleteParams::default())
            .await?;
        Ok(())
    }
}
