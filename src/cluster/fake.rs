//! In-memory stand-in for the Kubernetes API that records every mutating call.

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Pod, PodSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::ResourceExt;
use kube::core::ErrorResponse;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::ClusterApi;
use crate::crd::virtualmachine::VirtualMachine;

type Key = (String, String);

#[derive(Default)]
struct State {
    pods: BTreeMap<Key, Pod>,
    vms: BTreeMap<Key, VirtualMachine>,
    get_vm_error: Option<String>,
    create_error: Option<String>,
    delete_error: Option<String>,
    created: Vec<(String, VirtualMachine)>,
    deleted: Vec<Key>,
}

#[derive(Clone, Default)]
pub struct FakeCluster {
    state: Arc<Mutex<State>>,
}

fn key(namespace: &str, name: &str) -> Key {
    (namespace.to_string(), name.to_string())
}

fn api_error(code: u16, reason: &str, message: String) -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: String::from("Failure"),
        message,
        reason: reason.to_string(),
        code,
    })
}

fn not_found(kind: &str, name: &str) -> kube::Error {
    api_error(404, "NotFound", format!("{kind} \"{name}\" not found"))
}

impl FakeCluster {
    pub fn new() -> Self {
        FakeCluster::default()
    }

    pub fn with_pod(self, namespace: &str, name: &str, node_name: Option<&str>) -> Self {
        let pod = Pod {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..ObjectMeta::default()
            },
            spec: Some(PodSpec {
                node_name: node_name.map(String::from),
                ..PodSpec::default()
            }),
            status: None,
        };
        self.state
            .lock()
            .unwrap()
            .pods
            .insert(key(namespace, name), pod);
        self
    }

    pub fn with_vm(self, namespace: &str, mut vm: VirtualMachine) -> Self {
        vm.metadata.namespace = Some(namespace.to_string());
        self.state
            .lock()
            .unwrap()
            .vms
            .insert(key(namespace, &vm.name_any()), vm);
        self
    }

    pub fn failing_get_vm(self, message: &str) -> Self {
        self.state.lock().unwrap().get_vm_error = Some(message.to_string());
        self
    }

    pub fn failing_create(self, message: &str) -> Self {
        self.state.lock().unwrap().create_error = Some(message.to_string());
        self
    }

    pub fn failing_delete(self, message: &str) -> Self {
        self.state.lock().unwrap().delete_error = Some(message.to_string());
        self
    }

    /// Successful and failed create calls, in order
    pub fn created(&self) -> Vec<(String, VirtualMachine)> {
        self.state.lock().unwrap().created.clone()
    }

    /// Successful and failed delete calls, in order
    pub fn deleted(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().deleted.clone()
    }

    pub fn vm(&self, namespace: &str, name: &str) -> Option<VirtualMachine> {
        self.state
            .lock()
            .unwrap()
            .vms
            .get(&key(namespace, name))
            .cloned()
    }
}

#[async_trait]
impl ClusterApi for FakeCluster {
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod, kube::Error> {
        self.state
            .lock()
            .unwrap()
            .pods
            .get(&key(namespace, name))
            .cloned()
            .ok_or_else(|| not_found("pods", name))
    }

    async fn get_vm(&self, namespace: &str, name: &str) -> Result<VirtualMachine, kube::Error> {
        let state = self.state.lock().unwrap();
        if let Some(message) = &state.get_vm_error {
            return Err(api_error(500, "InternalError", message.clone()));
        }
        state
            .vms
            .get(&key(namespace, name))
            .cloned()
            .ok_or_else(|| not_found("virtualmachines.kubevirt.io", name))
    }

    async fn create_vm(
        &self,
        namespace: &str,
        vm: &VirtualMachine,
    ) -> Result<VirtualMachine, kube::Error> {
        let mut state = self.state.lock().unwrap();
        state.created.push((namespace.to_string(), vm.clone()));
        if let Some(message) = &state.create_error {
            return Err(api_error(500, "InternalError", message.clone()));
        }

        let name = vm.name_any();
        if state.vms.contains_key(&key(namespace, &name)) {
            return Err(api_error(
                409,
                "AlreadyExists",
                format!("virtualmachines.kubevirt.io \"{name}\" already exists"),
            ));
        }
        let mut stored = vm.clone();
        stored.metadata.namespace = Some(namespace.to_string());
        state.vms.insert(key(namespace, &name), stored.clone());
        Ok(stored)
    }

    async fn delete_vm(&self, namespace: &str, name: &str) -> Result<(), kube::Error> {
        let mut state = self.state.lock().unwrap();
        state.deleted.push(key(namespace, name));
        if let Some(message) = &state.delete_error {
            return Err(api_error(500, "InternalError", message.clone()));
        }
        state
            .vms
            .remove(&key(namespace, name))
            .map(|_| ())
            .ok_or_else(|| not_found("virtualmachines.kubevirt.io", name))
    }
}
