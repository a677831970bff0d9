use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Template for the VirtualMachineInstance a VirtualMachine launches.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineInstanceTemplateSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<VirtualMachineInstanceSpec>,
}

#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineInstanceSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,

    // domain, volumes, networks, affinity, ...
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// Only the fields vmctl touches are modelled. Everything else in the spec is carried through
/// `other` untouched, so copying a spec never drops configuration KubeVirt knows about.
///
/// The CRD itself is owned by KubeVirt, hence no schema.
#[derive(CustomResource, Serialize, Deserialize, Default, Debug, PartialEq, Clone)]
#[kube(
    group = "kubevirt.io",
    version = "v1",
    kind = "VirtualMachine",
    derive = "PartialEq",
    derive = "Default",
    shortname = "vm",
    namespaced,
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,

    // Mutually exclusive with `running`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_strategy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<VirtualMachineInstanceTemplateSpec>,

    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}
