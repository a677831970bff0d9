use clap::Parser;
use std::path::PathBuf;

use crate::config::VmctlConfig;
use crate::utils::strings::VERSION;

pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_POD_NAME_PATH: &str = "/etc/podinfo/name";

/// Run a node-pinned clone of a prototype VirtualMachine for the lifetime of this process
#[derive(Parser, Debug)]
#[command(name = "vmctl", version = VERSION)]
pub struct Args {
    /// Name of the prototype VirtualMachine
    pub prototype: String,

    #[arg(
        short,
        long,
        env = "VMCTL_NAMESPACE",
        default_value = DEFAULT_NAMESPACE,
        help = "Namespace to create VirtualMachine in"
    )]
    pub namespace: String,

    #[arg(
        long,
        help = "Namespace of prototype VirtualMachine. Defaults to <namespace>"
    )]
    pub proto_namespace: Option<String>,

    #[arg(
        long,
        env = "NODE_NAME",
        help = "Name under which the node is registered in Kubernetes, where this vmctl instance is running on"
    )]
    pub hostname_override: Option<String>,

    #[arg(
        long,
        env = "VMCTL_POD_NAME_PATH",
        value_hint = clap::ValueHint::FilePath,
        default_value = DEFAULT_POD_NAME_PATH,
        help = "File containing the name of the pod vmctl runs in"
    )]
    pub pod_name_path: PathBuf,

    #[arg(
        long,
        value_hint = clap::ValueHint::FilePath,
        help = "Path to kubeconfig file (defaults to cluster config or ~/.kube/config)"
    )]
    pub kubeconfig: Option<PathBuf>,

    #[arg(
        long,
        help = "Print the derived VirtualMachine as YAML instead of creating it"
    )]
    pub dry_run: bool,
}

impl Args {
    pub fn config(&self) -> VmctlConfig {
        VmctlConfig {
            prototype_name: self.prototype.clone(),
            prototype_namespace: self.proto_namespace.clone(),
            namespace: self.namespace.clone(),
            hostname_override: self.hostname_override.clone(),
            pod_name_path: self.pod_name_path.clone(),
        }
    }
}
