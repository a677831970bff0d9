use kube::ResourceExt;

use crate::crd::virtualmachine::VirtualMachine;
use crate::labels_and_annotations::{HOSTNAME_LABEL, POD_ANNOTATION, PROTOTYPE_ANNOTATION};
use crate::utils::strings::derived_vm_name;
use crate::utils::traits::virtualmachine::VirtualMachineExt;

/// Build the running, node-pinned clone of `prototype` owned by the pod `pod_name`.
///
/// Only the spec is carried over. The clone gets fresh metadata, so owner references,
/// resource version and status of the prototype never leak into it.
pub fn derive_vm(prototype: &VirtualMachine, pod_name: &str, node_name: &str) -> VirtualMachine {
    let prototype_name = prototype.name_any();
    let mut vm = VirtualMachine::new(
        &derived_vm_name(&prototype_name, pod_name),
        prototype.spec.clone(),
    );

    vm.annotations_mut()
        .insert(String::from(PROTOTYPE_ANNOTATION), prototype_name);
    vm.annotations_mut()
        .insert(String::from(POD_ANNOTATION), pod_name.to_string());

    vm.set_running();
    vm.node_selector_mut()
        .insert(String::from(HOSTNAME_LABEL), node_name.to_string());
    vm
}
