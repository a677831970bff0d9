use crate::crd::virtualmachine::VirtualMachine;
use std::collections::BTreeMap;

pub trait VirtualMachineExt {
    fn is_running(&self) -> bool;
    fn set_running(&mut self);
    fn node_selector(&self) -> Option<&BTreeMap<String, String>>;
    /// Node selector of the VMI template, creating the template and the map if missing
    fn node_selector_mut(&mut self) -> &mut BTreeMap<String, String>;
}

impl VirtualMachineExt for VirtualMachine {
    fn is_running(&self) -> bool {
        self.spec.running == Some(true)
    }

    fn set_running(&mut self) {
        self.spec.running = Some(true);
        self.spec.run_strategy = None;
    }

    fn node_selector(&self) -> Option<&BTreeMap<String, String>> {
        self.spec
            .template
            .as_ref()
            .and_then(|template| template.spec.as_ref())
            .and_then(|spec| spec.node_selector.as_ref())
    }

    fn node_selector_mut(&mut self) -> &mut BTreeMap<String, String> {
        self.spec
            .template
            .get_or_insert_with(Default::default)
            .spec
            .get_or_insert_with(Default::default)
            .node_selector
            .get_or_insert_with(BTreeMap::new)
    }
}
