/// `<commit count>-<commit hash>` of the tree the binary was built from.
pub const VERSION: &str = concat!(env!("GIT_COUNT"), "-", env!("GIT_HASH"));

pub fn get_version_string() -> String {
    String::from(VERSION)
}

/// Name of the VM cloned from `prototype` by the pod `pod_name`
pub fn derived_vm_name(prototype: &str, pod_name: &str) -> String {
    format!("{prototype}-{pod_name}")
}
