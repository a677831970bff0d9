// Scheduling
pub const HOSTNAME_LABEL: &str = "kubernetes.io/hostname";

// Derived VM annotations
pub const PROTOTYPE_ANNOTATION: &str = "vmctl.kubevirt.io/prototype";
pub const POD_ANNOTATION: &str = "vmctl.kubevirt.io/pod";
