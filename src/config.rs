use std::path::PathBuf;

/// Everything a single vmctl run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmctlConfig {
    pub prototype_name: String,
    /// Falls back to `namespace` when unset
    pub prototype_namespace: Option<String>,
    /// Namespace the derived VM is created in, and where our own pod lives
    pub namespace: String,
    /// Node to pin the derived VM to instead of the node our pod runs on
    pub hostname_override: Option<String>,
    pub pod_name_path: PathBuf,
}

impl VmctlConfig {
    pub fn prototype_namespace(&self) -> &str {
        self.prototype_namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .unwrap_or(&self.namespace)
    }

    pub fn hostname_override(&self) -> Option<&str> {
        self.hostname_override
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> VmctlConfig {
        VmctlConfig {
            prototype_name: String::from("vm-a"),
            prototype_namespace: None,
            namespace: String::from("target"),
            hostname_override: None,
            pod_name_path: PathBuf::from("/etc/podinfo/name"),
        }
    }

    #[test]
    fn prototype_namespace_defaults_to_namespace() {
        assert_eq!(config().prototype_namespace(), "target");

        let empty = VmctlConfig {
            prototype_namespace: Some(String::new()),
            ..config()
        };
        assert_eq!(empty.prototype_namespace(), "target");

        let explicit = VmctlConfig {
            prototype_namespace: Some(String::from("templates")),
            ..config()
        };
        assert_eq!(explicit.prototype_namespace(), "templates");
    }

    #[test]
    fn empty_hostname_override_is_ignored() {
        let empty = VmctlConfig {
            hostname_override: Some(String::new()),
            ..config()
        };
        assert_eq!(empty.hostname_override(), None);

        let set = VmctlConfig {
            hostname_override: Some(String::from("node-1")),
            ..config()
        };
        assert_eq!(set.hostname_override(), Some("node-1"));
    }
}
