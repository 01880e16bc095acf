use crate::ResourceKey;
use duplicate::duplicate_item;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

pub const KIND_DEPLOYMENT: &str = "Deployment";
pub const KIND_CONFIG_MAP: &str = "ConfigMap";
pub const KIND_SECRET: &str = "Secret";

// Sorted
const BUILTIN_API_VERSIONS: &[&str] = &[
    "admissionregistration.k8s.io/v1",
    "admissionregistration.k8s.io/v1beta1",
    "apiextensions.k8s.io/v1",
    "apiextensions.k8s.io/v1beta1",
    "apiregistration.k8s.io/v1",
    "apiregistration.k8s.io/v1beta1",
    "apps/v1",
    "authentication.k8s.io/v1",
    "authentication.k8s.io/v1beta1",
    "authorization.k8s.io/v1",
    "authorization.k8s.io/v1beta1",
    "autoscaling/v1",
    "autoscaling/v2beta1",
    "autoscaling/v2beta2",
    "batch/v1",
    "batch/v1beta1",
    "certificates.k8s.io/v1beta1",
    "coordination.k8s.io/v1",
    "coordination.k8s.io/v1beta1",
    "extensions/v1beta1",
    "internal.autoscaling.k8s.io/v1alpha1",
    "metrics.k8s.io/v1beta1",
    "networking.k8s.io/v1",
    "networking.k8s.io/v1beta1",
    "node.k8s.io/v1beta1",
    "policy/v1beta1",
    "rbac.authorization.k8s.io/v1",
    "rbac.authorization.k8s.io/v1beta1",
    "scheduling.k8s.io/v1",
    "scheduling.k8s.io/v1beta1",
    "storage.k8s.io/v1",
    "storage.k8s.io/v1beta1",
    "v1",
];

static BUILTIN_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| BUILTIN_API_VERSIONS.iter().copied().collect());

/// Api versions, served by kubernetes itself, sorted
pub fn builtin_api_versions() -> &'static [&'static str] {
    BUILTIN_API_VERSIONS
}

/// Exact match, `Apps/v1` or `apps/v2` are not builtin
pub fn is_builtin_api_version(api_version: &str) -> bool {
    BUILTIN_SET.contains(api_version)
}

impl ResourceKey {
    /// Only `api_version` is checked
    pub fn is_kubernetes_builtin_resource(&self) -> bool {
        is_builtin_api_version(&self.api_version)
    }

    #[duplicate_item(
        method kind_name;
        [is_deployment] [KIND_DEPLOYMENT];
        [is_config_map] [KIND_CONFIG_MAP];
        [is_secret] [KIND_SECRET]
    )]
    /// Custom resources may reuse builtin kind names, those are not matched
    pub fn method(&self) -> bool {
        self.kind == kind_name && self.is_kubernetes_builtin_resource()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_api_version(api_version: &str) -> ResourceKey {
        ResourceKey {
            api_version: api_version.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn table_sorted() {
        assert!(BUILTIN_API_VERSIONS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(BUILTIN_SET.len(), BUILTIN_API_VERSIONS.len());
    }

    #[test]
    fn membership() {
        assert!(with_api_version("apps/v1").is_kubernetes_builtin_resource());
        assert!(with_api_version("v1").is_kubernetes_builtin_resource());
        assert!(with_api_version("batch/v1beta1").is_kubernetes_builtin_resource());
        assert!(!with_api_version("apps/v2").is_kubernetes_builtin_resource());
        assert!(!with_api_version("Apps/v1").is_kubernetes_builtin_resource());
        assert!(!with_api_version("apps").is_kubernetes_builtin_resource());
        assert!(!with_api_version("cert-manager.io/v1").is_kubernetes_builtin_resource());
        assert!(!ResourceKey::default().is_kubernetes_builtin_resource());
    }

    #[test]
    fn deployment() {
        assert!(ResourceKey::new("apps/v1", "Deployment", "", "").is_deployment());
        assert!(ResourceKey::new("extensions/v1beta1", "Deployment", "prod", "web").is_deployment());
        assert!(!ResourceKey::new("custom.io/v1", "Deployment", "", "").is_deployment());
        assert!(!ResourceKey::new("v1", "Pod", "", "").is_deployment());
        assert!(!ResourceKey::new("apps/v1", "deployment", "", "").is_deployment());
    }

    #[test]
    fn config_map() {
        assert!(ResourceKey::new("v1", "ConfigMap", "prod", "settings").is_config_map());
        assert!(!ResourceKey::new("v1", "Secret", "prod", "settings").is_config_map());
        assert!(!ResourceKey::new("custom.io/v1", "ConfigMap", "", "").is_config_map());
    }

    #[test]
    fn secret() {
        assert!(ResourceKey::new("v1", "Secret", "prod", "token").is_secret());
        assert!(!ResourceKey::new("bitnami.com/v1alpha1", "Secret", "", "").is_secret());
        assert!(!ResourceKey::new("v1", "ConfigMap", "", "").is_secret());
    }

    #[test]
    fn predicate_per_kind() {
        let predicates: [(&str, fn(&ResourceKey) -> bool); 3] = [
            (KIND_DEPLOYMENT, ResourceKey::is_deployment),
            (KIND_CONFIG_MAP, ResourceKey::is_config_map),
            (KIND_SECRET, ResourceKey::is_secret),
        ];
        for (kind, predicate) in predicates.iter() {
            for (other, other_predicate) in predicates.iter() {
                let key = ResourceKey::new("v1", *kind, "prod", "x");
                assert_eq!(other_predicate(&key), kind == other, "{} as {}", kind, other);
            }
            assert!(predicate(&ResourceKey::new("apps/v1", *kind, "", "")));
            assert!(!predicate(&ResourceKey::new("custom.io/v1", *kind, "", "")));
        }
    }

    #[test]
    fn zero_is_nothing() {
        let zero = ResourceKey::default();
        assert!(!zero.is_deployment());
        assert!(!zero.is_config_map());
        assert!(!zero.is_secret());
    }
}
