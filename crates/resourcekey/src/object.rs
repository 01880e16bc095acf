use crate::ResourceKey;
use k8s_openapi::{apimachinery::pkg::apis::meta::v1::ObjectMeta, Metadata};
use serde_json::Value;

/// Object, from which [`ResourceKey`] may be built
///
/// Missing fields are reported as empty strings.
pub trait ResourceObject {
    fn api_version(&self) -> &str;
    fn kind(&self) -> &str;
    fn namespace(&self) -> &str;
    fn name(&self) -> &str;
}

fn str_field<'a>(value: &'a Value, field: &str) -> &'a str {
    value.get(field).and_then(Value::as_str).unwrap_or("")
}

fn metadata_field<'a>(value: &'a Value, field: &str) -> &'a str {
    value
        .get("metadata")
        .map(|metadata| str_field(metadata, field))
        .unwrap_or("")
}

/// Unstructured object, as found in manifests
impl ResourceObject for Value {
    fn api_version(&self) -> &str {
        str_field(self, "apiVersion")
    }
    fn kind(&self) -> &str {
        str_field(self, "kind")
    }
    fn namespace(&self) -> &str {
        metadata_field(self, "namespace")
    }
    fn name(&self) -> &str {
        metadata_field(self, "name")
    }
}

/// Typed object from `k8s_openapi`
pub struct Typed<'a, T>(pub &'a T);

impl<T> ResourceObject for Typed<'_, T>
where
    T: Metadata<Ty = ObjectMeta>,
{
    fn api_version(&self) -> &str {
        T::API_VERSION
    }
    fn kind(&self) -> &str {
        T::KIND
    }
    fn namespace(&self) -> &str {
        self.0.metadata().namespace.as_deref().unwrap_or("")
    }
    fn name(&self) -> &str {
        self.0.metadata().name.as_deref().unwrap_or("")
    }
}

impl ResourceObject for ResourceKey {
    fn api_version(&self) -> &str {
        &self.api_version
    }
    fn kind(&self) -> &str {
        &self.kind
    }
    fn namespace(&self) -> &str {
        &self.namespace
    }
    fn name(&self) -> &str {
        &self.name
    }
}
