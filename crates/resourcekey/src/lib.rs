//! Reversible identity of cluster objects
//!
//! [`ResourceKey`] is built from `apiVersion`, `kind`, `namespace` and `name` of an object,
//! and is encoded as `apiVersion:kind:namespace:name`.

mod error;
pub use error::*;
mod key;
pub use key::{ResourceKey, DELIMITER};
mod builtin;
pub use builtin::{
    builtin_api_versions, is_builtin_api_version, KIND_CONFIG_MAP, KIND_DEPLOYMENT, KIND_SECRET,
};
mod object;
pub use object::{ResourceObject, Typed};
