//! Resource definitions for the `metrics.k8s.io` API, which kube-rs does not
//! ship, plus quantity-string conversions needed to do arithmetic on them.

pub mod quantity;
pub mod v1beta1;

pub use quantity::{QuantityExt, QuantityParseError};
