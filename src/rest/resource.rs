//! Embedded resource pointers.
//!
//! Many objects returned by the V2 API reference their sub-resources by
//! URL instead of embedding them inline. An order, for example, carries
//! `{"products": {"url": "...", "resource": "/orders/123/products"}}`.
//! [`ResourceRef`] is the decoded form of that pair; the hydration
//! machinery in [`crate::rest::hydration`] resolves it with a follow-up
//! request.

use serde::{Deserialize, Serialize};

/// A pointer to a sub-resource fetchable by a follow-up request.
///
/// The `url` is fully qualified and used verbatim; `resource` is an
/// informational tag describing the target collection and is never used
/// for dispatch. A `ResourceRef` is immutable once decoded.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::ResourceRef;
///
/// let json = r#"{
///     "url": "https://api.bigcommerce.com/stores/abc/v2/orders/118/products",
///     "resource": "/orders/118/products"
/// }"#;
///
/// let pointer: ResourceRef = serde_json::from_str(json).unwrap();
/// assert!(pointer.url.ends_with("/orders/118/products"));
/// assert_eq!(pointer.resource, "/orders/118/products");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ResourceRef {
    /// Fully qualified URL of the sub-resource collection.
    #[serde(default)]
    pub url: String,

    /// Informational tag naming the resource kind.
    #[serde(default)]
    pub resource: String,
}

impl ResourceRef {
    /// Returns the pointer URL if it is usable for a follow-up fetch.
    ///
    /// Orders decoded from sparse payloads can carry an empty pointer;
    /// hydration skips those entities instead of issuing a bad request.
    #[must_use]
    pub fn target_url(&self) -> Option<&str> {
        if self.url.is_empty() {
            None
        } else {
            Some(&self.url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_ref_deserialization() {
        let json = r#"{"url": "https://example.com/v2/orders/5/coupons", "resource": "/orders/5/coupons"}"#;
        let pointer: ResourceRef = serde_json::from_str(json).unwrap();

        assert_eq!(pointer.url, "https://example.com/v2/orders/5/coupons");
        assert_eq!(pointer.resource, "/orders/5/coupons");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let pointer: ResourceRef = serde_json::from_str("{}").unwrap();

        assert_eq!(pointer, ResourceRef::default());
        assert_eq!(pointer.target_url(), None);
    }

    #[test]
    fn test_target_url_present_for_non_empty_pointer() {
        let pointer = ResourceRef {
            url: "https://example.com/v2/orders/5/products".to_string(),
            resource: "/orders/5/products".to_string(),
        };

        assert_eq!(
            pointer.target_url(),
            Some("https://example.com/v2/orders/5/products")
        );
    }
}
