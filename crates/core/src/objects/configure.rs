use serde::Serialize;
use serde_json::Value;

use crate::errors::CoreError;
use crate::objects::spec::{value_kind, PropertyMap};

/// Objects that accept named property values after construction.
///
/// Containers apply configuration properties through this seam; anything
/// constructed from a definition file with properties needs an
/// implementation.
pub trait Configurable {
    /// Apply a single named property value. Unknown names should report
    /// [`CoreError::UnknownProperty`].
    fn set_property(&mut self, name: &str, value: &Value) -> Result<(), CoreError>;
}

/// Apply `properties` to `object` in map order, stopping at the first failure.
pub fn configure<T: Configurable>(
    object: &mut T,
    properties: &PropertyMap,
) -> Result<(), CoreError> {
    for (name, value) in properties {
        object.set_property(name, value)?;
    }
    Ok(())
}

/// Snapshot the publicly serialized fields of an object as a property map.
pub fn object_vars<T: Serialize>(object: &T) -> Result<PropertyMap, CoreError> {
    match serde_json::to_value(object)? {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(CoreError::invalid_configuration(format!(
            "expected a struct-like object, got {}",
            value_kind(&other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Serialize)]
    struct CacheSettings {
        ttl: u64,
        prefix: String,
        #[serde(skip)]
        touched: Vec<String>,
    }

    impl Configurable for CacheSettings {
        fn set_property(&mut self, name: &str, value: &Value) -> Result<(), CoreError> {
            self.touched.push(name.to_string());
            match name {
                "ttl" => {
                    self.ttl = value
                        .as_u64()
                        .ok_or_else(|| CoreError::invalid_configuration("ttl must be a number"))?;
                }
                "prefix" => {
                    self.prefix = value
                        .as_str()
                        .ok_or_else(|| {
                            CoreError::invalid_configuration("prefix must be a string")
                        })?
                        .to_string();
                }
                other => {
                    return Err(CoreError::unknown_property(other, "CacheSettings"));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_configure_applies_in_order() {
        let mut settings = CacheSettings::default();
        let mut properties = PropertyMap::new();
        properties.insert("prefix".to_string(), json!("loam"));
        properties.insert("ttl".to_string(), json!(300));

        configure(&mut settings, &properties).unwrap();

        assert_eq!(settings.prefix, "loam");
        assert_eq!(settings.ttl, 300);
        assert_eq!(settings.touched, ["prefix", "ttl"]);
    }

    #[test]
    fn test_configure_stops_at_unknown_property() {
        let mut settings = CacheSettings::default();
        let mut properties = PropertyMap::new();
        properties.insert("ttl".to_string(), json!(60));
        properties.insert("nope".to_string(), json!(true));
        properties.insert("prefix".to_string(), json!("late"));

        let err = configure(&mut settings, &properties).unwrap_err();

        assert!(matches!(err, CoreError::UnknownProperty { ref property, .. } if property == "nope"));
        assert_eq!(settings.ttl, 60);
        assert_eq!(settings.prefix, "");
    }

    #[test]
    fn test_object_vars_exposes_serialized_fields() {
        let settings = CacheSettings {
            ttl: 120,
            prefix: "web".to_string(),
            touched: vec!["ignored".to_string()],
        };

        let vars = object_vars(&settings).unwrap();

        assert_eq!(vars.len(), 2);
        assert_eq!(vars["ttl"], json!(120));
        assert_eq!(vars["prefix"], json!("web"));
    }

    #[test]
    fn test_object_vars_rejects_non_struct() {
        let err = object_vars(&"just a string").unwrap_err();
        assert!(err.is_invalid_configuration());
    }
}
