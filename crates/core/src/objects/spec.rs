use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;

/// Instance handed back by the container.
pub type Object = Arc<dyn Any + Send + Sync>;

/// Initial property values applied to a freshly built instance, in
/// configuration order.
pub type PropertyMap = IndexMap<String, Value>;

/// Factory callable producing an instance from constructor parameters.
pub type FactoryFn = Arc<dyn Fn(&[Value]) -> Result<Object, CoreError> + Send + Sync>;

/// Declarative construction recipe: a type name plus initial property values.
///
/// Serializes as a map carrying a `type` entry with every other entry
/// becoming a property, which is the shape definition files use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectConfig {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(flatten)]
    pub properties: PropertyMap,
}

impl ObjectConfig {
    /// Create a configuration with no initial properties.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Builder-style property setter.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Interpret a loosely typed configuration value.
    ///
    /// A string is a bare type name; a map must carry a `type` entry, with
    /// the remaining entries becoming properties in document order. Anything
    /// else is rejected.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::String(type_name) => Ok(Self::new(type_name)),
            Value::Object(map) => {
                let mut properties: PropertyMap = map.into_iter().collect();
                match properties.shift_remove("type") {
                    Some(Value::String(type_name)) => Ok(Self {
                        type_name,
                        properties,
                    }),
                    Some(other) => Err(CoreError::invalid_configuration(format!(
                        "`type` must be a string, got {}",
                        value_kind(&other)
                    ))),
                    None => Err(CoreError::invalid_configuration(
                        "object configuration must contain a `type` entry",
                    )),
                }
            }
            other => Err(CoreError::invalid_configuration(format!(
                "unsupported configuration shape: {}",
                value_kind(&other)
            ))),
        }
    }
}

/// The three recognized construction inputs.
#[derive(Clone)]
pub enum ObjectSpec {
    /// Bare type name, resolved entirely by the container.
    Type(String),
    /// Type name plus initial property values.
    Config(ObjectConfig),
    /// Factory callable invoked through the container.
    Factory(FactoryFn),
}

impl ObjectSpec {
    /// Wrap a closure as a factory spec.
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Object, CoreError> + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(factory))
    }

    /// Interpret a loosely typed configuration value. Factories cannot come
    /// from data, so only the `Type` and `Config` variants are produced.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::String(type_name) => Ok(Self::Type(type_name)),
            other => ObjectConfig::from_value(other).map(Self::Config),
        }
    }
}

impl From<ObjectConfig> for ObjectSpec {
    fn from(config: ObjectConfig) -> Self {
        Self::Config(config)
    }
}

impl From<String> for ObjectSpec {
    fn from(type_name: String) -> Self {
        Self::Type(type_name)
    }
}

impl From<&str> for ObjectSpec {
    fn from(type_name: &str) -> Self {
        Self::Type(type_name.to_string())
    }
}

impl fmt::Debug for ObjectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(type_name) => f.debug_tuple("Type").field(type_name).finish(),
            Self::Config(config) => f.debug_tuple("Config").field(config).finish(),
            Self::Factory(_) => f.debug_tuple("Factory").field(&"<factory>").finish(),
        }
    }
}

/// Human-readable name of a JSON value's shape, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
