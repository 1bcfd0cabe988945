use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::CoreError;
use crate::objects::spec::{FactoryFn, Object, ObjectSpec, PropertyMap};

/// External dependency-injection seam.
///
/// The bootstrap layer never resolves types itself: construction is
/// delegated to the host container, which owns instantiation and
/// dependency wiring.
pub trait Container: Send + Sync {
    /// Build an instance of `type_name` with the given constructor
    /// parameters and initial property values.
    fn get(
        &self,
        type_name: &str,
        params: &[Value],
        properties: &PropertyMap,
    ) -> Result<Object, CoreError>;

    /// Invoke a factory callable with the given parameters.
    fn invoke(&self, factory: &FactoryFn, params: &[Value]) -> Result<Object, CoreError>;
}

/// Builds objects from [`ObjectSpec`] values by dispatching to a [`Container`].
pub struct ObjectFactory {
    container: Arc<dyn Container>,
}

impl ObjectFactory {
    /// Create a factory delegating to the given container.
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self { container }
    }

    /// Construct the instance described by `spec`.
    pub fn create(&self, spec: &ObjectSpec, params: &[Value]) -> Result<Object, CoreError> {
        match spec {
            ObjectSpec::Type(type_name) => {
                tracing::trace!(%type_name, "creating object from type name");
                self.container.get(type_name, params, &PropertyMap::new())
            }
            ObjectSpec::Config(config) => {
                tracing::trace!(
                    type_name = %config.type_name,
                    properties = config.properties.len(),
                    "creating object from configuration"
                );
                self.container
                    .get(&config.type_name, params, &config.properties)
            }
            ObjectSpec::Factory(factory) => {
                tracing::trace!("creating object from factory");
                self.container.invoke(factory, params)
            }
        }
    }

    /// Construct an instance from a loosely typed configuration value, the
    /// entry point used for definitions coming out of files.
    pub fn create_from_value(&self, value: Value, params: &[Value]) -> Result<Object, CoreError> {
        let spec = ObjectSpec::from_value(value)?;
        self.create(&spec, params)
    }

    /// The container this factory delegates to.
    pub fn container(&self) -> &Arc<dyn Container> {
        &self.container
    }
}

impl fmt::Debug for ObjectFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectFactory").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::spec::ObjectConfig;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq)]
    enum Call {
        Get {
            type_name: String,
            params: Vec<Value>,
            properties: Vec<(String, Value)>,
        },
        Invoke {
            params: Vec<Value>,
        },
    }

    #[derive(Default)]
    struct RecordingContainer {
        calls: Mutex<Vec<Call>>,
    }

    impl RecordingContainer {
        fn calls(&self) -> Vec<Call> {
            std::mem::take(&mut *self.calls.lock().unwrap())
        }
    }

    impl Container for RecordingContainer {
        fn get(
            &self,
            type_name: &str,
            params: &[Value],
            properties: &PropertyMap,
        ) -> Result<Object, CoreError> {
            self.calls.lock().unwrap().push(Call::Get {
                type_name: type_name.to_string(),
                params: params.to_vec(),
                properties: properties
                    .iter()
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect(),
            });
            Ok(Arc::new(type_name.to_string()) as Object)
        }

        fn invoke(&self, factory: &FactoryFn, params: &[Value]) -> Result<Object, CoreError> {
            self.calls.lock().unwrap().push(Call::Invoke {
                params: params.to_vec(),
            });
            factory(params)
        }
    }

    fn factory() -> (Arc<RecordingContainer>, ObjectFactory) {
        let container = Arc::new(RecordingContainer::default());
        (container.clone(), ObjectFactory::new(container))
    }

    #[test]
    fn test_type_name_dispatches_to_get() {
        let (container, factory) = factory();

        let object = factory
            .create(&ObjectSpec::from("app::db::Connection"), &[json!("ro")])
            .unwrap();

        assert_eq!(
            *object.downcast::<String>().unwrap(),
            "app::db::Connection"
        );
        assert_eq!(
            container.calls(),
            vec![Call::Get {
                type_name: "app::db::Connection".to_string(),
                params: vec![json!("ro")],
                properties: vec![],
            }]
        );
    }

    #[test]
    fn test_config_dispatches_properties() {
        let (container, factory) = factory();
        let config = ObjectConfig::new("app::db::Connection")
            .with_property("dsn", "postgres://127.0.0.1/demo");

        factory.create(&config.into(), &[]).unwrap();

        assert_eq!(
            container.calls(),
            vec![Call::Get {
                type_name: "app::db::Connection".to_string(),
                params: vec![],
                properties: vec![(
                    "dsn".to_string(),
                    json!("postgres://127.0.0.1/demo")
                )],
            }]
        );
    }

    #[test]
    fn test_factory_spec_dispatches_to_invoke() {
        let (container, factory) = factory();
        let spec = ObjectSpec::factory(|params| Ok(Arc::new(params.len()) as Object));

        let object = factory.create(&spec, &[json!(1), json!(2)]).unwrap();

        assert_eq!(*object.downcast::<usize>().unwrap(), 2);
        assert_eq!(
            container.calls(),
            vec![Call::Invoke {
                params: vec![json!(1), json!(2)],
            }]
        );
    }

    #[test]
    fn test_create_from_value_rejects_malformed_records() {
        let (container, factory) = factory();

        let err = factory
            .create_from_value(json!({ "dsn": "x" }), &[])
            .unwrap_err();

        assert!(err.is_invalid_configuration());
        assert!(container.calls().is_empty());
    }
}
