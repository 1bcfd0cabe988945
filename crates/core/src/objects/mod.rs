pub mod configure;
pub mod factory;
pub mod spec;

pub use configure::{configure, object_vars, Configurable};
pub use factory::{Container, ObjectFactory};
pub use spec::{FactoryFn, Object, ObjectConfig, ObjectSpec, PropertyMap};
