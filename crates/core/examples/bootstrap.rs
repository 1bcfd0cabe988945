//! Walkthrough of the bootstrap layer: alias registration and resolution,
//! object specs, and construction through a minimal container.

use std::sync::Arc;

use serde_json::Value;

use loam_core::{
    configure, AliasRegistry, Configurable, Container, CoreError, FactoryFn, Object,
    ObjectConfig, ObjectFactory, ObjectSpec, PropertyMap,
};

#[derive(Debug, Default)]
struct MailerSettings {
    transport: String,
    retries: u64,
}

impl Configurable for MailerSettings {
    fn set_property(&mut self, name: &str, value: &Value) -> Result<(), CoreError> {
        match name {
            "transport" => {
                self.transport = value.as_str().unwrap_or_default().to_string();
            }
            "retries" => {
                self.retries = value.as_u64().unwrap_or_default();
            }
            other => return Err(CoreError::unknown_property(other, "MailerSettings")),
        }
        Ok(())
    }
}

/// Toy container: builds `MailerSettings` for any type name and applies the
/// configured properties. A real host would resolve dependencies here.
struct DemoContainer;

impl Container for DemoContainer {
    fn get(
        &self,
        type_name: &str,
        _params: &[Value],
        properties: &PropertyMap,
    ) -> Result<Object, CoreError> {
        println!("container.get({type_name})");
        let mut settings = MailerSettings::default();
        configure(&mut settings, properties)?;
        Ok(Arc::new(settings) as Object)
    }

    fn invoke(&self, factory: &FactoryFn, params: &[Value]) -> Result<Object, CoreError> {
        println!("container.invoke(<factory>)");
        factory(params)
    }
}

fn main() -> Result<(), CoreError> {
    // alias resolution
    let mut aliases = AliasRegistry::new("/opt/loam");
    aliases.register("@app", "/srv/app")?;
    aliases.register("@app/runtime", "/var/loam/runtime")?;

    println!("@loam/web          -> {}", aliases.resolve("@loam/web")?);
    println!("@app/views/site    -> {}", aliases.resolve("@app/views/site")?);
    println!(
        "@app/runtime/cache -> {}",
        aliases.resolve("@app/runtime/cache")?
    );
    println!(
        "root alias of @app/runtime/cache = {:?}",
        aliases.root_alias_of("@app/runtime/cache")
    );

    // object construction through the container seam
    let factory = ObjectFactory::new(Arc::new(DemoContainer));

    let config = ObjectConfig::new("app::mail::Mailer")
        .with_property("transport", "smtp://localhost:25")
        .with_property("retries", 3);
    let object = factory.create(&config.into(), &[])?;
    let settings = object
        .downcast::<MailerSettings>()
        .expect("demo container builds MailerSettings");
    println!("configured mailer: {settings:?}");

    let spec = ObjectSpec::factory(|params| {
        Ok(Arc::new(format!("built from {} params", params.len())) as Object)
    });
    let object = factory.create(&spec, &[Value::from(1), Value::from(2)])?;
    println!(
        "factory result: {}",
        object.downcast::<String>().expect("factory builds a String")
    );

    Ok(())
}
