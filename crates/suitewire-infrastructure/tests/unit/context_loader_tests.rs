//! Unit tests for the TOML context loader

use std::path::Path;

use suitewire_application::context::ApplicationContextBuilder;
use suitewire_application::ports::ContextLoader;
use suitewire_application::ports::registry::{
    BeanDefinition, COMPONENTS, ComponentEntry, list_components,
};
use suitewire_domain::error::Error;
use suitewire_domain::value_objects::ConfigLocations;
use suitewire_infrastructure::di::{Properties, TomlContextLoader};
use tempfile::TempDir;

#[derive(Debug)]
struct Greeter {
    greeting: String,
}

#[derive(Debug)]
struct Audience {
    size: u32,
}

fn greeter_factory(
    definition: &BeanDefinition,
    builder: &mut ApplicationContextBuilder,
) -> Result<(), String> {
    let greeting = definition.property_or("greeting", "hello".to_string())?;
    builder
        .register_bean(&definition.id, &definition.component, Greeter { greeting })
        .map(|_| ())
        .map_err(|e| e.to_string())
}

fn audience_factory(
    definition: &BeanDefinition,
    builder: &mut ApplicationContextBuilder,
) -> Result<(), String> {
    let size = definition.property("size")?;
    builder
        .register_bean(&definition.id, &definition.component, Audience { size })
        .map(|_| ())
        .map_err(|e| e.to_string())
}

fn refusing_factory(_: &BeanDefinition, _: &mut ApplicationContextBuilder) -> Result<(), String> {
    Err("refused to start".to_string())
}

#[linkme::distributed_slice(COMPONENTS)]
static GREETER: ComponentEntry = ComponentEntry {
    name: "greeter",
    description: "Greets",
    factory: greeter_factory,
};

#[linkme::distributed_slice(COMPONENTS)]
static AUDIENCE: ComponentEntry = ComponentEntry {
    name: "audience",
    description: "Listens",
    factory: audience_factory,
};

#[linkme::distributed_slice(COMPONENTS)]
static REFUSING: ComponentEntry = ComponentEntry {
    name: "refusing",
    description: "Always fails",
    factory: refusing_factory,
};

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

#[test]
fn test_loads_beans_from_single_file() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "context.toml",
        r#"
[[beans]]
id = "greeter"
component = "greeter"
properties = { greeting = "hi" }

[[beans]]
id = "settings"
component = "properties"
properties = { name = "suite", retries = 3, verbose = true }
"#,
    );

    let loader = TomlContextLoader::new(dir.path());
    let context = loader
        .load_context(&ConfigLocations::from("context.toml"))
        .unwrap();

    assert_eq!(context.bean_names(), vec!["greeter", "settings"]);
    assert_eq!(context.get_bean::<Greeter>().unwrap().greeting, "hi");

    let properties = context.get_bean_named::<Properties>("settings").unwrap();
    assert_eq!(properties.get("name"), Some("suite"));
    assert_eq!(properties.get("retries"), Some("3"));
    assert_eq!(properties.get("verbose"), Some("true"));
    assert_eq!(properties.get_or("missing", "fallback"), "fallback");
}

#[test]
fn test_file_prefix_and_absolute_locations() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "context.toml", "[[beans]]\nid = \"greeter\"\ncomponent = \"greeter\"\n");

    let loader = TomlContextLoader::new(dir.path());
    assert!(
        loader
            .load_context(&ConfigLocations::from("file:context.toml"))
            .unwrap()
            .contains_bean("greeter")
    );

    let absolute = dir.path().join("context.toml");
    let elsewhere = TomlContextLoader::new("/nonexistent-root");
    let location = format!("file:{}", absolute.display());
    assert!(
        elsewhere
            .load_context(&ConfigLocations::from(location))
            .unwrap()
            .contains_bean("greeter")
    );
}

#[test]
fn test_imports_are_loaded_first_and_relative_to_importer() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "nested/common.toml",
        "[[beans]]\nid = \"audience\"\ncomponent = \"audience\"\nproperties = { size = 12 }\n",
    );
    write(
        dir.path(),
        "nested/context.toml",
        "imports = [\"common.toml\"]\n\n[[beans]]\nid = \"greeter\"\ncomponent = \"greeter\"\n",
    );

    let context = TomlContextLoader::new(dir.path())
        .load_context(&ConfigLocations::from("nested/context.toml"))
        .unwrap();

    assert_eq!(context.bean_names(), vec!["audience", "greeter"]);
    assert_eq!(context.get_bean::<Audience>().unwrap().size, 12);
}

#[test]
fn test_multiple_locations_load_in_order() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.toml", "[[beans]]\nid = \"greeter\"\ncomponent = \"greeter\"\n");
    write(
        dir.path(),
        "b.toml",
        "[[beans]]\nid = \"audience\"\ncomponent = \"audience\"\nproperties = { size = 1 }\n",
    );

    let context = TomlContextLoader::new(dir.path())
        .load_context(&ConfigLocations::from(["b.toml", "a.toml"]))
        .unwrap();

    assert_eq!(context.bean_names(), vec!["audience", "greeter"]);
}

#[test]
fn test_shared_import_is_loaded_once() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "shared.toml", "[[beans]]\nid = \"greeter\"\ncomponent = \"greeter\"\n");
    write(dir.path(), "left.toml", "imports = [\"shared.toml\"]\n");
    write(dir.path(), "right.toml", "imports = [\"shared.toml\"]\n");

    let context = TomlContextLoader::new(dir.path())
        .load_context(&ConfigLocations::from(["left.toml", "right.toml"]))
        .unwrap();

    assert_eq!(context.bean_count(), 1);
}

#[test]
fn test_import_cycle_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "one.toml", "imports = [\"two.toml\"]\n");
    write(dir.path(), "two.toml", "imports = [\"one.toml\"]\n");

    let err = TomlContextLoader::new(dir.path())
        .load_context(&ConfigLocations::from("one.toml"))
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("Import cycle"));
}

#[test]
fn test_missing_resource_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let err = TomlContextLoader::new(dir.path())
        .load_context(&ConfigLocations::from("absent.toml"))
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_malformed_definition_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bad.toml", "beans = \"not a table\"\n");
    let err = TomlContextLoader::new(dir.path())
        .load_context(&ConfigLocations::from("bad.toml"))
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));

    write(dir.path(), "anonymous.toml", "[[beans]]\nid = \"\"\ncomponent = \"greeter\"\n");
    let err = TomlContextLoader::new(dir.path())
        .load_context(&ConfigLocations::from("anonymous.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("has no id"));
}

#[test]
fn test_unknown_component_is_bean_creation_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "context.toml", "[[beans]]\nid = \"ghost\"\ncomponent = \"phantom\"\n");

    let err = TomlContextLoader::new(dir.path())
        .load_context(&ConfigLocations::from("context.toml"))
        .unwrap_err();

    match err {
        Error::BeanCreation {
            bean,
            component,
            message,
        } => {
            assert_eq!(bean, "ghost");
            assert_eq!(component, "phantom");
            assert!(message.contains("greeter"));
            assert!(message.contains("properties"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_factory_failure_aborts_load() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "context.toml",
        r#"
[[beans]]
id = "greeter"
component = "greeter"

[[beans]]
id = "broken"
component = "refusing"
"#,
    );

    let err = TomlContextLoader::new(dir.path())
        .load_context(&ConfigLocations::from("context.toml"))
        .unwrap_err();

    assert!(matches!(err, Error::BeanCreation { ref bean, .. } if bean == "broken"));
    assert!(err.to_string().contains("refused to start"));
}

#[test]
fn test_duplicate_bean_aborts_load() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "context.toml",
        "[[beans]]\nid = \"first\"\ncomponent = \"greeter\"\n\n[[beans]]\nid = \"second\"\ncomponent = \"greeter\"\n",
    );

    let err = TomlContextLoader::new(dir.path())
        .load_context(&ConfigLocations::from("context.toml"))
        .unwrap_err();

    assert!(matches!(err, Error::BeanCreation { ref bean, .. } if bean == "second"));
    assert!(err.to_string().contains("Duplicate bean"));
}

#[test]
fn test_non_scalar_property_rejected() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "context.toml",
        "[[beans]]\nid = \"settings\"\ncomponent = \"properties\"\nproperties = { list = [1, 2] }\n",
    );

    let err = TomlContextLoader::new(dir.path())
        .load_context(&ConfigLocations::from("context.toml"))
        .unwrap_err();

    assert!(err.to_string().contains("property 'list' must be a scalar value"));
}

#[test]
fn test_list_components_includes_builtins_sorted() {
    let components = list_components();
    let names: Vec<&str> = components.iter().map(|(name, _)| *name).collect();

    for expected in ["audience", "greeter", "properties", "refusing"] {
        assert!(names.contains(&expected), "missing {expected} in {names:?}");
    }
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);

    let (_, description) = components
        .iter()
        .find(|(name, _)| *name == "properties")
        .unwrap();
    assert_eq!(*description, "String key/value properties");
}
