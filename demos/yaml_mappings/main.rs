//! Config-driven registry: mapping tables declared in YAML

use carve::prelude::*;

struct Author;
struct AuthorDto;

const MAPPINGS_YAML: &str = r#"
mappings:
  - source: AuthorDto
    destination: Author
    fields:
      - field: Id
        properties: [Id]
      - field: MainCategory
        properties: [MainCategory]
      - field: Age
        revert: true
        properties: [DateOfBirth]
      - field: Name
        properties: [FirstName, LastName]
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🚀 Carve YAML Mappings Example\n");

    let config = MappingConfig::from_yaml_str(MAPPINGS_YAML)?;
    let registry = PropertyMappingRegistry::builder()
        .register_from_config::<AuthorDto, Author>(&config)?
        .build();

    for order_by in ["name desc, age", "age", "bogusField"] {
        let valid = registry.supports_order_by::<AuthorDto, Author>(Some(order_by))?;
        if !valid {
            println!("❌ orderBy {order_by:?} is invalid");
            continue;
        }
        let plan = registry.resolve_sort::<AuthorDto, Author>(Some(order_by))?;
        println!("✅ orderBy {order_by:?} -> {plan}");
    }

    Ok(())
}
