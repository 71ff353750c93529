//! Course-catalog walkthrough: validate, sort, page and shape a listing

use carve::prelude::*;
use chrono::TimeZone;

// Destination entity (what the storage layer holds)
struct Author {
    id: Uuid,
    first_name: String,
    last_name: String,
    date_of_birth: DateTime<Utc>,
    main_category: String,
}

impl_fielded!(Author, {
    "Id" => |a| FieldValue::from(a.id),
    "FirstName" => |a| FieldValue::from(a.first_name.clone()),
    "LastName" => |a| FieldValue::from(a.last_name.clone()),
    "DateOfBirth" => |a| FieldValue::from(a.date_of_birth),
    "MainCategory" => |a| FieldValue::from(a.main_category.clone()),
});

// Source DTO (what clients see and shape)
struct AuthorDto {
    id: Uuid,
    name: String,
    age: i64,
    main_category: String,
}

impl_fielded!(AuthorDto, {
    "Id" => |a| FieldValue::from(a.id),
    "Name" => |a| FieldValue::from(a.name.clone()),
    "Age" => |a| FieldValue::from(a.age),
    "MainCategory" => |a| FieldValue::from(a.main_category.clone()),
});

fn author(first: &str, last: &str, year: i32, category: &str) -> Author {
    Author {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: Utc.with_ymd_and_hms(year, 6, 15, 0, 0, 0).unwrap(),
        main_category: category.to_string(),
    }
}

fn to_dto(author: &Author) -> AuthorDto {
    let age = Utc::now()
        .date_naive()
        .years_since(author.date_of_birth.date_naive())
        .unwrap_or(0) as i64;
    AuthorDto {
        id: author.id,
        name: format!("{} {}", author.first_name, author.last_name),
        age,
        main_category: author.main_category.clone(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🚀 Carve Course Catalog Example\n");

    // Build the mapping registry once at startup
    let registry = PropertyMappingRegistry::builder()
        .register::<AuthorDto, Author>(
            MappingTable::new()
                .map_direct("Id", "Id")?
                .map_direct("MainCategory", "MainCategory")?
                .map("Age", vec![MappedProperty::reverted("DateOfBirth")])?
                .map(
                    "Name",
                    vec![
                        MappedProperty::new("FirstName"),
                        MappedProperty::new("LastName"),
                    ],
                )?,
        )?
        .build();

    let authors = vec![
        author("Berry", "Griffin", 1980, "Ships"),
        author("Nancy", "Swashbuckler", 1968, "Rum"),
        author("Eli", "Ivory", 1977, "Singing"),
        author("Arnold", "Edward", 1957, "Rum"),
        author("Seabury", "Toxophilite", 1995, "Maps"),
    ];

    // The query string a client would send
    let query = ResourceQuery {
        page: 1,
        size: 3,
        order_by: Some("age desc".to_string()),
        fields: Some("name,age,mainCategory".to_string()),
        search: None,
    };

    println!("📋 Query: orderBy={:?} fields={:?}\n", query.order_by(), query.fields());

    // Pre-flight validation lets us reject bad input with one clear error
    if !registry.supports_order_by::<AuthorDto, Author>(query.order_by())? {
        anyhow::bail!("invalid orderBy");
    }
    check_fields::<AuthorDto>(query.fields())?;

    // Translate the orderBy into storage-layer sort keys
    let mut plan = registry.resolve_sort::<AuthorDto, Author>(query.order_by())?;
    plan.ensure_tiebreaker("Id", SortDir::Asc);
    println!("🔀 Resolved sort plan: {plan}");

    // Sort, page, map to DTOs, shape
    let sorted = apply_sort(authors, &plan)?;
    let page = paginate(sorted, query.page(), query.size());
    let dtos: Vec<AuthorDto> = page.items.iter().map(to_dto).collect();
    let shaped = shape_data(&dtos, query.fields())?;

    println!(
        "\n📄 Page {}/{} ({} authors total):\n",
        page.meta.page, page.meta.total_pages, page.meta.total
    );
    for entity in &shaped {
        println!("  {}", serde_json::to_string(entity)?);
    }

    Ok(())
}
