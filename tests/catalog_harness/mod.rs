//! Shared test harness for the course-catalog fixtures
//!
//! Provides `Author`/`Course` destination entities, `AuthorDto`/`CourseDto`
//! source DTOs with their field tables, the canonical mapping tables, a
//! DTO mapper standing in for the external object-mapping collaborator,
//! and seeded data.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod catalog_harness;
//! use catalog_harness::*;
//! ```

#![allow(dead_code)]

use carve::prelude::*;
use chrono::TimeZone;

// ---------------------------------------------------------------------------
// Destination entities (what the storage layer holds)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub main_category: String,
}

impl_fielded!(Author, {
    "Id" => |a| FieldValue::from(a.id),
    "FirstName" => |a| FieldValue::from(a.first_name.clone()),
    "LastName" => |a| FieldValue::from(a.last_name.clone()),
    "DateOfBirth" => |a| FieldValue::from(a.date_of_birth),
    "MainCategory" => |a| FieldValue::from(a.main_category.clone()),
});

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

impl_fielded!(Course, {
    "Id" => |c| FieldValue::from(c.id),
    "AuthorId" => |c| FieldValue::from(c.author_id),
    "Title" => |c| FieldValue::from(c.title.clone()),
    "Description" => |c| FieldValue::from(c.description.clone()),
});

// ---------------------------------------------------------------------------
// Source DTOs (what callers shape and expose)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorDto {
    pub id: Uuid,
    pub name: String,
    pub age: i64,
    pub main_category: String,
}

impl_fielded!(AuthorDto, {
    "Id" => |a| FieldValue::from(a.id),
    "Name" => |a| FieldValue::from(a.name.clone()),
    "Age" => |a| FieldValue::from(a.age),
    "MainCategory" => |a| FieldValue::from(a.main_category.clone()),
});

#[derive(Debug, Clone, PartialEq)]
pub struct CourseDto {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

impl_fielded!(CourseDto, {
    "Id" => |c| FieldValue::from(c.id),
    "AuthorId" => |c| FieldValue::from(c.author_id),
    "Title" => |c| FieldValue::from(c.title.clone()),
    "Description" => |c| FieldValue::from(c.description.clone()),
});

// ---------------------------------------------------------------------------
// DTO mapping (external collaborator stand-in)
// ---------------------------------------------------------------------------

/// Fixed reference date for age calculation so shaped ages stay stable
pub fn reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

pub fn author_to_dto(author: &Author) -> AuthorDto {
    let age = reference_date()
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

pub fn course_to_dto(course: &Course) -> CourseDto {
    CourseDto {
        id: course.id,
        author_id: course.author_id,
        title: course.title.clone(),
        description: course.description.clone(),
    }
}

// ---------------------------------------------------------------------------
// Canonical mapping tables and registry
// ---------------------------------------------------------------------------

pub fn author_mapping_table() -> MappingTable {
    MappingTable::new()
        .map_direct("Id", "Id")
        .unwrap()
        .map_direct("MainCategory", "MainCategory")
        .unwrap()
        .map("Age", vec![MappedProperty::reverted("DateOfBirth")])
        .unwrap()
        .map(
            "Name",
            vec![
                MappedProperty::new("FirstName"),
                MappedProperty::new("LastName"),
            ],
        )
        .unwrap()
}

pub fn course_mapping_table() -> MappingTable {
    MappingTable::new()
        .map_direct("Id", "Id")
        .unwrap()
        .map_direct("Title", "Title")
        .unwrap()
        .map_direct("Description", "Description")
        .unwrap()
}

pub fn catalog_registry() -> PropertyMappingRegistry {
    PropertyMappingRegistry::builder()
        .register::<AuthorDto, Author>(author_mapping_table())
        .expect("author table registers")
        .register::<CourseDto, Course>(course_mapping_table())
        .expect("course table registers")
        .build()
}

// ---------------------------------------------------------------------------
// Seeded data
// ---------------------------------------------------------------------------

fn author(first: &str, last: &str, born: (i32, u32, u32), category: &str) -> Author {
    Author {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: Utc.with_ymd_and_hms(born.0, born.1, born.2, 0, 0, 0).unwrap(),
        main_category: category.to_string(),
    }
}

pub fn seeded_authors() -> Vec<Author> {
    vec![
        author("Berry", "Griffin", (1980, 5, 24), "Ships"),
        author("Nancy", "Swashbuckler", (1968, 12, 23), "Rum"),
        author("Eli", "Ivory", (1977, 2, 18), "Singing"),
        author("Arnold", "Edward", (1957, 3, 6), "Rum"),
        author("Seabury", "Toxophilite", (1995, 11, 2), "Maps"),
    ]
}

pub fn seeded_courses(authors: &[Author]) -> Vec<Course> {
    vec![
        Course {
            id: Uuid::new_v4(),
            author_id: authors[0].id,
            title: "Commandeering a Ship".to_string(),
            description: Some("Without getting caught".to_string()),
        },
        Course {
            id: Uuid::new_v4(),
            author_id: authors[0].id,
            title: "Overthrowing Mutiny".to_string(),
            description: None,
        },
        Course {
            id: Uuid::new_v4(),
            author_id: authors[1].id,
            title: "Avoiding Brawls While Drinking as Much as You Can".to_string(),
            description: Some("Without losing an eye".to_string()),
        },
    ]
}
