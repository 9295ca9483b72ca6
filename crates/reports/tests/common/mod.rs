#![allow(dead_code)]

use database::{Database, Param};
use tempfile::TempDir;

pub const SCHEMA: [&str; 3] = [
    "CREATE TABLE countries (
        code TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        continent TEXT NOT NULL,
        region TEXT NOT NULL,
        population INTEGER NOT NULL,
        capital INTEGER
    )",
    "CREATE TABLE cities (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        country_code TEXT NOT NULL,
        district TEXT NOT NULL,
        population INTEGER NOT NULL
    )",
    "CREATE TABLE country_languages (
        country_code TEXT NOT NULL,
        language TEXT NOT NULL,
        percentage REAL NOT NULL
    )",
];

/// (code, name, continent, region, population, capital)
pub const COUNTRIES: [(&str, &str, &str, &str, i64, Option<i64>); 7] = [
    ("CHN", "China", "Asia", "Eastern Asia", 1_400_000_000, Some(1)),
    ("USA", "United States", "North America", "North America", 331_000_000, Some(2)),
    ("IND", "India", "Asia", "Southern and Central Asia", 1_380_000_000, Some(3)),
    ("GBR", "United Kingdom", "Europe", "British Islands", 67_000_000, Some(4)),
    ("FRA", "France", "Europe", "Western Europe", 67_000_000, Some(5)),
    ("MEX", "Mexico", "North America", "Central America", 128_000_000, Some(6)),
    ("ATA", "Antarctica", "Antarctica", "Antarctica", 1_000, None),
];

/// (id, name, country_code, district, population)
pub const CITIES: [(i64, &str, &str, &str, i64); 10] = [
    (1, "Peking", "CHN", "Peking", 7_472_000),
    (2, "Washington", "USA", "District of Columbia", 572_059),
    (3, "New Delhi", "IND", "Delhi", 301_297),
    (4, "London", "GBR", "England", 7_285_000),
    (5, "Paris", "FRA", "Ile-de-France", 2_125_246),
    (6, "Ciudad de Mexico", "MEX", "Distrito Federal", 8_591_309),
    (7, "Shanghai", "CHN", "Shanghai", 9_696_300),
    (8, "New York", "USA", "New York", 8_008_278),
    (9, "Mumbai", "IND", "Maharashtra", 10_500_000),
    (10, "Nowhere", "XXX", "Limbo", 5),
];

/// (country_code, language, percentage)
pub const LANGUAGES: [(&str, &str, f64); 8] = [
    ("CHN", "Chinese", 92.0),
    ("USA", "English", 86.2),
    ("USA", "Spanish", 7.5),
    ("IND", "Hindi", 39.9),
    ("IND", "English", 10.0),
    ("GBR", "English", 97.3),
    ("FRA", "French", 93.6),
    ("MEX", "Spanish", 92.1),
];

pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|country| country.0 == code)
        .map(|country| country.1)
}

/// A SQLite file that lives as long as the returned `TempDir`.
pub fn temp_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("world.db").display());
    (dir, Database::new(url))
}

pub async fn create_schema(db: &Database) {
    for statement in SCHEMA {
        db.execute(statement, &[]).await.unwrap();
    }
}

pub async fn insert_country(db: &Database, country: (&str, &str, &str, &str, i64, Option<i64>)) {
    let (code, name, continent, region, population, capital) = country;
    let mut params: Vec<Param> = vec![
        code.into(),
        name.into(),
        continent.into(),
        region.into(),
        population.into(),
    ];
    let sql = match capital {
        Some(capital) => {
            params.push(capital.into());
            "INSERT INTO countries (code, name, continent, region, population, capital)
             VALUES ($1, $2, $3, $4, $5, $6)"
        }
        None => {
            "INSERT INTO countries (code, name, continent, region, population)
             VALUES ($1, $2, $3, $4, $5)"
        }
    };
    db.execute(sql, &params).await.unwrap();
}

pub async fn insert_city(db: &Database, city: (i64, &str, &str, &str, i64)) {
    let (id, name, country_code, district, population) = city;
    db.execute(
        "INSERT INTO cities (id, name, country_code, district, population) VALUES ($1, $2, $3, $4, $5)",
        &[id.into(), name.into(), country_code.into(), district.into(), population.into()],
    )
    .await
    .unwrap();
}

pub async fn insert_language(db: &Database, language: (&str, &str, f64)) {
    let (country_code, language, percentage) = language;
    db.execute(
        "INSERT INTO country_languages (country_code, language, percentage) VALUES ($1, $2, $3)",
        &[country_code.into(), language.into(), percentage.into()],
    )
    .await
    .unwrap();
}

/// A database holding the full fixture above.
pub async fn seeded_database() -> (TempDir, Database) {
    let (dir, db) = temp_database();
    create_schema(&db).await;
    for country in COUNTRIES {
        insert_country(&db, country).await;
    }
    for city in CITIES {
        insert_city(&db, city).await;
    }
    for language in LANGUAGES {
        insert_language(&db, language).await;
    }
    (dir, db)
}

/// The same tables with the column types of the usual world database:
/// blank-padded `CHAR(n)` text and exact `NUMERIC` percentages.
pub const POSTGRES_SCHEMA: [&str; 3] = [
    "CREATE TABLE countries (
        code CHAR(3) PRIMARY KEY,
        name CHAR(52) NOT NULL,
        continent VARCHAR(20) NOT NULL,
        region CHAR(26) NOT NULL,
        population INTEGER NOT NULL,
        capital INTEGER
    )",
    "CREATE TABLE cities (
        id INTEGER PRIMARY KEY,
        name CHAR(35) NOT NULL,
        country_code CHAR(3) NOT NULL,
        district CHAR(20) NOT NULL,
        population INTEGER NOT NULL
    )",
    "CREATE TABLE country_languages (
        country_code CHAR(3) NOT NULL,
        language CHAR(30) NOT NULL,
        percentage NUMERIC(4,1) NOT NULL
    )",
];

/// A schema of its own on the server named by `TEST_POSTGRES_URL`.
pub struct PostgresScratch {
    admin: Database,
    schema: String,
}

impl PostgresScratch {
    pub async fn cleanup(self) {
        self.admin
            .execute(&format!("DROP SCHEMA {} CASCADE", self.schema), &[])
            .await
            .unwrap();
    }
}

/// The full fixture on PostgreSQL, or `None` when no test server is configured.
pub async fn seeded_postgres() -> Option<(PostgresScratch, Database)> {
    let Ok(url) = std::env::var("TEST_POSTGRES_URL") else {
        eprintln!("TEST_POSTGRES_URL is not set; skipping");
        return None;
    };
    let schema = format!("popreport_{}", uuid::Uuid::new_v4().simple());
    let admin = Database::new(url.clone());
    admin
        .execute(&format!("CREATE SCHEMA {schema}"), &[])
        .await
        .unwrap();

    let separator = if url.contains('?') { '&' } else { '?' };
    let db = Database::new(format!("{url}{separator}options=-c%20search_path%3D{schema}"));
    for statement in POSTGRES_SCHEMA {
        db.execute(statement, &[]).await.unwrap();
    }
    for country in COUNTRIES {
        insert_country(&db, country).await;
    }
    for city in CITIES {
        insert_city(&db, city).await;
    }
    for language in LANGUAGES {
        insert_language(&db, language).await;
    }

    Some((PostgresScratch { admin, schema }, db))
}
