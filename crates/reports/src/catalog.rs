use crate::queries;
use database::{Database, DatabaseError, Param, Table};

/// The languages the language report covers.
pub const TRACKED_LANGUAGES: [&str; 5] = ["Chinese", "English", "Hindi", "Spanish", "Arabic"];

/// The report catalog.
///
/// Every method builds one fixed query and hands it to the data access layer.
/// No state is kept between calls; database failures propagate unchanged.
#[derive(Debug, Clone)]
pub struct PopulationReporter {
    db: Database,
}

impl PopulationReporter {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Every country, most populated first.
    pub async fn all_countries_by_population(&self) -> Result<Table, DatabaseError> {
        self.db.query(queries::ALL_COUNTRIES_BY_POPULATION, &[]).await
    }

    /// The `top_n` most populated countries.
    ///
    /// `top_n` is bound as the `LIMIT` parameter as-is; callers are expected to
    /// pass a positive number.
    pub async fn top_n_populated_countries(&self, top_n: u32) -> Result<Table, DatabaseError> {
        self.db
            .query(queries::TOP_N_POPULATED_COUNTRIES, &[Param::from(top_n)])
            .await
    }

    /// Every city with the name of its country, most populated first.
    pub async fn all_cities_by_population(&self) -> Result<Table, DatabaseError> {
        self.db.query(queries::ALL_CITIES_BY_POPULATION, &[]).await
    }

    /// Every country's capital city, most populated first.
    pub async fn capital_cities_by_population(&self) -> Result<Table, DatabaseError> {
        self.db.query(queries::CAPITAL_CITIES_BY_POPULATION, &[]).await
    }

    /// Per continent: total population and the share of it living in the
    /// recorded cities, both percentages rounded to two decimals.
    pub async fn continent_population_breakdown(&self) -> Result<Table, DatabaseError> {
        self.db.query(queries::CONTINENT_POPULATION_BREAKDOWN, &[]).await
    }

    /// Estimated speakers and world share of each tracked language, most
    /// spoken first.
    pub async fn language_statistics(&self) -> Result<Table, DatabaseError> {
        let params = TRACKED_LANGUAGES.map(Param::from);
        self.db.query(queries::LANGUAGE_STATISTICS, &params).await
    }
}
