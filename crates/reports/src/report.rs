use crate::catalog::PopulationReporter;
use database::{DatabaseError, Table};

/// Names every report in the catalog, so reports can be picked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Report {
    AllCountries,
    TopCountries,
    AllCities,
    CapitalCities,
    ContinentBreakdown,
    LanguageStats,
}

impl Report {
    /// The reports run when none are requested explicitly.
    pub const DEFAULT_SEQUENCE: [Report; 3] = [
        Report::TopCountries,
        Report::ContinentBreakdown,
        Report::LanguageStats,
    ];

    /// Console heading. `top_n` only affects `TopCountries`.
    pub fn title(self, top_n: u32) -> String {
        match self {
            Report::AllCountries => "All Countries by Population".to_string(),
            Report::TopCountries => format!("Top {top_n} Most Populated Countries"),
            Report::AllCities => "All Cities by Population".to_string(),
            Report::CapitalCities => "Capital Cities by Population".to_string(),
            Report::ContinentBreakdown => "Continent Population Breakdown".to_string(),
            Report::LanguageStats => "Language Statistics".to_string(),
        }
    }

    pub async fn run(self, reporter: &PopulationReporter, top_n: u32) -> Result<Table, DatabaseError> {
        tracing::debug!(report = ?self, "Running report.");
        match self {
            Report::AllCountries => reporter.all_countries_by_population().await,
            Report::TopCountries => reporter.top_n_populated_countries(top_n).await,
            Report::AllCities => reporter.all_cities_by_population().await,
            Report::CapitalCities => reporter.capital_cities_by_population().await,
            Report::ContinentBreakdown => reporter.continent_population_breakdown().await,
            Report::LanguageStats => reporter.language_statistics().await,
        }
    }
}
