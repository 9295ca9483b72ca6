//! The report SQL.
//!
//! Written in the dialect PostgreSQL and SQLite share: `$N` placeholders,
//! double-quoted aliases, and explicit casts so every result column comes back
//! as an integer, a float or a `VARCHAR`, whichever engine ran it. Text compared
//! against a bound parameter is cast too, so a `CHAR(n)` column never decides the
//! parameter's type.

pub const ALL_COUNTRIES_BY_POPULATION: &str = r#"
    SELECT
        CAST(code AS VARCHAR) AS "Code",
        CAST(name AS VARCHAR) AS "Name",
        CAST(continent AS VARCHAR) AS "Continent",
        CAST(region AS VARCHAR) AS "Region",
        population AS "Population",
        capital AS "Capital"
    FROM
        countries
    ORDER BY
        population DESC, code
"#;

pub const TOP_N_POPULATED_COUNTRIES: &str = r#"
    SELECT
        CAST(code AS VARCHAR) AS "Code",
        CAST(name AS VARCHAR) AS "Name",
        CAST(continent AS VARCHAR) AS "Continent",
        CAST(region AS VARCHAR) AS "Region",
        population AS "Population",
        capital AS "Capital"
    FROM
        countries
    ORDER BY
        population DESC, code
    LIMIT $1
"#;

pub const ALL_CITIES_BY_POPULATION: &str = r#"
    SELECT
        CAST(c.name AS VARCHAR) AS "Name",
        CAST(co.name AS VARCHAR) AS "Country",
        CAST(c.district AS VARCHAR) AS "District",
        c.population AS "Population"
    FROM
        cities c
    JOIN
        countries co ON c.country_code = co.code
    ORDER BY
        c.population DESC, c.name
"#;

pub const CAPITAL_CITIES_BY_POPULATION: &str = r#"
    SELECT
        CAST(ci.name AS VARCHAR) AS "Name",
        CAST(co.name AS VARCHAR) AS "Country",
        ci.population AS "Population"
    FROM
        cities ci
    JOIN
        countries co ON ci.id = co.capital
    ORDER BY
        ci.population DESC, ci.name
"#;

// The percentages are not clamped: a country whose cities add up to more than
// its population yields a negative "not in cities" share.
pub const CONTINENT_POPULATION_BREAKDOWN: &str = r#"
    SELECT
        CAST(continent AS VARCHAR) AS "Name",
        CAST(SUM(population) AS BIGINT) AS "TotalPopulation",
        CAST(ROUND(CAST(SUM(city_population) * 100.0 / SUM(population) AS NUMERIC), 2) AS DOUBLE PRECISION)
            AS "PercentageInCities",
        CAST(ROUND(CAST((SUM(population) - SUM(city_population)) * 100.0 / SUM(population) AS NUMERIC), 2) AS DOUBLE PRECISION)
            AS "PercentageNotInCities"
    FROM (
        SELECT
            c.continent,
            c.population,
            COALESCE(
                (SELECT SUM(ci.population) FROM cities ci WHERE ci.country_code = c.code),
                0
            ) AS city_population
        FROM
            countries c
    ) AS breakdown
    GROUP BY
        continent
    ORDER BY
        continent
"#;

pub const LANGUAGE_STATISTICS: &str = r#"
    SELECT
        CAST(cl.language AS VARCHAR) AS "Language",
        CAST(SUM(cl.percentage * co.population / 100.0) AS DOUBLE PRECISION) AS "Speakers",
        CAST(ROUND(CAST(SUM(cl.percentage * co.population / 100.0) * 100.0
            / (SELECT SUM(population) FROM countries) AS NUMERIC), 2) AS DOUBLE PRECISION)
            AS "WorldPercentage"
    FROM
        country_languages cl
    JOIN
        countries co ON cl.country_code = co.code
    WHERE
        CAST(cl.language AS VARCHAR) IN ($1, $2, $3, $4, $5)
    GROUP BY
        cl.language
    ORDER BY
        "Speakers" DESC, "Language"
"#;
