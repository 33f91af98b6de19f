use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single movie as seen by the query endpoints and the similarity engine
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Movie {
    pub title: String,
    /// Genre tags as free text, e.g. "Action, War" (may be empty)
    pub genres: String,
    pub vote_average: f64,
    pub vote_count: u64,
    pub release_date: Option<NaiveDate>,
    pub release_year: Option<i32>,
    /// Cast names as free text
    pub cast: String,
    /// Crew names as free text
    pub crew: String,
    /// Revenue to budget ratio reported by the dataset
    #[serde(rename = "return")]
    pub return_ratio: f64,
    pub budget: f64,
}

impl Movie {
    /// Creates a movie with only the fields the similarity engine needs
    pub fn new(title: impl Into<String>, genres: impl Into<String>, vote_average: f64) -> Self {
        Self {
            title: title.into(),
            genres: genres.into(),
            vote_average,
            vote_count: 0,
            release_date: None,
            release_year: None,
            cast: String::new(),
            crew: String::new(),
            return_ratio: 0.0,
            budget: 0.0,
        }
    }

    pub fn with_release_date(mut self, date: NaiveDate) -> Self {
        self.release_year = Some(date.year());
        self.release_date = Some(date);
        self
    }

    pub fn with_votes(mut self, vote_count: u64) -> Self {
        self.vote_count = vote_count;
        self
    }

    pub fn with_cast(mut self, cast: impl Into<String>) -> Self {
        self.cast = cast.into();
        self
    }

    pub fn with_crew(mut self, crew: impl Into<String>) -> Self {
        self.crew = crew.into();
        self
    }

    pub fn with_financials(mut self, return_ratio: f64, budget: f64) -> Self {
        self.return_ratio = return_ratio;
        self.budget = budget;
        self
    }
}

/// Raw CSV row as written by the dataset export.
///
/// Every column is optional and unparseable values collapse to `None`, so
/// that a single malformed cell never rejects the whole catalog.
#[derive(Debug, Deserialize)]
pub struct MovieRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub vote_count: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub release_year: Option<f64>,
    #[serde(default)]
    pub cast: Option<String>,
    #[serde(default)]
    pub crew: Option<String>,
    #[serde(default, rename = "return", deserialize_with = "csv::invalid_option")]
    pub return_ratio: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub budget: Option<f64>,
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        let release_year = record
            .release_year
            .filter(|y| y.is_finite())
            .map(|y| y as i32)
            .or_else(|| record.release_date.map(|d| d.year()));

        let vote_count = record
            .vote_count
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v as u64)
            .unwrap_or(0);

        Movie {
            title: record.title.unwrap_or_default(),
            genres: record.genres.unwrap_or_default(),
            vote_average: finite_or_zero(record.vote_average),
            vote_count,
            release_date: record.release_date,
            release_year,
            cast: record.cast.unwrap_or_default(),
            crew: record.crew.unwrap_or_default(),
            return_ratio: finite_or_zero(record.return_ratio),
            budget: finite_or_zero(record.budget),
        }
    }
}
