use chrono::NaiveDate;
use serde::Serialize;

pub mod catalog;
pub mod movie;

pub use catalog::Catalog;
pub use movie::{Movie, MovieRecord};

/// Number of releases in a given month
#[derive(Debug, Serialize, PartialEq)]
pub struct MonthCount {
    pub month: String,
    pub count: usize,
}

/// Number of releases on a given weekday
#[derive(Debug, Serialize, PartialEq)]
pub struct WeekdayCount {
    pub day: String,
    pub count: usize,
}

/// Rating summary for a title
#[derive(Debug, Serialize, PartialEq)]
pub struct TitleScore {
    pub title: String,
    pub release_year: Option<i32>,
    pub score: f64,
    pub message: String,
}

/// Vote summary for a title with enough votes
#[derive(Debug, Serialize, PartialEq)]
pub struct TitleVotes {
    pub title: String,
    pub release_year: Option<i32>,
    pub vote_count: u64,
    pub vote_average: f64,
}

/// Aggregate return statistics for an actor
#[derive(Debug, Serialize, PartialEq)]
pub struct ActorStats {
    pub actor: String,
    pub movie_count: usize,
    pub total_return: f64,
    pub average_return: f64,
}

/// One film in a director's filmography
#[derive(Debug, Serialize, PartialEq)]
pub struct DirectedMovie {
    pub title: String,
    pub release_date: Option<NaiveDate>,
    #[serde(rename = "return")]
    pub return_ratio: f64,
    pub budget: f64,
    pub profit: f64,
}

/// Aggregate return statistics for a director
#[derive(Debug, Serialize, PartialEq)]
pub struct DirectorStats {
    pub director: String,
    pub total_return: f64,
    pub movies: Vec<DirectedMovie>,
}

/// Titles most similar to the requested one, most similar first
#[derive(Debug, Serialize, PartialEq)]
pub struct SimilarTitles {
    pub title: String,
    pub similar: Vec<String>,
}
