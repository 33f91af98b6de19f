use crate::{
    error::{AppError, AppResult},
    models::{Catalog, TitleScore, TitleVotes},
};

fn require_query(query: &str) -> AppResult<&str> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput("Title must not be empty".to_string()));
    }
    Ok(query)
}

/// Looks up the rating of the first title containing `query` (case-insensitive)
pub fn score_title(catalog: &Catalog, query: &str) -> AppResult<TitleScore> {
    let query = require_query(query)?;
    let movie = catalog
        .find_title_containing(query)
        .ok_or_else(|| AppError::NotFound(format!("Movie not found: {}", query)))?;

    let year = movie
        .release_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "an unknown year".to_string());

    Ok(TitleScore {
        title: movie.title.clone(),
        release_year: movie.release_year,
        score: movie.vote_average,
        message: format!(
            "The movie '{}' was released in {} with a score of {}.",
            movie.title, year, movie.vote_average
        ),
    })
}

/// Looks up vote statistics for a title matched exactly (case-insensitive).
///
/// Titles with fewer than `min_votes` votes are rejected as invalid input.
pub fn votes_title(catalog: &Catalog, query: &str, min_votes: u64) -> AppResult<TitleVotes> {
    let query = require_query(query)?;
    let movie = catalog
        .find_title_ignore_case(query)
        .ok_or_else(|| AppError::NotFound(format!("Movie not found: {}", query)))?;

    if movie.vote_count < min_votes {
        return Err(AppError::InvalidInput(format!(
            "The movie '{}' has {} votes; at least {} are required",
            movie.title, movie.vote_count, min_votes
        )));
    }

    Ok(TitleVotes {
        title: movie.title.clone(),
        release_year: movie.release_year,
        vote_count: movie.vote_count,
        vote_average: movie.vote_average,
    })
}
