use crate::{
    error::{AppError, AppResult},
    models::{ActorStats, Catalog, DirectedMovie, DirectorStats},
};

fn require_name(name: &str) -> AppResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput("Name must not be empty".to_string()));
    }
    Ok(name)
}

/// Return statistics over every movie whose cast mentions `name`
pub fn actor_stats(catalog: &Catalog, name: &str) -> AppResult<ActorStats> {
    let name = require_name(name)?;
    let movies = catalog.with_cast_member(name);
    if movies.is_empty() {
        return Err(AppError::NotFound(format!("Actor not found: {}", name)));
    }

    let total_return: f64 = movies.iter().map(|m| m.return_ratio).sum();

    Ok(ActorStats {
        actor: name.to_string(),
        movie_count: movies.len(),
        total_return,
        average_return: total_return / movies.len() as f64,
    })
}

/// Return statistics and per-movie breakdown for every movie whose crew mentions `name`
pub fn director_stats(catalog: &Catalog, name: &str) -> AppResult<DirectorStats> {
    let name = require_name(name)?;
    let movies = catalog.with_crew_member(name);
    if movies.is_empty() {
        return Err(AppError::NotFound(format!("Director not found: {}", name)));
    }

    let movies: Vec<DirectedMovie> = movies
        .into_iter()
        .map(|m| DirectedMovie {
            title: m.title.clone(),
            release_date: m.release_date,
            return_ratio: m.return_ratio,
            budget: m.budget,
            profit: m.return_ratio - m.budget,
        })
        .collect();

    Ok(DirectorStats {
        director: name.to_string(),
        total_return: movies.iter().map(|m| m.return_ratio).sum(),
        movies,
    })
}
