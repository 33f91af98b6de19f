//! Content-based similarity between catalog titles.
//!
//! Each movie is described by a fused feature vector: the TF-IDF weights of
//! its genre text followed by its raw `vote_average`. The rating is appended
//! without rescaling, so on typical data it dominates the sparse genre
//! weights; rankings depend on that.
//!
//! Only the query row of the similarity matrix is computed when ranking.
//! [`similarity_matrix`] gives the full pairwise matrix and agrees with
//! [`similarity_row`] on every row.

use std::time::Instant;

use crate::models::Catalog;
use crate::services::tfidf::TfidfMatrix;

/// Number of titles returned by [`compute_similar`]
pub const SIMILAR_TITLES_LIMIT: usize = 5;

/// Errors produced while resolving a similarity query
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    #[error("Title not present in catalog: {0}")]
    TitleNotFound(String),

    #[error("Catalog is empty")]
    EmptyCatalog,
}

/// Builds one fused feature vector per catalog row
pub fn build_features(catalog: &Catalog) -> Vec<Vec<f64>> {
    let tfidf = TfidfMatrix::fit_transform(catalog.movies().iter().map(|m| m.genres.as_str()));
    tracing::debug!(
        rows = catalog.len(),
        vocabulary = tfidf.vocabulary().len(),
        "Genre vocabulary built"
    );
    fuse_features(tfidf, catalog.movies().iter().map(|m| m.vote_average))
}

/// Appends each rating as a trailing scalar to the matching TF-IDF row
pub fn fuse_features<I>(tfidf: TfidfMatrix, ratings: I) -> Vec<Vec<f64>>
where
    I: IntoIterator<Item = f64>,
{
    tfidf
        .into_rows()
        .into_iter()
        .zip(ratings)
        .map(|(mut row, rating)| {
            row.push(rating);
            row
        })
        .collect()
}

/// Cosine similarity; 0 when either vector has zero magnitude
pub fn cosine_similarity(u: &[f64], v: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_u = 0.0;
    let mut norm_v = 0.0;

    for (a, b) in u.iter().zip(v) {
        dot += a * b;
        norm_u += a * a;
        norm_v += b * b;
    }

    if norm_u == 0.0 || norm_v == 0.0 {
        return 0.0;
    }

    dot / (norm_u.sqrt() * norm_v.sqrt())
}

/// Similarity of row `index` against every row, including itself
pub fn similarity_row(features: &[Vec<f64>], index: usize) -> Vec<f64> {
    let query = &features[index];
    features
        .iter()
        .map(|other| cosine_similarity(query, other))
        .collect()
}

/// Full pairwise similarity matrix
pub fn similarity_matrix(features: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = features.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i..n {
            let sim = cosine_similarity(&features[i], &features[j]);
            matrix[i][j] = sim;
            matrix[j][i] = sim;
        }
    }
    matrix
}

/// Row indices ordered by descending score, skipping `exclude`.
///
/// Equal scores keep catalog order.
pub fn rank_indices(scores: &[f64], exclude: usize, limit: usize) -> Vec<usize> {
    let mut candidates: Vec<usize> = (0..scores.len()).filter(|&i| i != exclude).collect();
    candidates.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    candidates.truncate(limit);
    candidates
}

/// Returns up to [`SIMILAR_TITLES_LIMIT`] titles most similar to `title`.
///
/// `title` must match a catalog title exactly (case-sensitive); when it
/// appears more than once the first row wins. The query row itself is never
/// part of the result.
#[tracing::instrument(skip(catalog), fields(catalog_size = catalog.len()))]
pub fn compute_similar(title: &str, catalog: &Catalog) -> Result<Vec<String>, SimilarityError> {
    if catalog.is_empty() {
        return Err(SimilarityError::EmptyCatalog);
    }

    let index = catalog
        .position_of(title)
        .ok_or_else(|| SimilarityError::TitleNotFound(title.to_string()))?;

    let start = Instant::now();
    let features = build_features(catalog);
    let scores = similarity_row(&features, index);
    let ranked = rank_indices(&scores, index, SIMILAR_TITLES_LIMIT);

    tracing::debug!(
        row_index = index,
        results = ranked.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Similarity ranking complete"
    );

    Ok(ranked
        .into_iter()
        .filter_map(|i| catalog.get(i))
        .map(|m| m.title.clone())
        .collect())
}
