use std::io::Read;
use std::path::PathBuf;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, Movie, MovieRecord},
};

use super::CatalogProvider;

/// Loads the catalog from a CSV export on local disk
#[derive(Debug, Clone)]
pub struct CsvCatalogProvider {
    path: PathBuf,
}

impl CsvCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for CsvCatalogProvider {
    async fn load(&self) -> AppResult<Catalog> {
        let bytes = tokio::fs::read(&self.path).await?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "Dataset file read");

        tokio::task::spawn_blocking(move || parse_catalog(bytes.as_slice()))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
    }

    fn name(&self) -> &'static str {
        "csv_file"
    }
}

/// Parses CSV rows (with a header line) into a catalog, keeping file order
pub fn parse_catalog<R: Read>(reader: R) -> AppResult<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut movies = Vec::new();
    for record in reader.deserialize::<MovieRecord>() {
        movies.push(Movie::from(record?));
    }

    Ok(Catalog::new(movies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    const SAMPLE: &str = "\
title,genres,vote_average,vote_count,release_date,release_year,cast,crew,return,budget
Toy Story,Animation Comedy Family,7.7,5415.0,1995-10-30,1995,\"Tom Hanks, Tim Allen\",John Lasseter,12.45,30000000
Jumanji,Adventure Fantasy Family,6.9,2413.0,1995-12-15,1995,Robin Williams,Joe Johnston,4.04,65000000
Broken Row,,not-a-number,,bad-date,,,,,
";

    #[test]
    fn test_parse_catalog_reads_rows_in_order() {
        let catalog = parse_catalog(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);

        let toy_story = catalog.get(0).unwrap();
        assert_eq!(toy_story.title, "Toy Story");
        assert_eq!(toy_story.genres, "Animation Comedy Family");
        assert_eq!(toy_story.vote_count, 5415);
        assert_eq!(toy_story.release_date, NaiveDate::from_ymd_opt(1995, 10, 30));
        assert_eq!(toy_story.cast, "Tom Hanks, Tim Allen");
        assert_eq!(toy_story.return_ratio, 12.45);
        assert_eq!(catalog.position_of("Jumanji"), Some(1));
    }

    #[test]
    fn test_parse_catalog_sanitizes_bad_cells() {
        let catalog = parse_catalog(SAMPLE.as_bytes()).unwrap();
        let broken = catalog.get(2).unwrap();
        assert_eq!(broken.genres, "");
        assert_eq!(broken.vote_average, 0.0);
        assert_eq!(broken.release_date, None);
        assert_eq!(broken.release_year, None);
    }

    #[test]
    fn test_parse_catalog_ignores_extra_columns() {
        let data = "id,title,overview,genres,vote_average\n1,Heat,A heist,Action Crime,7.7\n";
        let catalog = parse_catalog(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().genres, "Action Crime");
        assert_eq!(catalog.get(0).unwrap().vote_average, 7.7);
    }

    #[tokio::test]
    async fn test_provider_loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let provider = CsvCatalogProvider::new(file.path());
        let catalog = provider.load().await.unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(provider.name(), "csv_file");
    }

    #[tokio::test]
    async fn test_provider_missing_file_is_io_error() {
        let provider = CsvCatalogProvider::new("/nonexistent/movies.csv");
        assert!(matches!(provider.load().await, Err(AppError::Io(_))));
    }
}
