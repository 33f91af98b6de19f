use super::Movie;

/// Read-only, ordered snapshot of the movie dataset.
///
/// A movie's position in the catalog is its row index; it is stable for the
/// lifetime of the snapshot and is what the similarity engine ranks on.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, row_index: usize) -> Option<&Movie> {
        self.movies.get(row_index)
    }

    /// Row index of the first movie whose title equals `title` exactly (case-sensitive)
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.title == title)
    }

    /// First movie whose title contains `needle`, ignoring case
    pub fn find_title_containing(&self, needle: &str) -> Option<&Movie> {
        let needle = needle.to_lowercase();
        self.movies
            .iter()
            .find(|m| m.title.to_lowercase().contains(&needle))
    }

    /// First movie whose title equals `title`, ignoring case
    pub fn find_title_ignore_case(&self, title: &str) -> Option<&Movie> {
        let title = title.to_lowercase();
        self.movies.iter().find(|m| m.title.to_lowercase() == title)
    }

    /// Movies whose cast text mentions `name`, ignoring case
    pub fn with_cast_member(&self, name: &str) -> Vec<&Movie> {
        let name = name.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.cast.to_lowercase().contains(&name))
            .collect()
    }

    /// Movies whose crew text mentions `name`, ignoring case
    pub fn with_crew_member(&self, name: &str) -> Vec<&Movie> {
        let name = name.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.crew.to_lowercase().contains(&name))
            .collect()
    }
}

impl From<Vec<Movie>> for Catalog {
    fn from(movies: Vec<Movie>) -> Self {
        Self::new(movies)
    }
}
