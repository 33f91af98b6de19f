pub mod people;
pub mod providers;
pub mod releases;
pub mod similarity;
pub mod tfidf;
pub mod titles;
