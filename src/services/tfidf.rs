//! TF-IDF weighting of short free-text fields.
//!
//! The vectorizer is fitted and applied in a single pass over one catalog
//! snapshot; it keeps no state between calls. Weighting follows the usual
//! smoothed formulation:
//!
//! - tf = raw term count in the document
//! - idf = ln((1 + n) / (1 + df)) + 1
//! - each document vector is L2-normalized (all-zero vectors stay zero)

use std::collections::{BTreeSet, HashMap};

/// Splits text into lowercase terms of at least two word characters.
///
/// Anything that is not alphanumeric or `_` separates terms, so
/// `"Action|Science Fiction"` and `"action, science fiction"` tokenize the same.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect()
}

/// Dense TF-IDF weights, one row per input document
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TfidfMatrix {
    /// Fits the vocabulary and IDF weights on `documents` and returns their vectors
    pub fn fit_transform<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokenized: Vec<Vec<String>> = documents.into_iter().map(tokenize).collect();

        // Sorted vocabulary gives a deterministic column order
        let vocabulary: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let column_of: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(column, term)| (term.as_str(), column))
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<usize> = tokens.iter().map(|t| column_of[t.as_str()]).collect();
            for column in unique {
                document_frequency[column] += 1;
            }
        }

        let n = tokenized.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for token in tokens {
                    row[column_of[token.as_str()]] += 1.0;
                }
                for (weight, idf) in row.iter_mut().zip(&idf) {
                    *weight *= idf;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Self { vocabulary, rows }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in row.iter_mut() {
            *weight /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_tokenize_lowercases_and_drops_short_tokens() {
        assert_eq!(
            tokenize("Action, Science Fiction|War a"),
            vec!["action", "science", "fiction", "war"]
        );
        assert!(tokenize("").is_empty());
        assert!(tokenize(" , x |").is_empty());
    }

    #[test]
    fn test_vocabulary_is_sorted_and_shared() {
        let matrix = TfidfMatrix::fit_transform(["war action", "romance", "action"]);
        assert_eq!(matrix.vocabulary(), ["action", "romance", "war"]);
        assert_eq!(matrix.rows().len(), 3);
        assert!(matrix.rows().iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_rows_are_unit_length() {
        let matrix = TfidfMatrix::fit_transform(["war action", "romance drama drama"]);
        for row in matrix.rows() {
            let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_rare_terms_weigh_more() {
        // "action" appears everywhere, "war" only in the first document
        let matrix = TfidfMatrix::fit_transform(["action war", "action", "action comedy"]);
        let row = &matrix.rows()[0];
        assert!(row[2] > row[0], "war should outweigh action: {:?}", row);
    }

    #[test]
    fn test_idf_matches_smoothed_formula() {
        let matrix = TfidfMatrix::fit_transform(["action war", "action"]);
        // idf(action) = ln(3/3) + 1 = 1, idf(war) = ln(3/2) + 1
        let war_idf = (3.0f64 / 2.0).ln() + 1.0;
        let norm = (1.0 + war_idf * war_idf).sqrt();
        let row = &matrix.rows()[0];
        assert!((row[0] - 1.0 / norm).abs() < EPSILON);
        assert!((row[1] - war_idf / norm).abs() < EPSILON);
    }

    #[test]
    fn test_empty_document_yields_zero_row() {
        let matrix = TfidfMatrix::fit_transform(["action", ""]);
        assert_eq!(matrix.rows()[1], vec![0.0]);
    }

    #[test]
    fn test_empty_vocabulary_does_not_fail() {
        let matrix = TfidfMatrix::fit_transform(["", "", "x"]);
        assert!(matrix.vocabulary().is_empty());
        assert!(matrix.rows().iter().all(Vec::is_empty));
    }

    #[test]
    fn test_identical_documents_are_degenerate_but_valid() {
        let matrix = TfidfMatrix::fit_transform(["drama", "drama", "drama"]);
        for row in matrix.rows() {
            assert!((row[0] - 1.0).abs() < EPSILON);
        }
    }
}
