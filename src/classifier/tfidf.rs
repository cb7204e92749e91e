// src/classifier/tfidf.rs
// TF-IDF vectorizer exported from a scikit-learn TfidfVectorizer

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use super::error::ArtifactError;
use super::FeatureVector;

// scikit-learn's default token_pattern: two or more word characters
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("static regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// On-disk form of the vectorizer.
///
/// `norm: null` disables normalization; a missing `norm` means L2.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfVectorizerModel {
    pub vocab: HashMap<String, usize>,
    pub idf_diag: Vec<f32>,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
}

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocab: HashMap<String, usize>,
    idf_diag: Vec<f32>,
    sublinear_tf: bool,
    norm: Option<Norm>,
}

impl TfidfVectorizer {
    pub fn from_model(model: TfidfVectorizerModel) -> Result<Self, ArtifactError> {
        if model.idf_diag.is_empty() {
            return Err(ArtifactError::invalid("vectorizer has an empty idf_diag"));
        }

        let dimension = model.idf_diag.len();
        if let Some((term, column)) = model.vocab.iter().find(|(_, col)| **col >= dimension) {
            return Err(ArtifactError::invalid(format!(
                "vocabulary term '{term}' maps to column {column}, but idf_diag has {dimension} entries"
            )));
        }

        Ok(Self {
            vocab: model.vocab,
            idf_diag: model.idf_diag,
            sublinear_tf: model.sublinear_tf,
            norm: model.norm,
        })
    }

    /// Number of feature columns
    pub fn dimension(&self) -> usize {
        self.idf_diag.len()
    }

    pub fn transform(&self, text: &str) -> FeatureVector {
        // BTreeMap keeps entries sorted by column
        let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
        for token in TOKEN.find_iter(text) {
            let term = token.as_str().to_lowercase();
            if let Some(&column) = self.vocab.get(&term) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(column, count)| {
                let tf = if self.sublinear_tf { 1.0 + count.ln() } else { count };
                (column, tf * self.idf_diag[column])
            })
            .collect();

        let scale = match self.norm {
            Some(Norm::L2) => entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt(),
            Some(Norm::L1) => entries.iter().map(|(_, w)| w.abs()).sum::<f32>(),
            None => 1.0,
        };
        if scale > 0.0 {
            for (_, weight) in entries.iter_mut() {
                *weight /= scale;
            }
        }

        FeatureVector::new(self.dimension(), entries)
    }
}
