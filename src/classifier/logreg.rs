// src/classifier/logreg.rs
// Linear (logistic regression) intent classifier exported from scikit-learn

use serde::Deserialize;

use super::error::ArtifactError;
use super::{FeatureVector, Intent};

/// On-disk form of the classifier: one coefficient row per class, or a
/// single row for a binary model.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearClassifierModel {
    pub classes: Vec<String>,
    pub coef: Vec<Vec<f32>>,
    pub intercept: Vec<f32>,
}

#[derive(Debug, Clone)]
pub struct LinearClassifier {
    classes: Vec<Intent>,
    coef: Vec<Vec<f32>>,
    intercept: Vec<f32>,
}

impl LinearClassifier {
    /// Validate the exported weights against the vectorizer's `dimension`.
    pub fn from_model(model: LinearClassifierModel, dimension: usize) -> Result<Self, ArtifactError> {
        let n_classes = model.classes.len();
        if n_classes == 0 {
            return Err(ArtifactError::invalid("classifier has no classes"));
        }

        let rows = model.coef.len();
        let binary = n_classes == 2 && rows == 1;
        if !binary && rows != n_classes {
            return Err(ArtifactError::invalid(format!(
                "classifier has {n_classes} classes but {rows} coefficient rows"
            )));
        }
        if model.intercept.len() != rows {
            return Err(ArtifactError::invalid(format!(
                "classifier has {rows} coefficient rows but {} intercepts",
                model.intercept.len()
            )));
        }
        if let Some((row, weights)) = model
            .coef
            .iter()
            .enumerate()
            .find(|(_, weights)| weights.len() != dimension)
        {
            return Err(ArtifactError::invalid(format!(
                "coefficient row {row} has {} columns, vectorizer produces {dimension}",
                weights.len()
            )));
        }

        Ok(Self {
            classes: model.classes.into_iter().map(Intent::new).collect(),
            coef: model.coef,
            intercept: model.intercept,
        })
    }

    pub fn classes(&self) -> &[Intent] {
        &self.classes
    }

    /// Raw decision value per coefficient row
    pub fn decision_function(&self, features: &FeatureVector) -> Vec<f32> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(weights, bias)| {
                features
                    .entries()
                    .iter()
                    .map(|&(column, value)| weights.get(column).copied().unwrap_or(0.0) * value)
                    .sum::<f32>()
                    + bias
            })
            .collect()
    }

    pub fn predict(&self, features: &FeatureVector) -> Intent {
        let scores = self.decision_function(features);

        let index = if self.coef.len() == 1 && self.classes.len() == 2 {
            usize::from(scores[0] > 0.0)
        } else {
            // First maximum wins on ties
            let mut best = 0;
            for (i, score) in scores.iter().enumerate().skip(1) {
                if *score > scores[best] {
                    best = i;
                }
            }
            best
        };

        self.classes[index].clone()
    }
}
