//! Secondary structure prediction.
//!
//! The library treats a predictor as an oracle: give it residues, get back
//! one state per residue (`H` helix, `E` strand, `C` coil) and the
//! `(helix, strand, coil)` probabilities behind each call.
//!
//! [`GorPredictor`] is the built-in implementation. It is stateless, so one
//! process-wide instance is shared through [`shared_predictor`].

use std::sync::OnceLock;

use crate::properties::aa_index;

pub const HELIX: u8 = b'H';
pub const STRAND: u8 = b'E';
pub const COIL: u8 = b'C';

/// Per-residue structure states and their probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct StructurePrediction {
    /// One of `H`, `E`, `C` per residue.
    pub predictions: Vec<u8>,
    /// `[helix, strand, coil]` per residue, summing to 1.
    pub probabilities: Vec<[f64; 3]>,
}

impl StructurePrediction {
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

/// Something that can predict secondary structure from residues.
pub trait StructurePredictor: Send + Sync {
    fn predict(&self, sequence: &[u8]) -> StructurePrediction;
}

/// Simplified GOR single-residue information values `(helix, strand, coil)`
/// in `ACDEFGHIKLMNPQRSTVWY` order.
const GOR_INFO: [[f64; 3]; 20] = [
    [0.36, -0.23, -0.13],
    [-0.20, 0.17, 0.03],
    [0.07, -0.42, 0.35],
    [0.42, -0.37, -0.05],
    [-0.09, 0.32, -0.23],
    [-0.43, -0.18, 0.61],
    [0.04, -0.09, 0.05],
    [-0.06, 0.42, -0.36],
    [0.13, -0.25, 0.12],
    [0.21, 0.22, -0.43],
    [0.36, 0.03, -0.39],
    [-0.29, -0.18, 0.47],
    [-0.42, -0.37, 0.79],
    [0.18, -0.10, -0.08],
    [-0.01, -0.15, 0.16],
    [-0.15, -0.07, 0.22],
    [-0.11, 0.16, -0.05],
    [-0.06, 0.52, -0.46],
    [-0.02, 0.27, -0.25],
    [-0.17, 0.31, -0.14],
];

const STATES: [u8; 3] = [HELIX, STRAND, COIL];

/// GOR predictor with a triangular-weighted window.
///
/// Each position's score is the weighted mean of the information values in
/// a window of `half_width` residues either side, weights falling linearly
/// with distance. Scores become probabilities through a softmax; the state
/// is the most probable one, ties resolved helix, then strand, then coil.
/// Isolated single-residue states between two equal neighbours are
/// smoothed to the neighbours' state.
///
/// Residues outside the standard 20 carry no information.
#[derive(Debug, Clone, Copy)]
pub struct GorPredictor {
    half_width: usize,
}

impl GorPredictor {
    pub const DEFAULT_HALF_WIDTH: usize = 8;

    pub const fn new(half_width: usize) -> Self {
        Self { half_width }
    }

    pub const fn half_width(&self) -> usize {
        self.half_width
    }

    fn scores(&self, sequence: &[u8]) -> Vec<[f64; 3]> {
        let n = sequence.len();
        let info: Vec<[f64; 3]> = sequence
            .iter()
            .map(|&aa| aa_index(aa).map_or([0.0; 3], |index| GOR_INFO[index]))
            .collect();
        let span = self.half_width as f64 + 1.0;

        (0..n)
            .map(|i| {
                let start = i.saturating_sub(self.half_width);
                let end = i.saturating_add(self.half_width).min(n - 1);
                let mut totals = [0.0; 3];
                let mut weight_sum = 0.0;
                for (j, values) in info.iter().enumerate().take(end + 1).skip(start) {
                    let weight = 1.0 - i.abs_diff(j) as f64 / span;
                    for (total, value) in totals.iter_mut().zip(values) {
                        *total += value * weight;
                    }
                    weight_sum += weight;
                }
                totals.map(|total| total / weight_sum)
            })
            .collect()
    }
}

impl Default for GorPredictor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HALF_WIDTH)
    }
}

fn softmax(scores: [f64; 3]) -> [f64; 3] {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps = scores.map(|score| (score - max).exp());
    let sum: f64 = exps.iter().sum();
    exps.map(|value| value / sum)
}

fn most_probable(probabilities: &[f64; 3]) -> u8 {
    let mut best = 0;
    for state in 1..3 {
        if probabilities[state] > probabilities[best] {
            best = state;
        }
    }
    STATES[best]
}

impl StructurePredictor for GorPredictor {
    fn predict(&self, sequence: &[u8]) -> StructurePrediction {
        if sequence.is_empty() {
            return StructurePrediction {
                predictions: Vec::new(),
                probabilities: Vec::new(),
            };
        }

        let probabilities: Vec<[f64; 3]> =
            self.scores(sequence).into_iter().map(softmax).collect();
        let mut predictions: Vec<u8> = probabilities.iter().map(most_probable).collect();

        for i in 1..predictions.len().saturating_sub(1) {
            let (previous, next) = (predictions[i - 1], predictions[i + 1]);
            if previous == next && predictions[i] != previous {
                predictions[i] = previous;
            }
        }

        StructurePrediction {
            predictions,
            probabilities,
        }
    }
}

static SHARED_PREDICTOR: OnceLock<GorPredictor> = OnceLock::new();

/// The process-wide predictor, built on first use and never mutated.
pub fn shared_predictor() -> &'static GorPredictor {
    SHARED_PREDICTOR.get_or_init(|| {
        log::debug!("Initialising shared GOR structure predictor");
        GorPredictor::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fraction(prediction: &StructurePrediction, state: u8) -> f64 {
        let count = prediction.predictions.iter().filter(|&&s| s == state).count();
        count as f64 / prediction.len() as f64
    }

    #[test]
    fn test_empty_sequence() {
        let prediction = GorPredictor::default().predict(b"");
        assert!(prediction.is_empty());
        assert!(prediction.probabilities.is_empty());
    }

    #[test]
    fn test_lengths_match() {
        let prediction = GorPredictor::default().predict(b"MKTAYIAKQRQISFVKSHFSRQ");
        assert_eq!(prediction.len(), 22);
        assert_eq!(prediction.probabilities.len(), 22);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let prediction = GorPredictor::default().predict(b"ACDEFGHIKLMNPQRSTVWY");
        for probabilities in &prediction.probabilities {
            let sum: f64 = probabilities.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9);
            assert!(probabilities.iter().all(|&p| p > 0.0 && p < 1.0));
        }
    }

    #[test]
    fn test_glutamate_favours_helix() {
        let prediction = GorPredictor::default().predict(b"EEEEEEEEEEEEEEEEEEEE");
        assert_eq!(fraction(&prediction, HELIX), 1.0);
    }

    #[test]
    fn test_valine_favours_strand() {
        let prediction = GorPredictor::default().predict(b"VVVVVVVVVVVVVVVV");
        assert_eq!(fraction(&prediction, STRAND), 1.0);
    }

    #[test]
    fn test_proline_glycine_favour_coil() {
        let prediction = GorPredictor::default().predict(b"PGPGPGPGPGPGPG");
        assert_eq!(fraction(&prediction, COIL), 1.0);
    }

    #[test]
    fn test_unknown_residues_are_neutral() {
        let prediction = GorPredictor::default().predict(b"XXXX");
        for probabilities in &prediction.probabilities {
            for p in probabilities {
                assert!((p - 1.0 / 3.0).abs() < 1e-9);
            }
        }
        // All ties resolve to helix.
        assert_eq!(prediction.predictions, b"HHHH");
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        let predictor = GorPredictor::default();
        assert_eq!(predictor.predict(b"mkelv"), predictor.predict(b"MKELV"));
    }

    #[test]
    fn test_huge_half_width() {
        let prediction = GorPredictor::new(usize::MAX).predict(b"MKELV");
        assert_eq!(prediction.len(), 5);
        for probabilities in &prediction.probabilities {
            let sum: f64 = probabilities.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_residue() {
        let prediction = GorPredictor::new(0).predict(b"P");
        assert_eq!(prediction.predictions, b"C");
    }

    #[test]
    fn test_shared_predictor_is_singleton() {
        let first = shared_predictor() as *const GorPredictor;
        let second = shared_predictor() as *const GorPredictor;
        assert_eq!(first, second);
        assert_eq!(shared_predictor().half_width(), GorPredictor::DEFAULT_HALF_WIDTH);
    }

    #[test]
    fn test_trait_object() {
        let predictor: &dyn StructurePredictor = &GorPredictor::default();
        assert_eq!(predictor.predict(b"AAAA").len(), 4);
    }
}
