use super::config::SimilarityTiers;
use super::similarity::SimilarityMatrix;
use crate::text::Token;

/// Dynamic-programming table for the weighted longest common subsequence.
///
/// `cells[i * width + j]` holds the best cumulative similarity aligning the
/// first `i` reference tokens with the first `j` candidate tokens. The buffer
/// survives between calls to [`LcsTable::compute`].
#[derive(Debug, Default, Clone)]
pub struct LcsTable {
    cells: Vec<f64>,
    width: usize,
}

impl LcsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weighted LCS over a precomputed similarity matrix.
    ///
    /// Only pairs with positive similarity extend the diagonal; everything
    /// else carries the better of skipping a reference or a candidate word.
    pub fn compute(&mut self, matrix: &SimilarityMatrix) -> f64 {
        let m = matrix.rows();
        let n = matrix.cols();
        let width = n + 1;

        self.width = width;
        self.cells.clear();
        self.cells.resize((m + 1) * width, 0.0);

        for i in 1..=m {
            for j in 1..=n {
                let similarity = matrix.get(i - 1, j - 1);
                self.cells[i * width + j] = if similarity > 0.0 {
                    self.cells[(i - 1) * width + (j - 1)] + similarity
                } else {
                    self.cells[(i - 1) * width + j].max(self.cells[i * width + (j - 1)])
                };
            }
        }

        self.cells[m * width + n]
    }

    pub fn cell(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.width + j]
    }
}

/// One-shot weighted LCS between two token sequences.
pub fn weighted_lcs(reference: &[Token], candidate: &[Token], tiers: &SimilarityTiers) -> f64 {
    let matrix = SimilarityMatrix::build(reference, candidate, tiers);
    LcsTable::new().compute(&matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[(&str, &str)]) -> Vec<Token> {
        words.iter().map(|(n, s)| Token::new(*n, *s)).collect()
    }

    fn plain(words: &str) -> Vec<Token> {
        words.split_whitespace().map(|w| Token::new(w, w)).collect()
    }

    #[test]
    fn test_identical_sequences() {
        let seq = plain("the sky is blue");
        assert_eq!(weighted_lcs(&seq, &seq, &SimilarityTiers::default()), 4.0);
    }

    #[test]
    fn test_reversed_sequence_keeps_one_match() {
        let reference = plain("apple banana cherry");
        let candidate = plain("cherry banana apple");
        assert_eq!(
            weighted_lcs(&reference, &candidate, &SimilarityTiers::default()),
            1.0
        );
    }

    #[test]
    fn test_skips_missing_words() {
        let reference = plain("the sky is blue today");
        let candidate = plain("sky blue today");
        assert_eq!(
            weighted_lcs(&reference, &candidate, &SimilarityTiers::default()),
            3.0
        );
    }

    #[test]
    fn test_stem_matches_accumulate_weight() {
        let reference = tokens(&[("running", "run"), ("quickly", "quick")]);
        let candidate = tokens(&[("run", "run"), ("quick", "quick")]);
        let lcs = weighted_lcs(&reference, &candidate, &SimilarityTiers::default());
        assert!((lcs - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_empty_inputs() {
        let seq = plain("a b");
        let tiers = SimilarityTiers::default();
        assert_eq!(weighted_lcs(&[], &[], &tiers), 0.0);
        assert_eq!(weighted_lcs(&seq, &[], &tiers), 0.0);
        assert_eq!(weighted_lcs(&[], &seq, &tiers), 0.0);
    }

    #[test]
    fn test_table_reuse_across_shapes() {
        let tiers = SimilarityTiers::default();
        let mut table = LcsTable::new();

        let long = plain("a b c d e");
        let matrix = SimilarityMatrix::build(&long, &long, &tiers);
        assert_eq!(table.compute(&matrix), 5.0);

        let matrix = SimilarityMatrix::build(&plain("x y"), &plain("y"), &tiers);
        assert_eq!(table.compute(&matrix), 1.0);
        assert_eq!(table.cell(1, 1), 0.0);
        assert_eq!(table.cell(2, 1), 1.0);
    }
}
