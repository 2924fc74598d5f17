use super::config::SimilarityTiers;
use crate::text::Token;

/// Similarity of two words in `[0, 1]`.
///
/// Exact match beats stem match. The containment and stem-prefix tiers are
/// only consulted when `tiers.partial_credit` is set.
pub fn word_similarity(a: &Token, b: &Token, tiers: &SimilarityTiers) -> f64 {
    if a.normalized() == b.normalized() {
        return tiers.exact;
    }

    if a.stemmed() == b.stemmed() {
        return tiers.stem;
    }

    if !tiers.partial_credit {
        return 0.0;
    }

    if a.normalized().contains(b.normalized()) || b.normalized().contains(a.normalized()) {
        return tiers.containment;
    }

    let (shorter, longer) = if a.stemmed().len() < b.stemmed().len() {
        (a.stemmed(), b.stemmed())
    } else {
        (b.stemmed(), a.stemmed())
    };

    if shorter.len() >= tiers.min_stem_prefix && longer.starts_with(shorter) {
        return tiers.stem_prefix;
    }

    0.0
}

/// Pairwise similarities between every reference and candidate token.
///
/// Stored row-major in one contiguous buffer (`row * cols + col`) that is
/// reused by [`SimilarityMatrix::fill`].
#[derive(Debug, Default, Clone)]
pub struct SimilarityMatrix {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl SimilarityMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(reference: &[Token], candidate: &[Token], tiers: &SimilarityTiers) -> Self {
        let mut matrix = Self::new();
        matrix.fill(reference, candidate, tiers);
        matrix
    }

    /// Recomputes the matrix in place, keeping the allocation.
    pub fn fill(&mut self, reference: &[Token], candidate: &[Token], tiers: &SimilarityTiers) {
        self.rows = reference.len();
        self.cols = candidate.len();
        self.values.clear();
        self.values.reserve(self.rows * self.cols);

        for r in reference {
            for c in candidate {
                self.values.push(word_similarity(r, c, tiers));
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    /// Best similarity of a reference token against any candidate token, 0 if there are none.
    pub fn best_in_row(&self, row: usize) -> f64 {
        self.row(row).iter().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(normalized: &str, stemmed: &str) -> Token {
        Token::new(normalized, stemmed)
    }

    fn partial() -> SimilarityTiers {
        SimilarityTiers {
            partial_credit: true,
            ..SimilarityTiers::default()
        }
    }

    #[test]
    fn test_exact_match() {
        let tiers = SimilarityTiers::default();
        assert_eq!(
            word_similarity(&token("blue", "blue"), &token("blue", "blue"), &tiers),
            1.0
        );
    }

    #[test]
    fn test_stem_match() {
        let tiers = SimilarityTiers::default();
        assert_eq!(
            word_similarity(&token("running", "run"), &token("run", "run"), &tiers),
            0.7
        );
    }

    #[test]
    fn test_unrelated_words() {
        let tiers = SimilarityTiers::default();
        assert_eq!(
            word_similarity(&token("apple", "appl"), &token("cherry", "cherri"), &tiers),
            0.0
        );
    }

    #[test]
    fn test_containment_requires_partial_credit() {
        let sun = token("sun", "sun");
        let sunshine = token("sunshine", "sunshin");
        assert_eq!(word_similarity(&sun, &sunshine, &SimilarityTiers::default()), 0.0);
        assert_eq!(word_similarity(&sun, &sunshine, &partial()), 0.5);
        assert_eq!(word_similarity(&sunshine, &sun, &partial()), 0.5);
    }

    #[test]
    fn test_stem_prefix_tier() {
        let programming = token("programming", "program");
        let programmatic = token("programmatic", "programmat");
        assert_eq!(word_similarity(&programming, &programmatic, &partial()), 0.4);
    }

    #[test]
    fn test_stem_prefix_needs_four_chars() {
        let short = token("cars", "car");
        let long = token("carton", "carton");
        assert_eq!(word_similarity(&short, &long, &partial()), 0.0);
    }

    #[test]
    fn test_matrix_layout_and_best_match() {
        let reference = vec![token("a", "a"), token("b", "b")];
        let candidate = vec![token("b", "b"), token("c", "c"), token("a", "a")];
        let matrix = SimilarityMatrix::build(&reference, &candidate, &SimilarityTiers::default());
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 3);
        assert_eq!(matrix.row(0), &[0.0, 0.0, 1.0]);
        assert_eq!(matrix.get(1, 0), 1.0);
        assert_eq!(matrix.best_in_row(1), 1.0);
    }

    #[test]
    fn test_best_in_row_with_empty_candidate() {
        let reference = vec![token("a", "a")];
        let matrix = SimilarityMatrix::build(&reference, &[], &SimilarityTiers::default());
        assert_eq!(matrix.best_in_row(0), 0.0);
    }

    #[test]
    fn test_fill_reuses_buffer() {
        let tiers = SimilarityTiers::default();
        let big: Vec<Token> = (0..4).map(|i| token(&i.to_string(), &i.to_string())).collect();
        let mut matrix = SimilarityMatrix::build(&big, &big, &tiers);
        matrix.fill(&big[..1], &big[..2], &tiers);
        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.cols(), 2);
        assert_eq!(matrix.row(0), &[1.0, 0.0]);
    }
}
