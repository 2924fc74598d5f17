/// Qualitative feedback tier for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Perfect,
    Excellent,
    Great,
    Good,
    Fair,
    KeepTrying,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            100..=u8::MAX => ScoreBand::Perfect,
            90..=99 => ScoreBand::Excellent,
            80..=89 => ScoreBand::Great,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Fair,
            _ => ScoreBand::KeepTrying,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Perfect => "Perfect! You guessed the response exactly!",
            ScoreBand::Excellent => "Excellent! Almost perfect!",
            ScoreBand::Great => "Great job! Very close!",
            ScoreBand::Good => "Good guess!",
            ScoreBand::Fair => "Not bad, but room for improvement",
            ScoreBand::KeepTrying => "Keep trying!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Perfect);
        assert_eq!(ScoreBand::from_score(99), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(89), ScoreBand::Great);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Great);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::KeepTrying);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::KeepTrying);
    }
}
