/// Parameter combinations the generator refuses to run with
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("letters_min ({min}) exceeds letters_max ({max})")]
    LetterRangeInverted { min: usize, max: usize },

    #[error("letters_min must be at least 1")]
    NoLetters,

    #[error("letters_max ({max}) exceeds the {available} digits available")]
    TooManyLetters { max: usize, available: usize },

    #[error("min_clue_score ({0}) exceeds the six lines of a grid")]
    ClueScoreTooHigh(usize),

    #[error("{0} must be greater than zero")]
    ZeroBudget(&'static str),
}

/// Generation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no puzzle satisfied the constraints after {attempts} attempts")]
    Exhausted { attempts: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::LetterRangeInverted { min: 7, max: 5 };
        assert_eq!(err.to_string(), "letters_min (7) exceeds letters_max (5)");

        let err = GenerateError::from(ConfigError::ZeroBudget("max_attempts"));
        assert_eq!(
            err.to_string(),
            "invalid configuration: max_attempts must be greater than zero"
        );
    }
}
