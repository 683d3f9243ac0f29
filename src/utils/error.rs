use std::{error::Error, fmt};

/// Failure modes of the design core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// A sequence contains a character outside {A,C,G,T}.
    InvalidBase { position: usize, base: char },
    /// A rejection-sampling loop spent its whole attempt budget.
    Exhausted { task: &'static str, attempts: usize },
    /// A scanner or builder parameter violates its invariants.
    Config(String),
    /// A coding sequence or protein cannot be translated or re-coded.
    Translation(String),
}

impl Error for DesignError {}

impl fmt::Display for DesignError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DesignError::InvalidBase { position, base } => write!(
                f,
                "Invalid base '{}' at position {}; only A, C, G and T are allowed",
                base.escape_default(),
                position
            ),
            DesignError::Exhausted { task, attempts } => {
                write!(f, "No acceptable {} found after {} attempts", task, attempts)
            }
            DesignError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            DesignError::Translation(msg) => write!(f, "Translation failed: {}", msg),
        }
    }
}

impl From<DesignError> for String {
    fn from(err: DesignError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        let err = DesignError::InvalidBase {
            position: 3,
            base: 'N',
        };
        assert_eq!(
            err.to_string(),
            "Invalid base 'N' at position 3; only A, C, G and T are allowed"
        );

        let err = DesignError::Exhausted {
            task: "filler",
            attempts: 10,
        };
        assert_eq!(String::from(err), "No acceptable filler found after 10 attempts");
    }
}
