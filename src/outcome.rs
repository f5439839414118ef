//! Binary prediction outcome and its user-facing message.

use crate::ml::LABEL_GRADUATE;

/// Message shown when the classifier predicts graduation.
pub const GRADUATE_MESSAGE: &str = "✅ Prediksi: Mahasiswa kemungkinan LULUS.";
/// Message shown for every other label.
pub const DROPOUT_MESSAGE: &str = "⚠️ Prediksi: Mahasiswa kemungkinan DROPOUT.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Graduate,
    Dropout,
}

impl Outcome {
    /// `1` is graduate; any other label renders as dropout.
    pub fn from_label(label: u8) -> Self {
        if label == LABEL_GRADUATE {
            Outcome::Graduate
        } else {
            Outcome::Dropout
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::Graduate => GRADUATE_MESSAGE,
            Outcome::Dropout => DROPOUT_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_one_is_the_only_graduate_label() {
        assert_eq!(Outcome::from_label(1), Outcome::Graduate);
        assert_eq!(Outcome::from_label(0), Outcome::Dropout);
        assert_eq!(Outcome::from_label(2), Outcome::Dropout);
    }

    #[test]
    fn messages_are_distinct() {
        assert_ne!(Outcome::Graduate.message(), Outcome::Dropout.message());
        assert!(Outcome::Graduate.message().contains("LULUS"));
        assert!(Outcome::Dropout.message().contains("DROPOUT"));
    }

    #[test]
    fn messages_carry_their_status_marks() {
        assert_eq!(
            Outcome::Graduate.message(),
            "✅ Prediksi: Mahasiswa kemungkinan LULUS."
        );
        assert_eq!(
            Outcome::Dropout.message(),
            "⚠️ Prediksi: Mahasiswa kemungkinan DROPOUT."
        );
    }
}
