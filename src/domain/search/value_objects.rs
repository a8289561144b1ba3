use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

use crate::domain::errors::AppError;
use crate::domain::formatting::is_valid_symbol;

/// Value Object - validated ticker symbol.
///
/// Parsing trims and uppercases before checking, so `" aapl "` becomes a valid
/// `AAPL`. The raw predicate [`is_valid_symbol`] does no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(AppError::Validation("Symbol cannot be empty".to_string()));
        }
        if normalized.len() > 6 {
            return Err(AppError::Validation("Symbol must be 1-6 characters long".to_string()));
        }
        if !normalized.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
            return Err(AppError::Validation(
                "Symbol can only contain letters and numbers".to_string(),
            ));
        }
        if !is_valid_symbol(&normalized) {
            return Err(AppError::Validation("Symbol must start with a letter".to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
