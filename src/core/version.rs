use crate::core::error::{AppError, AppResult};
use std::fmt;
use std::str::FromStr;

/// Dotted numeric version ("18.4.1") parsed into integer components.
///
/// Ordering is component-wise integer comparison, so "18.10" sorts after
/// "18.9". A shorter version is less than any extension of itself
/// ("18.3" < "18.3.0"), matching plain tuple comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTuple(Vec<u32>);

impl VersionTuple {
    pub fn parse(s: &str) -> AppResult<Self> {
        let mut parts = Vec::new();
        for component in s.split('.') {
            let n = component
                .parse::<u32>()
                .map_err(|_| AppError::Parse(format!("invalid version component in {s:?}")))?;
            parts.push(n);
        }
        if parts.is_empty() {
            return Err(AppError::Parse(format!("empty version string {s:?}")));
        }
        Ok(Self(parts))
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }
}

impl FromStr for VersionTuple {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}
