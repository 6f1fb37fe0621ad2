use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// A selectable edge-weight dimension.
///
/// Every edge carries a weight for each variant, so once a query holds a
/// `Metric` no lookup during traversal can fail. Parsing a user-supplied
/// selector is the single place where [`QueryError::InvalidMetric`] can
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Distance,
    Time,
    Cost,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Distance, Metric::Time, Metric::Cost];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Distance => "distance",
            Metric::Time => "time",
            Metric::Cost => "cost",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "distance" => Ok(Metric::Distance),
            "time" => Ok(Metric::Time),
            "cost" => Ok(Metric::Cost),
            _ => Err(QueryError::InvalidMetric(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_metric() {
        assert_eq!("distance".parse::<Metric>().unwrap(), Metric::Distance);
        assert_eq!("Time".parse::<Metric>().unwrap(), Metric::Time);
        assert_eq!("COST".parse::<Metric>().unwrap(), Metric::Cost);

        assert_eq!(
            "fuel".parse::<Metric>(),
            Err(QueryError::InvalidMetric("fuel".to_string()))
        );
    }
}
