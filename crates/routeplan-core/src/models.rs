use serde::{Deserialize, Serialize};

/// Edge cost and route distance unit. Unsigned, so negative weights never load.
pub type Weight = u64;

/// One parsed line of the edge list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: String,
    pub destination: String,
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, destination: impl Into<String>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            weight,
        }
    }
}

/// A requested (origin, destination) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Query {
    pub origin: String,
    pub destination: String,
}

impl Query {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// One traversed edge of a reconstructed route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance: Weight,
}

impl Leg {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

/// How a single query was classified.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutcome {
    /// Both nodes known and a path exists.
    Resolved,
    /// Both nodes known, but the destination is never reached from the origin.
    Unreachable,
    /// At least one endpoint was never declared by any edge.
    NoConnectionInfo,
}

impl std::fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RouteOutcome::Resolved => "resolved",
            RouteOutcome::Unreachable => "unreachable",
            RouteOutcome::NoConnectionInfo => "no_connection_info",
        };
        f.write_str(label)
    }
}

/// Result record for one query. Built once by the resolver and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteResult {
    pub origin: String,
    pub destination: String,
    pub outcome: RouteOutcome,
    pub legs: Vec<Leg>,
    /// Total route distance; `None` unless the outcome is `Resolved`.
    pub total: Option<Weight>,
}

impl RouteResult {
    pub fn resolved(query: &Query, legs: Vec<Leg>, total: Weight) -> Self {
        Self {
            origin: query.origin.clone(),
            destination: query.destination.clone(),
            outcome: RouteOutcome::Resolved,
            legs,
            total: Some(total),
        }
    }

    pub fn unreachable(query: &Query) -> Self {
        Self::unresolved(query, RouteOutcome::Unreachable)
    }

    pub fn no_connection_info(query: &Query) -> Self {
        Self::unresolved(query, RouteOutcome::NoConnectionInfo)
    }

    fn unresolved(query: &Query, outcome: RouteOutcome) -> Self {
        Self {
            origin: query.origin.clone(),
            destination: query.destination.clone(),
            outcome,
            legs: Vec::new(),
            total: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome == RouteOutcome::Resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_results_carry_no_legs() {
        let query = Query::new("A", "Z");
        let result = RouteResult::no_connection_info(&query);
        assert_eq!(result.outcome, RouteOutcome::NoConnectionInfo);
        assert!(result.legs.is_empty());
        assert_eq!(result.total, None);
        assert!(!result.is_resolved());
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(
            serde_json::to_string(&RouteOutcome::NoConnectionInfo).unwrap(),
            "\"no_connection_info\""
        );
        assert_eq!(RouteOutcome::Unreachable.to_string(), "unreachable");
    }
}
