//! Order status and the rules for moving between statuses.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Where an order is in the kitchen.
///
/// Serialized in upper case (`"PENDING"`, `"READY"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Completed and cancelled orders leave the queue for good.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// The kitchen's forward path, plus cancellation from any non-terminal status.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, next) {
            (from, to) if *from == to => true,
            (Pending, Accepted) | (Accepted, Preparing) | (Preparing, Ready) | (Ready, Completed) => true,
            (from, Cancelled) => from.is_active(),
            _ => false,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// How strictly status updates are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Only moves allowed by [`OrderStatus::can_transition_to`].
    Strict,
    /// Any status may overwrite any other.
    #[default]
    Lenient,
}

impl TransitionPolicy {
    pub fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        match self {
            TransitionPolicy::Strict => from.can_transition_to(to),
            TransitionPolicy::Lenient => true,
        }
    }
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(TransitionPolicy::Strict),
            "lenient" => Ok(TransitionPolicy::Lenient),
            other => Err(format!("expected `strict` or `lenient`, got `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("READY".parse::<OrderStatus>(), Ok(Ready));
        assert_eq!("CANCELLED".parse::<OrderStatus>(), Ok(Cancelled));
        assert!("ready".parse::<OrderStatus>().is_err());
        assert!("SHIPPED".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_forward_path() {
        assert!(Pending.can_transition_to(Accepted));
        assert!(Accepted.can_transition_to(Preparing));
        assert!(Preparing.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Completed));
    }

    #[test]
    fn test_skips_and_reversals_rejected() {
        assert!(!Pending.can_transition_to(Ready));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Ready.can_transition_to(Preparing));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Accepted));
    }

    #[test]
    fn test_cancel_only_from_active() {
        for status in [Pending, Accepted, Preparing, Ready] {
            assert!(status.can_transition_to(Cancelled), "{status} should cancel");
        }
        assert!(!Completed.can_transition_to(Cancelled));
    }

    #[test]
    fn test_same_status_is_allowed() {
        for status in OrderStatus::ALL {
            assert!(status.can_transition_to(status));
        }
    }

    #[test]
    fn test_lenient_policy_allows_anything() {
        assert!(!TransitionPolicy::Strict.allows(Completed, Pending));
        assert!(TransitionPolicy::Lenient.allows(Completed, Pending));
    }

    #[test]
    fn test_default_policy_overwrites() {
        let policy = TransitionPolicy::default();
        assert_eq!(policy, TransitionPolicy::Lenient);
        assert!(policy.allows(Pending, Ready));
        assert!(policy.allows(Completed, Pending));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("Strict".parse::<TransitionPolicy>(), Ok(TransitionPolicy::Strict));
        assert_eq!("lenient".parse::<TransitionPolicy>(), Ok(TransitionPolicy::Lenient));
        assert!("loose".parse::<TransitionPolicy>().is_err());
    }

    #[test]
    fn test_serde_uses_upper_case() {
        assert_eq!(serde_json::to_string(&Preparing).unwrap(), "\"PREPARING\"");
    }
}
