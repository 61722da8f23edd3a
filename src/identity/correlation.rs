use std::fmt;
use uuid::Uuid;

/// Lightweight correlation ID helper based on UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Generate a new random correlation id.
    pub fn new() -> Self { Self(Uuid::new_v4().to_string()) }

    /// Create from optional string; if None or blank, generate a new one.
    pub fn from_opt_str(s: Option<&str>) -> Self {
        if let Some(v) = s {
            if let Ok(u) = Uuid::parse_str(v) {
                return Self(u.to_string());
            }
            // Accept any non-empty upstream id as-is
            if !v.trim().is_empty() {
                return Self(v.to_string());
            }
        }
        Self::new()
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl Default for CorrelationId {
    fn default() -> Self { Self::new() }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_upstream_ids() {
        assert_eq!(CorrelationId::from_opt_str(Some("req-42")).as_str(), "req-42");
        let u = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        assert_eq!(CorrelationId::from_opt_str(Some(u)).as_str(), u);
    }

    #[test]
    fn generates_when_missing() {
        let a = CorrelationId::from_opt_str(None);
        let b = CorrelationId::from_opt_str(Some("   "));
        assert!(Uuid::parse_str(a.as_str()).is_ok());
        assert_ne!(a, b);
    }
}
