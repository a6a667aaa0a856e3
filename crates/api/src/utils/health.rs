//! Health report types for `AppContext` components

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Share of healthy components required for the whole app to count as healthy
const HEALTHY_THRESHOLD: f64 = 0.8;

/// Overall health of the application
///
/// # Example
/// ```
/// use folio_api::utils::health::{ComponentHealth, HealthStatus};
///
/// let mut status = HealthStatus::new()
///     .add_component(ComponentHealth::healthy("database"))
///     .add_component(ComponentHealth::unhealthy("attachments", "root not writable"));
/// status.calculate_score();
///
/// assert!((status.score - 0.5).abs() < f64::EPSILON);
/// assert!(!status.is_healthy);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub is_healthy: bool,
    /// Healthy components divided by all components, 0.0 to 1.0
    pub score: f64,
    pub message: Option<String>,
    pub components: Vec<ComponentHealth>,
    /// Unix seconds at which the report was taken
    pub timestamp: i64,
}

impl HealthStatus {
    /// Healthy status with no components yet
    pub fn new() -> Self {
        Self {
            is_healthy: true,
            score: 1.0,
            message: None,
            components: Vec::new(),
            timestamp: Utc::now().timestamp(),
        }
    }

    #[must_use]
    pub fn add_component(mut self, component: ComponentHealth) -> Self {
        self.components.push(component);
        self
    }

    /// Recompute `score` and `is_healthy` from the components.
    ///
    /// Call after all components have been added.
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_score(&mut self) {
        if self.components.is_empty() {
            return;
        }

        let healthy = self.components.iter().filter(|c| c.is_healthy).count();
        self.score = healthy as f64 / self.components.len() as f64;
        self.is_healthy = self.score >= HEALTHY_THRESHOLD;

        let failing: Vec<_> =
            self.components.iter().filter(|c| !c.is_healthy).map(|c| c.name.as_str()).collect();
        self.message = (!failing.is_empty()).then(|| format!("unhealthy: {}", failing.join(", ")));
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Health of an individual component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component identifier (e.g. "database", "attachments")
    pub name: String,
    pub is_healthy: bool,
    pub message: Option<String>,
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: true, message: None }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: false, message: Some(message.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_status_stays_healthy() {
        let mut status = HealthStatus::new();
        status.calculate_score();

        assert!(status.is_healthy);
        assert!(status.message.is_none());
        assert!(status.timestamp > 0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut status = HealthStatus::new()
            .add_component(ComponentHealth::healthy("database"))
            .add_component(ComponentHealth::healthy("attachments"))
            .add_component(ComponentHealth::healthy("portfolio_catalog"))
            .add_component(ComponentHealth::healthy("comment_service"))
            .add_component(ComponentHealth::unhealthy("skills", "error"));

        status.calculate_score();

        assert!((status.score - 0.8).abs() < f64::EPSILON);
        assert!(status.is_healthy);
        assert_eq!(status.message.as_deref(), Some("unhealthy: skills"));
    }

    #[test]
    fn single_failure_of_two_is_unhealthy() {
        let mut status = HealthStatus::new()
            .add_component(ComponentHealth::healthy("database"))
            .add_component(ComponentHealth::unhealthy("attachments", "missing root"));

        status.calculate_score();

        assert!(!status.is_healthy);
        assert_eq!(status.components[1].message.as_deref(), Some("missing root"));
    }

    #[test]
    fn serializes_snake_case_fields() {
        let value = serde_json::to_value(ComponentHealth::healthy("db")).unwrap();
        assert_eq!(value["is_healthy"], true);
        assert!(value["message"].is_null());
    }
}
