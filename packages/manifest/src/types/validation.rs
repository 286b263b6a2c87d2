use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationLevel {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub level: ValidationLevel,
    /// What the issue is about, e.g. `capabilities.C04` or `resources.cpu`.
    pub field: String,
    pub message: String,
}

/// Accumulated findings of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.push(ValidationLevel::Error, field, message);
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(ValidationLevel::Warning, field, message);
    }

    pub fn add_info(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(ValidationLevel::Info, field, message);
    }

    fn push(&mut self, level: ValidationLevel, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            level,
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Warning)
    }

    /// Issues of a single level, in the order they were found.
    pub fn issues_at(&self, level: ValidationLevel) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.level == level)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_do_not_invalidate() {
        let mut result = ValidationResult::new();
        result.add_warning("capabilities", "No capabilities selected");
        result.add_info("resources", "Defaults in use");

        assert!(result.valid);
        assert!(result.has_warnings());
        assert!(!result.has_errors());
    }

    #[test]
    fn test_error_invalidates() {
        let mut result = ValidationResult::new();
        result.add_error("capabilities.C02", "Capability C02 requires C01");

        assert!(!result.valid);
        assert!(result.has_errors());
        let errors: Vec<_> = result.issues_at(ValidationLevel::Error).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "capabilities.C02");
    }
}
