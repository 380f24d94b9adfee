use serde::Serialize;

// ============================================================================
// Declarative Field Validation
// ============================================================================
//
// Request bodies are checked field by field before any store access. Each
// failed rule produces one FieldError; the whole list is returned to the
// caller as `{ "errors": [...] }`.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulates field errors across a set of rules.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// String must be non-empty after trimming.
    pub fn require_non_empty(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError::new(field, "must be a non-empty string"));
        }
        self
    }

    /// Integer must be at least `min`.
    pub fn require_min_i64(&mut self, field: &str, value: i64, min: i64) -> &mut Self {
        if value < min {
            self.errors
                .push(FieldError::new(field, format!("must be an integer >= {}", min)));
        }
        self
    }

    pub fn require_min_i32(&mut self, field: &str, value: i32, min: i32) -> &mut Self {
        if value < min {
            self.errors
                .push(FieldError::new(field, format!("must be an integer >= {}", min)));
        }
        self
    }

    /// Slice must contain at least `min` elements.
    pub fn require_min_len<T>(&mut self, field: &str, value: &[T], min: usize) -> &mut Self {
        if value.len() < min {
            self.errors.push(FieldError::new(
                field,
                format!("must be an array with at least {} element(s)", min),
            ));
        }
        self
    }

    /// Float must be strictly greater than `gt`.
    pub fn require_gt_f64(&mut self, field: &str, value: f64, gt: f64) -> &mut Self {
        if !(value > gt) {
            self.errors
                .push(FieldError::new(field, format!("must be a number > {}", gt)));
        }
        self
    }

    pub fn push(&mut self, error: FieldError) -> &mut Self {
        self.errors.push(error);
        self
    }

    /// Consume the validator: Ok(()) if every rule passed.
    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules_pass() {
        let mut v = Validator::new();
        v.require_non_empty("name", "Alice")
            .require_min_i64("productId", 3, 1)
            .require_min_len("products", &[1, 2], 1);
        assert!(v.finish().is_ok());
    }

    #[test]
    fn test_empty_string_rejected() {
        let mut v = Validator::new();
        v.require_non_empty("name", "   ");
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_min_int_rejected() {
        let mut v = Validator::new();
        v.require_min_i64("productId", 0, 1);
        let errors = v.finish().unwrap_err();
        assert_eq!(errors[0].field, "productId");
        assert!(errors[0].message.contains(">= 1"));
    }

    #[test]
    fn test_min_len_rejected() {
        let mut v = Validator::new();
        let empty: [i64; 0] = [];
        v.require_min_len("products", &empty, 1);
        assert_eq!(v.finish().unwrap_err().len(), 1);
    }

    #[test]
    fn test_gt_float_rejects_zero_and_nan() {
        let mut v = Validator::new();
        v.require_gt_f64("cost_price", 0.0, 0.0);
        v.require_gt_f64("cost_price", f64::NAN, 0.0);
        assert_eq!(v.finish().unwrap_err().len(), 2);
    }

    #[test]
    fn test_errors_accumulate_in_rule_order() {
        let mut v = Validator::new();
        v.require_non_empty("customerName", "")
            .require_min_len::<i64>("products", &[], 1);
        let errors = v.finish().unwrap_err();
        assert_eq!(errors[0].field, "customerName");
        assert_eq!(errors[1].field, "products");
    }

    #[test]
    fn test_field_error_serializes_to_field_and_message() {
        let err = FieldError::new("quantity", "must be an integer >= 1");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "quantity");
        assert_eq!(json["message"], "must be an integer >= 1");
    }
}
