//! Element-wise `all` / `any` constraints.

use crate::error::MatchError;
use crate::expected::Expected;
use crate::value::Value;

/// Requires every element (`all`) or at least one element (`any`) of the
/// subject to equal the configured operand. Each element comparison delegates
/// to the operand, so nested matchers work per element.
#[derive(Debug, Default, Clone)]
pub(crate) struct ElementsSpec {
    pub all: Option<Expected>,
    pub any: Option<Expected>,
}

impl ElementsSpec {
    pub fn check(&self, elements: &[Value]) -> Result<bool, MatchError> {
        if let Some(operand) = &self.all {
            for element in elements {
                if !operand.matches_value(element)? {
                    return Ok(false);
                }
            }
        }
        if let Some(operand) = &self.any {
            let mut found = false;
            for element in elements {
                if operand.matches_value(element)? {
                    found = true;
                    break;
                }
            }
            if !found {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().map(|&i| Value::Int(i)).collect()
    }

    #[test]
    fn test_all() {
        let spec = ElementsSpec {
            all: Some(Expected::from(2)),
            ..ElementsSpec::default()
        };
        assert!(spec.check(&ints(&[2, 2, 2])).unwrap());
        assert!(!spec.check(&ints(&[1, 2, 3, 4])).unwrap());
        // an empty subject satisfies `all` vacuously
        assert!(spec.check(&[]).unwrap());
    }

    #[test]
    fn test_any() {
        let spec = ElementsSpec {
            any: Some(Expected::from(5)),
            ..ElementsSpec::default()
        };
        assert!(spec.check(&ints(&[2, 5, 2])).unwrap());
        assert!(!spec.check(&ints(&[1, 2, 3, 4])).unwrap());
        assert!(!spec.check(&[]).unwrap());
    }
}
