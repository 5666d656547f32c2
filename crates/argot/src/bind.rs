//! Parameter binder: declared parameter list + parsed map → typed values.
//!
//! Pure logic over `(spec, params)`; it knows nothing about which command is
//! being bound.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::convert::{TypeTag, Value};
use crate::error::BindIssue;

/// One declared handler parameter. Order within a command's list matches the
/// handler's positional order and is frozen at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    pub ty: TypeTag,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, ty: TypeTag) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Bind every declared parameter or fail as a whole.
///
/// Scans `spec` in declaration order, looking each name up in `params` and
/// converting the raw string under the declared type. Scanning continues past
/// failures so the returned issues cover every missing or unconvertible
/// parameter. A partial binding never escapes: the `Ok` vector always has
/// exactly `spec.len()` values, in declaration order.
///
/// Names present in `params` but absent from `spec` are ignored.
pub fn bind(
    spec: &[ParamSpec],
    params: &HashMap<String, String>,
) -> Result<Vec<Value>, Vec<BindIssue>> {
    let mut values = Vec::with_capacity(spec.len());
    let mut issues = Vec::new();

    for param in spec {
        match params.get(&param.name) {
            None => issues.push(BindIssue::Missing(param.name.clone())),
            Some(raw) => match param.ty.convert(raw) {
                Some(value) => values.push(value),
                None => issues.push(BindIssue::Invalid {
                    name: param.name.clone(),
                    raw: raw.clone(),
                    expected: param.ty,
                }),
            },
        }
    }

    if issues.is_empty() {
        Ok(values)
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn sum_spec() -> Vec<ParamSpec> {
        vec![
            ParamSpec::new("x", TypeTag::Int),
            ParamSpec::new("y", TypeTag::Int),
        ]
    }

    #[test]
    fn test_bind_success_preserves_declaration_order() {
        // Map iteration order must not leak into the result.
        let bound = bind(&sum_spec(), &params(&[("y", "4"), ("x", "3")])).unwrap();
        assert_eq!(bound, vec![Value::Int(3), Value::Int(4)]);
    }

    #[test]
    fn test_missing_parameter_fails_whole_binding() {
        let err = bind(&sum_spec(), &params(&[("x", "3")])).unwrap_err();
        assert_eq!(err, vec![BindIssue::Missing("y".to_string())]);
    }

    #[test]
    fn test_conversion_failure_fails_whole_binding() {
        let err = bind(&sum_spec(), &params(&[("x", "abc"), ("y", "4")])).unwrap_err();
        assert_eq!(
            err,
            vec![BindIssue::Invalid {
                name: "x".to_string(),
                raw: "abc".to_string(),
                expected: TypeTag::Int,
            }]
        );
    }

    #[test]
    fn test_all_issues_are_collected() {
        let spec = vec![
            ParamSpec::new("a", TypeTag::Int),
            ParamSpec::new("b", TypeTag::Bool),
            ParamSpec::new("c", TypeTag::Text),
        ];
        let err = bind(&spec, &params(&[("b", "maybe")])).unwrap_err();
        assert_eq!(
            err,
            vec![
                BindIssue::Missing("a".to_string()),
                BindIssue::Invalid {
                    name: "b".to_string(),
                    raw: "maybe".to_string(),
                    expected: TypeTag::Bool,
                },
                BindIssue::Missing("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let bound = bind(&sum_spec(), &params(&[("x", "1"), ("y", "2"), ("z", "9")])).unwrap();
        assert_eq!(bound, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_empty_spec_binds_to_empty_values() {
        let bound = bind(&[], &params(&[("x", "1")])).unwrap();
        assert!(bound.is_empty());
    }

    #[test]
    fn test_mixed_types_bind_in_order() {
        let spec = vec![
            ParamSpec::new("count", TypeTag::Int),
            ParamSpec::new("label", TypeTag::Text),
            ParamSpec::new("dry", TypeTag::Bool),
        ];
        let bound = bind(
            &spec,
            &params(&[("dry", "0"), ("count", "-2"), ("label", "run")]),
        )
        .unwrap();
        assert_eq!(
            bound,
            vec![
                Value::Int(-2),
                Value::Text("run".to_string()),
                Value::Bool(false),
            ]
        );
    }
}
