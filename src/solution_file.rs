//! Saving and restoring the solution between sessions (optional).
//!
//! The file is a YAML mapping with a single sequence of angles in degrees:
//! ```yaml
//! solution: [30.0, -10.0, -110.0]
//! ```

use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

use crate::ik_error::IkError;
use crate::kinematic_traits::Solution;
use crate::parameter_error::ParameterError;

pub fn save_solution<P: AsRef<Path>>(path: P, qs: &[f64]) -> Result<(), ParameterError> {
    std::fs::write(path, solution_to_yaml(qs)?)?;
    Ok(())
}

pub fn load_solution<P: AsRef<Path>>(path: P) -> Result<Solution, ParameterError> {
    let contents = std::fs::read_to_string(path)?;
    solution_from_yaml(&contents)
}

/// Formats the angles so that they read back bit for bit.
pub fn solution_to_yaml(qs: &[f64]) -> Result<String, ParameterError> {
    if let Some(joint) = qs.iter().position(|q| !q.is_finite()) {
        return Err(IkError::NonFiniteAngle { joint }.into());
    }
    let angles: Vec<String> = qs.iter().map(|q| format!("{:?}", q)).collect();
    Ok(format!("solution: [{}]\n", angles.join(", ")))
}

pub fn solution_from_yaml(contents: &str) -> Result<Solution, ParameterError> {
    let docs = YamlLoader::load_from_str(contents)
        .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
    let items = docs.first()
        .and_then(|doc| doc["solution"].as_vec())
        .ok_or_else(|| ParameterError::MissingField("solution".to_string()))?;

    let mut qs = Vec::with_capacity(items.len());
    for (joint, item) in items.iter().enumerate() {
        let q = match item {
            Yaml::Real(_) => item.as_f64(),
            Yaml::Integer(i) => Some(*i as f64),
            _ => None,
        }.ok_or_else(|| ParameterError::ParseError(format!("solution[{}] must be a number", joint)))?;
        if !q.is_finite() {
            return Err(IkError::NonFiniteAngle { joint }.into());
        }
        qs.push(q);
    }
    Ok(qs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_text() {
        let yaml = solution_to_yaml(&[30.0, -10.0, 0.1 + 0.2]).unwrap();
        assert_eq!(yaml, "solution: [30.0, -10.0, 0.30000000000000004]\n");
        assert_eq!(solution_from_yaml(&yaml).unwrap(), vec![30.0, -10.0, 0.1 + 0.2]);
    }

    #[test]
    fn test_integers_and_empty() {
        assert_eq!(solution_from_yaml("solution: [1, -2, 3.5]").unwrap(), vec![1.0, -2.0, 3.5]);
        assert!(solution_from_yaml("solution: []").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_bad_content() {
        assert!(matches!(solution_from_yaml("angles: [1, 2]"), Err(ParameterError::MissingField(_))));
        assert!(matches!(solution_from_yaml("solution: [1, two]"), Err(ParameterError::ParseError(_))));
        assert!(matches!(solution_from_yaml("solution: [1, .nan]"),
            Err(ParameterError::KinematicsConfigurationError(IkError::NonFiniteAngle { joint: 1 }))));
        assert!(solution_to_yaml(&[f64::INFINITY]).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("rs_gradient_ik_solution_{}.yaml", std::process::id()));
        save_solution(&path, &[12.25, -0.5, 1e-7]).unwrap();
        let loaded = load_solution(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, vec![12.25, -0.5, 1e-7]);
    }
}
