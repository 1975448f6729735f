//! Supports reading the chain and solver parameters from YAML file (optional)

use std::path::Path;
use nalgebra::{Point3, Quaternion, UnitQuaternion, Vector3};
use yaml_rust2::{Yaml, YamlLoader};

use crate::chain::Chain;
use crate::config::SolverConfig;
use crate::ik_error::IkError;
use crate::joint::Joint;
use crate::parameter_error::ParameterError;
use crate::solver::IncrementalSolver;

/// Chain together with the parameters of the solver that drives it.
#[derive(Debug, Clone)]
pub struct RobotDescription {
    pub chain: Chain,
    pub config: SolverConfig,
}

impl RobotDescription {
    /// Read the robot description from YAML file. YAML file like this is supported:
    /// ```yaml
    /// # Planar arm with a level platform at the end
    /// ik_solver:
    ///   delta_gradient: 0.1
    ///   learning_rate: 50
    ///   stop_threshold: 0.05
    /// chain:
    ///   base_position: [0.0, 0.0, 0.5]
    ///   base_orientation: [0.0, 0.0, 0.0, 1.0] # x, y, z, w
    ///   joints:
    ///     - axis: [0, 0, 1]
    ///     - axis: [0, 0, 1]
    ///       offset: [1.0, 0.0, 0.0]
    ///     - axis: [0, 0, 1]
    ///       offset: [1.0, 0.0, 0.0]
    ///       platform: true
    /// ```
    /// The whole `ik_solver` block and each of its values are optional, missing values take
    /// the defaults of [`SolverConfig`]. Base position defaults to the origin and base
    /// orientation to identity; the orientation quaternion is normalized when read. Joint
    /// offsets default to zero and `platform` to false. Integers are accepted for reals.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        RobotDescription::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        let doc = docs.first()
            .ok_or_else(|| ParameterError::ParseError("empty document".to_string()))?;

        let config = parse_config(&doc["ik_solver"])?;
        let chain = parse_chain(&doc["chain"])?;
        Ok(RobotDescription { chain, config })
    }

    /// Builds the solver with all joints at zero.
    pub fn to_solver(self) -> Result<IncrementalSolver, IkError> {
        IncrementalSolver::new(self.chain, self.config)
    }

    /// Convert to string yaml representation that [`RobotDescription::from_yaml_str`] reads back.
    pub fn to_yaml(&self) -> String {
        let base = self.chain.base_position();
        let q = self.chain.base_orientation();
        let mut yaml = self.config.to_yaml();
        yaml.push_str(&format!(
            "chain:\n  \
              base_position: [{:?}, {:?}, {:?}]\n  \
              base_orientation: [{:?}, {:?}, {:?}, {:?}]\n  \
              joints:\n",
            base.x, base.y, base.z, q.i, q.j, q.k, q.w
        ));
        for joint in self.chain.joints() {
            let a = joint.axis;
            let o = joint.start_offset;
            yaml.push_str(&format!(
                "    - axis: [{:?}, {:?}, {:?}]\n      offset: [{:?}, {:?}, {:?}]\n      platform: {}\n",
                a.x, a.y, a.z, o.x, o.y, o.z, joint.platform
            ));
        }
        yaml
    }
}

fn parse_config(node: &Yaml) -> Result<SolverConfig, ParameterError> {
    let defaults = SolverConfig::default();
    let config = SolverConfig {
        delta_gradient: optional_number(node, "delta_gradient", defaults.delta_gradient)?,
        learning_rate: optional_number(node, "learning_rate", defaults.learning_rate)?,
        stop_threshold: optional_number(node, "stop_threshold", defaults.stop_threshold)?,
        slowdown_threshold: if is_absent(&node["slowdown_threshold"]) {
            None
        } else {
            Some(required_number(&node["slowdown_threshold"], "ik_solver.slowdown_threshold")?)
        },
    };
    config.validate()?;
    Ok(config)
}

fn parse_chain(node: &Yaml) -> Result<Chain, ParameterError> {
    if is_absent(node) {
        return Err(ParameterError::MissingField("chain".to_string()));
    }

    let base_position = if is_absent(&node["base_position"]) {
        Point3::origin()
    } else {
        Point3::from(vector3(&node["base_position"], "chain.base_position")?)
    };

    let base_orientation = if is_absent(&node["base_orientation"]) {
        UnitQuaternion::identity()
    } else {
        let [x, y, z, w] = numbers::<4>(&node["base_orientation"], "chain.base_orientation")?;
        UnitQuaternion::try_new(Quaternion::new(w, x, y, z), f64::EPSILON)
            .ok_or_else(|| ParameterError::ParseError(
                "chain.base_orientation must be a non-zero quaternion".to_string()))?
    };

    let items = node["joints"].as_vec()
        .ok_or_else(|| ParameterError::MissingField("chain.joints".to_string()))?;
    let mut joints = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let axis_field = format!("chain.joints[{}].axis", i);
        if is_absent(&item["axis"]) {
            return Err(ParameterError::MissingField(axis_field));
        }
        let axis = vector3(&item["axis"], &axis_field)?;

        let start_offset = if is_absent(&item["offset"]) {
            Vector3::zeros()
        } else {
            vector3(&item["offset"], &format!("chain.joints[{}].offset", i))?
        };

        let platform = match &item["platform"] {
            p if is_absent(p) => false,
            p => p.as_bool().ok_or_else(|| ParameterError::ParseError(
                format!("chain.joints[{}].platform must be true or false", i)))?,
        };

        joints.push(Joint { axis, start_offset, platform });
    }

    Ok(Chain::new(joints, base_position, base_orientation)?)
}

fn is_absent(yaml: &Yaml) -> bool {
    yaml.is_badvalue() || yaml.is_null()
}

fn number(yaml: &Yaml) -> Option<f64> {
    match yaml {
        Yaml::Real(_) => yaml.as_f64(),
        Yaml::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

fn required_number(yaml: &Yaml, field: &str) -> Result<f64, ParameterError> {
    number(yaml).ok_or_else(|| ParameterError::ParseError(
        format!("{} must be a number (got {:?})", field, yaml)))
}

fn optional_number(node: &Yaml, key: &str, default: f64) -> Result<f64, ParameterError> {
    let value = &node[key];
    if is_absent(value) {
        return Ok(default);
    }
    required_number(value, &format!("ik_solver.{}", key))
}

fn numbers<const N: usize>(yaml: &Yaml, field: &str) -> Result<[f64; N], ParameterError> {
    let items = yaml.as_vec().ok_or_else(|| ParameterError::ParseError(
        format!("{} must be a sequence of {} numbers", field, N)))?;
    if items.len() != N {
        return Err(ParameterError::InvalidLength { field: field.to_string(), expected: N, found: items.len() });
    }
    let mut out = [0.0; N];
    for (i, item) in items.iter().enumerate() {
        out[i] = required_number(item, &format!("{}[{}]", field, i))?;
    }
    Ok(out)
}

fn vector3(yaml: &Yaml, field: &str) -> Result<Vector3<f64>, ParameterError> {
    numbers::<3>(yaml, field).map(Vector3::from)
}
