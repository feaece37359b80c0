use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use edgemask_core::engine::FrameEngine;
use edgemask_core::MaskError;

use crate::detect::{EdgeDetect, MaskParams};
use crate::operator::{Computation, EdgeOperator};

/// A mask request as read from a JSON document.
///
/// ```json
/// { "operator": "Kirsch", "params": { "lthr": 8, "multi": 2.0 } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeMaskConfig {
    /// Name or alias of the operator.
    pub operator: String,
    /// Compute a ridge mask instead of an edge mask.
    #[serde(default)]
    pub ridge: bool,
    /// Multiplier and thresholds.
    #[serde(default)]
    pub params: MaskParams,
    /// Luma radius of the `MinMax` operator.
    #[serde(default)]
    pub luma_radius: Option<usize>,
    /// Chroma radius of the `MinMax` operator.
    #[serde(default)]
    pub chroma_radius: Option<usize>,
}

impl EdgeMaskConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, MaskError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MaskError> {
        let path = path.as_ref();
        debug!("reading mask config from {}", path.display());
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    /// Resolve the operator, applying the `MinMax` radii when given.
    ///
    /// # Errors
    ///
    /// Fails when the operator is unknown, or when a ridge mask is requested
    /// from an operator without ridge support.
    pub fn build(&self) -> Result<EdgeOperator, MaskError> {
        let mut operator = EdgeOperator::from_name(&self.operator)?;

        if let Computation::MinMax {
            luma_radius,
            chroma_radius,
        } = operator.computation
        {
            operator = EdgeOperator::min_max(
                self.luma_radius.unwrap_or(luma_radius),
                self.chroma_radius.unwrap_or(chroma_radius),
            );
        }

        if self.ridge && !operator.ridge {
            return Err(MaskError::RidgeUnsupported(operator.name.to_string()));
        }

        Ok(operator)
    }

    /// Build the operator and run it on `clip`.
    pub fn apply<E: FrameEngine>(&self, engine: &E, clip: &E::Clip) -> Result<E::Clip, MaskError> {
        let operator = self.build()?;
        if self.ridge {
            operator.ridge_mask(engine, clip, &self.params)
        } else {
            operator.edge_mask(engine, clip, &self.params)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() -> Result<(), MaskError> {
        let config = EdgeMaskConfig::from_json_str(r#"{ "operator": "Sobel" }"#)?;
        assert!(!config.ridge);
        assert_eq!(config.params, MaskParams::default());
        assert_eq!(config.build()?.name, "Sobel");
        Ok(())
    }

    #[test]
    fn test_min_max_radii() -> Result<(), MaskError> {
        let config = EdgeMaskConfig::from_json_str(
            r#"{ "operator": "MinMax", "luma_radius": 3 }"#,
        )?;
        assert_eq!(
            config.build()?.computation,
            Computation::MinMax {
                luma_radius: 3,
                chroma_radius: 0
            }
        );
        Ok(())
    }

    #[test]
    fn test_ridge_requires_support() {
        let config = EdgeMaskConfig::from_json_str(r#"{ "operator": "Kirsch", "ridge": true }"#)
            .unwrap();
        assert!(matches!(config.build(), Err(MaskError::RidgeUnsupported(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            EdgeMaskConfig::from_json_str("{ \"params\": {} }"),
            Err(MaskError::Config(_))
        ));
    }
}
