use log::debug;

use edgemask_core::engine::FrameEngine;
use edgemask_core::MaskError;

use crate::detect::{EdgeDetect, MaskParams};
use crate::operator::EdgeOperator;
use crate::operators::{FDOG, FDOG_TCANNY, NAMED, SAVITZKY_GOLAY};

const ALIASES: &[(&str, &EdgeOperator)] = &[("FDOG", &FDOG), ("FDOGTCanny", &FDOG_TCANNY)];

impl EdgeOperator {
    /// Look up an operator by name or alias.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::UnknownOperator`] when nothing matches.
    ///
    /// # Example
    ///
    /// ```
    /// use edgemask_edge::EdgeOperator;
    ///
    /// let op = EdgeOperator::from_name("FDOG").unwrap();
    /// assert_eq!(op.name, "FDoG");
    /// ```
    pub fn from_name(name: &str) -> Result<EdgeOperator, MaskError> {
        NAMED
            .iter()
            .chain(SAVITZKY_GOLAY)
            .find(|op| op.name == name)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == name)
                    .map(|(_, op)| *op)
            })
            .cloned()
            .ok_or_else(|| MaskError::UnknownOperator(name.to_string()))
    }
}

/// Every concrete operator, sorted by name.
pub fn all_edge_operators() -> Vec<EdgeOperator> {
    let mut operators: Vec<EdgeOperator> =
        NAMED.iter().chain(SAVITZKY_GOLAY).cloned().collect();
    operators.sort_by(|a, b| a.name.cmp(b.name));
    operators
}

/// Every operator able to compute ridge masks, sorted by name.
pub fn all_ridge_operators() -> Vec<EdgeOperator> {
    all_edge_operators()
        .into_iter()
        .filter(|op| op.ridge)
        .collect()
}

fn labelled_masks<E, F>(
    engine: &E,
    operators: Vec<EdgeOperator>,
    make: F,
) -> Result<Vec<E::Clip>, MaskError>
where
    E: FrameEngine,
    F: Fn(&EdgeOperator) -> Result<E::Clip, MaskError>,
{
    operators
        .iter()
        .map(|op| {
            let mask = make(op)?;
            Ok(engine.text(&mask, op.name)?)
        })
        .collect()
}

/// Edge mask of every operator, each labelled with the operator name.
///
/// # Arguments
///
/// * `engine` - The host engine.
/// * `clip` - The source clip.
/// * `params` - Multiplier and thresholds shared by every mask.
///
/// # Returns
///
/// One mask per operator, in the order of [`all_edge_operators`].
pub fn get_all_edge_detects<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    params: &MaskParams,
) -> Result<Vec<E::Clip>, MaskError> {
    let operators = all_edge_operators();
    debug!("computing {} edge masks", operators.len());
    labelled_masks(engine, operators, |op| op.edge_mask(engine, clip, params))
}

/// Ridge mask of every ridge-capable operator, see [`get_all_edge_detects`].
pub fn get_all_ridge_detect<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    params: &MaskParams,
) -> Result<Vec<E::Clip>, MaskError> {
    let operators = all_ridge_operators();
    debug!("computing {} ridge masks", operators.len());
    labelled_masks(engine, operators, |op| op.ridge_mask(engine, clip, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_and_unique() {
        let ops = all_edge_operators();
        assert_eq!(ops.len(), NAMED.len() + SAVITZKY_GOLAY.len());
        for pair in ops.windows(2) {
            assert!(pair[0].name < pair[1].name, "{} {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn test_ridge_subset() {
        let names: Vec<_> = all_ridge_operators().iter().map(|op| op.name).collect();
        assert_eq!(names, ["ExPrewitt", "ExSobel", "FDoG", "Farid", "Roberts"]);
    }

    #[test]
    fn test_from_name() -> Result<(), MaskError> {
        assert_eq!(EdgeOperator::from_name("Sobel")?.name, "Sobel");
        assert_eq!(EdgeOperator::from_name("FDOGTCanny")?.name, "FDoGTCanny");
        assert_eq!(
            EdgeOperator::from_name("SavitzkyGolayDeriv2Quart25")?.name,
            "SavitzkyGolayDeriv2Quart25"
        );
        assert!(matches!(
            EdgeOperator::from_name("sobel"),
            Err(MaskError::UnknownOperator(name)) if name == "sobel"
        ));
        Ok(())
    }
}
