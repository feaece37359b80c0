use log::debug;

use edgemask_core::engine::FrameEngine;
use edgemask_core::util::{depth, require_format};
use edgemask_core::MaskError;
use edgemask_edge::{EdgeDetect, EdgeOperator, MaskParams};

/// Function computing a mask from a clip and a reference clip.
pub type MaskFn<'a, E> =
    Box<dyn Fn(&E, &<E as FrameEngine>::Clip, &<E as FrameEngine>::Clip) -> Result<<E as FrameEngine>::Clip, MaskError> + 'a>;

/// Anything a mask can be obtained from.
pub enum GenericMask<'a, E: FrameEngine> {
    /// Name or alias of an operator.
    Name(&'a str),
    /// An edge operator.
    Operator(EdgeOperator),
    /// A ready made mask.
    Clip(E::Clip),
    /// A function of the clip and a reference clip.
    Function(MaskFn<'a, E>),
}

impl<'a, E: FrameEngine> From<&'a str> for GenericMask<'a, E> {
    fn from(name: &'a str) -> Self {
        GenericMask::Name(name)
    }
}

impl<E: FrameEngine> From<EdgeOperator> for GenericMask<'_, E> {
    fn from(operator: EdgeOperator) -> Self {
        GenericMask::Operator(operator)
    }
}

impl<E: FrameEngine> std::fmt::Debug for GenericMask<'_, E>
where
    E::Clip: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericMask::Name(name) => f.debug_tuple("Name").field(name).finish(),
            GenericMask::Operator(op) => f.debug_tuple("Operator").field(&op.name).finish(),
            GenericMask::Clip(clip) => f.debug_tuple("Clip").field(clip).finish(),
            GenericMask::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// Turn any [`GenericMask`] into a mask at the bit depth of `clip`.
///
/// # Arguments
///
/// * `engine` - The host engine.
/// * `mask` - Where the mask comes from.
/// * `clip` - The clip operators run on.
/// * `reference` - The reference clip handed to mask functions.
/// * `ridge` - Compute ridge masks with operators that support them.
/// * `params` - Multiplier and thresholds for operators.
///
/// # Errors
///
/// Unknown names fail with [`MaskError::UnknownOperator`] and functions without
/// a reference with [`MaskError::MissingReference`].
pub fn normalize_mask<E: FrameEngine>(
    engine: &E,
    mask: GenericMask<'_, E>,
    clip: &E::Clip,
    reference: Option<&E::Clip>,
    ridge: bool,
    params: &MaskParams,
) -> Result<E::Clip, MaskError> {
    let format = require_format(engine, clip, "normalize_mask")?;

    let mask = match mask {
        GenericMask::Name(name) => {
            operator_mask(engine, &EdgeOperator::from_name(name)?, clip, ridge, params)?
        }
        GenericMask::Operator(op) => operator_mask(engine, &op, clip, ridge, params)?,
        GenericMask::Clip(mask) => mask,
        GenericMask::Function(func) => {
            let reference = reference.ok_or(MaskError::MissingReference)?;
            func(engine, clip, reference)?
        }
    };

    depth(engine, &mask, format.bits_per_sample, None, None)
}

fn operator_mask<E: FrameEngine>(
    engine: &E,
    op: &EdgeOperator,
    clip: &E::Clip,
    ridge: bool,
    params: &MaskParams,
) -> Result<E::Clip, MaskError> {
    if ridge && op.supports_ridge() {
        debug!("normalize_mask: {} ridge mask", op.name);
        op.ridge_mask(engine, clip, params)
    } else {
        debug!("normalize_mask: {} edge mask", op.name);
        op.edge_mask(engine, clip, params)
    }
}
