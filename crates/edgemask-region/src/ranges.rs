use std::ops::RangeInclusive;

use log::debug;

use edgemask_core::engine::FrameEngine;
use edgemask_core::MaskError;

/// Sort, clamp and merge inclusive frame ranges.
///
/// Overlapping and adjacent ranges are merged, ends past the last frame are
/// clamped to it.
///
/// # Errors
///
/// Returns [`MaskError::InvalidFrameRange`] for reversed ranges and ranges
/// starting past the last frame.
pub fn normalize_ranges(
    ranges: &[RangeInclusive<usize>],
    num_frames: usize,
) -> Result<Vec<RangeInclusive<usize>>, MaskError> {
    let mut sorted = ranges
        .iter()
        .map(|range| {
            let (start, end) = (*range.start(), *range.end());
            if start > end || start >= num_frames {
                return Err(MaskError::InvalidFrameRange(start, end, num_frames));
            }
            Ok((start, end.min(num_frames - 1)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    sorted.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(sorted.len());
    for (start, end) in sorted {
        match merged.last_mut() {
            Some(last) if start <= last.1 + 1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    Ok(merged.into_iter().map(|(start, end)| start..=end).collect())
}

fn splice_pieces<E: FrameEngine>(engine: &E, mut pieces: Vec<E::Clip>) -> Result<E::Clip, MaskError> {
    match pieces.len() {
        0 => Err(MaskError::EmptyInput("splice")),
        1 => pieces.pop().ok_or(MaskError::EmptyInput("splice")),
        _ => Ok(engine.splice(&pieces)?),
    }
}

/// Replace the frames of `a` in `ranges` with the frames of `b`.
///
/// # Arguments
///
/// * `engine` - The host engine.
/// * `a` - The base clip.
/// * `b` - The clip frames are taken from.
/// * `ranges` - Inclusive frame ranges, an empty slice replaces every frame.
///
/// # Returns
///
/// A clip with the length of `a`, or `b` when no range is given.
pub fn replace_ranges<E: FrameEngine>(
    engine: &E,
    a: &E::Clip,
    b: &E::Clip,
    ranges: &[RangeInclusive<usize>],
) -> Result<E::Clip, MaskError> {
    if ranges.is_empty() {
        return Ok(b.clone());
    }

    let num_frames = engine.info(a).num_frames;
    let ranges = normalize_ranges(ranges, num_frames)?;
    debug!("replace_ranges: {ranges:?} of {num_frames} frames");

    let mut pieces = Vec::with_capacity(2 * ranges.len() + 1);
    let mut next = 0;
    for range in ranges {
        let (start, end) = range.into_inner();
        if start > next {
            pieces.push(engine.trim(a, next, start - 1)?);
        }
        pieces.push(engine.trim(b, start, end)?);
        next = end + 1;
    }
    if next < num_frames {
        pieces.push(engine.trim(a, next, num_frames - 1)?);
    }

    splice_pieces(engine, pieces)
}

/// Overwrite the frames of `clip` from `start` on with `insert`.
///
/// # Errors
///
/// Returns [`MaskError::InvalidFrameRange`] when `insert` runs past the end of
/// `clip`.
pub fn insert_clip<E: FrameEngine>(
    engine: &E,
    clip: &E::Clip,
    insert: &E::Clip,
    start: usize,
) -> Result<E::Clip, MaskError> {
    let num_frames = engine.info(clip).num_frames;
    let length = engine.info(insert).num_frames;
    let end = start + length;

    if length == 0 || end > num_frames {
        return Err(MaskError::InvalidFrameRange(
            start,
            end.saturating_sub(1),
            num_frames,
        ));
    }

    let mut pieces = Vec::with_capacity(3);
    if start > 0 {
        pieces.push(engine.trim(clip, 0, start - 1)?);
    }
    pieces.push(insert.clone());
    if end < num_frames {
        pieces.push(engine.trim(clip, end, num_frames - 1)?);
    }

    splice_pieces(engine, pieces)
}
