use serde::{Deserialize, Serialize};

/// Shape grown by repeated 3x3 min/max passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XxpandMode {
    /// Every pass uses the full 3x3 neighbourhood.
    #[default]
    Rectangle,
    /// Alternates square and plus passes to approximate a disc.
    Ellipse,
    /// Every pass uses the plus-shaped neighbourhood.
    Losange,
}

impl std::str::FromStr for XxpandMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rectangle" => Ok(Self::Rectangle),
            "ellipse" => Ok(Self::Ellipse),
            "losange" => Ok(Self::Losange),
            _ => Err(format!("unknown mode `{s}`, expected rectangle, ellipse or losange")),
        }
    }
}

/// All eight neighbours.
pub const SQUARE: [bool; 8] = [true; 8];

/// Top, left, right and bottom neighbours.
pub const PLUS: [bool; 8] = [false, true, false, true, true, false, true, false];

/// Left and right neighbours.
pub const HORIZONTAL: [bool; 8] = [false, false, false, true, true, false, false, false];

/// Top and bottom neighbours.
pub const VERTICAL: [bool; 8] = [false, true, false, false, false, false, true, false];

/// Neighbourhood of the pass with remaining radii `wi`, `hi`.
///
/// Returns `None` once both radii are exhausted.
pub fn pass_coordinates(mode: XxpandMode, wi: usize, hi: usize) -> Option<[bool; 8]> {
    match (wi > 0, hi > 0) {
        (true, true) => match mode {
            XxpandMode::Losange => Some(PLUS),
            XxpandMode::Ellipse if wi % 3 != 1 => Some(PLUS),
            _ => Some(SQUARE),
        },
        (true, false) => Some(HORIZONTAL),
        (false, true) => Some(VERTICAL),
        (false, false) => None,
    }
}

/// Neighbourhoods of every pass for radii `sw`, `sh`, in order.
pub fn passes(mode: XxpandMode, sw: usize, sh: usize) -> Vec<[bool; 8]> {
    let steps = sw.max(sh) + 1;
    (0..steps)
        .map(|i| (sw.saturating_sub(i), sh.saturating_sub(i)))
        .map_while(|(wi, hi)| pass_coordinates(mode, wi, hi))
        .collect()
}

/// Effective structuring element of the passes, as a row-major mask of
/// `(2 * sh + 1)` rows and `(2 * sw + 1)` columns.
pub fn footprint(mode: XxpandMode, sw: usize, sh: usize) -> Vec<bool> {
    let (rows, cols) = (2 * sh + 1, 2 * sw + 1);
    let mut mask = vec![false; rows * cols];
    mask[sh * cols + sw] = true;

    // offsets in host order, (dy, dx)
    const OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    for coordinates in passes(mode, sw, sh) {
        let mut grown = mask.clone();
        for r in 0..rows {
            for c in 0..cols {
                if !mask[r * cols + c] {
                    continue;
                }
                for (&(dy, dx), _) in OFFSETS.iter().zip(coordinates).filter(|(_, on)| *on) {
                    let (y, x) = (r as isize + dy, c as isize + dx);
                    if y >= 0 && x >= 0 && (y as usize) < rows && (x as usize) < cols {
                        grown[y as usize * cols + x as usize] = true;
                    }
                }
            }
        }
        mask = grown;
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print_footprint(mask: &[bool], cols: usize) {
        for row in mask.chunks(cols) {
            let line: String = row.iter().map(|&v| if v { "1 " } else { "0 " }).collect();
            println!("{line}");
        }
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Ellipse".parse(), Ok(XxpandMode::Ellipse));
        assert_eq!("losange".parse(), Ok(XxpandMode::Losange));
        assert!("disc".parse::<XxpandMode>().is_err());
    }

    #[test]
    fn test_passes_rectangle() {
        assert_eq!(passes(XxpandMode::Rectangle, 2, 2), vec![SQUARE, SQUARE]);
        assert_eq!(passes(XxpandMode::Rectangle, 0, 0), Vec::<[bool; 8]>::new());
    }

    #[test]
    fn test_passes_uneven_radii() {
        assert_eq!(passes(XxpandMode::Rectangle, 2, 1), vec![SQUARE, HORIZONTAL]);
        assert_eq!(passes(XxpandMode::Rectangle, 0, 2), vec![VERTICAL, VERTICAL]);
    }

    #[test]
    fn test_passes_ellipse() {
        // radius 2 and 3 use the plus shape, radius 1 the square
        assert_eq!(passes(XxpandMode::Ellipse, 3, 3), vec![PLUS, PLUS, SQUARE]);
        assert_eq!(passes(XxpandMode::Losange, 2, 2), vec![PLUS, PLUS]);
    }

    #[test]
    fn test_footprint_losange() {
        let mask = footprint(XxpandMode::Losange, 1, 1);
        print_footprint(&mask, 3);
        assert_eq!(
            mask,
            vec![false, true, false, true, true, true, false, true, false]
        );
    }

    #[test]
    fn test_footprint_ellipse() {
        let mask = footprint(XxpandMode::Ellipse, 2, 2);
        print_footprint(&mask, 5);
        // corners stay out, everything else is reached
        assert!(!mask[0] && !mask[4] && !mask[20] && !mask[24]);
        assert_eq!(mask.iter().filter(|&&v| v).count(), 21);
    }
}
