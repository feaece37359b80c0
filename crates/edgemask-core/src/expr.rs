/// Variable names the host evaluator uses to load input clips, in order.
const LOAD_OPERATORS: [char; 26] = [
    'x', 'y', 'z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w',
];

/// Maximum number of clips an expression can load.
pub const MAX_EXPR_INPUTS: usize = LOAD_OPERATORS.len();

/// Name of the variable loading the `index`-th clip.
///
/// # Examples
///
/// ```
/// use edgemask_core::expr::load_operator;
///
/// assert_eq!(load_operator(0), Some('x'));
/// assert_eq!(load_operator(3), Some('a'));
/// assert_eq!(load_operator(26), None);
/// ```
pub fn load_operator(index: usize) -> Option<char> {
    LOAD_OPERATORS.get(index).copied()
}

/// Build the expression folding `op` over the first `n` loaded clips.
///
/// Returns `None` when `n` is 0 or exceeds [`MAX_EXPR_INPUTS`].
pub fn fold_expr(n: usize, op: &str) -> Option<String> {
    if n == 0 || n > MAX_EXPR_INPUTS {
        return None;
    }

    let mut expr = String::from("x");
    for var in LOAD_OPERATORS.iter().take(n).skip(1) {
        expr.push(' ');
        expr.push(*var);
        expr.push(' ');
        expr.push_str(op);
    }
    Some(expr)
}

/// Expression returning the per-pixel maximum of the first `n` loaded clips.
///
/// # Examples
///
/// ```
/// use edgemask_core::expr::max_expr;
///
/// assert_eq!(max_expr(4).unwrap(), "x y max z max a max");
/// ```
pub fn max_expr(n: usize) -> Option<String> {
    fold_expr(n, "max")
}

/// Format a number for the host evaluator, dropping a useless fraction.
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_expr() {
        assert_eq!(max_expr(1).unwrap(), "x");
        assert_eq!(max_expr(2).unwrap(), "x y max");
        assert_eq!(
            max_expr(8).unwrap(),
            "x y max z max a max b max c max d max e max"
        );
        assert!(max_expr(0).is_none());
        assert!(max_expr(27).is_none());
    }

    #[test]
    fn test_number() {
        assert_eq!(number(255.0), "255");
        assert_eq!(number(-3.0), "-3");
        assert_eq!(number(0.5), "0.5");
    }
}
