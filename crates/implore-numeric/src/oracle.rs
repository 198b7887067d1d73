//! Test oracles for code built on these primitives
//!
//! Distribution crates check their functions against tables of expected
//! values. These helpers do the comparison and build the expected CDF of a
//! discrete distribution from its PMF.

/// Relative equality to about eight significant digits.
///
/// Two negative values are compared by magnitude. NaN never compares equal.
pub fn approx_eq(expect: f64, got: f64) -> bool {
    let (expect, got) = if expect < 0.0 && got < 0.0 {
        (-expect, -got)
    } else {
        (expect, got)
    };
    expect * 0.999_999_99 <= got && got * 0.999_999_99 <= expect
}

/// A table entry where the function disagreed with the expected value
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// Label such as `cdf(0.5)`
    pub label: String,
    pub want: f64,
    pub got: f64,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "want {}={}, got {}", self.label, self.want, self.got)
    }
}

/// Evaluate `f` at every `x` of `table` and collect the disagreements.
///
/// Entries are checked in ascending `x` order. A pair agrees when both are
/// NaN or [`approx_eq`] holds. If `name` contains `%`, the first `%` and
/// the verb letter after it, if any (`%v`, `%g`), are replaced by `x` to form
/// the label; otherwise the label is `name(x)`.
pub fn check_table<F>(name: &str, f: F, table: &[(f64, f64)]) -> Vec<Mismatch>
where
    F: Fn(f64) -> f64,
{
    let mut entries = table.to_vec();
    entries.sort_by(|a, b| a.0.total_cmp(&b.0));

    entries
        .into_iter()
        .filter_map(|(x, want)| {
            let got = f(x);
            if (want.is_nan() && got.is_nan()) || approx_eq(want, got) {
                return None;
            }
            let label = match name.find('%') {
                Some(pos) => {
                    let rest = &name[pos + 1..];
                    let rest = match rest.chars().next() {
                        Some(verb) if verb.is_ascii_alphabetic() => &rest[1..],
                        _ => rest,
                    };
                    format!("{}{}{}", &name[..pos], x, rest)
                }
                None => format!("{}({})", name, x),
            };
            Some(Mismatch { label, want, got })
        })
        .collect()
}

/// Expected CDF table of a discrete distribution.
///
/// `bounds` is the support `[low, high]` and `step` the spacing of the
/// lattice. The table pins `low - 0.1` to 0 and `high` to 1, and for each
/// lattice point `x < high` maps both `x` and `x + step/2` to the running
/// PMF sum.
pub fn step_cdf_table<P>(bounds: (f64, f64), step: f64, pmf: P) -> Vec<(f64, f64)>
where
    P: Fn(f64) -> f64,
{
    let (low, high) = bounds;
    let mut table = vec![(low - 0.1, 0.0), (high, 1.0)];
    let mut sum = 0.0;
    let mut x = low;
    while x < high {
        sum += pmf(x);
        table.push((x, sum));
        table.push((x + step / 2.0, sum));
        x += step;
    }
    table
}
