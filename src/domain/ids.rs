// src/domain/ids.rs

/// Coerce a textual id the way a lenient numeric parse would: surrounding
/// whitespace is ignored and integral values such as `"7"` or `"7.0"` are
/// accepted. Returns `None` for anything that cannot name a stored row.
pub fn coerce_numeric_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value = match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            let float = trimmed.parse::<f64>().ok()?;
            if !float.is_finite() || float.fract() != 0.0 {
                return None;
            }
            format!("{float:.0}").parse::<i64>().ok()?
        }
    };

    (value > 0).then_some(value)
}

/// Next id under the `max(existing ∪ {0}) + 1` scheme.
pub fn next_id<I>(existing: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    existing.into_iter().fold(0, i64::max) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_plain_and_padded_integers() {
        assert_eq!(coerce_numeric_id("7"), Some(7));
        assert_eq!(coerce_numeric_id("  12 "), Some(12));
        assert_eq!(coerce_numeric_id("3.0"), Some(3));
    }

    #[test]
    fn rejects_values_that_cannot_match_a_row() {
        assert_eq!(coerce_numeric_id(""), None);
        assert_eq!(coerce_numeric_id("abc"), None);
        assert_eq!(coerce_numeric_id("2.5"), None);
        assert_eq!(coerce_numeric_id("1e30"), None);
        assert_eq!(coerce_numeric_id("0"), None);
        assert_eq!(coerce_numeric_id("-4"), None);
        assert_eq!(coerce_numeric_id("NaN"), None);
    }

    #[test]
    fn next_id_starts_at_one_and_follows_the_maximum() {
        assert_eq!(next_id(Vec::new()), 1);
        assert_eq!(next_id(vec![3, 12, 5]), 13);
    }
}
