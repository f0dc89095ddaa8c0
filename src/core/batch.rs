use crate::domain::model::Batch;
use crate::utils::error::{Result, RosterError};

/// Splits `ids` into contiguous chunks of at most `cap` ids, preserving
/// order. The last chunk may be smaller. Pure; the only failure mode is a
/// non-positive cap.
pub fn plan(ids: &[String], cap: usize) -> Result<Vec<Batch>> {
    if cap == 0 {
        return Err(RosterError::invalid_configuration(
            "batch cap must be positive",
        ));
    }

    Ok(ids
        .chunks(cap)
        .map(|chunk| Batch {
            ids: chunk.to_vec(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("s{}", i)).collect()
    }

    #[test]
    fn test_plan_exact_multiple() {
        let batches = plan(&ids(20), 10).unwrap();
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.len() == 10));
    }

    #[test]
    fn test_plan_with_remainder() {
        let batches = plan(&ids(15), 10).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].len(), 10);
        assert_eq!(batches[1].len(), 5);
    }

    #[test]
    fn test_plan_preserves_order() {
        let input = ids(23);
        let batches = plan(&input, 10).unwrap();

        let rejoined: Vec<String> = batches.into_iter().flat_map(|b| b.ids).collect();
        assert_eq!(rejoined, input);
    }

    #[test]
    fn test_plan_empty_input() {
        let batches = plan(&[], 10).unwrap();
        assert!(batches.is_empty());
    }

    #[test]
    fn test_plan_smaller_than_cap() {
        let batches = plan(&ids(3), 10).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 3);
    }

    #[test]
    fn test_plan_zero_cap_is_invalid() {
        let result = plan(&ids(5), 0);
        assert!(matches!(
            result,
            Err(crate::utils::error::RosterError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_plan_batch_count_is_ceiling_division() {
        for (n, cap, expected) in [(0, 10, 0), (1, 10, 1), (10, 10, 1), (11, 10, 2), (25, 7, 4)] {
            let batches = plan(&ids(n), cap).unwrap();
            assert_eq!(batches.len(), expected, "n={} cap={}", n, cap);
        }
    }
}
