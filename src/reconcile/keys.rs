use itertools::Itertools;

use crate::models::LimitMap;

/// Every ASN configured in either family, once each, in ascending order
pub fn build_keys(v4: &LimitMap, v6: &LimitMap) -> Vec<u32> {
    v4.keys()
        .chain(v6.keys())
        .copied()
        .sorted_unstable()
        .dedup()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_keys() {
        let v4: LimitMap = vec![(65010, 10), (9, 1), (65001, 500)].into_iter().collect();
        let v6: LimitMap = vec![(65001, 50), (100, 5)].into_iter().collect();
        assert_eq!(build_keys(&v4, &v6), vec![9, 100, 65001, 65010]);
    }

    #[test]
    fn test_build_keys_numeric_order() {
        // "10" sorts before "9" as a string
        let v4: LimitMap = vec![(10, 1), (9, 1), (4259840100, 1)].into_iter().collect();
        assert_eq!(build_keys(&v4, &LimitMap::new()), vec![9, 10, 4259840100]);
    }

    #[test]
    fn test_build_keys_empty() {
        assert!(build_keys(&LimitMap::new(), &LimitMap::new()).is_empty());
    }
}
