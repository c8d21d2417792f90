use prettytable::{Cell, Row};

use crate::models::{ConfiguredPeer, FamilyReconciliation, ReconciliationResult, Status};
use crate::utils::{asn_to_dotted, EMPTY_VALUE};

/// One line of a per-family results table
#[derive(Debug, PartialEq)]
pub enum LimitRow<'a> {
    Checked(&'a ReconciliationResult),
    // Configured, but the registry returned nothing for this family
    Unresolved(&'a ConfiguredPeer),
}

impl<'a> LimitRow<'a> {
    pub fn titles() -> Row {
        Row::new(vec![
            Cell::new("ASN"),
            Cell::new("Configured"),
            Cell::new("Registry"),
            Cell::new("Mismatch?"),
        ])
    }

    pub fn to_row(&self) -> Row {
        match self {
            LimitRow::Checked(result) => {
                let status = Cell::new(&result.status.to_string());
                let status = match result.status {
                    Status::Mismatch => status.style_spec("Fr"),
                    Status::NotApplicable => status.style_spec("Fy"),
                    Status::Match => status,
                };
                Row::new(vec![
                    Cell::new(&asn_to_dotted(result.asn)),
                    Cell::new(&result.configured_max.to_string()),
                    Cell::new(&result.announced_max.to_string()),
                    status,
                ])
            }
            LimitRow::Unresolved(peer) => Row::new(vec![
                Cell::new(&asn_to_dotted(peer.asn)),
                Cell::new(&peer.max_prefix.to_string()),
                Cell::new(EMPTY_VALUE),
                Cell::new("unresolved").style_spec("Fy"),
            ]),
        }
    }
}

/// Rows to show for one family.
/// With `suppress`, only mismatches are kept and unresolved peers are hidden.
pub fn table_rows(outcome: &FamilyReconciliation, suppress: bool) -> Vec<LimitRow<'_>> {
    let checked = outcome
        .results
        .iter()
        .filter(|r| !suppress || r.status == Status::Mismatch)
        .map(LimitRow::Checked);
    let unresolved = outcome
        .unresolved
        .iter()
        .filter(|_| !suppress)
        .map(LimitRow::Unresolved);
    checked.chain(unresolved).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::Family;

    fn cells(row: &LimitRow) -> Vec<String> {
        row.to_row().iter().map(|c| c.get_content()).collect()
    }

    fn result(
        asn: u32,
        configured_max: u32,
        announced_max: u32,
        status: Status,
    ) -> ReconciliationResult {
        ReconciliationResult {
            asn,
            family: Family::V4,
            configured_max,
            announced_max,
            status,
        }
    }

    fn mixed_outcome() -> FamilyReconciliation {
        FamilyReconciliation {
            results: vec![
                result(65001, 500, 1000, Status::Mismatch),
                result(65002, 200, 200, Status::Match),
                result(65003, 50, 0, Status::NotApplicable),
            ],
            unresolved: vec![ConfiguredPeer {
                asn: 65004,
                family: Family::V4,
                max_prefix: 300,
            }],
        }
    }

    #[test]
    fn test_checked_row() {
        let mismatch = result(65001, 500, 1000, Status::Mismatch);
        assert_eq!(
            cells(&LimitRow::Checked(&mismatch)),
            vec!["65001", "500", "1000", "YES"]
        );
    }

    #[test]
    fn test_unresolved_row() {
        let peer = ConfiguredPeer {
            asn: 4259840100,
            family: Family::V6,
            max_prefix: 50,
        };
        assert_eq!(
            cells(&LimitRow::Unresolved(&peer)),
            vec!["65000.100", "50", "---", "unresolved"]
        );
    }

    #[test]
    fn test_suppressed_rows_only_mismatches() {
        let outcome = mixed_outcome();
        let rows = table_rows(&outcome, true);
        assert_eq!(rows, vec![LimitRow::Checked(&outcome.results[0])]);
    }

    #[test]
    fn test_full_rows() {
        let outcome = mixed_outcome();
        let rows: Vec<_> = table_rows(&outcome, false).iter().map(cells).collect();
        assert_eq!(
            rows,
            vec![
                vec!["65001", "500", "1000", "YES"],
                vec!["65002", "200", "200", ""],
                vec!["65003", "50", "0", "n/a"],
                vec!["65004", "300", "---", "unresolved"],
            ]
        );
    }

    #[test]
    fn test_no_rows() {
        let outcome = FamilyReconciliation::default();
        assert!(table_rows(&outcome, true).is_empty());
        assert!(table_rows(&outcome, false).is_empty());

        // Only matches: nothing to show once suppressed
        let outcome = FamilyReconciliation {
            results: vec![result(65002, 200, 200, Status::Match)],
            unresolved: vec![],
        };
        assert!(table_rows(&outcome, true).is_empty());
    }
}
