use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::CategoryTotals;
use crate::reference::ReferenceAverages;

/// One stored category breakdown row, detached from any storage backend.
#[derive(Debug, Clone)]
pub struct CategoryRow {
    pub category: String,
    pub co2_kg: i64,
}

/// The merged comparison payload: the user's own breakdown, the
/// cross-submission averages, and the static reference dataset. Field
/// names are the external wire contract.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub user: BTreeMap<String, i64>,
    pub user_total: i64,
    pub all_users_avg: BTreeMap<String, i64>,
    pub all_users_avg_total: i64,
    pub reference_averages: ReferenceAverages,
}

/// Merge one user's breakdown with per-category averages over every
/// stored submission and the static reference dataset.
///
/// Per category, the average is the arithmetic mean of all stored rows,
/// rounded to the nearest integer. The average total is the sum of those
/// already-rounded averages, not a mean of submission totals; the two can
/// diverge and the former is the contract.
///
/// Cost is linear in the total number of rows across all submissions on
/// every call; there is no cached or incremental aggregate.
pub fn aggregate(
    user: CategoryTotals,
    user_total: i64,
    all_rows: &[CategoryRow],
    reference: &ReferenceAverages,
) -> Comparison {
    let mut groups: BTreeMap<&str, (i64, i64)> = BTreeMap::new();
    for row in all_rows {
        let (sum, count) = groups.entry(row.category.as_str()).or_insert((0, 0));
        *sum += row.co2_kg;
        *count += 1;
    }

    let mut all_users_avg = BTreeMap::new();
    let mut all_users_avg_total = 0;
    for (category, (sum, count)) in groups {
        let avg = (sum as f64 / count as f64).round() as i64;
        all_users_avg.insert(category.to_string(), avg);
        all_users_avg_total += avg;
    }

    Comparison {
        user,
        user_total,
        all_users_avg,
        all_users_avg_total,
        reference_averages: reference.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::reference_averages;

    fn rows(pairs: &[(&str, i64)]) -> Vec<CategoryRow> {
        pairs
            .iter()
            .map(|(category, co2_kg)| CategoryRow {
                category: category.to_string(),
                co2_kg: *co2_kg,
            })
            .collect()
    }

    #[test]
    fn test_per_category_mean_is_rounded() {
        let all_rows = rows(&[("transport", 100), ("transport", 300)]);
        let comparison = aggregate(CategoryTotals::new(), 0, &all_rows, reference_averages());
        assert_eq!(comparison.all_users_avg["transport"], 200);
    }

    #[test]
    fn test_rounding_happens_per_category() {
        let all_rows = rows(&[("energy", 10), ("energy", 11)]);
        let comparison = aggregate(CategoryTotals::new(), 0, &all_rows, reference_averages());
        // 21 / 2 = 10.5, rounded up
        assert_eq!(comparison.all_users_avg["energy"], 11);
    }

    #[test]
    fn test_avg_total_sums_rounded_averages_not_mean_of_totals() {
        // Two submissions: totals 21 and 22, so a mean of totals would be
        // 21.5 -> 22. The per-category rounded means are 11 and 11.
        let all_rows = rows(&[
            ("transport", 10),
            ("energy", 11),
            ("transport", 11),
            ("energy", 11),
        ]);
        let comparison = aggregate(CategoryTotals::new(), 0, &all_rows, reference_averages());
        assert_eq!(comparison.all_users_avg["transport"], 11);
        assert_eq!(comparison.all_users_avg["energy"], 11);
        assert_eq!(comparison.all_users_avg_total, 22);

        // And with diverging halves: means 10.5 and 10.5 round to 11 each,
        // while the mean of totals (21) stays 21.
        let all_rows = rows(&[
            ("transport", 10),
            ("energy", 11),
            ("transport", 11),
            ("energy", 10),
        ]);
        let comparison = aggregate(CategoryTotals::new(), 0, &all_rows, reference_averages());
        assert_eq!(comparison.all_users_avg_total, 22);
    }

    #[test]
    fn test_no_rows_yield_empty_averages() {
        let comparison = aggregate(CategoryTotals::new(), 0, &[], reference_averages());
        assert!(comparison.all_users_avg.is_empty());
        assert_eq!(comparison.all_users_avg_total, 0);
    }

    #[test]
    fn test_user_breakdown_passes_through_untouched() {
        let mut user = CategoryTotals::new();
        user.insert("transport".to_string(), 1092);
        user.insert("food".to_string(), 600);

        let comparison = aggregate(user.clone(), 1692, &[], reference_averages());
        assert_eq!(comparison.user, user);
        assert_eq!(comparison.user_total, 1692);
    }

    #[test]
    fn test_wire_field_names() {
        let mut user = CategoryTotals::new();
        user.insert("transport".to_string(), 500);

        let comparison = aggregate(user, 500, &rows(&[("transport", 250)]), reference_averages());
        let json = serde_json::to_value(&comparison).unwrap();

        assert!(json.get("user").is_some());
        assert!(json.get("userTotal").is_some());
        assert!(json.get("allUsersAvg").is_some());
        assert!(json.get("allUsersAvgTotal").is_some());
        let reference = json.get("referenceAverages").unwrap();
        assert!(reference.get("world").is_some());
        assert!(reference.get("continents").is_some());
        let countries = reference.get("countries").unwrap();
        let thailand = countries.get("Thailand").unwrap();
        assert!(thailand.get("co2_per_capita").is_some());
        assert!(thailand.get("continent").is_some());
    }
}
