// General imports
use chrono::DateTime;

// mod imports
use crate::model::evaluation::EvaluationRecord;
use crate::scoring::rating::{RiskBand, classify_or_pending};

/// Sortable columns of the company list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    RubricScore,
    OurScore,
    FinalScore,
    LastUpdated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Descending,
    Ascending,
}

/// Per-column risk band filters plus an exact industry filter. `None`
/// means the dimension is unfiltered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListFilters {
    pub rubric_band: Option<RiskBand>,
    pub our_score_band: Option<RiskBand>,
    pub final_score_band: Option<RiskBand>,
    pub industry: Option<String>,
}

/// The full query the list view derives its rows from: search text,
/// filters and the active sort, applied in that order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListQuery {
    pub search_text: String,
    pub filters: ListFilters,
    pub sort: Option<(SortColumn, SortDirection)>,
}

impl ListQuery {
    /// Advance the sort state for a header click. Clicking the active
    /// column cycles descending, ascending, unsorted; clicking another
    /// column starts it descending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = match self.sort {
            Some((active, SortDirection::Descending)) if active == column => {
                Some((column, SortDirection::Ascending))
            }
            Some((active, SortDirection::Ascending)) if active == column => None,
            _ => Some((column, SortDirection::Descending)),
        };
    }
}

/// One row of the company list, with every cell already derived.
#[derive(Clone, Debug, PartialEq)]
pub struct CompanyRow {
    pub id: String,
    pub company: String,
    pub industry: String,
    pub rubric_score: RiskBand,
    pub our_score: RiskBand,
    pub final_score: RiskBand,
    pub last_updated: String,
    last_updated_ts: i64,
}

impl CompanyRow {
    fn from_record(record: &EvaluationRecord) -> Self {
        let scores = record.scores();
        let industry = if record.company_info.industry.is_empty() {
            "Other".to_string()
        } else {
            record.company_info.industry.clone()
        };
        Self {
            id: record.id.clone(),
            company: record.company_name.clone(),
            industry,
            rubric_score: classify_or_pending(scores.map(|s| s.your_policy_avg)),
            our_score: classify_or_pending(scores.map(|s| s.general_policy_avg)),
            final_score: classify_or_pending(scores.map(|s| s.final_score)),
            last_updated: date_only(&record.created_at),
            last_updated_ts: timestamp_of(&record.created_at),
        }
    }

    fn band(&self, column: SortColumn) -> RiskBand {
        match column {
            SortColumn::RubricScore => self.rubric_score,
            SortColumn::OurScore => self.our_score,
            SortColumn::FinalScore => self.final_score,
            SortColumn::LastUpdated => RiskBand::Pending,
        }
    }
}

fn date_only(created_at: &str) -> String {
    created_at
        .split('T')
        .next()
        .unwrap_or(created_at)
        .to_string()
}

fn timestamp_of(created_at: &str) -> i64 {
    DateTime::parse_from_rfc3339(created_at)
        .map(|dt| dt.timestamp())
        .unwrap_or(0)
}

/// Derive the visible rows for a query: search, then filters, then the
/// active sort. Pure; the registry's order is the unsorted baseline and
/// ties keep it (the sort is stable).
pub fn project(records: &[EvaluationRecord], query: &ListQuery) -> Vec<CompanyRow> {
    let needle = query.search_text.to_lowercase();
    let mut rows: Vec<CompanyRow> = records
        .iter()
        .filter(|record| {
            needle.is_empty() || record.company_name.to_lowercase().contains(&needle)
        })
        .map(CompanyRow::from_record)
        .filter(|row| {
            let f = &query.filters;
            f.rubric_band.is_none_or(|band| row.rubric_score == band)
                && f.our_score_band.is_none_or(|band| row.our_score == band)
                && f.final_score_band.is_none_or(|band| row.final_score == band)
                && f.industry.as_ref().is_none_or(|i| &row.industry == i)
        })
        .collect();
    if let Some((column, direction)) = query.sort {
        rows.sort_by(|a, b| {
            let ord = match column {
                SortColumn::LastUpdated => a.last_updated_ts.cmp(&b.last_updated_ts),
                _ => a.band(column).ordinal().cmp(&b.band(column).ordinal()),
            };
            match direction {
                SortDirection::Descending => ord.reverse(),
                SortDirection::Ascending => ord,
            }
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::evaluation::CompanyInfo;
    use crate::seed::{generate_fake_evaluation, seeded_evaluations};

    fn company_named(name: &str, industry: &str) -> EvaluationRecord {
        generate_fake_evaluation(
            name,
            &CompanyInfo {
                website: String::new(),
                industry: industry.to_string(),
                additional_info: String::new(),
            },
        )
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = seeded_evaluations();
        let query = ListQuery {
            search_text: "TECH".to_string(),
            ..Default::default()
        };
        let rows = project(&records, &query);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|row| row.company.to_lowercase().contains("tech")));
        // the query text is matched verbatim, whitespace included
        let padded = ListQuery {
            search_text: " tech".to_string(),
            ..Default::default()
        };
        assert!(project(&records, &padded).is_empty());
    }

    fn scored_record(id: &str, name: &str, score: f64) -> EvaluationRecord {
        use crate::model::evaluation::{EvaluationResult, RubricResults, Scores};
        EvaluationRecord {
            id: id.to_string(),
            company_name: name.to_string(),
            created_at: "2026-02-05T12:00:00Z".to_string(),
            evaluation_results: vec![EvaluationResult {
                id: format!("{id}-result"),
                rubric_results: RubricResults::default(),
                scores: Scores {
                    your_policy_avg: score,
                    general_policy_avg: score,
                    final_score: score,
                    recommendation: String::new(),
                },
                created_at: "2026-02-05T12:00:00Z".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_final_band_filter_and_descending_sort() {
        let records = vec![
            scored_record("e1", "Lowline Freight", 4.1),
            scored_record("e2", "Highline Capital", 8.2),
        ];
        let query = ListQuery {
            filters: ListFilters {
                final_score_band: Some(RiskBand::High),
                ..Default::default()
            },
            ..Default::default()
        };
        let rows = project(&records, &query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "e2");

        let query = ListQuery {
            sort: Some((SortColumn::FinalScore, SortDirection::Descending)),
            ..Default::default()
        };
        let rows = project(&records, &query);
        assert_eq!(
            rows.iter().map(|row| row.id.as_str()).collect::<Vec<_>>(),
            vec!["e2", "e1"]
        );
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let records = seeded_evaluations();
        let all = project(&records, &ListQuery::default());
        let target = &all[0];
        let query = ListQuery {
            filters: ListFilters {
                final_score_band: Some(target.final_score),
                industry: Some(target.industry.clone()),
                ..Default::default()
            },
            ..Default::default()
        };
        let rows = project(&records, &query);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|row| {
            row.final_score == target.final_score && row.industry == target.industry
        }));
        assert!(rows.len() <= all.len());
    }

    #[test]
    fn test_sort_toggle_cycles_three_states() {
        let mut query = ListQuery::default();
        query.toggle_sort(SortColumn::FinalScore);
        assert_eq!(
            query.sort,
            Some((SortColumn::FinalScore, SortDirection::Descending))
        );
        query.toggle_sort(SortColumn::FinalScore);
        assert_eq!(
            query.sort,
            Some((SortColumn::FinalScore, SortDirection::Ascending))
        );
        query.toggle_sort(SortColumn::FinalScore);
        assert_eq!(query.sort, None);
        // Switching columns resets to descending
        query.toggle_sort(SortColumn::FinalScore);
        query.toggle_sort(SortColumn::LastUpdated);
        assert_eq!(
            query.sort,
            Some((SortColumn::LastUpdated, SortDirection::Descending))
        );
    }

    #[test]
    fn test_descending_band_sort_is_monotone() {
        let records = seeded_evaluations();
        let query = ListQuery {
            sort: Some((SortColumn::FinalScore, SortDirection::Descending)),
            ..Default::default()
        };
        let rows = project(&records, &query);
        for pair in rows.windows(2) {
            assert!(pair[0].final_score.ordinal() >= pair[1].final_score.ordinal());
        }
    }

    #[test]
    fn test_band_ties_keep_registry_order() {
        // Two distinct records from the same seed share every band, so a
        // stable sort must keep their relative order.
        let records = vec![
            company_named("Alpha Holdings", "Finance"),
            company_named("Alpha Holdings", "Finance"),
        ];
        assert_eq!(records[0].result().unwrap().scores.final_score, {
            records[1].result().unwrap().scores.final_score
        });
        let query = ListQuery {
            sort: Some((SortColumn::FinalScore, SortDirection::Descending)),
            ..Default::default()
        };
        let rows = project(&records, &query);
        assert_eq!(rows[0].id, records[0].id);
        assert_eq!(rows[1].id, records[1].id);
    }

    #[test]
    fn test_pending_record_renders_pending_bands() {
        let mut record = company_named("Pending Corp", "");
        record.evaluation_results.clear();
        let rows = project(&[record], &ListQuery::default());
        assert_eq!(rows[0].rubric_score, RiskBand::Pending);
        assert_eq!(rows[0].our_score, RiskBand::Pending);
        assert_eq!(rows[0].final_score, RiskBand::Pending);
        assert_eq!(rows[0].industry, "Other");
    }

    #[test]
    fn test_last_updated_is_date_only() {
        let rows = project(&seeded_evaluations(), &ListQuery::default());
        assert!(!rows[0].last_updated.contains('T'));
        assert_eq!(rows[0].last_updated.matches('-').count(), 2);
    }
}
