//! Text report rendering.
//!
//! All renderers return the `String` they would print so output stays
//! testable; the `print_` wrappers write to stdout in caller-provided
//! order.

use harness_spi::{ComparisonRow, GridSearchReport};

/// Ranked `(RMSE, configuration)` lines, best raw score first.
pub fn render_search_report(report: &GridSearchReport) -> String {
    let mut out = String::new();
    for record in report.ranked() {
        out.push_str(&format!("{:.4}\t{}\n", record.rmse, record.params));
    }
    out
}

/// Comparison rows, one line per (strategy, estimator) cell.
pub fn render_comparison(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&format!("{}\n", row));
    }
    out
}

/// The final holdout score line.
pub fn render_score(rmse: f64) -> String {
    format!("Score: {:.2} RMSE", rmse)
}

/// Print the ranked search report to stdout.
pub fn print_search_report(report: &GridSearchReport) {
    print!("{}", render_search_report(report));
}

/// Print comparison rows to stdout.
pub fn print_comparison(rows: &[ComparisonRow]) {
    print!("{}", render_comparison(rows));
}

/// Print the final score line to stdout.
pub fn print_score(rmse: f64) {
    println!("{}", render_score(rmse));
}

#[cfg(test)]
mod tests {
    use super::*;
    use harness_spi::{ParamSet, SearchRecord};
    use regressor_spi::ParamValue;

    #[test]
    fn test_render_search_report_ranked() {
        let mut params = ParamSet::empty();
        params.insert("max_depth", ParamValue::Int(2));
        let report = GridSearchReport {
            records: vec![
                SearchRecord {
                    mean_score: -9.0,
                    rmse: 3.0,
                    params: ParamSet::empty(),
                },
                SearchRecord {
                    mean_score: -1.0,
                    rmse: 1.0,
                    params,
                },
            ],
        };
        let text = render_search_report(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1.0000\t{max_depth: 2}");
        assert_eq!(lines[1], "3.0000\t{}");
    }

    #[test]
    fn test_render_comparison() {
        let rows = vec![ComparisonRow {
            strategy: "one_hot".to_string(),
            estimator: "SVR".to_string(),
            mean_rmse: 2.0,
            std_rmse: 0.25,
        }];
        assert_eq!(render_comparison(&rows), "one_hot\tSVR\t(2.0000, 0.2500)\n");
    }

    #[test]
    fn test_render_score() {
        assert_eq!(render_score(1.237), "Score: 1.24 RMSE");
    }
}
