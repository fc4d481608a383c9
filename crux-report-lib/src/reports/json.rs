use crate::Result;
use crate::model::MetricSample;
use crate::pipeline::ReportView;
use crate::schema::keyed_samples;
use ohno::IntoAppError;
use serde_json::json;

#[expect(unused_results, reason = "Map::insert intentionally overwrites values")]
pub fn generate<W: core::fmt::Write>(view: &ReportView<'_>, writer: &mut W) -> Result<()> {
    let mut rows = Vec::with_capacity(view.rows.len());

    for row in &view.rows {
        let mut row_obj = serde_json::Map::new();
        row_obj.insert("url".to_string(), json!(row.url));
        row_obj.insert("form_factor".to_string(), json!(row.form_factor));
        row_obj.insert("overall_performance".to_string(), json!(row.rating()));
        row_obj.insert("created_at".to_string(), json!(row.created_at.to_rfc3339()));

        let mut metrics_obj = serde_json::Map::new();
        for (key, sample) in keyed_samples(row) {
            metrics_obj.insert(key, sample_to_json(sample));
        }

        row_obj.insert("metrics".to_string(), json!(metrics_obj));
        rows.push(json!(row_obj));
    }

    let mut output = serde_json::Map::new();
    output.insert("session_id".to_string(), json!(view.response.session_id));
    output.insert("ratings".to_string(), serde_json::to_value(view.ratings).into_app_err("encoding rating summary")?);
    output.insert("rows".to_string(), json!(rows));
    output.insert("summary".to_string(), json!(view.summary_stats()));

    if let Some(note) = view.note() {
        output.insert("note".to_string(), json!(note));
    }

    if let Some(error) = view.summary_error() {
        output.insert("summary_error".to_string(), json!(error));
    }

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn sample_to_json(sample: &MetricSample) -> serde_json::Value {
    json!({
        "metric_name": sample.metric_name.as_str(),
        "p75_value": sample.p75_value,
        "good_ratio": sample.good_ratio,
        "needs_improvement_ratio": sample.needs_improvement_ratio,
        "poor_ratio": sample.poor_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisResponse, UrlResult};
    use crate::pipeline::{FilterCriteria, SortSpec, build_view};
    use chrono::{TimeZone, Utc};

    fn response() -> AnalysisResponse {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        AnalysisResponse::new(
            "s1",
            vec![
                UrlResult::new(
                    "https://example.com/",
                    Some("Good"),
                    vec![MetricSample::new("Largest Contentful Paint (LCP)", Some(1800.0)).with_ratios(Some(0.8), Some(0.15), Some(0.05))],
                    at,
                ),
                UrlResult::new("https://example.org/", None, vec![], at),
            ],
        )
    }

    fn render(view: &ReportView<'_>) -> serde_json::Value {
        let mut output = String::new();
        generate(view, &mut output).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_generate_structure() {
        let response = response();
        let view = build_view(&response, &FilterCriteria::default(), &SortSpec::default());
        let json = render(&view);

        assert_eq!(json["session_id"], "s1");
        assert_eq!(json["ratings"]["state"], "breakdown");
        assert_eq!(json["ratings"]["good_count"], 1);
        assert_eq!(json["ratings"]["unknown_count"], 1);
        assert_eq!(json["summary"], json!([]));
        assert!(json.get("note").is_none());

        let rows = json["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["form_factor"], "ALL_FORM_FACTORS");
        assert_eq!(rows[0]["created_at"], "2024-01-15T10:30:00+00:00");

        let lcp = &rows[0]["metrics"]["Largest_Contentful_Paint__LCP_"];
        assert_eq!(lcp["metric_name"], "Largest Contentful Paint (LCP)");
        assert_eq!(lcp["p75_value"], 1800.0);
        assert_eq!(lcp["good_ratio"], 0.8);

        assert!(rows[1]["overall_performance"].is_null());
        assert_eq!(rows[1]["metrics"], json!({}));
    }

    #[test]
    fn test_filtered_rows_only() {
        let response = response();
        let view = build_view(&response, &FilterCriteria::new(Some("good"), None), &SortSpec::default());
        let json = render(&view);

        assert_eq!(json["rows"].as_array().unwrap().len(), 1);
        assert_eq!(json["ratings"]["total"], 2);
    }

    #[test]
    fn test_note_included() {
        let mut response = response();
        response.note = Some("partial data".into());
        let view = build_view(&response, &FilterCriteria::default(), &SortSpec::default());
        assert_eq!(render(&view)["note"], "partial data");
    }

    #[test]
    fn test_missing_rating_is_distinct_from_unknown_label() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let response = AnalysisResponse::new(
            "s2",
            vec![
                UrlResult::new("https://rated.example/", Some("Unknown"), vec![], at),
                UrlResult::new("https://unrated.example/", None, vec![], at),
            ],
        );
        let view = build_view(&response, &FilterCriteria::default(), &SortSpec::default());
        let json = render(&view);

        assert_eq!(json["rows"][0]["overall_performance"], "Unknown");
        assert_eq!(json["rows"][1]["overall_performance"], serde_json::Value::Null);
    }
}
