use crate::Result;
use crate::scoring::OutputRecord;
use core::fmt::Write;

/// Write one JSON object per record, each on its own line.
pub fn generate<'a, W: Write>(records: impl IntoIterator<Item = &'a OutputRecord>, writer: &mut W) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", serde_json::to_string(record)?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::Category;
    use crate::metrics::MetricResult;
    use crate::scoring::{MetricScore, RecordError, Scorecard};
    use core::time::Duration;

    #[test]
    fn test_one_line_per_record() {
        let records = [
            OutputRecord::scored(
                "https://huggingface.co/gpt2",
                Scorecard {
                    metrics: vec![MetricScore {
                        name: "license",
                        result: MetricResult::new(1.0, Duration::from_millis(2)),
                    }],
                    net_score: 0.5,
                    net_score_latency_ms: 3,
                    device_fit: None,
                },
            ),
            OutputRecord::unscored("https://github.com/org/repo", Category::Code),
            OutputRecord::failed("bogus", Category::Unknown, RecordError::new("unclassified", "bad")),
        ];

        let mut output = String::new();
        generate(&records, &mut output).unwrap();

        assert!(output.ends_with('\n'));
        insta::assert_snapshot!(output, @r#"
        {"url":"https://huggingface.co/gpt2","name":"gpt2","category":"MODEL","license":1.0,"license_latency":2,"net_score":0.5,"net_score_latency":3}
        {"url":"https://github.com/org/repo","name":"https://github.com/org/repo","category":"CODE"}
        {"url":"bogus","name":"bogus","category":"UNKNOWN","error":{"kind":"unclassified","message":"bad"}}
        "#);
    }

    #[test]
    fn test_no_records_writes_nothing() {
        let mut output = String::new();
        generate(&[] as &[OutputRecord], &mut output).unwrap();
        assert!(output.is_empty());
    }
}
