use crate::Result;
use crate::metrics::units::LicenseMetric;
use crate::scoring::{OutputRecord, Scorecard};
use core::fmt::Write;
use owo_colors::OwoColorize;

/// Number of models listed in the ranking
const TOP_COUNT: usize = 5;

/// Device fit above which a model counts as deployable on that device
const DEVICE_FIT_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Excellent,
    Good,
    Acceptable,
    Poor,
}

impl Tier {
    const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Acceptable, Self::Poor];

    fn of(net_score: f64) -> Self {
        if net_score >= 0.8 {
            Self::Excellent
        } else if net_score >= 0.6 {
            Self::Good
        } else if net_score >= 0.4 {
            Self::Acceptable
        } else {
            Self::Poor
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent (>= 0.8)",
            Self::Good => "Good (0.6 - 0.8)",
            Self::Acceptable => "Acceptable (0.4 - 0.6)",
            Self::Poor => "Poor (< 0.4)",
        }
    }
}

/// Write a human-readable summary of a scoring run.
pub fn generate<W: Write>(records: &[OutputRecord], use_colors: bool, writer: &mut W) -> Result<()> {
    let scored: Vec<(&OutputRecord, &Scorecard)> = records
        .iter()
        .filter_map(|record| record.scorecard().map(|card| (record, card)))
        .collect();

    heading(writer, "Model Scoring Summary", use_colors)?;
    writeln!(writer)?;

    if scored.is_empty() {
        writeln!(writer, "No models were scored.")?;
    } else {
        write_statistics(writer, &scored)?;
        writeln!(writer)?;

        heading(writer, "Quality Tiers", use_colors)?;
        for tier in Tier::ALL {
            let count = scored.iter().filter(|(_, card)| Tier::of(card.net_score) == tier).count();
            let count_str = count.to_string();
            let count_str = if use_colors {
                match tier {
                    Tier::Excellent => count_str.green().to_string(),
                    Tier::Good => count_str.cyan().to_string(),
                    Tier::Acceptable => count_str.yellow().to_string(),
                    Tier::Poor => count_str.red().to_string(),
                }
            } else {
                count_str
            };
            writeln!(writer, "  {:<24}{count_str}", tier.label())?;
        }
        writeln!(writer)?;

        let compliant = scored
            .iter()
            .filter(|(_, card)| card.metric(LicenseMetric::NAME).is_some_and(|m| m.score() >= 1.0))
            .count();
        heading(writer, "License Compliance", use_colors)?;
        writeln!(writer, "  LGPL-2.1 compatible      {compliant} of {}", scored.len())?;
        writeln!(writer)?;

        let raspberry_pi = count_fit(&scored, |card| card.device_fit.map(|fit| fit.raspberry_pi));
        let desktop_pc = count_fit(&scored, |card| card.device_fit.map(|fit| fit.desktop_pc));
        heading(writer, "Device Compatibility", use_colors)?;
        writeln!(writer, "  Raspberry Pi             {raspberry_pi}")?;
        writeln!(writer, "  Desktop PC               {desktop_pc}")?;
        writeln!(writer)?;

        heading(writer, "Top Models", use_colors)?;
        let mut ranked = scored.clone();
        ranked.sort_by(|(a_record, a), (b_record, b)| {
            b.net_score
                .total_cmp(&a.net_score)
                .then_with(|| a_record.name.cmp(&b_record.name))
        });
        for (rank, (record, card)) in ranked.iter().take(TOP_COUNT).enumerate() {
            writeln!(writer, "  {}. {:<40} {:.4}", rank + 1, record.name, card.net_score)?;
        }
    }

    let unscored = records
        .iter()
        .filter(|record| record.scorecard().is_none() && !record.is_failed())
        .count();
    if unscored > 0 {
        writeln!(writer)?;
        writeln!(writer, "{unscored} dataset or code identifier(s) were not scored")?;
    }

    let failed: Vec<_> = records.iter().filter_map(|record| record.error().map(|e| (record, e))).collect();
    if !failed.is_empty() {
        writeln!(writer)?;
        heading(writer, &format!("Failed ({})", failed.len()), use_colors)?;
        for (record, error) in failed {
            writeln!(writer, "  {}: [{}] {}", record.identifier, error.kind, error.message)?;
        }
    }

    Ok(())
}

fn write_statistics<W: Write>(writer: &mut W, scored: &[(&OutputRecord, &Scorecard)]) -> Result<()> {
    #[expect(clippy::cast_precision_loss, reason = "record counts are far below 2^52")]
    let average = scored.iter().map(|(_, card)| card.net_score).sum::<f64>() / scored.len() as f64;

    let highest = scored.iter().max_by(|(_, a), (_, b)| a.net_score.total_cmp(&b.net_score));
    let lowest = scored.iter().min_by(|(_, a), (_, b)| a.net_score.total_cmp(&b.net_score));

    writeln!(writer, "Models scored            {}", scored.len())?;
    writeln!(writer, "Average net score        {average:.4}")?;
    if let Some((record, card)) = highest {
        writeln!(writer, "Highest net score        {:.4} ({})", card.net_score, record.name)?;
    }
    if let Some((record, card)) = lowest {
        writeln!(writer, "Lowest net score         {:.4} ({})", card.net_score, record.name)?;
    }

    Ok(())
}

fn count_fit(scored: &[(&OutputRecord, &Scorecard)], fit: impl Fn(&Scorecard) -> Option<f64>) -> usize {
    scored
        .iter()
        .filter(|(_, card)| fit(card).is_some_and(|value| value > DEVICE_FIT_THRESHOLD))
        .count()
}

fn heading<W: Write>(writer: &mut W, title: &str, use_colors: bool) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::Category;
    use crate::metrics::{DeviceFit, MetricResult};
    use crate::scoring::{MetricScore, RecordError};
    use core::time::Duration;

    fn scored(name: &str, net_score: f64, license: f64, size: Option<u64>) -> OutputRecord {
        OutputRecord::scored(
            format!("https://huggingface.co/org/{name}"),
            Scorecard {
                metrics: vec![MetricScore {
                    name: LicenseMetric::NAME,
                    result: MetricResult::new(license, Duration::ZERO),
                }],
                net_score,
                net_score_latency_ms: 1,
                device_fit: size.map(DeviceFit::for_size),
            },
        )
    }

    fn sample() -> Vec<OutputRecord> {
        vec![
            scored("alpha", 0.91, 1.0, Some(10_000_000)),
            scored("beta", 0.65, 0.5, Some(1_000_000_000)),
            scored("gamma", 0.45, 1.0, None),
            scored("delta", 0.10, 0.0, Some(10_000_000_000)),
            OutputRecord::unscored("https://huggingface.co/datasets/squad", Category::Dataset),
            OutputRecord::failed("nowhere", Category::Unknown, RecordError::new("unclassified", "no known host")),
        ]
    }

    fn render(records: &[OutputRecord], use_colors: bool) -> String {
        let mut output = String::new();
        generate(records, use_colors, &mut output).unwrap();
        output
    }

    #[test]
    fn test_full_summary() {
        insta::assert_snapshot!(render(&sample(), false), @r"
        Model Scoring Summary

        Models scored            4
        Average net score        0.5275
        Highest net score        0.9100 (alpha)
        Lowest net score         0.1000 (delta)

        Quality Tiers
          Excellent (>= 0.8)      1
          Good (0.6 - 0.8)        1
          Acceptable (0.4 - 0.6)  1
          Poor (< 0.4)            1

        License Compliance
          LGPL-2.1 compatible      2 of 4

        Device Compatibility
          Raspberry Pi             1
          Desktop PC               2

        Top Models
          1. alpha                                    0.9100
          2. beta                                     0.6500
          3. gamma                                    0.4500
          4. delta                                    0.1000

        1 dataset or code identifier(s) were not scored

        Failed (1)
          nowhere: [unclassified] no known host
        ");
    }

    #[test]
    fn test_nothing_scored() {
        insta::assert_snapshot!(render(&[], false), @r"
        Model Scoring Summary

        No models were scored.
        ");
    }

    #[test]
    fn test_colored_summary() {
        let records = [scored("alpha", 0.91, 1.0, Some(10_000_000))];
        let output = render(&records, true).replace('\u{1b}', "\\e");
        insta::assert_snapshot!(output, @r"
        \e[1mModel Scoring Summary\e[0m

        Models scored            1
        Average net score        0.9100
        Highest net score        0.9100 (alpha)
        Lowest net score         0.9100 (alpha)

        \e[1mQuality Tiers\e[0m
          Excellent (>= 0.8)      \e[32m1\e[39m
          Good (0.6 - 0.8)        \e[36m0\e[39m
          Acceptable (0.4 - 0.6)  \e[33m0\e[39m
          Poor (< 0.4)            \e[31m0\e[39m

        \e[1mLicense Compliance\e[0m
          LGPL-2.1 compatible      1 of 1

        \e[1mDevice Compatibility\e[0m
          Raspberry Pi             1
          Desktop PC               1

        \e[1mTop Models\e[0m
          1. alpha                                    0.9100
        ");
    }
}
