use lamina_types::{SpanList, Summary, SummaryRow};

/// Flatten aggregated spans into table rows plus count and mean confidence.
///
/// Rows keep aggregation order. The mean is `0` for an empty list.
#[must_use]
pub fn summarize(spans: &SpanList) -> Summary {
    let rows: Vec<SummaryRow> = spans.iter().map(SummaryRow::from).collect();
    let count = rows.len();
    let mean_confidence = if count == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let n = count as f64;
        rows.iter().map(|r| r.confidence).sum::<f64>() / n
    };
    Summary {
        rows,
        count,
        mean_confidence,
    }
}
