use verdict::Report;

/// Helper: build a report from its canonical JSON shape.
pub fn report_from(value: serde_json::Value) -> Report {
    serde_json::from_value(value).expect("seed structure should deserialize")
}

/// Helper: the rule names of a report, in insertion order.
pub fn rule_names(report: &Report) -> Vec<&str> {
    report.rules().keys().map(String::as_str).collect()
}
