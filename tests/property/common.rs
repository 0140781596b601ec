use proptest::prelude::*;
use verdict::Report;

/// Strategy for a single attribute segment (no dots — dots are path
/// separators).
pub fn arb_segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}"
}

/// Strategy for a short rule message.
pub fn arb_message() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{1,12}"
}

/// Strategy for arbitrary reports nested up to `depth` levels.
pub fn arb_report(depth: u32) -> impl Strategy<Value = Report> {
    let leaf = (
        prop::option::of(arb_message()),
        prop::collection::vec((arb_segment(), arb_message()), 0..4),
    )
        .prop_map(|(self_error, rules)| build_node(self_error, rules, Vec::new()));

    leaf.prop_recursive(depth, 24, 4, |inner| {
        (
            prop::option::of(arb_message()),
            prop::collection::vec((arb_segment(), arb_message()), 0..4),
            prop::collection::vec((arb_segment(), inner), 0..4),
        )
            .prop_map(|(self_error, rules, attributes)| {
                build_node(self_error, rules, attributes)
            })
    })
}

fn build_node(
    self_error: Option<String>,
    rules: Vec<(String, String)>,
    attributes: Vec<(String, Report)>,
) -> Report {
    let mut report = Report::new();
    if let Some(message) = self_error {
        report.set_self(message);
    }
    for (name, message) in rules {
        report.set_rule(name, message);
    }
    for (name, child) in attributes {
        report.set_attribute(&name, child);
    }
    report
}

/// Every dotted attribute path present in a report, in depth-first order.
pub fn attribute_paths(report: &Report) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(report, "", &mut paths);
    paths
}

fn collect_paths(report: &Report, prefix: &str, paths: &mut Vec<String>) {
    for (name, child) in report.attributes() {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        paths.push(path.clone());
        collect_paths(child, &path, paths);
    }
}
