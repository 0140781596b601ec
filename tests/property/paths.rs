use super::common::arb_segment;
use proptest::prelude::*;
use verdict::Report;

proptest! {
    /// Dotted-path addressing is equivalent to repeated single-segment
    /// descent, for any chain of segments.
    #[test]
    fn dotted_path_equals_sequential_descent(segments in prop::collection::vec(arb_segment(), 1..5)) {
        let path = segments.join(".");

        let mut via_path = Report::new();
        via_path.attribute(&path).set_rule("r", "m");

        let mut via_descent = Report::new();
        let mut node = &mut via_descent;
        for segment in &segments {
            node = node.attribute(segment);
        }
        node.set_rule("r", "m");

        prop_assert_eq!(&via_path, &via_descent);
        prop_assert_eq!(via_path.first_of(&path), Some("m"));
    }

    /// Addressing a path twice reuses the same nodes.
    #[test]
    fn addressing_is_idempotent(segments in prop::collection::vec(arb_segment(), 1..5)) {
        let path = segments.join(".");

        let mut once = Report::new();
        once.attribute(&path);

        let mut twice = Report::new();
        twice.attribute(&path);
        twice.attribute(&path);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(twice.attributes().len(), 1);
    }

    /// A read through `try_attribute` never changes the tree.
    #[test]
    fn try_attribute_never_mutates(
        present in prop::collection::vec(arb_segment(), 1..4),
        probe in prop::collection::vec(arb_segment(), 1..4),
    ) {
        let mut report = Report::new();
        report.attribute(&present.join(".")).set_rule("r", "m");
        let snapshot = report.clone();

        let _ = report.try_attribute(&probe.join("."));
        prop_assert_eq!(report, snapshot);
    }
}
