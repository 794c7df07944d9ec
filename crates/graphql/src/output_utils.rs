pub(crate) const GREEN_CHECK: &str = "✅";
pub(crate) const RED_X: &str = "❌";

/// Status mark for a pass/fail line.
pub(crate) fn status_mark(passed: bool) -> &'static str {
    if passed { GREEN_CHECK } else { RED_X }
}
