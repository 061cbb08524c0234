//! Assertions over the fixed text markers of a report

/// The fixed markers every report contains, in the order they are printed
pub const REPORT_MARKERS: [&str; 5] = [
  "Hello from meta-homeai layer!",
  "Kernel version:",
  "CPU Info:",
  "Memory:",
  "Layer is working correctly!",
];

/// Byte offset of each marker in `haystack`, or `None` where it is missing
pub fn marker_positions(haystack: &str, markers: &[&str]) -> Vec<Option<usize>> {
  markers.iter().map(|marker| haystack.find(marker)).collect()
}

/// Assert that every marker occurs exactly once and in the given order
pub fn assert_in_order(haystack: &str, markers: &[&str]) {
  let mut last = 0;
  for (marker, position) in markers.iter().zip(marker_positions(haystack, markers)) {
    let position = position.unwrap_or_else(|| panic!("marker {marker:?} not found in output:\n{haystack}"));
    assert!(
      position >= last,
      "marker {marker:?} appears out of order in output:\n{haystack}"
    );
    assert_eq!(
      haystack.matches(marker).count(),
      1,
      "marker {marker:?} should appear exactly once in output:\n{haystack}"
    );
    last = position;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_markers_in_order() {
    assert_in_order("a b c", &["a", "b", "c"]);
  }

  #[test]
  #[should_panic(expected = "out of order")]
  fn rejects_markers_out_of_order() {
    assert_in_order("b a", &["a", "b"]);
  }

  #[test]
  #[should_panic(expected = "exactly once")]
  fn rejects_repeated_markers() {
    assert_in_order("a a", &["a"]);
  }

  #[test]
  fn reports_missing_markers() {
    assert_eq!(marker_positions("abc", &["b", "z"]), vec![Some(1), None]);
  }
}
