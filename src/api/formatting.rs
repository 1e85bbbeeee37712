//! Region output formatting
//!
//! Text summaries for the terminal, JSON for plotting front ends and CSV
//! point lists for spreadsheets and external plotting tools.

use crate::core::{Point2D, RegionResult};
use std::fmt::Write;

/// Human-readable summary formatter
pub struct TextFormatter {
    /// Single-line output
    pub compact: bool,
    /// Decimal places for coordinates
    pub precision: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            compact: false,
            precision: 2,
        }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }

    fn point(&self, p: &Point2D) -> String {
        format!("({:.*}, {:.*})", self.precision, p.x, self.precision, p.y)
    }

    /// Format a summary of the region
    pub fn format_text(&self, result: &RegionResult) -> String {
        let summary = result.summary();
        let stations: Vec<String> = result.stations.iter().map(|p| self.point(p)).collect();

        if self.compact {
            return format!(
                "{}: interior={} outline={} max_r={:.*} stations={}",
                summary.method,
                summary.interior_count,
                summary.outline_count,
                self.precision,
                summary.max_radius,
                stations.join(" ")
            );
        }

        let mut output = String::new();
        let _ = writeln!(output, "Method: {}", summary.method);
        let _ = writeln!(output, "  Interior points: {}", summary.interior_count);
        let _ = writeln!(output, "  Outline points:  {}", summary.outline_count);
        if result.is_empty() {
            let _ = writeln!(output, "  Region:          empty");
        } else {
            let _ = writeln!(output, "  Max radius:      {:.*}", self.precision, summary.max_radius);
        }
        let _ = writeln!(output, "  Stations:        {}", stations.join(", "));
        output
    }
}

/// JSON formatter for structured output
#[derive(Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format_json(&self, result: &RegionResult) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        }
    }

    /// Format several results as one JSON array
    pub fn format_json_batch(&self, results: &[RegionResult]) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(results)
        } else {
            serde_json::to_string(results)
        }
    }
}

/// CSV formatter, one point per row
pub struct CsvFormatter {
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self { include_header: true }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> String {
        "method,kind,x,y".to_string()
    }

    /// Rows for every interior, outline and station point
    pub fn format_csv(&self, result: &RegionResult) -> String {
        let mut output = String::new();
        if self.include_header {
            output.push_str(&self.header());
            output.push('\n');
        }

        let groups: [(&str, &[Point2D]); 3] = [
            ("interior", result.interior.as_slice()),
            ("outline", result.outline.as_slice()),
            ("station", result.stations.as_slice()),
        ];
        for (kind, points) in groups {
            for p in points {
                let _ = writeln!(output, "{},{},{},{}", result.method, kind, p.x, p.y);
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Method;

    fn result() -> RegionResult {
        RegionResult {
            method: Method::AngleMeasuring,
            interior: vec![Point2D::new(0.0, 3.0)],
            outline: vec![Point2D::new(0.0, 2.0), Point2D::new(0.0, 4.0)],
            stations: vec![Point2D::new(-5.0, 0.0), Point2D::new(5.0, 0.0)],
        }
    }

    #[test]
    fn test_text_summary() {
        let text = TextFormatter::new().format_text(&result());
        assert!(text.starts_with("Method: angle_measuring\n"));
        assert!(text.contains("Interior points: 1"));
        assert!(text.contains("Outline points:  2"));
        assert!(text.contains("Max radius:      4.00"));
        assert!(text.contains("(-5.00, 0.00), (5.00, 0.00)"));

        let compact = TextFormatter::compact().format_text(&result());
        assert_eq!(
            compact,
            "angle_measuring: interior=1 outline=2 max_r=4.00 stations=(-5.00, 0.00) (5.00, 0.00)"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let json = JsonFormatter::new().format_json(&result()).unwrap();
        assert!(json.contains("\"method\":\"angle_measuring\""));
        let back: RegionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result());
    }

    #[test]
    fn test_csv_rows() {
        let csv = CsvFormatter::new().format_csv(&result());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "method,kind,x,y");
        assert_eq!(lines[1], "angle_measuring,interior,0,3");
        assert_eq!(lines[3], "angle_measuring,outline,0,4");
        assert_eq!(lines[5], "angle_measuring,station,5,0");

        let no_header = CsvFormatter { include_header: false }.format_csv(&result());
        assert_eq!(no_header.lines().count(), 5);
    }
}
