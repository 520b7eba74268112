// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{monitor::scan_monitor::ScanMonitor, stats::SolverStatistics};
use num_traits::ToPrimitive;
use skyline_model::{index::BarIndex, num::HeightNumeric, rectangle::Rectangle};

/// Histograms wider than this are not drawn as a chart.
const MAX_CHART_BARS: usize = 80;

const RULE_WIDTH: usize = 84;

/// A monitor that narrates the scan on the console.
///
/// Every push, pop and improvement is printed as one table row. After
/// `max_rows` rows the remaining events are suppressed so large inputs do not
/// flood the terminal. Optionally, a small bar chart of the input is drawn
/// before the scan starts.
#[derive(Debug, Clone)]
pub struct LogMonitor<T>
where
    T: HeightNumeric,
{
    max_rows: usize,
    rows_printed: usize,
    suppressed: bool,
    chart_height: usize,
    render_chart: bool,
    best_area: Option<T::Area>,
}

impl<T> LogMonitor<T>
where
    T: HeightNumeric,
{
    pub fn new(max_rows: usize) -> Self {
        Self {
            max_rows,
            rows_printed: 0,
            suppressed: false,
            chart_height: 8,
            render_chart: true,
            best_area: None,
        }
    }

    /// Enables or disables the chart printed before the scan.
    pub fn with_chart(mut self, yes: bool) -> Self {
        self.render_chart = yes;
        self
    }

    /// Sets the number of text rows the chart is scaled to.
    pub fn with_chart_height(mut self, rows: usize) -> Self {
        self.chart_height = rows;
        self
    }

    /// Returns the number of event rows printed in the current scan.
    #[inline]
    pub fn rows_printed(&self) -> usize {
        self.rows_printed
    }

    /// Returns the best area reported in the current scan so far.
    #[inline]
    pub fn best_area(&self) -> Option<T::Area> {
        self.best_area
    }

    /// Renders `heights` as rows of `#`, tallest row first, scaled so the
    /// tallest bar fills `chart_height` rows. Returns no rows for empty,
    /// all-zero or overly wide inputs.
    pub fn render_chart(&self, heights: &[T]) -> Vec<String> {
        if heights.is_empty() || heights.len() > MAX_CHART_BARS || self.chart_height == 0 {
            return Vec::new();
        }

        let values: Vec<f64> = heights
            .iter()
            .map(|&h| ToPrimitive::to_f64(&h).unwrap_or(0.0))
            .collect();
        let max = values.iter().copied().fold(0.0, f64::max);
        if max <= 0.0 {
            return Vec::new();
        }

        let rows = self.chart_height;
        let levels: Vec<usize> = values
            .iter()
            .map(|v| ((v / max) * rows as f64).ceil() as usize)
            .collect();

        (1..=rows)
            .rev()
            .map(|level| {
                let line: String = levels
                    .iter()
                    .map(|&l| if l >= level { "# " } else { "  " })
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<6} | {:<8} | {:<12} | {:<14} | {:<16} | {:<16}",
            "Event", "Bar", "Height", "Span", "Area", "Best Area"
        );
        println!("{}", "-".repeat(RULE_WIDTH));
    }

    #[inline(always)]
    fn log_line(&mut self, event: &str, bar: BarIndex, height: T, span: String, area: String) {
        if self.rows_printed >= self.max_rows {
            if !self.suppressed {
                println!("... further events suppressed");
                self.suppressed = true;
            }
            return;
        }

        let best_str = match &self.best_area {
            Some(a) => format!("{}", a),
            None => "-".to_string(),
        };

        println!(
            "{:<6} | {:<8} | {:<12} | {:<14} | {:<16} | {:<16}",
            event,
            bar.get(),
            height,
            span,
            area,
            best_str
        );
        self.rows_printed += 1;
    }
}

impl<T> Default for LogMonitor<T>
where
    T: HeightNumeric,
{
    fn default() -> Self {
        Self::new(256)
    }
}

impl<T> std::fmt::Display for LogMonitor<T>
where
    T: HeightNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(max_rows: {}, chart: {})",
            self.max_rows, self.render_chart
        )
    }
}

impl<T> ScanMonitor<T> for LogMonitor<T>
where
    T: HeightNumeric,
{
    fn on_enter_scan(&mut self, heights: &[T]) {
        self.rows_printed = 0;
        self.suppressed = false;
        self.best_area = None;

        println!("Scanning histogram with {} bars", heights.len());
        if self.render_chart {
            let chart = self.render_chart(heights);
            if !chart.is_empty() {
                for line in &chart {
                    println!("{}", line);
                }
                println!("{}", "=".repeat(2 * heights.len()));
            }
        }
        self.print_header();
    }

    fn on_push(&mut self, bar: BarIndex, height: T, depth: usize) {
        self.log_line("push", bar, height, format!("depth {}", depth), "-".to_string());
    }

    fn on_pop(&mut self, candidate: &Rectangle<T>) {
        self.log_line(
            "pop",
            candidate.limiting_bar(),
            candidate.height(),
            candidate.span().to_string(),
            candidate.area().to_string(),
        );
    }

    fn on_improvement(&mut self, best: &Rectangle<T>) {
        self.best_area = Some(best.area());
        self.log_line(
            "best",
            best.limiting_bar(),
            best.height(),
            best.span().to_string(),
            best.area().to_string(),
        );
    }

    fn on_exit_scan(&mut self, stats: &SolverStatistics) {
        println!("{}", "-".repeat(RULE_WIDTH));
        println!("Scan finished.");
        print!("{}", stats);
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_core::math::span::BarSpan;

    #[test]
    fn test_render_chart_scales_to_height() {
        let m = LogMonitor::<u32>::new(10).with_chart_height(3);
        let chart = m.render_chart(&[1, 3, 2]);
        assert_eq!(chart, vec!["  #", "  # #", "# # #"]);
    }

    #[test]
    fn test_render_chart_scales_float_heights() {
        let m = LogMonitor::<f64>::new(10).with_chart_height(4);
        let chart = m.render_chart(&[0.5, 2.0, 1.0]);
        assert_eq!(chart, vec!["  #", "  #", "  # #", "# # #"]);
    }

    #[test]
    fn test_render_chart_skips_degenerate_inputs() {
        let m = LogMonitor::<u32>::default();
        assert!(m.render_chart(&[]).is_empty());
        assert!(m.render_chart(&[0, 0]).is_empty());
        assert!(m.render_chart(&[1; MAX_CHART_BARS + 1]).is_empty());
    }

    #[test]
    fn test_rows_are_capped() {
        let mut m = LogMonitor::<u32>::new(2).with_chart(false);
        m.on_enter_scan(&[1, 1, 1]);
        for i in 0..3 {
            m.on_push(BarIndex::new(i), 1, i + 1);
        }
        assert_eq!(m.rows_printed(), 2);

        // A new scan starts counting from zero again.
        m.on_enter_scan(&[1]);
        assert_eq!(m.rows_printed(), 0);
    }

    #[test]
    fn test_tracks_best_area() {
        let mut m = LogMonitor::<u8>::default().with_chart(false);
        m.on_enter_scan(&[4, 4]);
        assert_eq!(m.best_area(), None);
        let r = Rectangle::new(BarIndex::new(0), 4u8, BarSpan::new(0, 2)).unwrap();
        m.on_improvement(&r);
        assert_eq!(m.best_area(), Some(8));
        assert_eq!(format!("{}", m), "LogMonitor(max_rows: 256, chart: false)");
    }
}
