//! Markdown rendering for generated charts.

use super::chart::ChartResult;

/// Title used when the caller does not supply one.
pub const DEFAULT_TITLE: &str = "Knitting Pattern";

/// Width every cell is right-aligned to inside the chart block.
pub const CELL_WIDTH: usize = 6;

/// Render the chart rows bottom-to-top, the way knitting charts are read.
pub fn render_rows(result: &ChartResult) -> Vec<String> {
    result
        .chart
        .iter()
        .rev()
        .map(|row| {
            row.iter()
                .map(|cell| format!("{:>width$}", cell.symbol(), width = CELL_WIDTH))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Render `result` as a Markdown document.
pub fn export_markdown(result: &ChartResult, title: Option<&str>) -> String {
    let title = title.unwrap_or(DEFAULT_TITLE);

    let mut doc = format!("# {}\n\n", title);
    doc.push_str(&format!("- Pattern: {}\n", result.pattern));
    doc.push_str(&format!("- Size: {}×{}\n\n", result.width, result.height));

    doc.push_str("## Legend\n\n");
    for (symbol, meaning) in result.legend.iter() {
        doc.push_str(&format!("- {}: {}\n", symbol, meaning));
    }

    doc.push_str("\n## Chart\n\n```text\n");
    doc.push_str(&render_rows(result).join("\n"));
    doc.push_str("\n```\n");

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stitch::chart::generate_chart;

    fn fenced_block(doc: &str) -> Vec<&str> {
        doc.split("```text\n")
            .nth(1)
            .and_then(|rest| rest.split("\n```").next())
            .map(|block| block.lines().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_header_and_legend() {
        let result = generate_chart("seed", 4, 3).unwrap();
        let doc = export_markdown(&result, None);

        assert!(doc.starts_with("# Knitting Pattern\n"));
        assert!(doc.contains("- Pattern: seed\n"));
        assert!(doc.contains("- Size: 4×3\n"));
        assert!(doc.contains("## Legend\n\n- K: knit\n- P: purl\n- YO: yarn over\n- K2tog: knit two together\n"));
    }

    #[test]
    fn test_full_document() {
        let result = generate_chart("garter", 2, 2).unwrap();
        let doc = export_markdown(&result, Some("Swatch"));
        let expected = "# Swatch\n\n\
                        - Pattern: garter\n\
                        - Size: 2×2\n\n\
                        ## Legend\n\n\
                        - K: knit\n\
                        - P: purl\n\
                        - YO: yarn over\n\
                        - K2tog: knit two together\n\n\
                        ## Chart\n\n\
                        ```text\n     K      K\n     K      K\n```\n";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_custom_title() {
        let result = generate_chart("garter", 2, 2).unwrap();
        let doc = export_markdown(&result, Some("My Scarf"));
        assert!(doc.starts_with("# My Scarf\n"));
    }

    #[test]
    fn test_rows_are_reversed() {
        let result = generate_chart("stockinette", 3, 5).unwrap();
        let doc = export_markdown(&result, None);
        let rows = fenced_block(&doc);

        assert_eq!(rows.len(), result.height);
        // row 4 (even, knit) comes first, row 3 (odd, purl) second
        assert_eq!(rows[0], "     K      K      K");
        assert_eq!(rows[1], "     P      P      P");
    }

    #[test]
    fn test_cells_right_aligned() {
        let result = generate_chart("lace_mesh", 3, 1).unwrap();
        let rows = render_rows(&result);
        assert_eq!(rows, vec!["    YO  K2tog      K"]);
    }

    #[test]
    fn test_first_block_line_is_last_generated_row() {
        let result = generate_chart("lace_mesh", 5, 4).unwrap();
        let doc = export_markdown(&result, None);
        let rows = fenced_block(&doc);

        let last: Vec<String> = result.chart[3]
            .iter()
            .map(|c| format!("{:>6}", c.symbol()))
            .collect();
        assert_eq!(rows[0], last.join(" "));
        assert_eq!(rows.len(), 4);
    }
}
