//! Console rendering of per-scenario results.

use mailgen_core::evaluation::{BiasAnalysis, EvaluationScores};

pub const ANALYSIS_PREVIEW_CHARS: usize = 100;

/// Renders criterion, score and notes as a bordered text grid.
pub fn render_score_table(scores: &EvaluationScores) -> String {
    let mut rows: Vec<[String; 3]> = scores
        .criteria()
        .iter()
        .map(|(label, criterion)| {
            [
                label.to_string(),
                criterion.score.to_string(),
                criterion.notes.clone(),
            ]
        })
        .collect();
    rows.push([
        "Overall".to_string(),
        scores.overall.score.to_string(),
        scores.overall.notes.clone(),
    ]);

    let header = ["Criterion".to_string(), "Score".to_string(), "Notes".to_string()];
    let mut widths = [0usize; 3];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = |fill: char| {
        let segments: Vec<String> = widths
            .iter()
            .map(|width| fill.to_string().repeat(width + 2))
            .collect();
        format!("+{}+", segments.join("+"))
    };
    let line = |row: &[String; 3]| {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| {
                let padding = width - cell.chars().count();
                format!(" {cell}{} ", " ".repeat(padding))
            })
            .collect();
        format!("|{}|", cells.join("|"))
    };

    let mut output = vec![border('-'), line(&header), border('=')];
    for row in &rows {
        output.push(line(row));
        output.push(border('-'));
    }
    output.join("\n")
}

pub fn render_analysis_preview(analysis: &BiasAnalysis) -> String {
    format!(
        "- Language Bias: {}...\n- Recommendations: {}...",
        truncate_chars(&analysis.language_bias, ANALYSIS_PREVIEW_CHARS),
        truncate_chars(&analysis.recommendations, ANALYSIS_PREVIEW_CHARS),
    )
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
