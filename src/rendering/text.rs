/// Plain-text card snapshots for terminals and tests

use crate::card::StampCardView;
use crate::rendering::CellState;

/// A textual snapshot of a rendered card
#[derive(Debug, Clone, PartialEq)]
pub struct TextSnapshot {
    /// Merchant name
    pub title: String,
    /// Reward line followed by one line per grid row
    pub text: String,
}

impl TextSnapshot {
    pub fn to_plain(&self) -> String {
        format!("{}\n{}", self.title, self.text)
    }
}

fn glyph(state: CellState) -> char {
    match state {
        CellState::Filled => '*',
        CellState::Empty => 'o',
        CellState::Padding => '.',
    }
}

pub fn render_text(view: &StampCardView) -> TextSnapshot {
    let mut lines = vec![view.reward_text()];
    for row in &view.cells {
        let line: Vec<String> = row.iter().map(|c| glyph(*c).to_string()).collect();
        lines.push(line.join(" "));
    }
    lines.push(format!("{}/{} stamps", view.displayed_stamps(), view.required));
    TextSnapshot {
        title: view.merchant_name.clone(),
        text: lines.join("\n"),
    }
}
