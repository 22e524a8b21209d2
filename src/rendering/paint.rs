/// Paint commands for a stamp card

use serde::Serialize;

use crate::layout::{compute_card_size_with, GridSpec, RequiredCount};
use crate::rendering::{cell_states, CellState};
use crate::LayoutConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PaintCommand {
    /// Card outline, always the first command
    Card { width: u32, height: u32 },
    /// One stamp circle; `x`/`y` is the top-left of its bounding square
    Stamp {
        x: u32,
        y: u32,
        diameter: u32,
        state: CellState,
    },
}

/// Lay out a card and its stamps.
///
/// The grid is centred horizontally and starts `grid_top` below the card's
/// top edge; each stamp is centred in its cell. Padding cells are not painted.
pub fn paint_card(
    config: &LayoutConfig,
    grid: GridSpec,
    stamps: u32,
    required: RequiredCount,
) -> Vec<PaintCommand> {
    let size = compute_card_size_with(config, grid);
    let grid_width = grid.columns.saturating_mul(config.cell_width);
    let origin_x = size.width.saturating_sub(grid_width) / 2;
    let inset_x = config.cell_width.saturating_sub(config.stamp_diameter) / 2;
    let inset_y = config.cell_height.saturating_sub(config.stamp_diameter) / 2;

    let mut commands = vec![PaintCommand::Card {
        width: size.width,
        height: size.height,
    }];
    for (row, cells) in cell_states(grid, stamps, required).into_iter().enumerate() {
        for (col, state) in cells.into_iter().enumerate() {
            if state == CellState::Padding {
                continue;
            }
            let x = (col as u32)
                .saturating_mul(config.cell_width)
                .saturating_add(origin_x)
                .saturating_add(inset_x);
            let y = (row as u32)
                .saturating_mul(config.cell_height)
                .saturating_add(config.grid_top)
                .saturating_add(inset_y);
            commands.push(PaintCommand::Stamp {
                x,
                y,
                diameter: config.stamp_diameter,
                state,
            });
        }
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paints_card_then_stamps() {
        let cfg = LayoutConfig::default();
        let required = RequiredCount::new(8).unwrap();
        let cmds = paint_card(&cfg, GridSpec { rows: 2, columns: 4 }, 3, required);
        assert_eq!(cmds.len(), 1 + 8);
        assert_eq!(
            cmds[0],
            PaintCommand::Card {
                width: 136,
                height: 180
            }
        );
        // (136 - 4 * 28) / 2 = 12, plus (28 - 24) / 2 = 2
        match &cmds[1] {
            PaintCommand::Stamp { x, y, state, .. } => {
                assert_eq!(*x, 14);
                assert_eq!(*y, 80);
                assert_eq!(*state, CellState::Filled);
            }
            other => panic!("unexpected {:?}", other),
        }
        match &cmds[8] {
            PaintCommand::Stamp { x, y, state, .. } => {
                assert_eq!(*x, 14 + 3 * 28);
                assert_eq!(*y, 80 + 32);
                assert_eq!(*state, CellState::Empty);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn oversized_cells_saturate_instead_of_overflowing() {
        let cfg = LayoutConfig::from_json_str(r#"{ "cell_width": 3000000000 }"#).unwrap();
        let required = RequiredCount::new(2).unwrap();
        let cmds = paint_card(&cfg, GridSpec { rows: 1, columns: 2 }, 1, required);
        assert_eq!(cmds.len(), 3);
        match cmds[0] {
            PaintCommand::Card { width, .. } => assert_eq!(width, u32::MAX),
            _ => panic!("first command must be the card"),
        }
        match cmds[2] {
            PaintCommand::Stamp { x, .. } => assert_eq!(x, u32::MAX),
            _ => panic!("expected a stamp"),
        }
    }

    #[test]
    fn stamps_stay_inside_card() {
        let cfg = LayoutConfig::default();
        for n in 1..=40u32 {
            let required = RequiredCount::new(n).unwrap();
            let grid = GridSpec::for_count(required);
            let cmds = paint_card(&cfg, grid, n / 2, required);
            let (w, h) = match cmds[0] {
                PaintCommand::Card { width, height } => (width, height),
                _ => panic!("first command must be the card"),
            };
            for cmd in &cmds[1..] {
                if let PaintCommand::Stamp { x, y, diameter, .. } = cmd {
                    assert!(x + diameter <= w, "n={} x={} w={}", n, x, w);
                    assert!(y + diameter <= h, "n={} y={} h={}", n, y, h);
                }
            }
        }
    }
}
