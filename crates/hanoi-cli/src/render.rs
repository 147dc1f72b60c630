//! Text rendering of the three towers.
//!
//! Towers are drawn side by side. Each column is `2 * N + 1` characters wide
//! for an `N`-disk game, and a disk of size `s` is a centred run of
//! `2 * s + 1` blocks.

use hanoi_kernel::Game;
use hanoi_types::PegId;

use crate::style::Theme;

/// Spacing to the left and right of every column.
const GUTTER: &str = "  ";

/// Width of the horizontal rules around the board.
const RULE_WIDTH: usize = 60;

/// Renders the whole board: title, towers, base, labels and move counter.
pub fn render_board(game: &Game, theme: Theme, block: char) -> String {
    let mut lines = Vec::new();
    let rule = "═".repeat(RULE_WIDTH);

    lines.push(String::new());
    lines.push(theme.muted(&rule));
    lines.push(theme.header(format!("{:^RULE_WIDTH$}", "TOWER OF HANOI")));
    lines.push(theme.muted(&rule));
    lines.push(String::new());
    lines.extend(render_towers(game, theme, block));
    lines.push(String::new());
    lines.push(format!(
        "Moves: {}  {}",
        theme.info(game.move_count()),
        theme.muted(format!("(target: {})", game.target()))
    ));
    lines.push(theme.muted(&rule));

    lines.join("\n")
}

/// Renders only the towers, their base, and the peg labels.
pub fn render_towers(game: &Game, theme: Theme, block: char) -> Vec<String> {
    let max = usize::from(game.disk_count().get());
    let column = max * 2 + 1;
    let mut lines = Vec::with_capacity(max + 3);

    // One spare level above the tallest possible stack, as an empty pole tip.
    for level in (0..=max).rev() {
        let mut row = String::new();
        for peg in PegId::ALL {
            row.push_str(GUTTER);
            match game.tower(peg).at_level(level) {
                Some(disk) => {
                    let width = disk.width();
                    let pad = (column - width) / 2;
                    row.push_str(&" ".repeat(pad));
                    let body: String = std::iter::repeat_n(block, width).collect();
                    row.push_str(&theme.disk(body, disk.size()));
                    row.push_str(&" ".repeat(pad));
                }
                None => {
                    let pad = (column - 1) / 2;
                    row.push_str(&" ".repeat(pad));
                    row.push_str(&theme.muted('│'));
                    row.push_str(&" ".repeat(pad));
                }
            }
            row.push_str(GUTTER);
        }
        lines.push(row.trim_end().to_string());
    }

    let mut base = String::new();
    let mut labels = String::new();
    for peg in PegId::ALL {
        base.push_str(GUTTER);
        base.push_str(&"═".repeat(column));
        base.push_str(GUTTER);

        let pad = (column - 1) / 2;
        labels.push_str(GUTTER);
        labels.push_str(&" ".repeat(pad));
        if peg == game.target() {
            labels.push_str(&theme.success(peg));
        } else {
            labels.push_str(&theme.header(peg));
        }
        labels.push_str(&" ".repeat(pad));
        labels.push_str(GUTTER);
    }
    lines.push(base.trim_end().to_string());
    lines.push(labels.trim_end().to_string());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_types::DiskCount;

    fn game(n: u8) -> Game {
        Game::new(DiskCount::new(n).unwrap())
    }

    #[test]
    fn fresh_two_disk_board() {
        let lines = render_towers(&game(2), Theme::PLAIN, '#');

        assert_eq!(
            lines,
            vec![
                "    │        │        │",
                "   ###       │        │",
                "  #####      │        │",
                "  ═════    ═════    ═════",
                "    A        B        C",
            ]
        );
    }

    #[test]
    fn moved_disk_appears_on_destination() {
        let mut g = game(2);
        assert!(g.move_disk(PegId::A, PegId::C));
        let lines = render_towers(&g, Theme::PLAIN, '#');

        assert_eq!(lines[1], "    │        │        │");
        assert_eq!(lines[2], "  #####      │       ###");
    }

    #[test]
    fn board_includes_move_counter() {
        let mut g = game(3);
        assert!(g.move_disk(PegId::A, PegId::B));
        let board = render_board(&g, Theme::PLAIN, '█');

        assert!(board.contains("TOWER OF HANOI"));
        assert!(board.contains("Moves: 1"));
        assert!(board.contains("█"));
    }
}
