//! Interactive game loop.
//!
//! Reads one command per line: two peg names to move a disk (`a c`), or one
//! of `solve`, `reset`, `help`, `quit`. End of input quits cleanly.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use hanoi_kernel::{Command, Effect, Game, KernelError, apply_committed};
use hanoi_types::{DiskCount, Move, ParseError, PegId};
use tracing::{debug, info};

use crate::render::render_board;
use crate::style::{Console, Theme, banner::print_banner};

/// Help text shown at start and on `help`.
const RULES: &str = r"Move every disk from tower A to the target tower.
Rules:
  - Move one disk at a time
  - Only the top disk of a tower can move
  - A larger disk can never sit on a smaller one

Commands:
  A C      Move the top disk of A onto C (case-insensitive)
  solve    Restart and watch the optimal solution
  reset    Restart the current puzzle
  help     Show this help message
  quit     Leave the game";

/// Options resolved from the command line and configuration.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// Disk count for every round; prompts each round when `None`.
    pub disks: Option<DiskCount>,
    pub max_disks: u8,
    pub target: PegId,
    pub block: char,
    pub banner: bool,
}

pub fn run(options: PlayOptions, theme: Theme) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), Console::new(stdout.lock(), theme), options);
    session.run().context("Interactive session failed")
}

// ============================================================================
// Input
// ============================================================================

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Move(Move),
    Solve,
    Reset,
    Help,
    Quit,
    Empty,
}

/// Parses one line of player input.
pub fn parse_input(line: &str) -> Result<Input, ParseError> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" => Ok(Input::Empty),
        "solve" => Ok(Input::Solve),
        "reset" | "restart" => Ok(Input::Reset),
        "help" | "h" | "?" => Ok(Input::Help),
        "quit" | "exit" | "q" => Ok(Input::Quit),
        _ => trimmed.parse().map(Input::Move),
    }
}

// ============================================================================
// Session
// ============================================================================

enum RoundEnd {
    Won,
    AutoSolved,
    Quit,
}

struct Session<R, W> {
    input: R,
    console: Console<W>,
    options: PlayOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(input: R, console: Console<W>, options: PlayOptions) -> Self {
        Self {
            input,
            console,
            options,
        }
    }

    fn run(&mut self) -> Result<()> {
        if self.options.banner {
            print_banner(&mut self.console)?;
        }
        self.console.line(RULES)?;
        self.console.spacer()?;

        loop {
            let Some(disks) = self.choose_disks()? else {
                break;
            };
            let game = Game::with_target(disks, self.options.target)
                .with_context(|| format!("Tower {} cannot be the target", self.options.target))?;
            info!(disks = disks.get(), target = %self.options.target, "starting round");

            match self.play_round(game)? {
                RoundEnd::Won | RoundEnd::AutoSolved => {}
                RoundEnd::Quit => break,
            }

            if !self.ask_play_again()? {
                break;
            }
            self.console.spacer()?;
        }

        self.console.line("Thanks for playing!")?;
        self.console.flush()?;
        Ok(())
    }

    /// Reads a line, returning `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    fn choose_disks(&mut self) -> Result<Option<DiskCount>> {
        if let Some(disks) = self.options.disks {
            return Ok(Some(disks));
        }

        let max = self.options.max_disks;
        loop {
            self.console
                .prompt(format!("How many disks? ({}-{max}): ", DiskCount::MIN))?;
            let Some(line) = self.read_line()? else {
                self.console.spacer()?;
                return Ok(None);
            };

            match line.parse::<DiskCount>() {
                Ok(disks) if disks.get() <= max => return Ok(Some(disks)),
                _ => {
                    self.console.error(format!(
                        "Invalid number! Use a number between {} and {max}.",
                        DiskCount::MIN
                    ))?;
                }
            }
        }
    }

    fn play_round(&mut self, mut game: Game) -> Result<RoundEnd> {
        loop {
            self.show(&game)?;

            if game.is_solved() {
                self.celebrate(&game)?;
                return Ok(RoundEnd::Won);
            }

            self.console
                .prompt("Move from (A/B/C) to (A/B/C), or 'solve': ")?;
            let Some(line) = self.read_line()? else {
                self.console.spacer()?;
                return Ok(RoundEnd::Quit);
            };

            let input = match parse_input(&line) {
                Ok(input) => input,
                Err(e) => {
                    self.console.error(format!("Invalid format! {e}"))?;
                    self.console.hint("Use: A C (to move from A to C)")?;
                    continue;
                }
            };

            match input {
                Input::Empty => {}
                Input::Help => {
                    self.console.line(RULES)?;
                }
                Input::Quit => return Ok(RoundEnd::Quit),
                Input::Reset => {
                    apply_logged(&mut game, Command::Reset)?;
                }
                Input::Solve => {
                    self.console.line("\nSolving automatically...")?;
                    apply_logged(&mut game, Command::AutoSolve)?;
                    self.show(&game)?;
                    self.console.success(format!(
                        "Solution complete in {} moves!",
                        game.move_count()
                    ))?;
                    return Ok(RoundEnd::AutoSolved);
                }
                Input::Move(mv) => {
                    if let Err(e) = apply_committed(&mut game, Command::from(mv)) {
                        debug!(%mv, error = %e, "move rejected");
                        let reason = match e {
                            KernelError::IllegalMove(reason) => reason.to_string(),
                            other => other.to_string(),
                        };
                        self.console.error(format!("Invalid move! {reason}"))?;
                        self.console.hint("Check the rules with 'help'")?;
                    } else {
                        debug!(%mv, moves = game.move_count(), "move applied");
                    }
                }
            }
        }
    }

    fn show(&mut self, game: &Game) -> Result<()> {
        let board = render_board(game, self.console.theme(), self.options.block);
        self.console.line(board)?;
        Ok(())
    }

    fn celebrate(&mut self, game: &Game) -> Result<()> {
        let optimal = game.disk_count().optimal_moves();
        self.console.spacer()?;
        self.console.success(format!(
            "Congratulations! You rebuilt the tower in {} moves.",
            game.move_count()
        ))?;
        if game.move_count() == optimal {
            self.console.line("That is the optimal solution.")?;
        } else {
            self.console
                .hint(format!("The optimal solution takes {optimal} moves."))?;
        }
        self.console.spacer()?;
        Ok(())
    }

    fn ask_play_again(&mut self) -> Result<bool> {
        self.console.prompt("Play again? (y/n): ")?;
        let Some(line) = self.read_line()? else {
            self.console.spacer()?;
            return Ok(false);
        };
        Ok(matches!(
            line.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

/// Applies a command the kernel always accepts and logs its effects.
fn apply_logged(game: &mut Game, cmd: Command) -> Result<()> {
    let effects = apply_committed(game, cmd).context("Command rejected")?;
    for effect in &effects {
        match effect {
            Effect::DiskMoved {
                disk,
                from,
                to,
                move_count,
            } => debug!(%disk, %from, %to, move_count, "disk moved"),
            Effect::GameReset { disks } => debug!(disks = disks.get(), "game reset"),
            Effect::PuzzleSolved { moves, optimal } => {
                info!(moves, optimal, "puzzle solved");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(disks: Option<u8>) -> PlayOptions {
        PlayOptions {
            disks: disks.map(|n| DiskCount::new(n).unwrap()),
            max_disks: 7,
            target: PegId::C,
            block: '#',
            banner: false,
        }
    }

    fn play(options: PlayOptions, script: &str) -> String {
        let console = Console::new(Vec::new(), Theme::PLAIN);
        let mut session = Session::new(script.as_bytes(), console, options);
        session.run().expect("session should finish");
        String::from_utf8(session.console.into_inner()).unwrap()
    }

    #[test]
    fn input_parsing() {
        assert_eq!(
            parse_input("a c\n"),
            Ok(Input::Move(Move::new(PegId::A, PegId::C)))
        );
        assert_eq!(parse_input("SOLVE"), Ok(Input::Solve));
        assert_eq!(parse_input("  quit "), Ok(Input::Quit));
        assert_eq!(parse_input("\n"), Ok(Input::Empty));
        assert_eq!(parse_input("reset"), Ok(Input::Reset));
        assert!(matches!(parse_input("a"), Err(ParseError::MalformedMove(_))));
        assert!(matches!(parse_input("a z"), Err(ParseError::UnknownPeg(_))));
    }

    #[test]
    fn winning_by_hand_congratulates() {
        let out = play(options(Some(2)), "a b\na c\nb c\nn\n");

        assert!(out.contains("Moves: 3"));
        assert!(out.contains("rebuilt the tower in 3 moves"));
        assert!(out.contains("optimal solution."));
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn illegal_move_is_reported_and_ignored() {
        // B is empty, then disk 2 onto disk 1
        let out = play(options(Some(2)), "b a\na b\na b\nquit\n");

        assert!(out.contains("Invalid move! tower B is empty"));
        assert!(out.contains("Invalid move! disk 2 cannot be placed on smaller disk 1"));
        assert!(out.contains("Moves: 1"));
        assert!(!out.contains("Moves: 2"));
    }

    #[test]
    fn malformed_input_shows_format_hint() {
        let out = play(options(Some(1)), "x\nquit\n");
        assert!(out.contains("Invalid format!"));
        assert!(out.contains("Use: A C"));
    }

    #[test]
    fn solve_command_plays_optimal_solution() {
        let out = play(options(Some(3)), "a b\nsolve\nno\n");

        assert!(out.contains("Solving automatically..."));
        assert!(out.contains("Solution complete in 7 moves!"));
    }

    #[test]
    fn prompts_until_valid_disk_count() {
        let out = play(options(None), "0\n9\nabc\n1\na c\nn\n");

        assert_eq!(out.matches("Invalid number!").count(), 3);
        assert!(out.contains("rebuilt the tower in 1 moves"));
    }

    #[test]
    fn play_again_starts_a_new_round() {
        let out = play(options(Some(1)), "a c\ny\na c\nn\n");
        assert_eq!(out.matches("Congratulations!").count(), 2);
    }

    #[test]
    fn end_of_input_quits_cleanly() {
        let out = play(options(None), "");
        assert!(out.contains("Thanks for playing!"));

        let out = play(options(Some(3)), "a c\n");
        assert!(out.contains("Moves: 1"));
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn slower_win_points_at_the_optimum() {
        let out = play(options(Some(1)), "a b\nb c\nn\n");
        assert!(out.contains("The optimal solution takes 1 moves."));
    }
}
