use std::io::{BufRead, Write};

use rand::Rng;
use thiserror::Error;

use super::dealer::{Dealer, ShoeDealer};
use super::errors::{GameStateError, TableError};
use super::game_state::SessionState;
use super::outcome::RoundOutcome;

/// ConsoleError is the error type for interactive sessions.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Input ended before the session finished")]
    InputClosed,
    #[error("Game state error: {0}")]
    GameState(#[from] GameStateError),
    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

/// An interactive betting session over any line-based reader and
/// writer. This is the loop behind the `table_session` binary.
///
/// Each round the dealer puts cards on the table, but the player
/// calls the result themselves, so the hands are never shown. Every
/// prompt re-asks until it gets an answer it can use.
///
/// ```
/// use std::io::Cursor;
/// use rs_blackjack::table::ConsoleSession;
///
/// let mut out = Vec::new();
/// let session = ConsoleSession::new(Cursor::new("100\n20\ny\nn\n"), &mut out);
/// let game_state = session.run().unwrap();
///
/// assert_eq!(120.0, game_state.bankroll);
/// assert_eq!(1, game_state.stats.hands_won);
/// ```
pub struct ConsoleSession<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    dealer: Box<dyn Dealer>,
    id: u128,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        let mut rng = rand::rng();
        let id = rng.random();
        Self {
            reader,
            writer,
            dealer: Box::new(ShoeDealer::new(6, rng)),
            id,
        }
    }

    /// Swap in a different dealer for the session.
    pub fn dealer(mut self, dealer: Box<dyn Dealer>) -> Self {
        self.dealer = dealer;
        self
    }

    /// Run the session to completion, returning the final game state.
    pub fn run(mut self) -> Result<SessionState, ConsoleError> {
        let bankroll = self.read_starting_bankroll()?;
        let mut game_state = SessionState::new(bankroll);
        game_state.start()?;

        loop {
            writeln!(self.writer, "\n{}", "=".repeat(50))?;

            let bet = self.read_bet(game_state.bankroll)?;
            game_state.place_bet(bet)?;

            // The cards go out, but the player calls the result.
            self.dealer.deal_round(self.id, &game_state)?;

            let won = self.read_yes_no("\nDid you win this hand? (y/n): ")?;
            let outcome = if won {
                RoundOutcome::Win
            } else {
                RoundOutcome::Loss
            };
            let change = game_state.resolve_round(outcome)?;

            match outcome {
                RoundOutcome::Win => writeln!(self.writer, "You won ${change:.2}!")?,
                RoundOutcome::Loss => writeln!(self.writer, "You lost ${:.2}", -change)?,
            }

            if !game_state.is_solvent() {
                writeln!(self.writer, "\nGame Over! You're out of money!")?;
                game_state
                    .stats
                    .write_report(&mut self.writer, game_state.bankroll)?;
                game_state.continue_session(false)?;
                break;
            }

            game_state
                .stats
                .write_report(&mut self.writer, game_state.bankroll)?;

            let again = self.read_yes_no("\nWould you like to play again? (y/n): ")?;
            if !again {
                writeln!(
                    self.writer,
                    "\nThanks for playing! You're leaving with ${:.2}",
                    game_state.bankroll
                )?;
                game_state
                    .stats
                    .write_report(&mut self.writer, game_state.bankroll)?;
                game_state.continue_session(false)?;
                break;
            }
            game_state.continue_session(true)?;
        }

        Ok(game_state)
    }

    fn read_starting_bankroll(&mut self) -> Result<f64, ConsoleError> {
        loop {
            write!(self.writer, "Enter your starting bankroll amount: $")?;
            self.writer.flush()?;

            let line = self.read_line()?;
            match line.trim().parse::<f64>() {
                Ok(amount) if amount > 0.0 => return Ok(amount),
                Ok(_) => writeln!(self.writer, "Please enter a positive amount.")?,
                Err(_) => writeln!(self.writer, "Please enter a valid number.")?,
            }
        }
    }

    fn read_bet(&mut self, bankroll: f64) -> Result<f64, ConsoleError> {
        loop {
            write!(
                self.writer,
                "\nYour bankroll is ${bankroll:.2}. Enter your bet amount: $"
            )?;
            self.writer.flush()?;

            let line = self.read_line()?;
            match line.trim().parse::<f64>() {
                Ok(bet) if bet > 0.0 && bet <= bankroll => return Ok(bet),
                Ok(bet) if !(bet > 0.0) => writeln!(self.writer, "Bet must be greater than 0.")?,
                Ok(_) => writeln!(self.writer, "Bet cannot exceed your bankroll.")?,
                Err(_) => writeln!(self.writer, "Please enter a valid number.")?,
            }
        }
    }

    fn read_yes_no(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        // Only the line ending comes off, so " y" is a no.
        let line = self.read_line()?;
        Ok(line.trim_end_matches(['\r', '\n']).to_lowercase() == "y")
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;
        if n == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_session(input: &str) -> (SessionState, String) {
        let mut out = Vec::new();
        let game_state = ConsoleSession::new(Cursor::new(input), &mut out)
            .run()
            .unwrap();
        (game_state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_win_then_quit_transcript() {
        let (game_state, output) = run_session("100\n20\ny\nn\n");

        let stats = "\n=== Game Statistics ===\n\
                     Hands Played: 1\n\
                     Win Rate: 100.0%\n\
                     Biggest Win: $20.00\n\
                     Biggest Loss: $0.00\n\
                     Total Profit/Loss: $20.00\n\
                     Peak Bankroll: $120.00\n\
                     ====================\n";
        let expected = format!(
            "Enter your starting bankroll amount: $\
             \n{}\n\
             \nYour bankroll is $100.00. Enter your bet amount: $\
             \nDid you win this hand? (y/n): \
             You won $20.00!\n\
             {stats}\
             \nWould you like to play again? (y/n): \
             \nThanks for playing! You're leaving with $120.00\n\
             {stats}",
            "=".repeat(50)
        );

        assert_eq!(expected, output);
        assert!(game_state.is_complete());
        assert_eq!(120.0, game_state.bankroll);
        assert_eq!(1, game_state.stats.hands_played);
        assert_eq!(1, game_state.stats.hands_won);
        assert_eq!(20.0, game_state.stats.biggest_win);
        assert_eq!(120.0, game_state.stats.peak_bankroll);
    }

    #[test]
    fn test_bankroll_prompt_loops_until_valid() {
        let (game_state, output) = run_session("abc\n-5\n0\n100\n10\nn\nn\n");

        assert_eq!(1, output.matches("Please enter a valid number.").count());
        assert_eq!(2, output.matches("Please enter a positive amount.").count());
        assert_eq!(90.0, game_state.bankroll);
        assert_eq!(100.0, game_state.stats.initial_bankroll);
    }

    #[test]
    fn test_bet_prompt_distinguishes_failures() {
        let (game_state, output) = run_session("120\nxyz\n0\n150\n20\nn\nn\n");

        assert!(output.contains("Please enter a valid number."));
        assert!(output.contains("Bet must be greater than 0."));
        assert!(output.contains("Bet cannot exceed your bankroll."));
        assert_eq!(100.0, game_state.bankroll);
        assert_eq!(1, game_state.stats.hands_lost);
    }

    #[test]
    fn test_busting_skips_the_replay_prompt() {
        let (game_state, output) = run_session("50\n50\nn\n");

        assert!(output.contains("\nGame Over! You're out of money!\n"));
        assert!(!output.contains("Would you like to play again?"));
        assert!(game_state.is_complete());
        assert_eq!(0.0, game_state.bankroll);
        assert_eq!(1, game_state.stats.hands_played);
        assert_eq!(50.0, game_state.stats.biggest_loss);
    }

    #[test]
    fn test_only_bare_y_continues() {
        // "yes" is not an explicit y, so the session ends.
        let (game_state, output) = run_session("100\n10\ny\nyes\n");

        assert!(output.contains("Thanks for playing! You're leaving with $110.00"));
        assert_eq!(110.0, game_state.bankroll);
        assert_eq!(1, game_state.stats.hands_played);
    }

    #[test]
    fn test_padded_y_is_not_a_win() {
        let (game_state, _output) = run_session("100\n20\n y\nn\n");

        assert_eq!(80.0, game_state.bankroll);
        assert_eq!(1, game_state.stats.hands_lost);
    }

    #[test]
    fn test_uppercase_y_wins() {
        let (game_state, _output) = run_session("100\n20\nY\nn\n");

        assert_eq!(120.0, game_state.bankroll);
        assert_eq!(1, game_state.stats.hands_won);
    }

    #[test]
    fn test_input_ending_early_is_an_error() {
        let mut out = Vec::new();
        let result = ConsoleSession::new(Cursor::new("100\n"), &mut out).run();
        assert!(matches!(result, Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn test_dealer_errors_surface() {
        use crate::core::Shoe;
        use rand::{SeedableRng, rngs::StdRng};

        let dealer = ShoeDealer::new(1, StdRng::seed_from_u64(420))
            .with_shoe(Shoe::from(vec![]))
            .cut_fraction(2.0);

        let mut out = Vec::new();
        let result = ConsoleSession::new(Cursor::new("100\n20\ny\nn\n"), &mut out)
            .dealer(Box::new(dealer))
            .run();

        assert!(matches!(
            result,
            Err(ConsoleError::Table(TableError::EmptyShoe))
        ));
    }

    #[test]
    fn test_multiple_rounds_accumulate() {
        let (game_state, _output) = run_session("200\n50\ny\ny\n25\nn\ny\n10\ny\nn\n");

        assert_eq!(235.0, game_state.bankroll);
        assert_eq!(3, game_state.stats.hands_played);
        assert_eq!(2, game_state.stats.hands_won);
        assert_eq!(1, game_state.stats.hands_lost);
        assert_eq!(50.0, game_state.stats.biggest_win);
        assert_eq!(25.0, game_state.stats.biggest_loss);
        assert_eq!(250.0, game_state.stats.peak_bankroll);
    }
}
