use std::io;
use std::io::Write;

/// Running win and loss statistics for a single betting session.
///
/// The session keeps one of these up to date as rounds resolve. It
/// remembers where the bankroll started and the highest it has been
/// so the report can show profit and peak.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionStats {
    /// Rounds that have fully resolved.
    pub hands_played: u32,
    /// Rounds the player won.
    pub hands_won: u32,
    /// Rounds the player lost.
    pub hands_lost: u32,
    /// The largest single round win.
    pub biggest_win: f64,
    /// The largest single round loss, stored as a positive amount.
    pub biggest_loss: f64,
    /// The bankroll the session started with.
    pub initial_bankroll: f64,
    /// The highest the bankroll has ever been.
    pub peak_bankroll: f64,
}

impl SessionStats {
    /// Start a fresh record for a session opening with `bankroll`.
    pub fn new(bankroll: f64) -> Self {
        Self {
            hands_played: 0,
            hands_won: 0,
            hands_lost: 0,
            biggest_win: 0.0,
            biggest_loss: 0.0,
            initial_bankroll: bankroll,
            peak_bankroll: bankroll,
        }
    }

    /// Record a won round for `bet`.
    pub fn record_win(&mut self, bet: f64) {
        self.hands_played += 1;
        self.hands_won += 1;
        self.biggest_win = self.biggest_win.max(bet);
    }

    /// Record a lost round for `bet`.
    pub fn record_loss(&mut self, bet: f64) {
        self.hands_played += 1;
        self.hands_lost += 1;
        self.biggest_loss = self.biggest_loss.max(bet);
    }

    /// Ratchet the peak bankroll up if `bankroll` beats it.
    pub fn observe_bankroll(&mut self, bankroll: f64) {
        self.peak_bankroll = self.peak_bankroll.max(bankroll);
    }

    /// Percentage of played hands that were won.
    ///
    /// Before any hand has been played this is zero.
    ///
    /// ```
    /// use rs_blackjack::table::SessionStats;
    ///
    /// let mut stats = SessionStats::new(100.0);
    /// assert_eq!(0.0, stats.win_rate());
    ///
    /// stats.record_win(20.0);
    /// assert_eq!(100.0, stats.win_rate());
    /// ```
    pub fn win_rate(&self) -> f64 {
        if self.hands_played == 0 {
            0.0
        } else {
            f64::from(self.hands_won) / f64::from(self.hands_played) * 100.0
        }
    }

    /// How far the bankroll has moved from where it started.
    /// Negative when the session is down.
    pub fn profit(&self, current_bankroll: f64) -> f64 {
        current_bankroll - self.initial_bankroll
    }

    /// Write the statistics block the console shows after every round.
    pub fn write_report<W: Write>(&self, writer: &mut W, current_bankroll: f64) -> io::Result<()> {
        writeln!(writer, "\n=== Game Statistics ===")?;
        writeln!(writer, "Hands Played: {}", self.hands_played)?;
        writeln!(writer, "Win Rate: {:.1}%", self.win_rate())?;
        writeln!(writer, "Biggest Win: ${:.2}", self.biggest_win)?;
        writeln!(writer, "Biggest Loss: ${:.2}", self.biggest_loss)?;
        writeln!(
            writer,
            "Total Profit/Loss: ${:.2}",
            self.profit(current_bankroll)
        )?;
        writeln!(writer, "Peak Bankroll: ${:.2}", self.peak_bankroll)?;
        writeln!(writer, "{}", "=".repeat(20))?;
        Ok(())
    }
}
