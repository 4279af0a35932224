//! Game session state machine
//!
//! A `GameSession` owns one game at a time: the six-row board, the guess
//! being typed, the hidden solution, the keyboard hints, and the running
//! statistics. Every mutation goes through the operations here so the state
//! machine's invariants hold no matter what the UI does.

use crate::core::{Evaluation, LetterEval, MAX_GUESSES, WORD_LENGTH, Word};
use crate::game::KeyboardHints;
use crate::stats::{GameStats, StatsStore};
use crate::wordlists::WordLists;
use rand::Rng;
use std::fmt;

/// The six-row board of evaluated (or empty) cells
pub type Board = [[LetterEval; WORD_LENGTH]; MAX_GUESSES];

/// Session lifecycle state
///
/// `Won` and `Lost` are terminal: every mutating operation except
/// [`GameSession::start_new_game`] becomes a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Why a commit was rejected
///
/// All variants are recoverable: the session state is left untouched and the
/// player corrects their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// The session is already won or lost
    GameOver,
    /// Fewer than `WORD_LENGTH` letters entered
    IncompleteGuess,
    /// Not in the allowed-guess dictionary
    UnknownWord,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is over"),
            Self::IncompleteGuess => write!(f, "Not enough letters"),
            Self::UnknownWord => write!(f, "Not in word list"),
        }
    }
}

impl std::error::Error for GuessError {}

/// One game in progress plus the statistics that outlive it
pub struct GameSession<'a, R: Rng, S: StatsStore> {
    words: &'a WordLists,
    rng: R,
    store: S,
    board: Board,
    current_row: usize,
    current_guess: String,
    solution: Word,
    status: GameStatus,
    hints: KeyboardHints,
    stats: GameStats,
}

impl<'a, R: Rng, S: StatsStore> GameSession<'a, R, S> {
    /// Start a session: load persisted stats (zeroed when absent or
    /// malformed) and pick the first solution
    pub fn new(words: &'a WordLists, mut rng: R, store: S) -> Self {
        let stats = store.load().unwrap_or_default();
        let solution = pick_solution(words, &mut rng);

        Self {
            words,
            rng,
            store,
            board: [[LetterEval::EMPTY; WORD_LENGTH]; MAX_GUESSES],
            current_row: 0,
            current_guess: String::with_capacity(WORD_LENGTH),
            solution,
            status: GameStatus::Playing,
            hints: KeyboardHints::new(),
            stats,
        }
    }

    /// Reset everything except the stats and pick a fresh solution
    ///
    /// The reset is atomic from the caller's point of view: no observer sees
    /// a partially cleared board.
    pub fn start_new_game(&mut self) {
        self.board = [[LetterEval::EMPTY; WORD_LENGTH]; MAX_GUESSES];
        self.current_row = 0;
        self.current_guess.clear();
        self.status = GameStatus::Playing;
        self.hints = KeyboardHints::new();
        self.solution = pick_solution(self.words, &mut self.rng);
    }

    /// Append one letter to the guess being typed
    ///
    /// No-op when the session is over, the row is full, or the character is
    /// not a letter. Input is lowercased.
    pub fn append_letter(&mut self, ch: char) {
        if self.status != GameStatus::Playing || self.current_guess.len() >= WORD_LENGTH {
            return;
        }

        if ch.is_ascii_alphabetic() {
            self.current_guess.push(ch.to_ascii_lowercase());
        }
    }

    /// Remove the last typed letter, if any
    pub fn delete_letter(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.current_guess.pop();
    }

    /// Submit the typed guess for evaluation
    ///
    /// On success the evaluated row is written to the board, the keyboard
    /// hints are updated, and the session either ends (win, or loss on the
    /// final row) or advances to the next row.
    ///
    /// # Errors
    /// - `GuessError::GameOver` when the session is already terminal
    /// - `GuessError::IncompleteGuess` when fewer than `WORD_LENGTH` letters
    ///   are entered
    /// - `GuessError::UnknownWord` when the guess is not in the dictionary
    ///
    /// Every error leaves the session unchanged.
    pub fn commit_guess(&mut self) -> Result<(), GuessError> {
        if self.status != GameStatus::Playing {
            return Err(GuessError::GameOver);
        }

        if self.current_guess.len() != WORD_LENGTH {
            return Err(GuessError::IncompleteGuess);
        }

        if !self.words.is_allowed(&self.current_guess) {
            return Err(GuessError::UnknownWord);
        }

        let evaluation = Evaluation::score(&self.current_guess, self.solution.text());
        self.board[self.current_row] = *evaluation.cells();
        self.hints.absorb(&evaluation);
        self.current_guess.clear();

        if evaluation.is_correct() {
            self.finish(true);
        } else if self.current_row + 1 == MAX_GUESSES {
            self.finish(false);
        } else {
            self.current_row += 1;
        }

        Ok(())
    }

    fn finish(&mut self, won: bool) {
        self.status = if won {
            GameStatus::Won
        } else {
            GameStatus::Lost
        };

        self.stats.record(won);

        // Best effort: a failed write leaves the in-memory stats
        // authoritative for the rest of the process.
        let _ = self.store.save(&self.stats);
    }

    /// The board row as the player should see it
    ///
    /// For the active row this overlays the letters typed so far as unfilled
    /// cells; other rows come straight from the board.
    ///
    /// # Panics
    /// Panics if `row >= MAX_GUESSES`.
    #[must_use]
    pub fn visible_row(&self, row: usize) -> [LetterEval; WORD_LENGTH] {
        assert!(row < MAX_GUESSES);

        if self.status == GameStatus::Playing && row == self.current_row {
            let mut cells = [LetterEval::EMPTY; WORD_LENGTH];
            for (cell, ch) in cells.iter_mut().zip(self.current_guess.chars()) {
                cell.letter = Some(ch);
            }
            cells
        } else {
            self.board[row]
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// The hidden solution; the UI reveals it after a loss
    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }
}

fn pick_solution<R: Rng>(words: &WordLists, rng: &mut R) -> Word {
    let practice = words.practice();
    let index = rng.random_range(0..practice.len());
    practice[index].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::stats::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lists(practice: &[&str], extra_allowed: &[&str]) -> WordLists {
        let practice = practice
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect::<Vec<_>>();
        let allowed = extra_allowed
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect::<Vec<_>>();
        WordLists::new(practice, allowed).unwrap()
    }

    fn session(words: &WordLists) -> GameSession<'_, StdRng, MemoryStore> {
        GameSession::new(words, StdRng::seed_from_u64(42), MemoryStore::new())
    }

    fn type_word<R: Rng, S: StatsStore>(game: &mut GameSession<'_, R, S>, word: &str) {
        for ch in word.chars() {
            game.append_letter(ch);
        }
    }

    #[test]
    fn new_session_starts_clean() {
        let words = lists(&["crane"], &[]);
        let game = session(&words);

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_guess(), "");
        assert_eq!(game.solution().text(), "crane");
        assert!(
            game.board()
                .iter()
                .flatten()
                .all(|c| c.state == LetterState::Empty)
        );
    }

    #[test]
    fn append_letter_caps_at_word_length() {
        let words = lists(&["crane"], &["slate"]);
        let mut game = session(&words);

        type_word(&mut game, "slates");
        assert_eq!(game.current_guess(), "slate");
    }

    #[test]
    fn append_letter_normalizes_and_filters() {
        let words = lists(&["crane"], &[]);
        let mut game = session(&words);

        game.append_letter('S');
        game.append_letter('3');
        game.append_letter(' ');
        game.append_letter('l');

        assert_eq!(game.current_guess(), "sl");
    }

    #[test]
    fn delete_letter_removes_last() {
        let words = lists(&["crane"], &[]);
        let mut game = session(&words);

        type_word(&mut game, "sla");
        game.delete_letter();
        assert_eq!(game.current_guess(), "sl");

        game.delete_letter();
        game.delete_letter();
        game.delete_letter(); // already empty, still a no-op
        assert_eq!(game.current_guess(), "");
    }

    #[test]
    fn incomplete_guess_rejected_unchanged() {
        let words = lists(&["crane"], &[]);
        let mut game = session(&words);

        type_word(&mut game, "cat");
        assert_eq!(game.commit_guess(), Err(GuessError::IncompleteGuess));

        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_guess(), "cat");
        assert!(
            game.board()
                .iter()
                .flatten()
                .all(|c| c.state == LetterState::Empty)
        );
    }

    #[test]
    fn unknown_word_rejected_unchanged() {
        let words = lists(&["crane"], &["slate"]);
        let mut game = session(&words);

        type_word(&mut game, "zzzzz");
        assert_eq!(game.commit_guess(), Err(GuessError::UnknownWord));

        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_guess(), "zzzzz");
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn length_is_checked_before_dictionary() {
        let words = lists(&["crane"], &[]);
        let mut game = session(&words);

        // "zzz" is both short and unknown; the length error wins
        type_word(&mut game, "zzz");
        assert_eq!(game.commit_guess(), Err(GuessError::IncompleteGuess));
    }

    #[test]
    fn committed_row_lands_on_the_board() {
        let words = lists(&["erase"], &["speed"]);
        let mut game = session(&words);

        type_word(&mut game, "speed");
        game.commit_guess().unwrap();

        use LetterState::{Absent, Present};
        let states = game.board()[0].map(|c| c.state);
        assert_eq!(states, [Present, Absent, Present, Present, Absent]);

        assert_eq!(game.current_row(), 1);
        assert_eq!(game.current_guess(), "");
    }

    #[test]
    fn winning_guess_ends_the_session() {
        let words = lists(&["crane"], &[]);
        let mut game = session(&words);

        type_word(&mut game, "crane");
        game.commit_guess().unwrap();

        assert_eq!(game.status(), GameStatus::Won);
        assert!(
            game.board()[0]
                .iter()
                .all(|c| c.state == LetterState::Correct)
        );
        assert_eq!(game.stats().games_played, 1);
        assert_eq!(game.stats().games_won, 1);
        assert_eq!(game.stats().current_streak, 1);
    }

    #[test]
    fn six_misses_lose_the_session() {
        let words = lists(&["crane"], &["slate"]);
        let mut game = session(&words);

        for turn in 0..MAX_GUESSES {
            assert_eq!(game.status(), GameStatus::Playing, "turn {turn}");
            type_word(&mut game, "slate");
            game.commit_guess().unwrap();
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.current_row(), MAX_GUESSES - 1);
        assert_eq!(game.stats().games_played, 1);
        assert_eq!(game.stats().games_won, 0);
        assert_eq!(game.stats().current_streak, 0);
    }

    #[test]
    fn terminal_session_rejects_all_mutations() {
        let words = lists(&["crane"], &["slate"]);
        let mut game = session(&words);

        type_word(&mut game, "crane");
        game.commit_guess().unwrap();

        game.append_letter('s');
        assert_eq!(game.current_guess(), "");

        game.delete_letter();
        assert_eq!(game.commit_guess(), Err(GuessError::GameOver));
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn start_new_game_resets_everything_but_stats() {
        let words = lists(&["crane"], &["slate"]);
        let mut game = session(&words);

        type_word(&mut game, "crane");
        game.commit_guess().unwrap();
        assert_eq!(game.status(), GameStatus::Won);

        game.start_new_game();

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.current_guess(), "");
        assert_eq!(game.hints().hint('c'), None);
        assert!(
            game.board()
                .iter()
                .flatten()
                .all(|c| c.state == LetterState::Empty)
        );
        // Stats survive across games
        assert_eq!(game.stats().games_played, 1);
    }

    #[test]
    fn hints_accumulate_and_never_downgrade() {
        let words = lists(&["crane"], &["speed", "melee", "robot", "error"]);
        let mut game = session(&words);

        type_word(&mut game, "speed");
        game.commit_guess().unwrap();
        assert_eq!(game.hints().hint('e'), Some(LetterState::Present));
        assert_eq!(game.hints().hint('s'), Some(LetterState::Absent));

        type_word(&mut game, "melee");
        game.commit_guess().unwrap();
        assert_eq!(game.hints().hint('e'), Some(LetterState::Correct));

        type_word(&mut game, "error");
        game.commit_guess().unwrap();
        assert_eq!(game.hints().hint('r'), Some(LetterState::Correct));

        // A later guess scoring R as present must not downgrade the hint
        type_word(&mut game, "robot");
        game.commit_guess().unwrap();
        assert_eq!(game.hints().hint('r'), Some(LetterState::Correct));
        assert_eq!(game.hints().hint('e'), Some(LetterState::Correct));
    }

    #[test]
    fn stats_accounting_across_sessions() {
        let words = lists(&["crane"], &["slate"]);
        let mut game = session(&words);

        // Win
        type_word(&mut game, "crane");
        game.commit_guess().unwrap();

        // Loss
        game.start_new_game();
        for _ in 0..MAX_GUESSES {
            type_word(&mut game, "slate");
            game.commit_guess().unwrap();
        }

        // Win
        game.start_new_game();
        type_word(&mut game, "crane");
        game.commit_guess().unwrap();

        let stats = game.stats();
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
    }

    #[test]
    fn stats_persist_through_the_store() {
        let words = lists(&["crane"], &[]);
        let store = MemoryStore::new();
        let observer = store.clone();

        let mut game = GameSession::new(&words, StdRng::seed_from_u64(7), store);
        type_word(&mut game, "crane");
        game.commit_guess().unwrap();

        let saved = observer.load().unwrap();
        assert_eq!(saved.games_played, 1);
        assert_eq!(saved.games_won, 1);
    }

    #[test]
    fn stats_reload_from_the_store() {
        let words = lists(&["crane"], &[]);
        let store = MemoryStore::new();

        let mut stats = GameStats::default();
        stats.record(true);
        stats.record(true);
        store.save(&stats).unwrap();

        let game = GameSession::new(&words, StdRng::seed_from_u64(7), store);
        assert_eq!(game.stats().games_played, 2);
        assert_eq!(game.stats().current_streak, 2);
    }

    #[test]
    fn failed_save_is_swallowed() {
        struct BrokenStore;

        impl StatsStore for BrokenStore {
            fn load(&self) -> Option<GameStats> {
                None
            }

            fn save(&self, _stats: &GameStats) -> anyhow::Result<()> {
                anyhow::bail!("disk on fire")
            }
        }

        let words = lists(&["crane"], &[]);
        let mut game = GameSession::new(&words, StdRng::seed_from_u64(1), BrokenStore);

        type_word(&mut game, "crane");
        game.commit_guess().unwrap();

        // In-memory stats stay authoritative
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.stats().games_played, 1);
    }

    #[test]
    fn solution_drawn_from_practice_list() {
        let words = lists(&["crane", "slate", "erase"], &[]);
        let mut game = session(&words);

        for _ in 0..20 {
            let text = game.solution().text().to_string();
            assert!(["crane", "slate", "erase"].contains(&text.as_str()));
            game.start_new_game();
        }
    }

    #[test]
    fn seeded_rng_gives_deterministic_solutions() {
        let words = lists(&["crane", "slate", "erase", "robot"], &[]);

        let a = GameSession::new(&words, StdRng::seed_from_u64(9), MemoryStore::new());
        let b = GameSession::new(&words, StdRng::seed_from_u64(9), MemoryStore::new());

        assert_eq!(a.solution(), b.solution());
    }

    #[test]
    fn visible_row_overlays_typed_letters() {
        let words = lists(&["crane"], &[]);
        let mut game = session(&words);

        type_word(&mut game, "sl");
        let row = game.visible_row(0);

        assert_eq!(row[0].letter, Some('s'));
        assert_eq!(row[0].state, LetterState::Empty);
        assert_eq!(row[1].letter, Some('l'));
        assert_eq!(row[2], LetterEval::EMPTY);

        // Rows below the active one are untouched
        assert_eq!(game.visible_row(1), [LetterEval::EMPTY; WORD_LENGTH]);
    }
}
