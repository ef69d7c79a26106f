//! The word source backing a game: daily answers plus accepted guesses

use super::loader::{WordListError, load_from_file, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::core::{Word, WordSource};
use chrono::NaiveDate;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Answers are counted from this day; 2022-01-01 is day 1
const EPOCH: Option<NaiveDate> = NaiveDate::from_ymd_opt(2021, 12, 31);

/// Which words are accepted as guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessList<'p> {
    /// Every embedded word (answers and extra guesses)
    All,
    /// Only words that can be answers
    Answers,
    /// Answers plus the words in a file
    File(&'p Path),
}

impl<'p> GuessList<'p> {
    /// Parse the `--wordlist` flag: "all", "answers", or a path
    #[must_use]
    pub fn from_flag(flag: &'p str) -> Self {
        match flag {
            "all" => Self::All,
            "answers" => Self::Answers,
            path => Self::File(Path::new(path)),
        }
    }
}

/// Answer list and guess dictionary
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    guesses: FxHashSet<Word>,
}

impl Dictionary {
    /// Build from explicit lists; answers are always accepted as guesses
    ///
    /// # Panics
    /// Panics if `answers` is empty.
    #[must_use]
    pub fn new(answers: Vec<Word>, extra_guesses: impl IntoIterator<Item = Word>) -> Self {
        assert!(!answers.is_empty(), "a dictionary needs at least one answer");
        let mut guesses: FxHashSet<Word> = extra_guesses.into_iter().collect();
        guesses.extend(answers.iter().copied());
        Self { answers, guesses }
    }

    /// The built-in lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Load according to the `--wordlist` selection
    ///
    /// # Errors
    /// Returns an error if a word list file cannot be loaded.
    pub fn load(list: &GuessList<'_>) -> Result<Self, WordListError> {
        let answers = words_from_slice(ANSWERS);
        Ok(match list {
            GuessList::All => Self::new(answers, words_from_slice(ALLOWED)),
            GuessList::Answers => Self::new(answers, []),
            GuessList::File(path) => Self::new(answers, load_from_file(path)?),
        })
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// Index of the answer for `date`, wrapping around the answer list
    #[must_use]
    pub fn day_index(&self, date: NaiveDate) -> usize {
        let days = EPOCH.map_or(0, |epoch| (date - epoch).num_days());
        days.rem_euclid(self.answers.len() as i64) as usize
    }

    /// A uniformly random answer, for practice games
    pub fn random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.answers.choose(rng).copied().unwrap_or(self.answers[0])
    }
}

impl WordSource for Dictionary {
    fn word_of_the_day(&self, date: NaiveDate) -> Word {
        self.answers[self.day_index(date)]
    }

    fn is_valid_guess(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn small() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["cigar", "rebut", "sissy"]),
            words_from_slice(&["aback"]),
        )
    }

    #[test]
    fn daily_word_advances_one_per_day() {
        let dict = small();
        assert_eq!(dict.word_of_the_day(date(2021, 12, 31)).to_string(), "cigar");
        assert_eq!(dict.word_of_the_day(date(2022, 1, 1)).to_string(), "rebut");
        assert_eq!(dict.word_of_the_day(date(2022, 1, 2)).to_string(), "sissy");
        assert_eq!(dict.word_of_the_day(date(2022, 1, 3)).to_string(), "cigar");
    }

    #[test]
    fn dates_before_epoch_wrap() {
        let dict = small();
        assert_eq!(dict.day_index(date(2021, 12, 30)), 2);
    }

    #[test]
    fn daily_word_is_deterministic() {
        let dict = Dictionary::embedded();
        let day = date(2026, 10, 16);
        assert_eq!(dict.word_of_the_day(day), dict.word_of_the_day(day));
        assert!(dict.answers().contains(&dict.word_of_the_day(day)));
    }

    #[test]
    fn answers_and_extras_are_valid_guesses() {
        let dict = small();
        assert!(dict.is_valid_guess(&Word::new("sissy").unwrap()));
        assert!(dict.is_valid_guess(&Word::new("aback").unwrap()));
        assert!(!dict.is_valid_guess(&Word::new("zzzzz").unwrap()));
        assert_eq!(dict.guess_count(), 4);
    }

    #[test]
    fn answers_only_list_rejects_extras() {
        let dict = Dictionary::load(&GuessList::Answers).unwrap();
        let extra = Word::new(ALLOWED[0]).unwrap();
        assert!(!dict.is_valid_guess(&extra));
        assert!(dict.is_valid_guess(&Word::new(ANSWERS[0]).unwrap()));
    }

    #[test]
    fn file_list_adds_guesses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "qajaq").unwrap();
        let dict = Dictionary::load(&GuessList::File(file.path())).unwrap();
        assert!(dict.is_valid_guess(&Word::new("qajaq").unwrap()));
        assert!(dict.is_valid_guess(&Word::new(ANSWERS[0]).unwrap()));
    }

    #[test]
    fn guess_list_flag_parsing() {
        assert_eq!(GuessList::from_flag("all"), GuessList::All);
        assert_eq!(GuessList::from_flag("answers"), GuessList::Answers);
        assert_eq!(
            GuessList::from_flag("words.txt"),
            GuessList::File(Path::new("words.txt"))
        );
    }

    #[test]
    fn random_answer_comes_from_answers() {
        let dict = small();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(dict.answers().contains(&dict.random_answer(&mut rng)));
        }
    }
}
