use clap::{Parser, Subcommand, ValueEnum};
use evil_hangman::*;
use log::debug;
use log::info;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::str::FromStr;
use std::time::Instant;

/// Play hangman against a computer that cheats by never settling on a word.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game against the computer.
    Play {
        /// Length of the word to guess. Asked for if not given.
        #[arg(short, long)]
        length: Option<usize>,
        /// Number of wrong guesses allowed. Asked for if not given.
        #[arg(short, long)]
        guesses: Option<u32>,
        /// Show how many words the computer is still considering.
        #[arg(long)]
        show_count: bool,
    },
    /// Pit an automated guesser against the computer for each word length.
    Simulate {
        /// Number of wrong guesses allowed in each round.
        #[arg(short, long, default_value_t = 10)]
        guesses: u32,
        #[arg(long, value_enum, default_value_t = GuesserKind::Frequency)]
        guesser: GuesserKind,
        /// Word lengths to play. Defaults to every length in the words file.
        #[arg(short, long, num_args = 1..)]
        lengths: Vec<usize>,
        /// Number of rounds to play per word length.
        #[arg(short, long, default_value_t = 1)]
        rounds: u64,
        /// Seed for the random guesser. Round `n` uses `seed + n`.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GuesserKind {
    /// Guess a random letter from the remaining words.
    Random,
    /// Guess the letter found in the most remaining words.
    Frequency,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let dictionary = Dictionary::from_reader(words_reader)?;
    info!(
        "Loaded {} words from {}",
        dictionary.len(),
        args.words_file
    );

    match args.command {
        Command::Play {
            length,
            guesses,
            show_count,
        } => play_interactive_game(&dictionary, length, guesses, show_count)?,
        Command::Simulate {
            guesses,
            guesser,
            lengths,
            rounds,
            seed,
        } => run_simulation(&dictionary, guesses, guesser, lengths, rounds, seed)?,
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn play_interactive_game(
    dictionary: &Dictionary,
    maybe_length: Option<usize>,
    maybe_max_wrong: Option<u32>,
    show_count: bool,
) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the hangman game.\n");
    let length = choose_length(&mut lines, dictionary, maybe_length)?;
    let max_wrong = match maybe_max_wrong {
        Some(max_wrong) => max_wrong,
        None => prompt_number(&mut lines, "How many wrong answers allowed? ")?,
    };
    println!();

    let mut game = GameState::new(dictionary.words(), length, max_wrong)?;
    while game_status(&game)? == GameStatus::AwaitingGuess {
        println!("guesses : {}", game.guesses_left());
        if show_count {
            println!("words   : {}", game.words().len());
        }
        println!("guessed : {}", format_guesses(game.guesses()));
        println!("current : {}", game.pattern()?);

        let guess = prompt_letter(&mut lines, "Your guess? ")?;
        match game.record(guess) {
            Ok(0) => println!("Sorry, there are no {}'s", guess),
            Ok(1) => println!("Yes, there is one {}", guess),
            Ok(count) => println!("Yes, there are {} {}'s", count, guess),
            Err(HangmanError::InvalidArgument(_)) => println!("You already guessed that"),
            Err(error) => return Err(error.into()),
        }
        println!();
    }

    if let Some(answer) = game.words().iter().next() {
        println!("answer = {}", answer);
    }
    match game_status(&game)? {
        GameStatus::Won => println!("You beat me"),
        _ => println!("Sorry, you lose"),
    }
    Ok(())
}

/// Uses the requested word length if the dictionary has words of that length, and otherwise asks
/// until the user picks one that does.
fn choose_length<B: BufRead>(
    lines: &mut io::Lines<B>,
    dictionary: &Dictionary,
    maybe_length: Option<usize>,
) -> io::Result<usize> {
    let mut maybe_length = maybe_length;
    loop {
        let length = match maybe_length.take() {
            Some(length) => length,
            None => prompt_number(lines, "What length word do you want to use? ")?,
        };
        if length > 0 && dictionary.count_of_length(length) > 0 {
            return Ok(length);
        }
        println!("There are no words of length {}.", length);
    }
}

fn prompt_number<B: BufRead, T: FromStr>(
    lines: &mut io::Lines<B>,
    prompt: &str,
) -> io::Result<T> {
    loop {
        let input = prompt_line(lines, prompt)?;
        match input.trim().parse() {
            Ok(number) => return Ok(number),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

fn prompt_letter<B: BufRead>(lines: &mut io::Lines<B>, prompt: &str) -> io::Result<char> {
    loop {
        let input = prompt_line(lines, prompt)?.trim().to_lowercase();
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => return Ok(letter),
            _ => println!("Please enter a single letter."),
        }
    }
}

fn prompt_line<B: BufRead>(lines: &mut io::Lines<B>, prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    lines.next().unwrap_or_else(|| {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the game was over",
        ))
    })
}

fn format_guesses(guesses: &BTreeSet<char>) -> String {
    let letters: Vec<String> = guesses.iter().map(char::to_string).collect();
    format!("[{}]", letters.join(", "))
}

#[derive(Default)]
struct Tally {
    num_words: usize,
    num_won: u32,
    num_lost: u32,
    num_guesses_when_won: usize,
}

fn run_simulation(
    dictionary: &Dictionary,
    max_wrong: u32,
    guesser: GuesserKind,
    lengths: Vec<usize>,
    rounds: u64,
    seed: u64,
) -> Result<(), HangmanError> {
    let lengths: Vec<usize> = if lengths.is_empty() {
        dictionary.word_lengths().into_iter().collect()
    } else {
        lengths
    };
    let games: Vec<(usize, u64)> = lengths
        .iter()
        .flat_map(|&length| (0..rounds).map(move |round| (length, round)))
        .collect();
    println!(
        "Playing {} rounds with {} wrong guesses allowed, using the {:?} guesser.\n",
        games.len(),
        max_wrong,
        guesser
    );

    // Every round owns its own GameState, so rounds can run in parallel.
    let results = games
        .par_iter()
        .map(|&(length, round)| -> Result<(usize, GameResult), HangmanError> {
            let result = match guesser {
                GuesserKind::Random => play_game_with_guesser(
                    dictionary.words(),
                    length,
                    max_wrong,
                    RandomGuesser::seeded(seed.wrapping_add(round)),
                ),
                GuesserKind::Frequency => play_game_with_guesser(
                    dictionary.words(),
                    length,
                    max_wrong,
                    MostFrequentLetterGuesser,
                ),
            }?;
            debug!("Length {}, round {}: {:?}", length, round, result);
            Ok((length, result))
        })
        .collect::<Result<Vec<(usize, GameResult)>, HangmanError>>()?;

    let mut tally_per_length: BTreeMap<usize, Tally> = BTreeMap::new();
    for (length, result) in results {
        let tally = tally_per_length.entry(length).or_insert_with(|| Tally {
            num_words: dictionary.count_of_length(length),
            ..Tally::default()
        });
        match result {
            GameResult::Won(guesses) => {
                tally.num_won += 1;
                tally.num_guesses_when_won += guesses.len();
            }
            GameResult::Lost(_) => tally.num_lost += 1,
            GameResult::NoWordsOfLength => {}
        }
    }

    println!("|Word length|Num words|Rounds won|Rounds lost|Average guesses to win|");
    println!("|-----------|---------|----------|-----------|----------------------|");
    for (length, tally) in tally_per_length.iter() {
        let average = if tally.num_won > 0 {
            format!(
                "{:.2}",
                tally.num_guesses_when_won as f64 / tally.num_won as f64
            )
        } else {
            "-".to_string()
        };
        println!(
            "|{}|{}|{}|{}|{}|",
            length, tally.num_words, tally.num_won, tally.num_lost, average
        );
    }
    Ok(())
}
