use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

// Use library instead of local modules
use tdd_katas::{
    greet, hello, perimeter, repeat, sum, sum_all_tails, Circle, Dictionary, Language, Rectangle,
    Shape, Triangle,
};

#[derive(Parser)]
#[command(name = "tdd-katas")]
#[command(version, about = "Run the TDD katas from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Greet someone, optionally in another language
    Hello {
        /// Name to greet ("World" when omitted)
        #[arg(default_value = "")]
        name: String,

        /// Spanish, French, or Pig Latin; anything else is English
        #[arg(short, long, default_value = "")]
        language: String,
    },

    /// Write a greeting straight to stdout
    Greet {
        #[arg(default_value = "world")]
        name: String,
    },

    /// Repeat a string
    Repeat {
        text: String,

        #[arg(short, long, default_value_t = 5)]
        times: usize,
    },

    /// Sum a list of integers
    Sum {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Sum every integer but the first
    Tails {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Look up a word in a JSON dictionary file
    Define {
        word: String,

        /// JSON object mapping words to definitions
        #[arg(short, long, env = "KATAS_DICTIONARY")]
        dictionary: PathBuf,
    },

    /// Print the areas of the demo shapes
    Area,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Hello {
        name: String::new(),
        language: String::new(),
    }) {
        Commands::Hello { name, language } => {
            let language = Language::from_name(&language);
            debug!(%language, "greeting");
            println!("{}", hello(&name, language));
        }
        Commands::Greet { name } => {
            let mut stdout = io::stdout().lock();
            greet(&mut stdout, &name).context("Failed to write greeting")?;
            writeln!(stdout)?;
        }
        Commands::Repeat { text, times } => println!("{}", repeat(&text, times)),
        Commands::Sum { numbers } => println!("{}", sum(&numbers)),
        Commands::Tails { numbers } => {
            let tails = sum_all_tails([numbers]);
            println!("{}", tails[0]);
        }
        Commands::Define { word, dictionary } => run_define(&word, &dictionary)?,
        Commands::Area => run_area(),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_define(word: &str, path: &Path) -> Result<()> {
    let dictionary = Dictionary::from_file(path)?;
    let definition = dictionary
        .search(word)
        .with_context(|| format!("No definition for {:?} in {:?}", word, path))?;

    println!("{}: {}", word, definition);
    Ok(())
}

fn run_area() {
    let rectangle = Rectangle::new(12.0, 6.0);
    let circle = Circle::new(10.0);
    let triangle = Triangle::new(12.0, 6.0);
    let shapes: [&dyn Shape; 3] = [&rectangle, &circle, &triangle];

    for shape in shapes {
        println!("{:<10} area = {}", shape.name(), shape.area());
    }
    println!("{:<10} perimeter = {}", rectangle.name(), perimeter(&rectangle));
}
