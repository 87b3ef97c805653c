use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use nb_core::config::{ClassifierConfig, LoggingConfig};
use nb_core::core::scoring::best_of;
use nb_core::{ClassifierEngine, TrainingExample};
use std::io::{stdin, stdout, Write};
use tracing_subscriber::EnvFilter;

const SEED_DATA: [(&str, &str); 3] = [
    ("ball sport worldcup ball", "soccer"),
    ("ball sport glove bat", "baseball"),
    ("ball racket court sport", "tennis"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => ClassifierConfig::from_file(path)?,
        None => ClassifierConfig::default(),
    };
    init_logging(&config.logging);

    let mut engine = ClassifierEngine::from_config(&config);
    if engine.model().is_empty() {
        let seed: Vec<TrainingExample> = SEED_DATA
            .iter()
            .map(|(document, category)| TrainingExample::new(document, category))
            .collect();
        engine.train_batch(&seed);
    }

    print_banner()?;

    loop {
        print!("\n> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));

        match cmd {
            "exit" => break,
            "" => {}
            "train" => match rest.trim().split_once(' ') {
                Some((category, document)) => {
                    engine.train(document, category);
                    println!("Learned one '{}' document.", category.green());
                }
                None => println!("{}", "usage: train <category> <text...>".yellow()),
            },
            "classify" => {
                let result = serde_json::json!({ "category": engine.classify(rest) });
                println!("{}", result.to_string().bold());
            }
            "scores" => {
                let scores = engine.scores(rest);
                let best = best_of(&scores).map(|p| p.category.as_str());
                for prediction in &scores {
                    let line = format!("  {:<16} {:>12.6}", prediction.category, prediction.score);
                    if best == Some(prediction.category.as_str()) {
                        println!("{}", line.green());
                    } else {
                        println!("{}", line);
                    }
                }
            }
            "stats" => print_stats(&engine),
            _ => println!("{}", format!("unknown command '{}'", cmd).red()),
        }
    }

    if engine.model_path().is_some() {
        println!("\nSaving model...");
        if let Err(e) = engine.save_model() {
            eprintln!("[ERROR] Could not save model: {}", e);
        }
    }
    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_banner() -> std::io::Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Naive Bayes Text Classifier".bold());
    println!("---------------------------------------------------------------");
    println!("  train <category> <text...>   learn one document");
    println!("  classify <text...>           predict a category");
    println!("  scores <text...>             log-score of every category");
    println!("  stats                        what the model has learned");
    println!("  exit                         save (if configured) and quit");
    Ok(())
}

fn print_stats(engine: &ClassifierEngine) {
    let model = engine.model();
    println!(
        "Vocabulary: {} words, {} documents",
        model.vocabulary_size(),
        model.total_documents()
    );
    for stats in model.categories() {
        println!(
            "  {} documents: {:>4}  words: {:>6}  prior: {:.3}",
            format!("{:<16}", stats.label).cyan(),
            stats.document_count,
            stats.total_words(),
            model.prior_probability(&stats.label).unwrap_or(0.0)
        );
    }
}
