//! promptlab CLI — operator interface to the prompt trainer.

use clap::{Parser, Subcommand};
use opentelemetry::KeyValue;
use promptlab::config::Config;
use promptlab::exemplars;
use promptlab::model::{Identity, PromptAnalysis, PromptAnalysisResult, PromptCategory};
use promptlab::progress::{Progression, xp_for_next_level};
use promptlab::scoring;
use promptlab::store::IdentityStore;
use promptlab::telemetry::{TelemetryConfig, init_telemetry, metrics, scoring as spans};
use secrecy::SecretString;

#[derive(Parser)]
#[command(name = "promptlab", about = "Prompt quality trainer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a prompt without an account (nothing is saved)
    Analyze {
        /// The prompt text
        text: String,
    },
    /// Create a new account
    Signup {
        username: String,
        email: String,
    },
    /// Analyze a prompt and record it against an account
    Submit {
        username: String,
        /// The prompt text
        text: String,
    },
    /// Show an account's prompt history
    History {
        username: String,
        /// Maximum entries to show (most recent last)
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Show the achievement catalog with unlock status
    Achievements {
        username: String,
    },
    /// Before/after example prompts
    Examples {
        #[command(subcommand)]
        action: ExampleAction,
    },
}

#[derive(Subcommand)]
enum ExampleAction {
    /// List examples, optionally filtered by category
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one example in full
    Show {
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env();

    let _guard = init_telemetry(TelemetryConfig {
        endpoint: config.otel_endpoint.clone(),
        service_name: "promptlab".to_string(),
    })?;

    match cli.command {
        Command::Analyze { text } => cmd_analyze(&text),
        Command::Signup { username, email } => cmd_signup(&config, username, email),
        Command::Submit { username, text } => cmd_submit(&config, username, text),
        Command::History { username, limit } => cmd_history(&config, username, limit),
        Command::Achievements { username } => cmd_achievements(&config, username),
        Command::Examples { action } => match action {
            ExampleAction::List { category } => cmd_examples_list(category),
            ExampleAction::Show { id } => cmd_examples_show(id),
        },
    }
}

fn open_store(config: &Config) -> anyhow::Result<IdentityStore> {
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(IdentityStore::open(&config.db_path)?)
}

fn prompt_password(confirm: bool) -> anyhow::Result<SecretString> {
    let mut input = dialoguer::Password::new().with_prompt("Password");
    if confirm {
        input = input.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(SecretString::from(input.interact()?))
}

fn cmd_analyze(text: &str) -> anyhow::Result<()> {
    let analysis = scoring::analyze(text);
    metrics::prompts_analyzed().add(
        1,
        &[
            KeyValue::new("category", analysis.category.to_string()),
            KeyValue::new("quality", analysis.quality.to_string()),
        ],
    );
    print_analysis(&analysis);
    Ok(())
}

fn cmd_signup(config: &Config, username: String, email: String) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let password = prompt_password(true)?;
    let profile = store.create_account(&username, &email, &password)?;
    println!("Account created: {} (level {})", profile.username, profile.level);
    Ok(())
}

fn cmd_submit(config: &Config, username: String, text: String) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let password = prompt_password(false)?;
    let profile = store.verify(&username, &password)?;

    let span = spans::start_analysis_span(&username);
    let _enter = span.enter();

    let analysis = scoring::analyze(&text);
    spans::record_outcome(&span, analysis.score, &analysis.category.to_string());
    metrics::prompts_analyzed().add(
        1,
        &[
            KeyValue::new("category", analysis.category.to_string()),
            KeyValue::new("quality", analysis.quality.to_string()),
        ],
    );
    metrics::prompt_score().record(f64::from(analysis.score), &[]);

    let result = PromptAnalysisResult::new(text, analysis, chrono::Utc::now());
    let updated = Progression::new().advance(Identity::Registered(profile), result)?;

    let Identity::Registered(profile) = updated else {
        anyhow::bail!("progression changed the identity kind");
    };
    store.save(&profile)?;

    let entry = profile
        .prompt_history
        .last()
        .ok_or_else(|| anyhow::anyhow!("progression recorded no history entry"))?;

    print_analysis(&entry.analysis);
    println!();
    println!("XP earned:   +{}", entry.xp_earned);
    metrics::xp_awarded().add(u64::from(entry.xp_earned), &[]);

    for achievement in &entry.achievements_unlocked {
        println!(
            "Unlocked:    {} {} ({}, +{} XP)",
            achievement.icon, achievement.title, achievement.rarity, achievement.xp_reward
        );
        metrics::achievements_unlocked().add(
            1,
            &[
                KeyValue::new("achievement_id", achievement.id.clone()),
                KeyValue::new("rarity", achievement.rarity.to_string()),
            ],
        );
    }

    println!(
        "Level:       {} ({} XP total, {} to next)",
        profile.level,
        profile.total_xp,
        xp_for_next_level(profile.level, profile.total_xp)
    );
    println!(
        "Streak:      {} day(s) (best {})",
        profile.current_streak, profile.best_streak
    );

    Ok(())
}

fn cmd_history(config: &Config, username: String, limit: usize) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let profile = store
        .find_by_username(&username)?
        .ok_or_else(|| anyhow::anyhow!("no account named '{username}'"))?;

    if profile.prompt_history.is_empty() {
        println!("No prompts yet.");
        return Ok(());
    }

    println!(
        "{:<8}  {:<5}  {:<9}  {:<14}  {:<6}  PROMPT",
        "ID", "SCORE", "QUALITY", "CATEGORY", "XP"
    );
    println!("{}", "-".repeat(100));

    let start = profile.prompt_history.len().saturating_sub(limit);
    for entry in &profile.prompt_history[start..] {
        let prompt_display: String = entry.prompt.chars().take(40).collect();
        println!(
            "{:<8}  {:<5}  {:<9}  {:<14}  {:<6}  {}",
            entry.id.to_string(),
            entry.analysis.score,
            entry.analysis.quality.to_string(),
            entry.analysis.category.to_string(),
            entry.xp_earned,
            prompt_display,
        );
    }

    println!("\n{} prompt(s) total", profile.prompt_history.len());
    Ok(())
}

fn cmd_achievements(config: &Config, username: String) -> anyhow::Result<()> {
    use promptlab::progress::catalog::CATALOG;

    let store = open_store(config)?;
    let profile = store
        .find_by_username(&username)?
        .ok_or_else(|| anyhow::anyhow!("no account named '{username}'"))?;

    for def in &CATALOG {
        let marker = if profile.has_achievement(def.id) {
            "[x]"
        } else {
            "[ ]"
        };
        println!(
            "{marker} {} {:<20} {:<10} +{:<5} {}",
            def.icon, def.title, def.rarity.to_string(), def.xp_reward, def.description
        );
    }

    println!(
        "\n{}/{} unlocked",
        profile.achievements.len(),
        CATALOG.len()
    );
    Ok(())
}

fn cmd_examples_list(category: Option<String>) -> anyhow::Result<()> {
    let filter: Option<PromptCategory> = match category {
        Some(s) => Some(s.parse().map_err(|e: String| anyhow::anyhow!(e))?),
        None => None,
    };

    for example in &exemplars::PROMPT_EXAMPLES {
        if filter.is_some_and(|c| c != example.category) {
            continue;
        }
        println!(
            "{:<24}  {:<14}  {}",
            example.id, example.category.to_string(), example.title
        );
    }
    Ok(())
}

fn cmd_examples_show(id: String) -> anyhow::Result<()> {
    let example =
        exemplars::by_id(&id).ok_or_else(|| anyhow::anyhow!("no example with id '{id}'"))?;

    println!("{} ({})", example.title, example.category);
    println!();
    println!("Poor ({}): {}", example.poor.score, example.poor.prompt);
    for note in example.poor.notes {
        println!("  - {note}");
    }
    println!();
    println!("Good ({}): {}", example.good.score, example.good.prompt);
    for note in example.good.notes {
        println!("  + {note}");
    }
    println!();
    println!("{}", example.explanation);
    println!();
    println!("Tips:");
    for tip in example.tips {
        println!("  * {tip}");
    }
    Ok(())
}

fn print_analysis(analysis: &PromptAnalysis) {
    println!("Score:       {} ({})", analysis.score, analysis.quality);
    println!("Category:    {}", analysis.category);
    println!(
        "Tokens:      ~{}{}",
        analysis.token_count,
        if analysis.is_at_limit {
            " (over the safe limit)"
        } else if analysis.is_near_limit {
            " (near the limit)"
        } else {
            ""
        }
    );
    println!(
        "Feedback:    clarity {}  specificity {}  context {}  structure {}  length {}",
        analysis.feedback.clarity,
        analysis.feedback.specificity,
        analysis.feedback.context,
        analysis.feedback.structure,
        analysis.feedback.length,
    );
    if !analysis.suggestions.is_empty() {
        println!("Suggestions:");
        for suggestion in &analysis.suggestions {
            println!("  - {suggestion}");
        }
    }
}
