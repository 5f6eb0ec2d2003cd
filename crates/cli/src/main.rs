use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use surfclass::classify::classify_traced;
use surfclass::reduce::{ReductionCfg, TieBreak};
use surfclass::sample::{LetterCount, SampleCfg};
use surfclass::word::{format_word, parse_word};
use surfclass::{report_with, Surface};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod prompt;
mod provenance;
mod table;

use input::{ReportOut, SurfaceInput};
use provenance::{write_sidecar, BuildInfo};

#[derive(Parser)]
#[command(name = "surfclass-cli")]
#[command(about = "Classify compact surfaces given as glued polygons")]
struct Cmd {
    /// Log each rewrite (debug) instead of warnings only
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Choice {
    First,
    Last,
}

impl From<Choice> for TieBreak {
    fn from(c: Choice) -> Self {
        match c {
            Choice::First => TieBreak::First,
            Choice::Last => TieBreak::Last,
        }
    }
}

#[derive(clap::Args, Clone, Copy)]
struct ReduceArgs {
    /// Which handle to remove when several are available
    #[arg(long, value_enum, default_value = "first")]
    handle_choice: Choice,
    /// Which crosscap to remove when several are available
    #[arg(long, value_enum, default_value = "first")]
    crosscap_choice: Choice,
}

impl ReduceArgs {
    fn cfg(self) -> ReductionCfg {
        ReductionCfg {
            crosscap: self.crosscap_choice.into(),
            handle: self.handle_choice.into(),
        }
    }

    fn params(self) -> serde_json::Value {
        json!({
            "handle_choice": format!("{:?}", self.handle_choice).to_lowercase(),
            "crosscap_choice": format!("{:?}", self.crosscap_choice).to_lowercase(),
        })
    }
}

#[derive(Subcommand)]
enum Action {
    /// Classify a `{ vertices, edges, pairs }` JSON document
    Classify {
        /// Path to the JSON document, or `-` for stdin
        #[arg(long, default_value = "-")]
        input: String,
        /// Also write the report here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        reduce: ReduceArgs,
    },
    /// Classify a boundary word such as `a b a^-1 b^-1`
    Word {
        word: String,
        /// Include every applied rewrite in the output
        #[arg(long)]
        trace: bool,
        #[command(flatten)]
        reduce: ReduceArgs,
    },
    /// Read JSON documents line by line, re-prompting on invalid input
    Prompt {
        #[arg(long, default_value_t = 3)]
        attempts: u32,
        #[command(flatten)]
        reduce: ReduceArgs,
    },
    /// Draw random surfaces, classify them and write a CSV or Parquet table
    Sample {
        #[arg(long, default_value_t = 100)]
        count: u64,
        /// Letters per word (lower bound when `--max-letters` is given)
        #[arg(long, default_value_t = 4)]
        letters: usize,
        #[arg(long)]
        max_letters: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        orientable_only: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::WARN };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Classify { input, out, reduce } => classify(&input, out.as_deref(), reduce),
        Action::Word {
            word,
            trace,
            reduce,
        } => word_cmd(&word, trace, reduce),
        Action::Prompt { attempts, reduce } => prompt_cmd(attempts, reduce),
        Action::Sample {
            count,
            letters,
            max_letters,
            seed,
            orientable_only,
            out,
        } => {
            let letters = match max_letters {
                Some(max) => LetterCount::Uniform { min: letters, max },
                None => LetterCount::Fixed(letters),
            };
            let cfg = SampleCfg {
                letters,
                orientable_only,
            };
            sample(cfg, seed, count, &out)
        }
        Action::Report => report(),
    }
}

fn read_input(input: &str) -> Result<String> {
    let mut text = String::new();
    if input == "-" {
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
    } else {
        text = std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
    }
    Ok(text)
}

fn classify(input: &str, out: Option<&Path>, reduce: ReduceArgs) -> Result<()> {
    tracing::info!(input, "classify");
    let request: SurfaceInput =
        serde_json::from_str(&read_input(input)?).context("parsing surface request")?;
    let surface = request.to_surface()?;
    let report = ReportOut::from(&report_with(&surface, reduce.cfg())?);
    let rendered = serde_json::to_string_pretty(&report)?;
    println!("{rendered}");

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out, &rendered).with_context(|| format!("writing {}", out.display()))?;
        let mut params = reduce.params();
        params["input"] = json!(input);
        params["request"] = serde_json::to_value(&request)?;
        write_sidecar(out, "classify", params)?;
    }
    Ok(())
}

fn word_cmd(text: &str, trace: bool, reduce: ReduceArgs) -> Result<()> {
    let surface = Surface::from_word(&parse_word(text)?)?;
    let report = ReportOut::from(&report_with(&surface, reduce.cfg())?);
    let mut doc = serde_json::to_value(&report)?;
    doc["word"] = json!(format_word(&surface.to_word()));
    if trace {
        let (_, steps) = classify_traced(&surface, reduce.cfg())?;
        doc["steps"] = steps
            .iter()
            .map(|st| {
                json!({
                    "rule": st.rule.as_str(),
                    "vertices_before": st.vertices_before,
                    "result": st.result.as_ref().map(|s| format_word(&s.to_word())),
                })
            })
            .collect();
    }
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn prompt_cmd(attempts: u32, reduce: ReduceArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let report = prompt::run(stdin.lock(), std::io::stdout(), attempts, reduce.cfg())?;
    println!(
        "{}",
        serde_json::to_string_pretty(&ReportOut::from(&report))?
    );
    Ok(())
}

fn sample(cfg: SampleCfg, seed: u64, count: u64, out: &Path) -> Result<()> {
    tracing::info!(count, seed, out = %out.display(), "sample");
    let mut df = table::sample_frame(cfg, seed, count)?;
    table::write_frame(&mut df, out)?;
    let orientable = table::orientable_rows(&df)?;
    tracing::info!(rows = df.height(), orientable, "sample_written");

    let letters = match cfg.letters {
        LetterCount::Fixed(k) => json!({ "fixed": k }),
        LetterCount::Uniform { min, max } => json!({ "min": min, "max": max }),
    };
    let params = json!({
        "count": count,
        "seed": seed,
        "letters": letters,
        "orientable_only": cfg.orientable_only,
    });
    write_sidecar(out, "sample", params)?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&BuildInfo::current())?);
    Ok(())
}
