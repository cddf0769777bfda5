use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use handoff_core::{EngineConfig, Patient};
use handoff_engine::HandoffSession;
use serde::Deserialize;

mod logging;

#[derive(Parser, Debug)]
#[command(
    name = "handoff-cli",
    about = "Phát lại kịch bản thao tác bàn giao ca và in snapshot kết quả."
)]
struct Args {
    /// Đường dẫn tới file kịch bản JSON.
    #[arg(short, long)]
    input: PathBuf,

    /// File cấu hình JSON (từng phần, ghi đè mặc định).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// In toàn bộ snapshot dạng JSON thay vì bản tóm tắt.
    #[arg(long)]
    json: bool,

    /// Tăng mức log (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Deserialize)]
struct Script {
    patients: Vec<Patient>,
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum Step {
    Toggle {
        category: String,
        section: String,
        item: String,
        #[serde(default)]
        note: Option<String>,
    },
    ApplyCascades,
    SelectPatient {
        index: usize,
    },
    Dismiss {
        key: String,
    },
    Accept {
        item: String,
    },
    Clear,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    let config = load_config(args.config.as_deref())?;
    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Không đọc được file {:?}", args.input))?;
    let script: Script = serde_json::from_str(&data)
        .with_context(|| format!("Kịch bản không hợp lệ: {:?}", args.input))?;

    let session = replay(script, config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        return Ok(());
    }

    let summary = session.handoff_summary()?;
    let suggestions = session.active_suggestions()?;
    println!(
        "Patients: {}\nSituation: {}\nBackground: {}\nAssessment: {}\nRecommendation: {}",
        session.patient_count(),
        summary.situation.len(),
        summary.background.len(),
        summary.assessment.len(),
        summary.recommendation.len(),
    );
    println!("Top suggestions:");
    for suggestion in suggestions.iter().take(5) {
        println!(
            "  {:<32} {:.2}  ({})",
            suggestion.item, suggestion.score, suggestion.source
        );
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Không đọc được file cấu hình {path:?}"))?;
    serde_json::from_str(&raw).with_context(|| format!("Cấu hình không hợp lệ: {path:?}"))
}

fn replay(script: Script, config: EngineConfig) -> anyhow::Result<HandoffSession> {
    let mut session = HandoffSession::new(config);
    for patient in script.patients {
        session.add_patient(patient)?;
    }

    for (position, step) in script.steps.into_iter().enumerate() {
        run_step(&mut session, step).with_context(|| format!("Bước {position} thất bại"))?;
    }
    // Cascades left over from the final step still belong to this shift.
    session.apply_pending_cascades();
    Ok(session)
}

fn run_step(session: &mut HandoffSession, step: Step) -> anyhow::Result<()> {
    match step {
        Step::Toggle {
            category,
            section,
            item,
            note,
        } => {
            let outcome = session.toggle_selection(&category, &section, &item, note.as_deref())?;
            if !outcome.conflicts.is_empty() {
                tracing::warn!(conflicts = outcome.conflicts.len(), "selection conflicts");
            }
        }
        Step::ApplyCascades => {
            session.apply_pending_cascades();
        }
        Step::SelectPatient { index } => session.set_active_patient(index)?,
        Step::Dismiss { key } => {
            session.dismiss_suggestion(key)?;
        }
        Step::Accept { item } => {
            session.accept_suggestion(&item)?;
        }
        Step::Clear => {
            session.clear_all_selections()?;
        }
    }
    Ok(())
}
