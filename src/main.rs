//! Application entry point — Transcript Polish.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create the tokio runtime.
//! 4. Build the LLM corrector ([`ApiCorrector`]) and the POS tagger.
//! 5. Read transcripts from stdin, one per line, and run each through the
//!    [`CorrectionPipeline`]: corrected text, change report, highlighted
//!    sentence, score. A failed LLM call is reported and the loop moves on
//!    to the next line — no partial output for that request.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;

use transcript_polish::{
    config::AppConfig,
    llm::{ApiCorrector, GrammarCorrector},
    pipeline::{CorrectionOutcome, CorrectionPipeline},
    pos::{LexiconTagger, PosTagger},
    report::Presenter,
};

// ---------------------------------------------------------------------------
// Output rendering
// ---------------------------------------------------------------------------

fn print_outcome(config: &AppConfig, presenter: &Presenter, outcome: &CorrectionOutcome) {
    println!("\nCorrected:\n{}", outcome.corrected);

    let lines = presenter.edit_lines(&outcome.edits);
    if lines.is_empty() {
        println!("\nNo grammar changes.");
    } else {
        println!("\nGrammar changes:");
        for line in lines {
            println!("  {line}");
        }
    }

    if config.output.show_highlight {
        println!("\nHighlighted:\n{}", presenter.highlight(&outcome.edits));
    }

    if config.output.show_score {
        println!("\nQuality score:");
        for line in presenter.score_lines(&outcome.score) {
            println!("  {line}");
        }
    }
    println!();
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Transcript Polish starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    if !config.llm.enabled {
        log::warn!("LLM correction is disabled in settings.toml — nothing to do");
        return Ok(());
    }

    // 3. Tokio runtime — corrections run one at a time, a single thread is
    //    all the pipeline needs.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    // 4. Collaborators
    let corrector: Arc<dyn GrammarCorrector> = Arc::new(ApiCorrector::from_config(&config.llm));
    let tagger: Arc<dyn PosTagger> = Arc::new(LexiconTagger::new());
    let pipeline = CorrectionPipeline::new(corrector, tagger);
    let presenter = Presenter::new(config.output.color);

    // 5. Input loop — one correction per line, blank line or EOF to quit.
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter your text: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let text = line.trim();
        if text.is_empty() {
            break;
        }

        match rt.block_on(pipeline.run(text)) {
            Ok(outcome) => print_outcome(&config, &presenter, &outcome),
            Err(e) => {
                // Terminal for this request only — report and keep going.
                log::error!("correction failed: {e}");
                eprintln!("No correction available: {e}");
            }
        }
    }

    log::info!("Transcript Polish shutting down");
    Ok(())
}
