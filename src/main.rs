use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

use companion_setup::catalog::voices::StaticVoiceProvider;
use companion_setup::catalog::{languages, personas};
use companion_setup::config::SetupConfig;
use companion_setup::phase::{PhaseId, PhaseRegistry};
use companion_setup::store::{LibSqlSelectionStore, selection_keys};
use companion_setup::sync::{GoalSync, HttpGoalSync, SyncConfig};
use companion_setup::wizard::{SetupRouteState, StepOutcome, WizardController, setup_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install rustls crypto provider before any TLS usage
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = SetupConfig::from_env()?;

    eprintln!("🧭 Companion Setup v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Database: {}", config.db_path.display());
    eprintln!(
        "   Status API: http://0.0.0.0:{}/api/setup/status",
        config.listen_port
    );

    // ── Selection store ──────────────────────────────────────────────────
    let store = Arc::new(
        LibSqlSelectionStore::new_local(&config.db_path)
            .await
            .unwrap_or_else(|e| {
                eprintln!(
                    "Error: Failed to open selection store at {}: {}",
                    config.db_path.display(),
                    e
                );
                std::process::exit(1);
            }),
    );

    // ── Goal sync ────────────────────────────────────────────────────────
    let goal_sync: Option<Arc<dyn GoalSync>> = match SyncConfig::from_env() {
        Some(sync_config) => {
            eprintln!("   Goal sync: {}", sync_config.base_url);
            Some(Arc::new(HttpGoalSync::new(sync_config)))
        }
        None => {
            eprintln!("   Goal sync: disabled");
            None
        }
    };

    eprintln!("   Commands: next, back, skip, status, restart, /quit");
    eprintln!("   Pick from lists with a number; type text where asked.\n");

    // ── Wizard ───────────────────────────────────────────────────────────
    let registry = Arc::new(PhaseRegistry::standard());
    let voices = Arc::new(StaticVoiceProvider::with_builtin());
    let wizard = WizardController::resume(registry, store, voices, goal_sync).await;
    let wizard = Arc::new(Mutex::new(wizard));

    // Spawn Axum REST server for setup status
    let app = setup_routes(SetupRouteState {
        wizard: Arc::clone(&wizard),
    });
    let listen_port = config.listen_port;
    tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", listen_port))
            .await
            .expect("Failed to bind status API port");
        tracing::info!(port = listen_port, "Status API started");
        axum::serve(listener, app).await.ok();
    });

    run_repl(wizard).await;

    Ok(())
}

/// Stdin-driven walkthrough of the wizard.
async fn run_repl(wizard: Arc<Mutex<WizardController>>) {
    {
        let w = wizard.lock().await;
        print_phase(&w);
    }

    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    eprint!("> ");

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    eprint!("> ");
                    continue;
                }
                if line == "/quit" {
                    break;
                }
                let mut w = wizard.lock().await;
                handle_line(&mut w, &line).await;
                eprint!("> ");
            }
            Ok(None) => break, // EOF
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                break;
            }
        }
    }
}

async fn handle_line(wizard: &mut WizardController, line: &str) {
    match line {
        "next" => {
            let outcome = wizard.advance().await;
            report(wizard, outcome);
        }
        "back" => {
            let outcome = wizard.retreat().await;
            report(wizard, outcome);
        }
        "skip" => {
            let outcome = wizard.skip().await;
            report(wizard, outcome);
        }
        "status" => print_status(wizard),
        "restart" => {
            wizard.restart().await;
            print_phase(wizard);
        }
        other => handle_input(wizard, other).await,
    }
}

fn report(wizard: &WizardController, outcome: StepOutcome) {
    match outcome {
        StepOutcome::Moved { .. } => print_phase(wizard),
        StepOutcome::Blocked { missing, .. } => {
            println!("This screen needs a choice first ({}).", missing);
        }
        StepOutcome::AtTerminal => println!("Setup is already on the last screen."),
        StepOutcome::AtStart => println!("Already at the first screen."),
        StepOutcome::NotSkippable { .. } => println!("This screen can't be skipped."),
    }
}

/// Phase-specific free input: numbers pick from lists, text fills forms.
async fn handle_input(wizard: &mut WizardController, input: &str) {
    match wizard.current_phase().id {
        PhaseId::Language => {
            let picked = input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| languages::LANGUAGES.get(i));
            match picked {
                Some(language) => {
                    wizard
                        .select(selection_keys::LANGUAGE, language.code)
                        .await;
                    println!(
                        "Language: {} ({})",
                        language.native_name, language.english_name
                    );
                }
                None => println!(
                    "Pick a language by number (1-{}).",
                    languages::LANGUAGES.len()
                ),
            }
        }
        PhaseId::Voice => {
            let picked = input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| wizard.available_voices().get(i))
                .cloned();
            match picked {
                Some(voice) => {
                    wizard.select_voice(&voice).await;
                    println!("Voice: {} ({})", voice.name, voice.language_tag);
                }
                None => println!(
                    "Pick a voice by number (1-{}).",
                    wizard.available_voices().len()
                ),
            }
        }
        PhaseId::Personality => {
            let picked = input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| personas::PERSONAS.get(i));
            match picked {
                Some(persona) => {
                    wizard.select(selection_keys::PERSONALITY, persona.id).await;
                    println!("Personality: {}", persona.name);
                    println!("🎤 \"{}\"", persona.sample_phrase);
                }
                None => println!(
                    "Pick a personality by number (1-{}).",
                    personas::PERSONAS.len()
                ),
            }
        }
        PhaseId::Account => {
            if input.contains('@') {
                wizard.select(selection_keys::ACCOUNT_EMAIL, input).await;
                println!("Account email: {}", input);
            } else {
                println!("Type an email address for the account.");
            }
        }
        PhaseId::Verify => {
            let method = input.to_lowercase();
            if method == "email" || method == "phone" {
                wizard.select(selection_keys::VERIFY_METHOD, &method).await;
                println!("Verification method: {}", method);
            } else {
                println!("Type 'email' or 'phone', or 'skip' to do this later.");
            }
        }
        PhaseId::Goals => {
            wizard.select(selection_keys::GOALS_TEXT, input).await;
            println!("Goals noted.");
        }
        PhaseId::Init | PhaseId::Sync | PhaseId::Launch => {
            println!("Type 'next' to continue.");
        }
    }
}

fn print_phase(wizard: &WizardController) {
    let phase = wizard.current_phase();
    println!(
        "\n── {} ({}/{}) ──",
        phase.title,
        wizard.current_index() + 1,
        wizard.phase_count()
    );

    match phase.id {
        PhaseId::Init => {
            println!("Your companion is almost ready. Type 'next' to begin.");
        }
        PhaseId::Language => {
            for (i, language) in languages::LANGUAGES.iter().enumerate() {
                let marker = if language.full_i18n { "" } else { " (voice only)" };
                println!(
                    "{:>3}. {} — {}{}",
                    i + 1,
                    language.native_name,
                    language.english_name,
                    marker
                );
            }
        }
        PhaseId::Voice => {
            let voices = wizard.available_voices();
            if voices.is_empty() {
                println!("No voices available for this language. Go 'back' to pick another.");
            } else {
                let selected = wizard.selection(selection_keys::VOICE);
                for (i, voice) in voices.iter().enumerate() {
                    let marker = if selected == Some(voice.id.as_str()) {
                        " *"
                    } else {
                        ""
                    };
                    println!("{:>3}. {} ({}){}", i + 1, voice.name, voice.language_tag, marker);
                }
            }
        }
        PhaseId::Personality => {
            for (i, persona) in personas::PERSONAS.iter().enumerate() {
                println!("{:>3}. {} — {}", i + 1, persona.name, persona.tagline);
            }
        }
        PhaseId::Account => {
            println!("Type your email address to create an account.");
        }
        PhaseId::Verify => {
            println!("Type 'email' or 'phone' to verify, or 'skip' to do it later.");
        }
        PhaseId::Sync => {
            println!("Calendars and health data can connect later from Settings.");
            println!("Type 'next' to continue or 'skip'.");
        }
        PhaseId::Goals => {
            println!("Tell your companion what you want to get out of it, or 'skip'.");
        }
        PhaseId::Launch => {
            println!("Setup complete. Your companion is configured:");
            for (key, value) in wizard.selections() {
                println!("   {}: {}", key, value);
            }
        }
    }
}

fn print_status(wizard: &WizardController) {
    let status = wizard.status();
    println!(
        "Phase {}/{}: {} ({})",
        status.phase_index + 1,
        status.phase_count,
        status.phase_title,
        status.phase
    );
    println!("Completed: {}", status.completed);
    if status.selections.is_empty() {
        println!("No selections yet.");
    } else {
        for (key, value) in &status.selections {
            println!("   {}: {}", key, value);
        }
    }
}
