//! ClipInject agent entry point.
//!
//! Wires together the clipboard source, layout oracle, input sink, and
//! outcome reporter, registers the global hotkey, and then parks until
//! shutdown.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_or_init_config()        -- TOML config, written on first run
//!  └─ HotkeyTriggerService::start() -- Win32 message-loop thread
//!  └─ dispatch thread
//!       └─ TriggerEvent::Hotkey -> InjectClipboardUseCase::run()
//! ```
//!
//! # Dispatch thread (for beginners)
//!
//! The `for event in trigger_rx` loop is the heart of the agent. The
//! channel has exactly one consumer and the loop runs each injection to
//! completion before receiving the next event, so two hotkey presses
//! can never interleave their keystrokes. Presses that arrive while an
//! injection is running queue up in the channel.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use clipinject_agent::application::InjectClipboardUseCase;
use clipinject_agent::infrastructure::{
    clipboard::SystemClipboard,
    config::{config_file_path, load_or_init_config, AppConfig},
    notify::LogReporter,
};
use clipinject_core::{InputSink, LayoutOracle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // First run writes the default config file so the user has
    // something to edit.
    let config = load_or_init_config().unwrap_or_else(|err| {
        eprintln!("config unavailable ({err}), using defaults");
        AppConfig::default()
    });

    // Initialise structured logging. RUST_LOG wins over the config file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.agent.log_level)),
        )
        .init();

    info!("ClipInject agent starting");
    if let Ok(path) = config_file_path() {
        info!(path = %path.display(), "config file location");
    }

    // Shutdown flag.
    let running = Arc::new(AtomicBool::new(true));

    // ── Platform adapters ─────────────────────────────────────────────────────
    #[cfg(target_os = "windows")]
    let (sink, layout): (Arc<dyn InputSink>, Arc<dyn LayoutOracle>) = {
        use clipinject_agent::infrastructure::{
            input_sink::windows::SendInputSink, layout::windows::ActiveLayoutOracle,
        };
        (
            Arc::new(SendInputSink::new()),
            Arc::new(ActiveLayoutOracle::new()),
        )
    };
    #[cfg(not(target_os = "windows"))]
    let (sink, layout): (Arc<dyn InputSink>, Arc<dyn LayoutOracle>) = {
        use clipinject_agent::infrastructure::{
            input_sink::mock::MockInputSink, layout::mock::MockLayoutOracle,
        };
        tracing::warn!("no input backend for this platform, events will be recorded only");
        (
            Arc::new(MockInputSink::new()),
            Arc::new(MockLayoutOracle::us_qwerty()),
        )
    };

    let use_case = Arc::new(InjectClipboardUseCase::new(
        Arc::new(SystemClipboard::new()),
        layout,
        sink,
        Arc::new(LogReporter::new()),
        Duration::from_millis(config.agent.settle_delay_ms),
    ));

    // ── Hotkey trigger ────────────────────────────────────────────────────────
    #[cfg(target_os = "windows")]
    {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        use clipinject_agent::infrastructure::trigger::windows::HotkeyTriggerService;

        let (trigger_rx, chord) = HotkeyTriggerService::start(&config.hotkey.key)?;
        info!(
            "hotkey registered: {chord}+{}",
            config.hotkey.key.to_uppercase()
        );

        let uc = Arc::clone(&use_case);
        std::thread::Builder::new()
            .name("clipinject-dispatch".to_string())
            .spawn(move || {
                for _event in trigger_rx {
                    // A panic in one injection must not take the agent
                    // down or poison the dispatch loop.
                    if catch_unwind(AssertUnwindSafe(|| uc.run())).is_err() {
                        tracing::error!("injection attempt panicked, continuing");
                    }
                }
            })?;
    }
    #[cfg(not(target_os = "windows"))]
    {
        let _ = &use_case;
        tracing::warn!("no hotkey backend for this platform, agent is idle");
    }

    // ── Ctrl-C handler ────────────────────────────────────────────────────────
    let running_clone = Arc::clone(&running);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            running_clone.store(false, Ordering::Relaxed);
        }
    });

    info!("ClipInject agent ready");
    while running.load(Ordering::Relaxed) {
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    info!("ClipInject agent stopped");
    Ok(())
}
