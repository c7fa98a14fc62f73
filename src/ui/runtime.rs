use crate::config::Config;
use crate::rotation::{CarouselId, SystemClock, TimerScheduler, TokioScheduler};
use crate::shutdown::{ShutdownCoordinator, ShutdownHandle, ShutdownPhase};
use crate::ui::app::{App, SchedulerFactory, UiCommand};
use crate::ui::contact::ContactIntent;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::page::Page;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

const TICK_RATE: Duration = Duration::from_millis(250);
const COMMAND_QUEUE: usize = 16;

pub fn run(config: Config, start_page: Page) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    let shutdown = ShutdownCoordinator::new();
    let (mut terminal, guard) = setup_terminal().context("preparing terminal")?;
    let events = EventHandler::new(TICK_RATE, shutdown.handle());

    runtime.spawn(watch_signals(shutdown.handle(), events.sender()));

    let (command_tx, mut command_rx) = tokio::sync::mpsc::channel::<UiCommand>(COMMAND_QUEUE);
    let command_events = events.sender();
    runtime.spawn(async move {
        while let Some(command) = command_rx.recv().await {
            let tx = command_events.clone();
            tokio::spawn(async move {
                let (after, event) = match command {
                    UiCommand::CompleteSubmission { after } => (after, AppEvent::ContactSubmitted),
                    UiCommand::ResetContactForm { after } => (after, AppEvent::ContactReset),
                };
                tokio::time::sleep(after).await;
                let _ = tx.send(event);
            });
        }
    });

    let mut app = App::new(
        config,
        Arc::new(SystemClock),
        tokio_schedulers(runtime.handle().clone(), events.sender()),
    );
    app.set_command_sender(command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.set_page(start_page);
    tracing::info!(page = ?start_page, "ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::FocusGained) => app.on_visibility(true),
            Ok(AppEvent::FocusLost) => app.on_visibility(false),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::RotationTimer { carousel, timer }) => app.on_timer(carousel, timer),
            Ok(AppEvent::ContactSubmitted) => app.dispatch_contact(ContactIntent::SubmitCompleted),
            Ok(AppEvent::ContactReset) => app.dispatch_contact(ContactIntent::Reset),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    shutdown.advance(ShutdownPhase::StoppingInput);
    shutdown.advance(ShutdownPhase::TearingDownCarousels);
    app.unmount_home();
    drop(app);
    shutdown.advance(ShutdownPhase::RestoringTerminal);
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    shutdown.advance(ShutdownPhase::Complete);
    Ok(())
}

/// Each carousel gets its own tokio-backed scheduler that posts fired timers
/// back to the UI loop.
fn tokio_schedulers(runtime: Handle, events: mpsc::Sender<AppEvent>) -> SchedulerFactory {
    Box::new(move |carousel: CarouselId| {
        let tx = events.clone();
        let scheduler = TokioScheduler::new(runtime.clone(), move |timer| {
            let _ = tx.send(AppEvent::RotationTimer { carousel, timer });
        });
        Box::new(scheduler) as Box<dyn TimerScheduler>
    })
}

async fn watch_signals(shutdown: ShutdownHandle, events: mpsc::Sender<AppEvent>) {
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("SIGINT received");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received");
        }
        _ = shutdown.wait() => return,
    }
    shutdown.signal();
    let _ = events.send(AppEvent::Shutdown);
}
