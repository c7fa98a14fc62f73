use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

use crate::rotation::{CarouselId, TimerId};
use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal regained focus; carousels may run again.
    FocusGained,
    /// Terminal lost focus; carousels stop auto-advancing.
    FocusLost,
    Tick,
    Resize(u16, u16),
    /// A carousel's one-shot timer fired.
    RotationTimer { carousel: CarouselId, timer: TimerId },
    /// Simulated contact form send finished.
    ContactSubmitted,
    /// Success message timed out; clear the form.
    ContactReset,
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                // Short poll timeout so the shutdown flag is checked often
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(event) => {
                            if let Some(app_event) = translate(event) {
                                if event_tx.send(app_event).is_err() {
                                    break;
                                }
                            }
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "terminal read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    let _ = event_tx.send(AppEvent::Tick);
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
        Event::FocusGained => Some(AppEvent::FocusGained),
        Event::FocusLost => Some(AppEvent::FocusLost),
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        Event::Paste(_) => None,
    }
}
