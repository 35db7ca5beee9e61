use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT, SIGQUIT)
    Shutdown,
    /// Reading the terminal failed; the reader thread has stopped.
    Error(io::Error),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        let shutdown_flag = Arc::new(AtomicBool::new(false));
        for signal in signal_hook::consts::TERM_SIGNALS {
            if let Err(err) = signal_hook::flag::register(*signal, Arc::clone(&shutdown_flag)) {
                tracing::warn!("Failed to register handler for signal {}: {}", signal, err);
            }
        }

        thread::Builder::new()
            .name("tally-events".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if shutdown_flag.load(Ordering::Relaxed) {
                        let _ = tx.send(AppEvent::Shutdown);
                        break;
                    }

                    // Short poll timeout so the shutdown flag is checked often
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    let forwarded = match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                            Ok(Event::Mouse(mouse)) => tx.send(AppEvent::Mouse(mouse)),
                            Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!("Terminal event read failed: {}", err);
                                let _ = tx.send(AppEvent::Error(err));
                                break;
                            }
                        },
                        Ok(false) => Ok(()),
                        Err(err) => {
                            tracing::error!("Terminal event poll failed: {}", err);
                            let _ = tx.send(AppEvent::Error(err));
                            break;
                        }
                    };

                    // Receiver gone: the UI loop has exited
                    if forwarded.is_err() {
                        break;
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })?;

        Ok(Self { rx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
