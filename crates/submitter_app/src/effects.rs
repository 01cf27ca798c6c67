use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use rand::Rng;
use submitter_core::{Effect, Msg, FINALIZE_HOLD_MS, MAX_TICK_STEP, TICK_INTERVAL_MS};
use submitter_engine::{EngineEvent, EngineHandle, SubmitSettings};

pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    ticker_running: Arc<AtomicBool>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: SubmitSettings) -> Self {
        let runner = Self {
            engine: EngineHandle::new(settings),
            msg_tx,
            ticker_running: Arc::new(AtomicBool::new(false)),
        };
        runner.spawn_event_loop();
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartTicker => self.start_ticker(),
                Effect::StopTicker => self.ticker_running.store(false, Ordering::Relaxed),
                Effect::BeginSubmission { email, file } => {
                    log::info!(
                        "BeginSubmission path={} media_type={:?}",
                        file.path,
                        file.media_type
                    );
                    self.engine.submit(email, file.path, file.media_type);
                }
                Effect::ScheduleFinalizeHold => {
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(Duration::from_millis(FINALIZE_HOLD_MS));
                        let _ = msg_tx.send(Msg::FinalizeHoldElapsed);
                    });
                }
            }
        }
    }

    fn start_ticker(&self) {
        // Already running: the submission was restarted before StopTicker.
        if self.ticker_running.swap(true, Ordering::Relaxed) {
            return;
        }
        let running = self.ticker_running.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || {
            let mut rng = rand::thread_rng();
            while running.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
                let step = rng.gen_range(1..=MAX_TICK_STEP);
                if msg_tx.send(Msg::Tick { step }).is_err() {
                    break;
                }
            }
        });
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::Settled(outcome) => {
                        log::info!("settled ok={} message={}", outcome.ok, outcome.message);
                        let _ = msg_tx.send(Msg::SubmissionSettled {
                            ok: outcome.ok,
                            message: outcome.message,
                        });
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}
