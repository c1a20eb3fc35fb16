// src/tui/event.rs — Terminal input, ticks and answer completions on one channel.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc;

use crate::client::AskResponse;
use crate::infra::errors::HaqooqError;

/// Drives the "Thinking..." animation.
const TICK_RATE: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub enum Event {
    Tick,
    Key(KeyEvent),
    Resize,
    /// The terminal input stream ended.
    Closed,
    /// Completion of the one outstanding request.
    Answer(Result<AskResponse, HaqooqError>),
}

pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Spawns the terminal reader task. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let reader = sender.clone();
        tokio::spawn(async move { read_terminal(reader).await });
        Self { sender, receiver }
    }

    /// Handle for tasks that report back into the loop.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    pub async fn next(&mut self) -> anyhow::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("event channel closed"))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_terminal(sender: mpsc::UnboundedSender<Event>) {
    let mut reader = EventStream::new();
    let mut tick = tokio::time::interval(TICK_RATE);
    loop {
        let tick_delay = tick.tick();
        let crossterm_event = reader.next().fuse();
        tokio::select! {
            _ = sender.closed() => break,
            _ = tick_delay => {
                let _ = sender.send(Event::Tick);
            }
            maybe = crossterm_event => match maybe {
                Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    let _ = sender.send(Event::Key(key));
                }
                Some(Ok(CrosstermEvent::Resize(..))) => {
                    let _ = sender.send(Event::Resize);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("Terminal read failed: {}", e);
                    let _ = sender.send(Event::Closed);
                    break;
                }
                None => {
                    let _ = sender.send(Event::Closed);
                    break;
                }
            },
        }
    }
}
