//! Explicit timer scheduling with cancellation handles
//!
//! All timed behavior goes through the [`Scheduler`]: the repeating boot
//! timer and the independent one-shot delays (ping response, sync
//! completion). Every scheduled task is retained as a [`TimerHandle`] so
//! teardown can abort anything still pending -- a timer can never fire
//! into a state container that no longer exists. The scheduler lives next
//! to the state container in the event loop and is cancelled both
//! explicitly on shutdown and on drop.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Cancellation handle for a scheduled task.
#[derive(Debug)]
pub struct TimerHandle {
    handle: JoinHandle<()>,
}

impl TimerHandle {
    /// Abort the task. A one-shot that already fired is unaffected; its
    /// message is either processed or dies unread with the channel.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Owns every pending timer of the application.
#[derive(Debug)]
pub struct Scheduler {
    tx: mpsc::Sender<Message>,
    boot_timer: Option<TimerHandle>,
    one_shots: Vec<TimerHandle>,
}

impl Scheduler {
    pub fn new(tx: mpsc::Sender<Message>) -> Self {
        Self {
            tx,
            boot_timer: None,
            one_shots: Vec::new(),
        }
    }

    /// Start (or restart) the repeating boot timer. Sends
    /// [`Message::BootTick`] every `interval` until cancelled.
    pub fn start_boot_timer(&mut self, interval: Duration) {
        self.cancel_boot_timer();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The zeroth tick completes immediately; the first BootTick
            // should arrive one full interval after start.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(Message::BootTick).await.is_err() {
                    break;
                }
            }
        });
        self.boot_timer = Some(TimerHandle { handle });
    }

    /// Stop the repeating boot timer if one is running.
    pub fn cancel_boot_timer(&mut self) {
        if let Some(timer) = self.boot_timer.take() {
            timer.cancel();
        }
    }

    /// Deliver `message` once after `delay`. Each call schedules an
    /// independent timer; overlapping one-shots are not coalesced.
    pub fn schedule_once(&mut self, delay: Duration, message: Message) {
        self.reap_finished();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(message).await;
        });
        self.one_shots.push(TimerHandle { handle });
    }

    /// Abort everything still pending. Called on teardown.
    pub fn cancel_all(&mut self) {
        self.cancel_boot_timer();
        for timer in self.one_shots.drain(..) {
            timer.cancel();
        }
    }

    /// Drop handles of one-shots that already fired so the list does not
    /// grow for the life of the session.
    fn reap_finished(&mut self) {
        self.one_shots.retain(|timer| !timer.is_finished());
    }

    /// Number of retained (possibly pending) timers, boot timer included.
    pub fn pending(&self) -> usize {
        self.one_shots.len() + usize::from(self.boot_timer.is_some())
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_one_shot_delivers_after_delay() {
        let (tx, mut rx) = mpsc::channel::<Message>(16);
        let mut scheduler = Scheduler::new(tx);

        scheduler.schedule_once(Duration::from_millis(400), Message::PingResponse);

        assert_eq!(rx.recv().await, Some(Message::PingResponse));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_suppresses_pending_one_shots() {
        let (tx, mut rx) = mpsc::channel::<Message>(16);
        let mut scheduler = Scheduler::new(tx);

        scheduler.schedule_once(Duration::from_secs(5), Message::PingResponse);
        scheduler.cancel_all();

        // Long past the deadline, nothing arrives.
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_boot_timer_ticks_repeatedly() {
        let (tx, mut rx) = mpsc::channel::<Message>(16);
        let mut scheduler = Scheduler::new(tx);

        scheduler.start_boot_timer(Duration::from_millis(600));

        assert_eq!(rx.recv().await, Some(Message::BootTick));
        assert_eq!(rx.recv().await, Some(Message::BootTick));
        assert_eq!(rx.recv().await, Some(Message::BootTick));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_boot_timer_stops_ticks() {
        let (tx, mut rx) = mpsc::channel::<Message>(16);
        let mut scheduler = Scheduler::new(tx);

        scheduler.start_boot_timer(Duration::from_millis(100));
        assert_eq!(rx.recv().await, Some(Message::BootTick));

        scheduler.cancel_boot_timer();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_one_shots_all_fire() {
        let (tx, mut rx) = mpsc::channel::<Message>(16);
        let mut scheduler = Scheduler::new(tx);

        scheduler.schedule_once(Duration::from_millis(100), Message::SyncCompleted);
        scheduler.schedule_once(Duration::from_millis(200), Message::SyncCompleted);

        assert_eq!(rx.recv().await, Some(Message::SyncCompleted));
        assert_eq!(rx.recv().await, Some(Message::SyncCompleted));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_timers() {
        let (tx, mut rx) = mpsc::channel::<Message>(16);
        {
            let mut scheduler = Scheduler::new(tx);
            scheduler.schedule_once(Duration::from_secs(5), Message::PingResponse);
            scheduler.start_boot_timer(Duration::from_secs(1));
        }

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }
}
