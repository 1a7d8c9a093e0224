use std::collections::BTreeMap;
use std::time::Duration;

/// 一次性計時器事件；`mount` 指向排程當下的頁面實例
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    ClearAlert { mount: u64, generation: u64 },
    RevealSkills { mount: u64 },
}

/// 模擬時鐘：只有呼叫 `advance` 時時間才會前進
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    next_seq: u64,
    timers: BTreeMap<(Duration, u64), TimerEvent>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        let due = self.now + delay;
        let seq = self.next_seq;
        self.next_seq += 1;
        tracing::trace!("Timer {:?} scheduled at {:?}", event, due);
        self.timers.insert((due, seq), event);
    }

    /// 前進 `by`，依到期順序回傳所有到期事件
    pub fn advance(&mut self, by: Duration) -> Vec<TimerEvent> {
        self.now += by;

        let mut fired = Vec::new();
        while let Some((&(due, _), _)) = self.timers.first_key_value() {
            if due > self.now {
                break;
            }
            if let Some((_, event)) = self.timers.pop_first() {
                fired.push(event);
            }
        }
        fired
    }
}
