//! Timer group types.

/// Timer of a timer group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum TimerIdx {
    /// Timer 0 of the group.
    Timer0 = 0,
    /// Timer 1 of the group.
    Timer1 = 1,
}

impl TimerIdx {
    /// Number of timers in a group.
    pub const COUNT: usize = 2;

    /// Get the timer index (0..2)
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(n: usize) -> Option<Self> {
        match n {
            0 => Some(TimerIdx::Timer0),
            1 => Some(TimerIdx::Timer1),
            _ => None,
        }
    }
}

/// Timer counter run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum TimerStart {
    /// Counter paused.
    #[default]
    Pause = 0,
    /// Counter running.
    Start = 1,
}

impl From<bool> for TimerStart {
    fn from(run: bool) -> Self {
        if run {
            TimerStart::Start
        } else {
            TimerStart::Pause
        }
    }
}

impl From<TimerStart> for bool {
    fn from(state: TimerStart) -> Self {
        state == TimerStart::Start
    }
}
