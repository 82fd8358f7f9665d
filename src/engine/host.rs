//! Контракт колбэков между движком и хостом (рендер, звук).
//!
//! Движок сам ничего не рисует: он отдаёт кадры и дёргает эти методы.

use crate::domain::{Frame, SegmentIndex};
use crate::engine::errors::HostError;

/// Колбэки колеса.
pub trait SpinHost {
    /// Нарисовать кадр. Вызывается на каждом шаге и один раз для финального кадра.
    fn draw_frame(&mut self, frame: &Frame) -> Result<(), HostError>;

    /// Щелчок трещотки на каждом шаге. Fire-and-forget.
    fn play_tick(&mut self) {}

    /// Спин закончен: один раз, после финального кадра.
    fn on_spin_complete(&mut self, _winning_segment: SegmentIndex) {}
}

/// Колбэк шаффлера: показать очередное значение.
pub trait ShuffleHost<T> {
    fn display_shuffle_value(&mut self, value: &T) -> Result<(), HostError>;
}

/// Хост, который всё молча проглатывает.
#[derive(Clone, Debug, Default)]
pub struct NoopHost;

impl SpinHost for NoopHost {
    fn draw_frame(&mut self, _frame: &Frame) -> Result<(), HostError> {
        Ok(())
    }
}

impl<T> ShuffleHost<T> for NoopHost {
    fn display_shuffle_value(&mut self, _value: &T) -> Result<(), HostError> {
        Ok(())
    }
}

/// Простой хост, который всё записывает. Удобно для тестов и dev-CLI.
#[derive(Clone, Debug)]
pub struct RecordingHost<T = u32> {
    pub frames: Vec<Frame>,
    pub ticks: usize,
    pub completed: Vec<SegmentIndex>,
    pub shuffle_values: Vec<T>,
    /// Если задано — `draw_frame` упадёт на кадре с этим номером (0-based).
    pub fail_on_frame: Option<usize>,
}

impl<T> Default for RecordingHost<T> {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            ticks: 0,
            completed: Vec::new(),
            shuffle_values: Vec::new(),
            fail_on_frame: None,
        }
    }
}

impl<T> RecordingHost<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on_frame(index: usize) -> Self {
        Self {
            fail_on_frame: Some(index),
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl<T> SpinHost for RecordingHost<T> {
    fn draw_frame(&mut self, frame: &Frame) -> Result<(), HostError> {
        if self.fail_on_frame == Some(self.frames.len()) {
            return Err(HostError::new(format!("кадр {} не нарисован", self.frames.len())));
        }
        self.frames.push(frame.clone());
        Ok(())
    }

    fn play_tick(&mut self) {
        self.ticks += 1;
    }

    fn on_spin_complete(&mut self, winning_segment: SegmentIndex) {
        self.completed.push(winning_segment);
    }
}

impl<T: Clone> ShuffleHost<T> for RecordingHost<T> {
    fn display_shuffle_value(&mut self, value: &T) -> Result<(), HostError> {
        self.shuffle_values.push(value.clone());
        Ok(())
    }
}
