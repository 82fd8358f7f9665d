use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::SegmentIndex;

/// "Хвост" подсветки: недавно пройденные сегменты, самый свежий — последний.
///
/// Чисто визуальная вещь, на выбор победителя никак не влияет.
/// Длина никогда не превышает `capacity` (= количество сегментов).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trail {
    segments: VecDeque<SegmentIndex>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            segments: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Добавить сегмент в конец. При переполнении выкидываем самый старый.
    pub fn push(&mut self, segment: SegmentIndex) {
        self.segments.push_back(segment);
        while self.segments.len() > self.capacity {
            self.segments.pop_front();
        }
    }

    /// Срезать `n` самых старых записей (сколько есть).
    pub fn trim_oldest(&mut self, n: usize) {
        let n = n.min(self.segments.len());
        self.segments.drain(..n);
    }

    /// Схлопнуть хвост до одного сегмента (финальный кадр спина).
    pub fn collapse_to(&mut self, segment: SegmentIndex) {
        self.segments.clear();
        self.segments.push_back(segment);
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Самый свежий сегмент (голова кометы).
    pub fn head(&self) -> Option<SegmentIndex> {
        self.segments.back().copied()
    }

    /// Позиция сегмента в хвосте (0 — самый старый). Первое вхождение.
    pub fn position_of(&self, segment: SegmentIndex) -> Option<usize> {
        self.segments.iter().position(|&s| s == segment)
    }

    pub fn snapshot(&self) -> Vec<SegmentIndex> {
        self.segments.iter().copied().collect()
    }
}
