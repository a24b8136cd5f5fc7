use std::fmt;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bag_error::BagError;
use crate::bag_interface::BagInterface;

pub const DEFAULT_CAPACITY: usize = 25;
pub const MAX_CAPACITY: usize = 10_000;

/// 固定容量的数组袋。
///
/// 槽位 `[0, count)` 有条目，`[count, capacity)` 为空。移除使用交换删除，
/// 因此任何移除操作之后条目之间都没有顺序保证。随机移除使用构造时注入的
/// 随机数源，不会在每次调用时重新播种。
#[derive(Debug, Clone)]
pub struct ArrayBag<T, R = StdRng> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) count: usize,
    rng: R,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> ArrayBag<T, StdRng> {
    /// 使用系统熵初始化随机数源
    pub fn new(capacity: usize) -> Result<Self, BagError> {
        Self::with_rng(capacity, StdRng::from_entropy())
    }

    /// 固定种子，随机移除的结果可复现
    pub fn with_seed(capacity: usize, seed: u64) -> Result<Self, BagError> {
        Self::with_rng(capacity, StdRng::seed_from_u64(seed))
    }
}

impl<T> Default for ArrayBag<T, StdRng> {
    fn default() -> Self {
        Self {
            slots: empty_slots(DEFAULT_CAPACITY),
            count: 0,
            rng: StdRng::from_entropy(),
        }
    }
}

impl<T, R> ArrayBag<T, R> {
    pub fn with_rng(capacity: usize, rng: R) -> Result<Self, BagError> {
        if capacity == 0 {
            warn!("rejected bag with zero capacity");
            return Err(BagError::ZeroCapacity);
        }
        if capacity > MAX_CAPACITY {
            warn!("rejected bag capacity {} (max {})", capacity, MAX_CAPACITY);
            return Err(BagError::CapacityExceeded {
                requested: capacity,
                max: MAX_CAPACITY,
            });
        }

        Ok(Self {
            slots: empty_slots(capacity),
            count: 0,
            rng,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.count >= self.slots.len()
    }

    /// 按当前槽位顺序遍历已占用的条目
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.count].iter().flatten()
    }

    /// 交换删除：把最后一个条目移到 `index`，清空最后一个槽位。
    /// 索引越界（包括空袋）时返回 None。
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.count {
            return None;
        }
        let last = self.count - 1;
        self.slots.swap(index, last);
        self.count = last;
        self.slots[last].take()
    }

    fn index_of(&self, entry: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == entry)
    }
}

impl<T, R> BagInterface<T> for ArrayBag<T, R>
where
    T: Clone + PartialEq,
    R: Rng,
{
    fn size(&self) -> usize {
        self.count
    }

    fn add(&mut self, entry: T) -> bool {
        if self.is_full() {
            debug!("bag is full ({} entries), entry rejected", self.count);
            return false;
        }
        self.slots[self.count] = Some(entry);
        self.count += 1;
        true
    }

    fn remove_any(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let index = self.rng.gen_range(0..self.count);
        self.remove_at(index)
    }

    fn remove(&mut self, entry: &T) -> bool {
        match self.index_of(entry) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    fn contains(&self, entry: &T) -> bool {
        self.index_of(entry).is_some()
    }

    fn frequency_of(&self, entry: &T) -> usize {
        self.iter().filter(|candidate| *candidate == entry).count()
    }

    fn clear(&mut self) {
        while self.count > 0 {
            self.remove_at(self.count - 1);
        }
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// 仅用于诊断输出，格式：Bag{Size:3 [1] [2] [3] }
impl<T: fmt::Display, R> fmt::Display for ArrayBag<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bag{{Size:{} ", self.count)?;
        for entry in self.iter() {
            write!(f, "[{}] ", entry)?;
        }
        write!(f, "}}")
    }
}
