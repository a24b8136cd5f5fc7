//! 基于核心操作的集合式扩展：复制、去重、合并、拆分、众数与多重集合相等。

use log::{debug, warn};
use rand::Rng;

use crate::array_bag::ArrayBag;
use crate::bag_interface::BagInterface;

impl<T, R> ArrayBag<T, R>
where
    T: Clone + PartialEq,
    R: Rng,
{
    /// 每个条目的重数翻倍。容量不足 `2 * size` 时返回 false，袋不变。
    pub fn duplicate_all(&mut self) -> bool {
        let original = self.size();
        if original * 2 > self.capacity() {
            debug!(
                "cannot duplicate {} entries within capacity {}",
                original,
                self.capacity()
            );
            return false;
        }

        // 先拍快照，不在遍历存储的同时修改它
        for entry in self.to_vec() {
            self.add(entry);
        }
        true
    }

    /// 每个不同的值只保留一份
    pub fn remove_duplicates(&mut self) {
        let mut keep = 0;
        while keep < self.count {
            // 从末尾往前扫：交换删除搬来的条目已经比较过
            let mut probe = self.count - 1;
            while probe > keep {
                if self.slots[probe] == self.slots[keep] {
                    self.remove_at(probe);
                }
                probe -= 1;
            }
            keep += 1;
        }
    }

    /// 逐个加入 `other` 的全部条目。
    ///
    /// 中途袋满时立即停止并返回 false，已经加入的条目保留。
    pub fn add_all<B>(&mut self, other: &B) -> bool
    where
        B: BagInterface<T> + ?Sized,
    {
        let entries = other.to_vec();
        let total = entries.len();
        for (added, entry) in entries.into_iter().enumerate() {
            if !self.add(entry) {
                warn!("add_all stopped after {} of {} entries: bag is full", added, total);
                return false;
            }
        }
        true
    }

    /// 把条目分到两个袋中：前 `ceil(n/2)` 个进 `first`，其余进 `second`。
    ///
    /// 任一目标溢出时返回 false；已经分配的条目不会撤回。
    pub fn split_into<A, B>(&self, first: &mut A, second: &mut B) -> bool
    where
        A: BagInterface<T> + ?Sized,
        B: BagInterface<T> + ?Sized,
    {
        let mut front = self.to_vec();
        let back = front.split_off((front.len() + 1) / 2);

        for entry in front {
            if !first.add(entry) {
                warn!("split_into: first destination overflowed");
                return false;
            }
        }
        for entry in back {
            if !second.add(entry) {
                warn!("split_into: second destination overflowed");
                return false;
            }
        }
        true
    }

    /// 出现次数严格最多的条目。
    ///
    /// 按槽位顺序扫描不同的值：与当前最大频率持平会取消众数，之后出现更高的
    /// 频率会重新确立众数。空袋返回 None。
    pub fn mode(&self) -> Option<T> {
        let mut distinct: Vec<&T> = Vec::new();
        for entry in self.iter() {
            if !distinct.contains(&entry) {
                distinct.push(entry);
            }
        }

        let mut largest = 0;
        let mut mode = None;
        for entry in distinct {
            let frequency = self.frequency_of(entry);
            if frequency > largest {
                largest = frequency;
                mode = Some(entry);
            } else if frequency == largest {
                mode = None;
            }
        }
        mode.cloned()
    }
}

impl<T, R> ArrayBag<T, R>
where
    T: Clone + Ord,
    R: Rng,
{
    /// 多重集合相等：相同的不同值，且每个值频率相同，与槽位顺序无关
    pub fn multiset_eq<B>(&self, other: &B) -> bool
    where
        B: BagInterface<T> + ?Sized,
    {
        if self.size() != other.size() {
            return false;
        }
        let mut mine = self.to_vec();
        let mut theirs = other.to_vec();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }
}

impl<T, R, S> PartialEq<ArrayBag<T, S>> for ArrayBag<T, R>
where
    T: Clone + Ord,
    R: Rng,
    S: Rng,
{
    fn eq(&self, other: &ArrayBag<T, S>) -> bool {
        self.multiset_eq(other)
    }
}

impl<T, R> Eq for ArrayBag<T, R>
where
    T: Clone + Ord,
    R: Rng,
{
}
