/// 袋（多重集合）的能力接口。
///
/// `ArrayBag::split_into` 和 `ArrayBag::add_all` 只通过这个接口访问另一个袋，
/// 不依赖具体的存储方式。
pub trait BagInterface<T> {
    /// 当前条目数
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// 添加一个条目，袋满时返回 false 且不做任何修改
    fn add(&mut self, entry: T) -> bool;

    /// 随机移除一个条目，空袋返回 None
    fn remove_any(&mut self) -> Option<T>;

    /// 移除一个与 `entry` 相等的条目，找到并移除时返回 true
    fn remove(&mut self, entry: &T) -> bool;

    fn contains(&self, entry: &T) -> bool;

    fn frequency_of(&self, entry: &T) -> usize;

    /// 移除全部条目
    fn clear(&mut self);

    /// 按当前槽位顺序复制出所有条目
    fn to_vec(&self) -> Vec<T>;
}
