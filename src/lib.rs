//! 固定容量、无序的数组袋（多重集合），以及驱动它的小型脚本语言。

pub mod array_bag;
pub mod bag_error;
pub mod bag_interface;
pub mod bag_ops;
pub mod bag_report;
pub mod bag_runner;
pub mod bag_script;

pub use array_bag::{ArrayBag, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use bag_error::{BagError, ScriptError};
pub use bag_interface::BagInterface;
