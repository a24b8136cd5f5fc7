use thiserror::Error;

/// 构造袋时的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BagError {
    #[error("attempt to create a bag whose capacity {requested} exceeds allowed maximum {max}")]
    CapacityExceeded { requested: usize, max: usize },

    #[error("bag capacity must be at least 1")]
    ZeroCapacity,
}

/// 脚本加载与执行时的错误
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: unknown bag '{name}'")]
    UnknownBag { line: usize, name: String },

    #[error("line {line}: bag '{name}' already exists")]
    DuplicateBag { line: usize, name: String },

    #[error("line {line}: bags passed to '{command}' must be distinct")]
    AliasedBags { line: usize, command: String },

    #[error("invalid command pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("line {line}: {source}")]
    Bag {
        line: usize,
        #[source]
        source: BagError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
