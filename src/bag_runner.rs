use std::collections::HashMap;

use log::{debug, info};

use crate::array_bag::ArrayBag;
use crate::bag_error::ScriptError;
use crate::bag_interface::BagInterface;
use crate::bag_script::{Command, Statement, Value};

/// 按名字管理一组袋，逐条执行脚本命令
pub struct BagRunner {
    bags: HashMap<String, ArrayBag<Value>>,
    // 之后创建的袋依次使用 seed, seed + 1, ...
    next_seed: u64,
}

impl Default for BagRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn flag(value: bool) -> String {
    value.to_string()
}

fn optional(value: Option<Value>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

impl BagRunner {
    pub fn new() -> Self {
        BagRunner {
            bags: HashMap::new(),
            next_seed: 0,
        }
    }

    pub fn bag(&self, name: &str) -> Option<&ArrayBag<Value>> {
        self.bags.get(name)
    }

    fn lookup(&self, line: usize, name: &str) -> Result<&ArrayBag<Value>, ScriptError> {
        self.bags.get(name).ok_or_else(|| ScriptError::UnknownBag {
            line,
            name: name.to_string(),
        })
    }

    fn lookup_mut(&mut self, line: usize, name: &str) -> Result<&mut ArrayBag<Value>, ScriptError> {
        self.bags.get_mut(name).ok_or_else(|| ScriptError::UnknownBag {
            line,
            name: name.to_string(),
        })
    }

    fn take(&mut self, line: usize, name: &str) -> Result<ArrayBag<Value>, ScriptError> {
        self.bags.remove(name).ok_or_else(|| ScriptError::UnknownBag {
            line,
            name: name.to_string(),
        })
    }

    /// 执行一条命令，返回结果文本
    pub fn execute(&mut self, statement: &Statement) -> Result<String, ScriptError> {
        let line = statement.line;
        debug!("line {}: {}", line, statement.text);

        let result = match &statement.command {
            Command::Seed(seed) => {
                self.next_seed = *seed;
                format!("seed {}", seed)
            }
            Command::Create { name, capacity } => {
                if self.bags.contains_key(name) {
                    return Err(ScriptError::DuplicateBag {
                        line,
                        name: name.clone(),
                    });
                }
                let bag = ArrayBag::with_seed(*capacity, self.next_seed)
                    .map_err(|source| ScriptError::Bag { line, source })?;
                self.next_seed = self.next_seed.wrapping_add(1);
                self.bags.insert(name.clone(), bag);
                format!("created (capacity {})", capacity)
            }
            Command::Add { bag, values } => {
                let target = self.lookup_mut(line, bag)?;
                let added = values.iter().filter(|value| target.add(**value)).count();
                format!("added {} of {}", added, values.len())
            }
            Command::Remove { bag, value } => flag(self.lookup_mut(line, bag)?.remove(value)),
            Command::RemoveAny { bag } => optional(self.lookup_mut(line, bag)?.remove_any()),
            Command::Clear { bag } => {
                self.lookup_mut(line, bag)?.clear();
                "cleared".to_string()
            }
            Command::Contains { bag, value } => flag(self.lookup(line, bag)?.contains(value)),
            Command::Count { bag, value } => self.lookup(line, bag)?.frequency_of(value).to_string(),
            Command::Size { bag } => self.lookup(line, bag)?.size().to_string(),
            Command::Show { bag } => self.lookup(line, bag)?.to_string(),
            Command::Duplicate { bag } => flag(self.lookup_mut(line, bag)?.duplicate_all()),
            Command::Dedup { bag } => {
                let target = self.lookup_mut(line, bag)?;
                target.remove_duplicates();
                format!("size {}", target.size())
            }
            Command::Mode { bag } => optional(self.lookup(line, bag)?.mode()),
            Command::Merge { dest, src } => {
                // 源袋可以就是目标袋，先拍快照
                let source = self.lookup(line, src)?.clone();
                flag(self.lookup_mut(line, dest)?.add_all(&source))
            }
            Command::Split { src, first, second } => {
                if src == first || src == second || first == second {
                    return Err(ScriptError::AliasedBags {
                        line,
                        command: "split".to_string(),
                    });
                }
                self.lookup(line, src)?;
                let mut first_bag = self.take(line, first)?;
                let mut second_bag = match self.take(line, second) {
                    Ok(bag) => bag,
                    Err(e) => {
                        self.bags.insert(first.clone(), first_bag);
                        return Err(e);
                    }
                };
                let ok = self
                    .lookup(line, src)
                    .map(|source| source.split_into(&mut first_bag, &mut second_bag));
                self.bags.insert(first.clone(), first_bag);
                self.bags.insert(second.clone(), second_bag);
                flag(ok?)
            }
            Command::Equals { left, right } => {
                flag(self.lookup(line, left)? == self.lookup(line, right)?)
            }
        };

        Ok(result)
    }

    /// 批量执行，返回 (行号, 结果)
    pub fn run(&mut self, statements: &[Statement]) -> Result<Vec<(usize, String)>, ScriptError> {
        let results = statements
            .iter()
            .map(|statement| Ok((statement.line, self.execute(statement)?)))
            .collect::<Result<Vec<_>, ScriptError>>()?;
        info!("executed {} commands across {} bags", results.len(), self.bags.len());
        Ok(results)
    }
}
