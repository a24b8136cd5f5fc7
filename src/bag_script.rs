use std::fs;

use ordered_float::NotNan;
use regex::Regex;

use crate::array_bag::DEFAULT_CAPACITY;
use crate::bag_error::ScriptError;

/// 脚本中的条目值
pub type Value = NotNan<f64>;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Seed(u64),
    Create { name: String, capacity: usize },
    Add { bag: String, values: Vec<Value> },
    Remove { bag: String, value: Value },
    RemoveAny { bag: String },
    Clear { bag: String },
    Contains { bag: String, value: Value },
    Count { bag: String, value: Value },
    Size { bag: String },
    Show { bag: String },
    Duplicate { bag: String },
    Dedup { bag: String },
    Mode { bag: String },
    Merge { dest: String, src: String },
    Split { src: String, first: String, second: String },
    Equals { left: String, right: String },
}

/// 带行号的一条命令
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub line: usize,
    pub text: String,
    pub command: Command,
}

struct Grammar {
    statement: Regex,
    name: Regex,
}

impl Grammar {
    fn new() -> Result<Self, ScriptError> {
        Ok(Grammar {
            statement: Regex::new(r"^(?P<op>[a-z][a-z-]*)(?:\s+(?P<args>.+))?$")?,
            name: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")?,
        })
    }
}

struct LineParser<'a> {
    grammar: &'a Grammar,
    line: usize,
    op: &'a str,
    args: Vec<&'a str>,
}

impl<'a> LineParser<'a> {
    fn error(&self, message: impl Into<String>) -> ScriptError {
        ScriptError::Parse {
            line: self.line,
            message: message.into(),
        }
    }

    fn arity(&self, expected: usize) -> Result<(), ScriptError> {
        if self.args.len() != expected {
            return Err(self.error(format!(
                "'{}' takes {} argument(s), got {}",
                self.op,
                expected,
                self.args.len()
            )));
        }
        Ok(())
    }

    fn name(&self, index: usize) -> Result<String, ScriptError> {
        let raw = self.args[index];
        if !self.grammar.name.is_match(raw) {
            return Err(self.error(format!("invalid bag name '{}'", raw)));
        }
        Ok(raw.to_string())
    }

    fn value(&self, raw: &str) -> Result<Value, ScriptError> {
        let number = raw
            .parse::<f64>()
            .map_err(|_| self.error(format!("invalid value '{}'", raw)))?;
        NotNan::new(number).map_err(|_| self.error("NaN is not a valid entry"))
    }

    fn single_bag(&self) -> Result<String, ScriptError> {
        self.arity(1)?;
        self.name(0)
    }

    fn bag_and_value(&self) -> Result<(String, Value), ScriptError> {
        self.arity(2)?;
        Ok((self.name(0)?, self.value(self.args[1])?))
    }

    fn command(&self) -> Result<Command, ScriptError> {
        let command = match self.op {
            "seed" => {
                self.arity(1)?;
                let seed = self.args[0]
                    .parse::<u64>()
                    .map_err(|_| self.error(format!("invalid seed '{}'", self.args[0])))?;
                Command::Seed(seed)
            }
            "bag" => {
                let capacity = match self.args.len() {
                    1 => DEFAULT_CAPACITY,
                    2 => self.args[1]
                        .parse::<usize>()
                        .map_err(|_| self.error(format!("invalid capacity '{}'", self.args[1])))?,
                    _ => return Err(self.error("'bag' takes a name and an optional capacity")),
                };
                Command::Create {
                    name: self.name(0)?,
                    capacity,
                }
            }
            "add" => {
                if self.args.len() < 2 {
                    return Err(self.error("'add' takes a bag name and at least one value"));
                }
                let values = self.args[1..]
                    .iter()
                    .map(|raw| self.value(raw))
                    .collect::<Result<_, _>>()?;
                Command::Add {
                    bag: self.name(0)?,
                    values,
                }
            }
            "remove" => {
                let (bag, value) = self.bag_and_value()?;
                Command::Remove { bag, value }
            }
            "contains" => {
                let (bag, value) = self.bag_and_value()?;
                Command::Contains { bag, value }
            }
            "count" => {
                let (bag, value) = self.bag_and_value()?;
                Command::Count { bag, value }
            }
            "remove-any" => Command::RemoveAny { bag: self.single_bag()? },
            "clear" => Command::Clear { bag: self.single_bag()? },
            "size" => Command::Size { bag: self.single_bag()? },
            "show" => Command::Show { bag: self.single_bag()? },
            "duplicate" => Command::Duplicate { bag: self.single_bag()? },
            "dedup" => Command::Dedup { bag: self.single_bag()? },
            "mode" => Command::Mode { bag: self.single_bag()? },
            "merge" => {
                self.arity(2)?;
                Command::Merge {
                    dest: self.name(0)?,
                    src: self.name(1)?,
                }
            }
            "split" => {
                self.arity(3)?;
                Command::Split {
                    src: self.name(0)?,
                    first: self.name(1)?,
                    second: self.name(2)?,
                }
            }
            "equals" => {
                self.arity(2)?;
                Command::Equals {
                    left: self.name(0)?,
                    right: self.name(1)?,
                }
            }
            other => return Err(self.error(format!("unsupported command '{}'", other))),
        };
        Ok(command)
    }
}

/// 解析脚本文本，空行和 `#` 注释行被跳过
pub fn parse_script(source: &str) -> Result<Vec<Statement>, ScriptError> {
    let grammar = Grammar::new()?;
    let mut statements = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let captures = grammar
            .statement
            .captures(text)
            .ok_or_else(|| ScriptError::Parse {
                line,
                message: format!("malformed command '{}'", text),
            })?;
        let op = captures.name("op").map_or("", |m| m.as_str());
        let args: Vec<&str> = captures
            .name("args")
            .map(|m| m.as_str().split_whitespace().collect())
            .unwrap_or_default();

        let parser = LineParser {
            grammar: &grammar,
            line,
            op,
            args,
        };
        statements.push(Statement {
            line,
            text: text.to_string(),
            command: parser.command()?,
        });
    }
    Ok(statements)
}

pub fn load_script(file_path: &str) -> Result<Vec<Statement>, ScriptError> {
    let content = fs::read_to_string(file_path)?;
    parse_script(&content)
}
