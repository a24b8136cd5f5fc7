use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, Write};

pub struct BagReport {
    pub original_lines: Vec<String>, // 原始脚本的内容
}

impl BagReport {
    /// 从文件加载原始脚本
    pub fn from_file(file_path: &str) -> io::Result<Self> {
        let file = File::open(file_path)?;
        let reader = io::BufReader::new(file);

        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(BagReport {
            original_lines: lines,
        })
    }

    pub fn from_source(source: &str) -> Self {
        BagReport {
            original_lines: source.lines().map(str::to_string).collect(),
        }
    }

    /// 在每条命令后面追加执行结果，其他行原样保留
    pub fn annotate(&self, results: &[(usize, String)]) -> Vec<String> {
        let by_line: HashMap<usize, &str> = results
            .iter()
            .map(|(line, result)| (*line, result.as_str()))
            .collect();

        self.original_lines
            .iter()
            .enumerate()
            .map(|(index, line)| match by_line.get(&(index + 1)) {
                Some(result) => format!("{}  # => {}", line.trim_end(), result),
                None => line.clone(),
            })
            .collect()
    }

    pub fn generate_with_results(
        &self,
        results: &[(usize, String)],
        output_path: &str,
    ) -> io::Result<()> {
        let mut file = File::create(output_path)?;
        for annotated in self.annotate(results) {
            writeln!(file, "{}", annotated)?;
        }
        Ok(())
    }
}
