/* 主流程 */
use std::env;
use std::process;

use arraybag::bag_report::BagReport;
use arraybag::bag_runner::BagRunner;
use arraybag::bag_script;

fn main() {
    env_logger::init(); // 初始化日志

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <script_file> <output_file>", args[0]);
        process::exit(1);
    }

    let input_file = &args[1];
    let output_file = &args[2];

    // 解析脚本
    let statements = match bag_script::load_script(input_file) {
        Ok(statements) => statements,
        Err(e) => {
            eprintln!("Error loading script: {}", e);
            process::exit(1);
        }
    };

    // 依次执行命令
    let mut runner = BagRunner::new();
    let results = match runner.run(&statements) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error running script: {}", e);
            process::exit(1);
        }
    };

    // 把结果写回脚本副本
    let report = match BagReport::from_file(input_file) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error loading script file: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = report.generate_with_results(&results, output_file) {
        eprintln!("Error writing annotated script: {}", e);
        process::exit(1);
    }

    println!("Annotated script has been saved to {}", output_file);
}
