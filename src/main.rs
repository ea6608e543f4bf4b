use std::env;
use std::process;

use anyhow::Result;
use nbayes::classifiers::NaiveBayes;
use nbayes::core::DataSet;
use nbayes::evaluation::evaluate;

const USAGE: &str = "\
The program requires exactly 2 arguments:
1st argument: the path to the train data file
2nd argument: the path to the test data file";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let [train_path, test_path] = args.as_slice() else {
        eprintln!("{USAGE}");
        process::exit(1);
    };

    let train_set = DataSet::from_file(train_path)?;
    let test_set = DataSet::from_file(test_path)?;

    let model = NaiveBayes::fit(&train_set)?;
    for line in model.probability_report() {
        println!("{line}");
    }

    println!("{}", evaluate(&model, &train_set)?.report("training"));
    println!("{}", evaluate(&model, &test_set)?.report("test"));
    Ok(())
}
