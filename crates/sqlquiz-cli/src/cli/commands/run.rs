use crate::cli::args::{GlobalArgs, OutputFormat, RunArgs};
use crate::exit_codes::{self, SUCCESS};
use sqlquiz_core::report::{self, ErrorReport, RowsReport};

pub fn run(global: &GlobalArgs, args: RunArgs) -> anyhow::Result<i32> {
    let quiz = super::load_quiz(global)?;
    let sql = args.source.read()?;

    match quiz.run_query(&sql) {
        Ok(rs) => {
            match args.format {
                OutputFormat::Json => {
                    println!("{}", report::json::to_pretty(&RowsReport::new(&rs))?)
                }
                OutputFormat::Text => {
                    print!("{}", report::render_table(&rs, rs.len()));
                    println!("Rows returned: {}", rs.len());
                }
            }
            Ok(SUCCESS)
        }
        Err(e) => {
            match args.format {
                OutputFormat::Json => {
                    println!("{}", report::json::to_pretty(&ErrorReport::new(None, &e))?)
                }
                OutputFormat::Text => eprintln!("{e}"),
            }
            Ok(exit_codes::for_error(&e))
        }
    }
}
