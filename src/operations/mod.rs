// Operations module - the probe run itself
pub mod report;

pub use report::{ReportRunner, render_value, report_line, run, write_endpoint_list};
