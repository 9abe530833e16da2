//! Engine module: CLI plumbing, document writing and per-file conversion

pub mod arg_parser;
pub mod document;
pub mod handlers;
pub mod progress;
pub mod report;
pub mod tools;
pub mod txt_to_docx;

// Re-export commonly used functions
pub use arg_parser::{Cli, Commands, CommonArgs, ConvertArgs, UniteArgs};
pub use document::{DocxWriter, escape_xml_text, is_xml_char, render_paragraph};
pub use handlers::{convert_opts_from, handle_convert, handle_run, handle_unite, unite_opts_from};
pub use report::{ConsoleReporter, print_summary, summary_lines};
pub use tools::{has_extension, is_os_hidden_file, normalize_extension, output_path_for};
pub use txt_to_docx::{convert_file, line_paragraphs, write_document};
