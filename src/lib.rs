#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Program,
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorTip},
    },
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::check_program,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A location in a source file: byte offset, 1-based line and file name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, file: Rc<String>) -> Self {
        Position { offset, line, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Lexes, parses and checks `source` in one go.
///
/// Front-end failures are returned as `Err`; semantic problems never are, they
/// are collected into the returned [`Diagnostics`] alongside the annotated tree.
pub fn check_source(source: &str, file: &str) -> Result<(Program, Diagnostics), Error> {
    let file = Rc::new(String::from(file));
    let tokens = tokenize(String::from(source), Some(file.to_string()))?;
    let mut program = parse(tokens, Rc::clone(&file))?;

    let mut diagnostics = Diagnostics::new();
    check_program(&mut program, &mut diagnostics);

    Ok((program, diagnostics))
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. Offsets past the end of the source land on
/// the end of the last line (end-of-file errors point there).
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;
    let mut last = None;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        last = Some((index + 1, line.to_string(), line.trim_end_matches('\n').len()));
        start = end;
    }

    last
}

/// Renders a front-end error with the offending source line underlined.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnexpectedToken (Unexpected token: `;`, did you miss a semicolon?)
        -> program.expr
           |
         3 | var a int = ;
           | ------------^
    */

    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("-> {}:{}\n", file, error.get_position().line));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().offset) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}
