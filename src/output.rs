//! Output formatting for fetched alog lines

use crate::utils::next_token;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// A fetched line and where it sits in the index
#[derive(Debug, Clone)]
pub struct LineView {
    pub line_number: usize,
    pub text: String,
}

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print lines as `line:text`, with the timestamp and variable highlighted
pub fn print_lines(lines: &[LineView], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);
    for view in lines {
        write_line(&mut stdout, view)?;
    }
    Ok(())
}

fn write_line<W: WriteColor>(out: &mut W, view: &LineView) -> io::Result<()> {
    // Print line number
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", view.line_number)?;
    out.reset()?;
    write!(out, ":")?;

    let text = view.text.as_str();
    let mut pos = 0;
    let time = next_token(text, &mut pos).map(|t| (t, pos));
    let variable = next_token(text, &mut pos).map(|v| (v, pos));

    match (time, variable) {
        (Some((time, time_end)), Some((variable, variable_end))) => {
            let time_start = time_end - time.len();
            let variable_start = variable_end - variable.len();

            write!(out, "{}", &text[..time_start])?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, "{}", time)?;
            out.reset()?;

            write!(out, "{}", &text[time_end..variable_start])?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
            write!(out, "{}", variable)?;
            out.reset()?;

            writeln!(out, "{}", &text[variable_end..])
        }
        _ => writeln!(out, "{}", text),
    }
}

/// Print one name per line (sources or messages)
pub fn print_names(names: &[String], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);
    for name in names {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(stdout, "{}", name)?;
        stdout.reset()?;
        writeln!(stdout)?;
    }
    Ok(())
}
