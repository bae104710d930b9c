use std::io::BufRead;

use anyhow::Result;

use crate::error::{LineError, ParseError};
use crate::model::event::Event;

/// Events and per-line failures from one pass over an event file.
#[derive(Debug, Default, PartialEq)]
pub struct ParsedEvents {
    pub events: Vec<Event>,
    pub errors: Vec<LineError>,
}

/// Drops everything from the first `#` on and trims the rest.
pub fn strip_comment(line: &str) -> &str {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    content.trim()
}

/// Splits a cleaned line into its date token and description.
pub fn split_line(line: &str) -> Result<(&str, &str), ParseError> {
    match line.split_once(char::is_whitespace) {
        Some((token, rest)) if !rest.trim().is_empty() => Ok((token, rest.trim())),
        _ => Err(ParseError::MalformedLine(line.to_string())),
    }
}

/// Parses one raw line. Blank and comment-only lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Event>, ParseError> {
    let line = strip_comment(line);
    if line.is_empty() {
        return Ok(None);
    }
    let (token, description) = split_line(line)?;
    Event::parse(token, description).map(Some)
}

/// Reads every line, collecting events and errors. Only I/O aborts early.
pub fn parse_events<R: BufRead>(reader: R) -> Result<ParsedEvents> {
    let mut parsed = ParsedEvents::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(event)) => parsed.events.push(event),
            Ok(None) => {}
            Err(source) => parsed.errors.push(LineError { line: idx + 1, source }),
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::date_spec::DateSpec;

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("  1990-05-17 Alice # sister  "), "1990-05-17 Alice");
        assert_eq!(strip_comment("# only a comment"), "");
        assert_eq!(strip_comment("   \t "), "");
        assert_eq!(strip_comment("05-17 Bob"), "05-17 Bob");
    }

    #[test]
    fn test_split_line() {
        assert_eq!(split_line("1990-05-17 Alice Smith").unwrap(), ("1990-05-17", "Alice Smith"));
        assert_eq!(split_line("05-17\t  Bob").unwrap(), ("05-17", "Bob"));
        assert_eq!(
            split_line("1990-05-17"),
            Err(ParseError::MalformedLine("1990-05-17".to_string()))
        );
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("   # nothing here").unwrap(), None);
        assert_eq!(
            parse_line("1990-05-17 Alice # birthday").unwrap(),
            Some(Event::new(
                "Alice".to_string(),
                DateSpec::Dated { year: 1990, month: 5, day: 17 }
            ))
        );
        assert_eq!(
            parse_line("notadate Bob"),
            Err(ParseError::MalformedDate("notadate".to_string()))
        );
    }

    #[test]
    fn test_parse_events_collects_all_errors() {
        let content = "\
# family
1990-05-17 Alice

notadate Bob
12-24 Christmas Eve
05-01
";
        let parsed = parse_events(content.as_bytes()).unwrap();
        assert_eq!(parsed.events.len(), 2);
        assert_eq!(
            parsed.errors,
            vec![
                LineError { line: 4, source: ParseError::MalformedDate("notadate".to_string()) },
                LineError { line: 6, source: ParseError::MalformedLine("05-01".to_string()) },
            ]
        );
    }

    #[test]
    fn test_parse_events_is_repeatable() {
        let content = "1990-05-17 Alice\n02-29 Leap Day\n";
        let first = parse_events(content.as_bytes()).unwrap();
        let second = parse_events(content.as_bytes()).unwrap();
        assert_eq!(first, second);
    }
}
