//! Text input protocol
//!
//! ```text
//! <test cases>
//! <cars> <events>                                  per test case
//! <car> <catalog price> <pick-up fee> <cost per km>    one line per car
//! <time> <customer> <p|r|a> <car | distance | severity>  one line per event
//! ```
//!
//! Blank lines are ignored. Counts are checked against [`ValidationLimits`] here; field values
//! are checked by the validators when a [`TestCase`] is loaded into a service.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::{Bounds, ValidationLimits};
use crate::types::*;

/// Fleet and event log of one test case, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub cars: Vec<Car>,
    pub events: Vec<Event>,
}

struct Line<'a> {
    number: usize,
    tokens: Vec<&'a str>,
}

impl<'a> Line<'a> {
    fn expect_tokens(&self, count: usize, what: &str) -> RentalResult<()> {
        if self.tokens.len() != count {
            return Err(parse_error(
                self.number,
                format!(
                    "{} expects {} fields, found {}",
                    what,
                    count,
                    self.tokens.len()
                ),
            ));
        }
        Ok(())
    }

    fn number_at<T: FromStr>(&self, index: usize, field: &str) -> RentalResult<T> {
        let token = self.tokens[index];
        token.parse().map_err(|_| {
            parse_error(self.number, format!("{} '{}' is not a valid number", field, token))
        })
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> RentalError {
    RentalError::Parse {
        line,
        message: message.into(),
    }
}

fn check_count(line: &Line<'_>, field: &str, value: u64, bounds: Bounds) -> RentalResult<()> {
    if bounds.contains(value) {
        Ok(())
    } else {
        Err(parse_error(
            line.number,
            format!(
                "{} must be >= {} and <= {}, got {}",
                field, bounds.min, bounds.max, value
            ),
        ))
    }
}

/// Parse every test case from the input text
pub fn parse_input(input: &str, limits: &ValidationLimits) -> RentalResult<Vec<TestCase>> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(idx, text)| Line {
            number: idx + 1,
            tokens: text.split_whitespace().collect(),
        })
        .filter(|line| !line.tokens.is_empty());

    let last_line = input.lines().count().max(1);
    let mut next_line = |what: &str| {
        lines
            .next()
            .ok_or_else(|| parse_error(last_line, format!("unexpected end of input, expected {}", what)))
    };

    let header = next_line("number of test cases")?;
    header.expect_tokens(1, "test case count")?;
    let case_count: u64 = header.number_at(0, "number of test cases")?;
    check_count(&header, "number of test cases", case_count, limits.test_cases)?;

    let mut cases = Vec::with_capacity(case_count as usize);
    for _ in 0..case_count {
        let sizes = next_line("car and event counts")?;
        sizes.expect_tokens(2, "test case header")?;
        let car_count: u64 = sizes.number_at(0, "number of cars")?;
        let event_count: u64 = sizes.number_at(1, "number of rental events")?;
        check_count(&sizes, "number of cars", car_count, limits.cars)?;
        check_count(&sizes, "number of rental events", event_count, limits.events)?;

        let mut case = TestCase::default();
        for _ in 0..car_count {
            case.cars.push(parse_car(&next_line("a car")?)?);
        }
        for _ in 0..event_count {
            case.events.push(parse_event(&next_line("an event")?)?);
        }
        cases.push(case);
    }

    if let Some(extra) = lines.next() {
        return Err(parse_error(extra.number, "unexpected input after the last test case"));
    }

    Ok(cases)
}

fn parse_car(line: &Line<'_>) -> RentalResult<Car> {
    line.expect_tokens(4, "car")?;
    Ok(Car::new(
        line.tokens[0],
        line.number_at(1, "car catalog price")?,
        line.number_at(2, "car pick-up price")?,
        line.number_at(3, "car price per km")?,
    ))
}

fn parse_event(line: &Line<'_>) -> RentalResult<Event> {
    line.expect_tokens(4, "event")?;
    let time: u64 = line.number_at(0, "event time")?;
    let customer = line.tokens[1];

    let kind = EventKind::from_code(line.tokens[2]).ok_or_else(|| {
        parse_error(
            line.number,
            format!(
                "invalid event type '{}', expected 'p', 'r' or 'a'",
                line.tokens[2]
            ),
        )
    })?;

    let event = match kind {
        EventKind::PickUp => Event::pick_up(time, customer, line.tokens[3]),
        EventKind::Return => Event::return_car(time, customer, line.number_at(3, "distance driven")?),
        EventKind::Accident => Event::accident(time, customer, line.number_at(3, "severity")?),
    };
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "2
1 3
tesla 1000 50 2
0 ann p tesla
1 ann a 10
2 ann r 30

0 1
5 bob r 5
";

    #[test]
    fn test_parse_sample() {
        let cases = parse_input(SAMPLE, &ValidationLimits::default()).unwrap();
        assert_eq!(cases.len(), 2);

        assert_eq!(cases[0].cars, vec![Car::new("tesla", 1000, 50, 2)]);
        assert_eq!(
            cases[0].events,
            vec![
                Event::pick_up(0, "ann", "tesla"),
                Event::accident(1, "ann", 10),
                Event::return_car(2, "ann", 30),
            ]
        );

        assert!(cases[1].cars.is_empty());
        assert_eq!(cases[1].events, vec![Event::return_car(5, "bob", 5)]);
    }

    #[test]
    fn test_invalid_event_type() {
        let err = parse_input("1\n0 1\n0 ann x tesla\n", &ValidationLimits::default()).unwrap_err();
        match err {
            RentalError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("invalid event type"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_distance() {
        let err = parse_input("1\n0 1\n0 ann r far\n", &ValidationLimits::default()).unwrap_err();
        assert!(matches!(err, RentalError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_truncated_input() {
        let err = parse_input("1\n1 2\ntesla 1 1 1\n0 ann p tesla\n", &ValidationLimits::default())
            .unwrap_err();
        assert!(matches!(err, RentalError::Parse { .. }));
        assert!(err.to_string().contains("unexpected end of input"));
    }

    #[test]
    fn test_test_case_count_out_of_range() {
        let err = parse_input("0\n", &ValidationLimits::default()).unwrap_err();
        assert!(matches!(err, RentalError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_input("1\n1 0\ntesla 1000 50\n", &ValidationLimits::default()).unwrap_err();
        assert!(matches!(err, RentalError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_trailing_input_rejected() {
        let err = parse_input("1\n0 0\n0 ann r 1\n", &ValidationLimits::default()).unwrap_err();
        assert!(matches!(err, RentalError::Parse { line: 3, .. }));
    }
}
