/// Parsing of user-supplied arguments.
///
/// Everything the CLI (or any other front end) receives as text passes
/// through here before reaching the predictors and scorers. Failures are
/// `ClimateError::InvalidArgument` naming the offending parameter.

use crate::model::ClimateError;

/// Parses a comma-separated year list such as `"2030, 2050,2100"`.
///
/// Blank entries are skipped; any other non-integer entry rejects the whole
/// list.
pub fn parse_years(text: &str) -> Result<Vec<i32>, ClimateError> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| ClimateError::invalid("years", s, "expected an integer year"))
        })
        .collect()
}

/// Parses a finite floating-point value for the parameter `name`.
pub fn parse_number(name: &str, text: &str) -> Result<f64, ClimateError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ClimateError::invalid(name, text, "expected a number"))?;

    if !value.is_finite() {
        return Err(ClimateError::invalid(name, text, "must be finite"));
    }
    Ok(value)
}

/// Trims city names and drops blanks. An empty result is rejected.
pub fn parse_city_list<S: AsRef<str>>(items: &[S]) -> Result<Vec<String>, ClimateError> {
    let cities: Vec<String> = items
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if cities.is_empty() {
        return Err(ClimateError::invalid("cities", "", "No cities provided"));
    }
    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_years() {
        assert_eq!(parse_years("2030, 2050,2100"), Ok(vec![2030, 2050, 2100]));
        assert_eq!(parse_years("2050"), Ok(vec![2050]));
        assert_eq!(parse_years("2030,,2050,"), Ok(vec![2030, 2050]));
        assert_eq!(parse_years(""), Ok(vec![]));
    }

    #[test]
    fn test_parse_years_rejects_non_integers() {
        match parse_years("2030, soon") {
            Err(ClimateError::InvalidArgument { name, value, .. }) => {
                assert_eq!(name, "years");
                assert_eq!(value, "soon");
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        assert!(parse_years("2030.5").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("rainfall", "12.5"), Ok(12.5));
        assert_eq!(parse_number("rainfall", " 0 "), Ok(0.0));
        assert_eq!(parse_number("elevation", "-3"), Ok(-3.0));
        assert!(parse_number("rainfall", "heavy").is_err());
        assert!(parse_number("rainfall", "NaN").is_err(), "NaN must be rejected");
        assert!(parse_number("rainfall", "inf").is_err(), "infinity must be rejected");
    }

    #[test]
    fn test_parse_city_list() {
        assert_eq!(
            parse_city_list(&[" Miami ", "", "Tokyo"]),
            Ok(vec!["Miami".to_string(), "Tokyo".to_string()])
        );
    }

    #[test]
    fn test_empty_city_list_is_rejected() {
        let empty: [&str; 0] = [];
        let err = parse_city_list(&empty).unwrap_err();
        assert!(err.to_string().contains("No cities provided"), "message was: {}", err);
        assert!(parse_city_list(&["  "]).is_err());
    }
}
