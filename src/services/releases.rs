use chrono::{Datelike, Month, Weekday};

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, MonthCount, WeekdayCount},
};

const SPANISH_MONTHS: [(&str, Month); 12] = [
    ("enero", Month::January),
    ("febrero", Month::February),
    ("marzo", Month::March),
    ("abril", Month::April),
    ("mayo", Month::May),
    ("junio", Month::June),
    ("julio", Month::July),
    ("agosto", Month::August),
    ("septiembre", Month::September),
    ("octubre", Month::October),
    ("noviembre", Month::November),
    ("diciembre", Month::December),
];

// Accents are stripped before lookup
const SPANISH_WEEKDAYS: [(&str, Weekday); 7] = [
    ("lunes", Weekday::Mon),
    ("martes", Weekday::Tue),
    ("miercoles", Weekday::Wed),
    ("jueves", Weekday::Thu),
    ("viernes", Weekday::Fri),
    ("sabado", Weekday::Sat),
    ("domingo", Weekday::Sun),
];

fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

/// Parses a month name in Spanish or English
pub fn parse_month(name: &str) -> AppResult<Month> {
    let key = normalize(name);
    SPANISH_MONTHS
        .iter()
        .find(|(spanish, _)| *spanish == key)
        .map(|(_, month)| *month)
        .or_else(|| key.parse::<Month>().ok())
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid month: {}", name.trim())))
}

/// Parses a weekday name in Spanish (accents optional) or English
pub fn parse_weekday(name: &str) -> AppResult<Weekday> {
    let key = normalize(name);
    SPANISH_WEEKDAYS
        .iter()
        .find(|(spanish, _)| *spanish == key)
        .map(|(_, day)| *day)
        .or_else(|| key.parse::<Weekday>().ok())
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid weekday: {}", name.trim())))
}

/// Counts movies released in the named month, across all years
pub fn count_by_month(catalog: &Catalog, month_name: &str) -> AppResult<MonthCount> {
    let month = parse_month(month_name)?;
    let count = catalog
        .movies()
        .iter()
        .filter_map(|m| m.release_date)
        .filter(|date| date.month() == month.number_from_month())
        .count();

    Ok(MonthCount {
        month: month_name.trim().to_lowercase(),
        count,
    })
}

/// Counts movies released on the named weekday
pub fn count_by_weekday(catalog: &Catalog, day_name: &str) -> AppResult<WeekdayCount> {
    let weekday = parse_weekday(day_name)?;
    let count = catalog
        .movies()
        .iter()
        .filter_map(|m| m.release_date)
        .filter(|date| date.weekday() == weekday)
        .count();

    Ok(WeekdayCount {
        day: day_name.trim().to_lowercase(),
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Movie;
    use chrono::NaiveDate;

    fn dated(title: &str, y: i32, m: u32, d: u32) -> Movie {
        Movie::new(title, "Drama", 6.0).with_release_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            // 1995-10-30 is a Monday
            dated("Toy Story", 1995, 10, 30),
            dated("Heat", 1995, 12, 15),
            dated("GoldenEye", 1995, 11, 16),
            dated("Balto", 1995, 12, 22),
            Movie::new("Undated", "Drama", 5.0),
        ])
    }

    #[test]
    fn test_parse_month_spanish_and_english() {
        assert_eq!(parse_month("Diciembre").unwrap(), Month::December);
        assert_eq!(parse_month("  enero ").unwrap(), Month::January);
        assert_eq!(parse_month("march").unwrap(), Month::March);
        assert!(matches!(parse_month("brumaire"), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_weekday_ignores_accents() {
        assert_eq!(parse_weekday("miércoles").unwrap(), Weekday::Wed);
        assert_eq!(parse_weekday("MIERCOLES").unwrap(), Weekday::Wed);
        assert_eq!(parse_weekday("Sábado").unwrap(), Weekday::Sat);
        assert_eq!(parse_weekday("friday").unwrap(), Weekday::Fri);
        assert!(parse_weekday("someday").is_err());
    }

    #[test]
    fn test_count_by_month() {
        let catalog = sample_catalog();
        let result = count_by_month(&catalog, "Diciembre").unwrap();
        assert_eq!(result.month, "diciembre");
        assert_eq!(result.count, 2);
        assert_eq!(count_by_month(&catalog, "enero").unwrap().count, 0);
    }

    #[test]
    fn test_count_by_weekday() {
        let catalog = sample_catalog();
        assert_eq!(count_by_weekday(&catalog, "lunes").unwrap().count, 1);
        // 1995-12-15 and 1995-12-22 are Fridays
        assert_eq!(count_by_weekday(&catalog, "viernes").unwrap().count, 2);
    }

    #[test]
    fn test_invalid_names_rejected() {
        let catalog = sample_catalog();
        assert!(count_by_month(&catalog, "").is_err());
        assert!(count_by_weekday(&catalog, "caturday").is_err());
    }
}
