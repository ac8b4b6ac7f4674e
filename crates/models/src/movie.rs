use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Movie attributes accepted on create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieData {
    pub hall: String,
    pub title: String,
    pub description: Option<String>,
    /// Duration in minutes
    pub duration: i32,
    pub start_time: NaiveDate,
}

/// Search filters for movies. Filters combine with OR: a movie matches when
/// it satisfies any supplied filter, and an empty filter set matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub hall: Option<String>,
    pub duration: Option<i32>,
    pub start_time: Option<NaiveDate>,
}

impl MovieFilter {
    /// Builds a filter from raw query input, treating blank strings as absent.
    pub fn new(
        title: Option<String>,
        hall: Option<String>,
        duration: Option<i32>,
        start_time: Option<NaiveDate>,
    ) -> Self {
        Self {
            title: normalize(title),
            hall: normalize(hall),
            duration,
            start_time,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.hall.is_none()
            && self.duration.is_none()
            && self.start_time.is_none()
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::MovieFilter;

    #[test]
    fn test_movie_filter_trims_and_drops_blanks() {
        let filter = MovieFilter::new(Some("  Matrix ".to_owned()), Some("  ".to_owned()), None, None);
        assert_eq!(filter.title.as_deref(), Some("Matrix"));
        assert_eq!(filter.hall, None);
    }

    #[test]
    fn test_movie_filter_is_empty() {
        assert!(MovieFilter::new(None, None, None, None).is_empty());
        assert!(MovieFilter::new(Some(String::new()), Some("   ".to_owned()), None, None).is_empty());
        assert!(!MovieFilter::new(None, None, Some(148), None).is_empty());
    }
}
