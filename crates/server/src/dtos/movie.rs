use chrono::NaiveDate;
use models::movie::{MovieData, MovieFilter};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    pub id: String,
    pub hall: String,
    pub title: String,
    pub description: Option<String>,
    pub duration: i32,
    pub start_time: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MovieRequest {
    pub hall: String,
    pub title: String,
    pub description: Option<String>,
    pub duration: i32,
    pub start_time: NaiveDate,
}

impl From<MovieRequest> for MovieData {
    fn from(request: MovieRequest) -> Self {
        MovieData {
            hall: request.hall,
            title: request.title,
            description: request.description,
            duration: request.duration,
            start_time: request.start_time,
        }
    }
}

/// Movie search filters; any one of them is enough for a movie to match
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct MovieSearchParams {
    pub title: Option<String>,
    pub hall: Option<String>,
    pub duration: Option<i32>,
    pub start_time: Option<NaiveDate>,
}

impl MovieSearchParams {
    pub fn into_filter(self) -> MovieFilter {
        MovieFilter::new(self.title, self.hall, self.duration, self.start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::MovieSearchParams;

    #[test]
    fn test_blank_params_normalize_to_empty_filter() {
        let params = MovieSearchParams {
            title: Some("  ".to_owned()),
            hall: Some(String::new()),
            duration: None,
            start_time: None,
        };
        assert!(params.into_filter().is_empty());
    }
}
