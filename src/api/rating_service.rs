use chrono::NaiveDate;
use rusqlite::{ params, OptionalExtension };
use serde_json::json;
use crate::api::models::{ AggregateRating, ApiError, Message, RatingSubmission, TopRated };
use crate::api::{ Database, Period, ResourceService };

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone)]
pub struct RatingService {
    resource_service: ResourceService,
    database: Database
}

impl RatingService {
    pub fn new(resource_service: ResourceService, database: Database) -> RatingService {
        RatingService {
            resource_service,
            database
        }
    }

    /// Appends one rating. `today` is used when the submission carries no date.
    pub fn submit_rating(&self, submission: &RatingSubmission, today: NaiveDate) -> Result<Message, ApiError> {
        if !submission.id_is_valid() {
            return Err(ApiError::Validation(self.resource_service.string("missing_cocktail_id_error_message")));
        }
        if !submission.rating_is_valid() {
            return Err(ApiError::Validation(self.resource_service.string("invalid_rating_error_message")));
        }
        let cocktail_id = submission.id.trim();
        let rated_date = submission.date.unwrap_or(today).format(DATE_FORMAT).to_string();
        self.database.lock()?.execute(
            "INSERT INTO CocktailRatings (cocktail_id, rating, rated_date) VALUES (?1, ?2, ?3)",
            params![cocktail_id, submission.rating, rated_date]
        )?;
        let message_data = &json!({ "cocktail_id": cocktail_id, "rating": submission.rating, "rated_date": rated_date });
        log::info!("{}", self.resource_service.render("rating_submitted_info_message_template", message_data));
        Ok(Message { message: self.resource_service.string("rating_saved_message") })
    }

    pub fn average_rating(&self, cocktail_id: &str) -> Result<AggregateRating, ApiError> {
        let (average, count): (Option<f64>, i64) = self.database.lock()?.query_row(
            "SELECT AVG(rating), COUNT(*) FROM CocktailRatings WHERE cocktail_id = ?1",
            params![cocktail_id],
            |row| Ok((row.get(0)?, row.get(1)?))
        )?;
        Ok(AggregateRating::from_query(average, count as u64))
    }

    /// Highest mean within the period containing `today`. Equal means go to
    /// the cocktail with more ratings, then to the lowest id.
    pub fn top_rated_for_period(&self, period: Period, today: NaiveDate) -> Result<Option<TopRated>, ApiError> {
        let (first, last) = period.bounds(today);
        let top_rated = self.database.lock()?.query_row(
            "SELECT cocktail_id, AVG(rating) AS average, COUNT(*) AS count
             FROM CocktailRatings
             WHERE rated_date BETWEEN ?1 AND ?2
             GROUP BY cocktail_id
             ORDER BY average DESC, count DESC, cocktail_id ASC
             LIMIT 1",
            params![first.format(DATE_FORMAT).to_string(), last.format(DATE_FORMAT).to_string()],
            |row| {
                let average: f64 = row.get(1)?;
                let count: i64 = row.get(2)?;
                Ok(TopRated {
                    cocktail_id: row.get(0)?,
                    rating: AggregateRating::from_query(Some(average), count as u64)
                })
            }
        ).optional()?;
        if let Some(top_rated) = &top_rated {
            let message_data = &json!({
                "period": period.to_string(),
                "cocktail_id": top_rated.cocktail_id,
                "average": top_rated.rating.average_rating.to_string(),
                "count": top_rated.rating.rating_count
            });
            log::info!("{}", self.resource_service.render("top_rated_resolved_info_message_template", message_data));
        }
        Ok(top_rated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::AverageRating;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn rating_service() -> RatingService {
        RatingService::new(ResourceService::bundled(), Database::open_in_memory().unwrap())
    }

    fn rate(rating_service: &RatingService, id: &str, rating: i64, rated_date: NaiveDate) {
        let submission = RatingSubmission { id: id.to_string(), rating, date: Some(rated_date) };
        rating_service.submit_rating(&submission, rated_date).unwrap();
    }

    #[test]
    fn unrated_cocktail_is_not_rated() {
        let rating_service = rating_service();
        assert_eq!(rating_service.average_rating("11007").unwrap(), AggregateRating::not_rated());
    }

    #[test]
    fn averages_only_the_requested_cocktail() {
        let rating_service = rating_service();
        rate(&rating_service, "A", 5, date(2024, 3, 1));
        rate(&rating_service, "A", 3, date(2024, 3, 2));
        rate(&rating_service, "B", 4, date(2024, 3, 1));
        let a = rating_service.average_rating("A").unwrap();
        assert_eq!(a.average_rating.to_string(), "4.00");
        assert_eq!(a.rating_count, 2);
        let b = rating_service.average_rating("B").unwrap();
        assert_eq!(b.average_rating.to_string(), "4.00");
        assert_eq!(b.rating_count, 1);
    }

    #[test]
    fn new_rating_is_visible_immediately() {
        let rating_service = rating_service();
        rate(&rating_service, "11007", 2, date(2024, 3, 1));
        assert_eq!(rating_service.average_rating("11007").unwrap().average_rating, AverageRating::Rated(2.0));
        rate(&rating_service, "11007", 5, date(2024, 3, 1));
        let aggregate = rating_service.average_rating("11007").unwrap();
        assert_eq!(aggregate.average_rating.to_string(), "3.50");
        assert_eq!(aggregate.rating_count, 2);
    }

    #[test]
    fn rejects_out_of_range_ratings() {
        let rating_service = rating_service();
        for rating in [0, 6, -1] {
            let submission = RatingSubmission { id: "11007".to_string(), rating, date: None };
            let error = rating_service.submit_rating(&submission, date(2024, 3, 1)).unwrap_err();
            assert!(matches!(error, ApiError::Validation(_)));
        }
        let submission = RatingSubmission { id: " ".to_string(), rating: 3, date: None };
        assert!(matches!(rating_service.submit_rating(&submission, date(2024, 3, 1)), Err(ApiError::Validation(_))));
        assert_eq!(rating_service.average_rating("11007").unwrap().rating_count, 0);
    }

    #[test]
    fn missing_date_uses_today() {
        let rating_service = rating_service();
        let submission = RatingSubmission { id: "11007".to_string(), rating: 4, date: None };
        rating_service.submit_rating(&submission, date(2024, 3, 15)).unwrap();
        let top = rating_service.top_rated_for_period(Period::Month, date(2024, 3, 20)).unwrap();
        assert_eq!(top.map(|top| top.cocktail_id), Some("11007".to_string()));
        assert_eq!(rating_service.top_rated_for_period(Period::Month, date(2024, 4, 1)).unwrap(), None);
    }

    #[test]
    fn equal_means_prefer_more_ratings() {
        let rating_service = rating_service();
        rate(&rating_service, "A", 5, date(2024, 3, 1));
        rate(&rating_service, "A", 3, date(2024, 3, 2));
        rate(&rating_service, "B", 4, date(2024, 3, 1));
        let top = rating_service.top_rated_for_period(Period::Month, date(2024, 3, 31)).unwrap().unwrap();
        assert_eq!(top.cocktail_id, "A");
        assert_eq!(top.rating.rating_count, 2);
    }

    #[test]
    fn equal_means_and_counts_prefer_lowest_id() {
        let rating_service = rating_service();
        rate(&rating_service, "17222", 4, date(2024, 3, 1));
        rate(&rating_service, "11007", 4, date(2024, 3, 2));
        let top = rating_service.top_rated_for_period(Period::Month, date(2024, 3, 10)).unwrap().unwrap();
        assert_eq!(top.cocktail_id, "11007");
    }

    #[test]
    fn month_ignores_ratings_outside_it() {
        let rating_service = rating_service();
        rate(&rating_service, "outside", 5, date(2024, 2, 29));
        rate(&rating_service, "outside", 5, date(2024, 4, 1));
        rate(&rating_service, "inside", 2, date(2024, 3, 31));
        let top = rating_service.top_rated_for_period(Period::Month, date(2024, 3, 5)).unwrap().unwrap();
        assert_eq!(top.cocktail_id, "inside");
    }

    #[test]
    fn week_on_sunday_looks_back_to_monday() {
        let rating_service = rating_service();
        // Monday 2024-03-04 through Sunday 2024-03-10
        rate(&rating_service, "this_week", 3, date(2024, 3, 4));
        rate(&rating_service, "next_week", 5, date(2024, 3, 11));
        rate(&rating_service, "last_week", 5, date(2024, 3, 3));
        let top = rating_service.top_rated_for_period(Period::Week, date(2024, 3, 10)).unwrap().unwrap();
        assert_eq!(top.cocktail_id, "this_week");
    }

    #[test]
    fn empty_period_is_none() {
        let rating_service = rating_service();
        assert_eq!(rating_service.top_rated_for_period(Period::Week, date(2024, 3, 10)).unwrap(), None);
    }
}
