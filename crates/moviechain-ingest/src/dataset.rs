//! Raw dataset row model and cleaning.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use moviechain_core::{Actor, Movie};

/// Partition name for rows without a usable release date.
pub const FALLBACK_PARTITION: &str = "undated";

// The export predates cinema-era sanity checks; anything outside this
// window is treated as an unusable date.
const MIN_RELEASE_YEAR: i32 = 1880;
const MAX_RELEASE_YEAR: i32 = 2100;

/// One row of the dataset, reduced to the columns the graph needs.
///
/// The raw export carries dozens of columns; serde ignores the ones not
/// listed here. List-valued columns (`genres`, `cast`) arrive
/// comma-joined and are split on access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRow {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub popularity: f64,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub poster_path: String,
    #[serde(default)]
    pub cast: String,
}

impl MovieRow {
    /// Credited actor names, trimmed and normalized, empties dropped.
    pub fn cast_names(&self) -> Vec<String> {
        self.cast
            .split(',')
            .map(Actor::key)
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn genre_list(&self) -> Vec<String> {
        self.genres
            .split(',')
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .collect()
    }

    /// Decade partition key (`"1990s"`), or `None` when the release
    /// date has no parseable year in the plausible range.
    pub fn decade(&self) -> Option<String> {
        let date = NaiveDate::parse_from_str(self.release_date.trim(), "%Y-%m-%d").ok()?;
        let year = date.year();
        if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
            return None;
        }
        Some(format!("{}s", year / 10 * 10))
    }

    /// Project the row into the graph node model.
    pub fn to_movie(&self) -> Movie {
        Movie {
            id: self.id,
            title: self.title.trim().to_string(),
            overview: non_empty(&self.overview),
            release_date: non_empty(&self.release_date),
            popularity: self.popularity,
            genres: self.genre_list(),
            poster_path: non_empty(&self.poster_path),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The export writes absent numbers as empty strings and occasionally
/// uses thousands separators; treat anything unparseable or negative
/// as zero instead of failing the row.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return Ok(0.0);
    }
    Ok(cleaned.parse::<f64>().unwrap_or(0.0).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(release_date: &str) -> MovieRow {
        MovieRow {
            id: 1,
            title: "Heat".to_string(),
            release_date: release_date.to_string(),
            overview: String::new(),
            popularity: 0.0,
            genres: "Crime, Drama".to_string(),
            poster_path: String::new(),
            cast: "Al Pacino, Robert De Niro, ,  Val Kilmer ".to_string(),
        }
    }

    #[test]
    fn decade_buckets_by_release_year() {
        assert_eq!(row("1995-12-15").decade().as_deref(), Some("1990s"));
        assert_eq!(row("2000-01-01").decade().as_deref(), Some("2000s"));
    }

    #[test]
    fn unusable_dates_have_no_decade() {
        assert_eq!(row("").decade(), None);
        assert_eq!(row("not-a-date").decade(), None);
        assert_eq!(row("1995").decade(), None);
        assert_eq!(row("1601-01-01").decade(), None);
    }

    #[test]
    fn cast_names_are_trimmed_and_non_empty() {
        assert_eq!(
            row("1995-12-15").cast_names(),
            vec!["Al Pacino", "Robert De Niro", "Val Kilmer"]
        );
    }

    #[test]
    fn projection_turns_blanks_into_none() {
        let movie = row("").to_movie();
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.overview, None);
        assert_eq!(movie.genres, vec!["Crime", "Drama"]);
    }
}
