//! Typed CSV ingestion of the raw course dataset

use coursefinder_core::{Error, Item, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Header names the upstream dataset must carry
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Course Name",
    "University",
    "Difficulty Level",
    "Course Rating",
    "Course URL",
    "Course Description",
    "Skills",
];

#[derive(Debug, Deserialize)]
struct CourseRecord {
    #[serde(rename = "Course Name")]
    name: String,
    #[serde(rename = "University")]
    university: String,
    #[serde(rename = "Difficulty Level")]
    difficulty: String,
    #[serde(rename = "Course Rating")]
    rating: String,
    #[serde(rename = "Course URL")]
    url: String,
    #[serde(rename = "Course Description")]
    description: String,
    #[serde(rename = "Skills")]
    skills: String,
}

impl CourseRecord {
    fn into_item(self) -> Item {
        let rating = parse_rating(&self.rating);
        if rating.is_none() {
            debug!(name = %self.name, raw = %self.rating, "course has no numeric rating");
        }
        Item {
            name: self.name,
            institution: self.university,
            difficulty: self.difficulty,
            rating,
            url: self.url,
            description: self.description,
            skills: self.skills,
        }
    }
}

/// Upstream uses placeholders like `Not Calibrated` for unrated courses
fn parse_rating(raw: &str) -> Option<f32> {
    let value: f32 = raw.trim().parse().ok()?;
    value.is_finite().then(|| value.clamp(0.0, 5.0))
}

/// Read the dataset at `path`, validating headers before any row
pub fn load_courses(path: &Path) -> Result<Vec<Item>> {
    let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;
    read_courses(file, path)
}

/// Read courses from any CSV source; `path` only labels errors
pub fn read_courses<R: Read>(source: R, path: &Path) -> Result<Vec<Item>> {
    let csv_error = |e: csv::Error| Error::Csv {
        path: path.to_path_buf(),
        source: Box::new(e),
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(source);
    let headers = reader.headers().map_err(csv_error)?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(Error::DataShape {
            column: missing.to_string(),
            path: path.to_path_buf(),
        });
    }

    reader
        .deserialize::<CourseRecord>()
        .map(|record| record.map(CourseRecord::into_item).map_err(csv_error))
        .collect()
}
