#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const HEADER: &str =
    "Course Name,University,Difficulty Level,Course Rating,Course URL,Course Description,Skills";

/// Small catalog with one near-duplicate pair and unrelated courses
pub const ROWS: &[&str] = &[
    "Intro to Python,University of Michigan,Beginner,4.8,https://example.org/py,\"Learn Python programming: variables, loops and functions\",\"python, programming\"",
    "Intro to Python Programming,Rice University,Beginner,4.6,https://example.org/py2,\"Learn Python programming: variables, loops, functions and files\",\"python, programming\"",
    "Advanced Opera History,Yale University,Advanced,4.2,https://example.org/opera,\"Arias, librettos and composers of the nineteenth century\",\"music, musicology\"",
    "Data Visualization,Duke University,Beginner,4.5,https://example.org/viz,\"Charts and dashboards for data storytelling\",\"data visualization, tableau\"",
    "Big Data Engineering,UC San Diego,Intermediate,4.3,https://example.org/bigdata,\"Pipelines with Spark and Hadoop\",\"data engineering, spark\"",
    "Spreadsheet Skills,Macquarie University,Beginner,Not Calibrated,https://example.org/xl,\"Organise DATA in tables and pivot them\",\"excel\"",
    "Intro to Python,Duplicate University,Mixed,3.9,https://example.org/dup,\"Gardening for beginners\",\"plants\"",
];

pub fn dataset_csv() -> String {
    let mut csv = String::from(HEADER);
    for row in ROWS {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

pub fn write_dataset(dir: &Path) -> PathBuf {
    let path = dir.join("Coursera.csv");
    std::fs::write(&path, dataset_csv()).unwrap();
    path
}
