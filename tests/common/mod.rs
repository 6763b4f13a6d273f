#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const BODY: &str = "WASHINGTON (Reuters) - The head of a conservative Republican faction in the \
                        U.S. Congress, who voted this month for a huge expansion of the national debt, \
                        said on Sunday he would urge budget restraint.";

/// Article body that is unique per index and comfortably above the default minimum
pub fn body(i: usize) -> String {
    format!("{BODY} Item number {i} in the series.")
}

pub fn headline(i: usize) -> String {
    format!("Headline number {i} about the budget")
}

/// Write a Kaggle-shaped CSV (title,text,subject,date)
pub fn write_kaggle_csv(path: &Path, rows: &[(String, String)]) {
    let mut wtr = csv::Writer::from_path(path).unwrap();
    wtr.write_record(["title", "text", "subject", "date"]).unwrap();
    for (title, text) in rows {
        wtr.write_record([title.as_str(), text.as_str(), "politicsNews", "December 31, 2017 "])
            .unwrap();
    }
    wtr.flush().unwrap();
}

pub fn numbered_rows(range: std::ops::Range<usize>) -> Vec<(String, String)> {
    range.map(|i| (headline(i), body(i))).collect()
}

/// A CSV whose second data row has an extra field
pub fn write_malformed_csv(path: &Path) {
    let content = format!(
        "title,text,subject,date\n\"{}\",\"{}\",politicsNews,2017\n\"{}\",\"{}\",politicsNews,2017,extra\n",
        headline(1),
        body(1),
        headline(2),
        body(2)
    );
    fs::write(path, content).unwrap();
}

pub fn read_lines(path: &Path) -> Vec<serde_json::Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}
