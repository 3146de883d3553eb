//! Season CSV loader with encoding and delimiter auto-detection.
//!
//! Turns a football-data style file into validated [`MatchRecord`]s.
//! Columns are read by position:
//!
//! ```text
//!  0 Season   1 Date   2 HomeTeam  3 AwayTeam
//!  4 FTHG     5 FTAG   6 FTR
//!  7 HTHG     8 HTAG   9 HTR
//! 10 HS      11 AS    12 HST      13 AST      (14, 15 ignored)
//! 16 HF      17 AF    18 HY       19 AY       20 HR   21 AR
//! ```

use chrono::NaiveDate;
use std::path::Path;

use crate::api::logs::{log_info_indent, log_success};
use crate::models::{MatchRecord, MatchResult};
use crate::validation::validate_match;

/// Minimum number of columns in a match row.
pub const EXPECTED_COLUMNS: usize = 22;

/// Date layout used by the season files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV loading error with context
#[derive(Debug, Clone)]
pub struct CsvError {
    pub line: usize,
    pub column: Option<String>,
    pub value: Option<String>,
    pub message: String,
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.column, &self.value) {
            (Some(col), Some(val)) => {
                write!(
                    f,
                    "Line {}, column '{}' (value '{}'): {}",
                    self.line, col, val, self.message
                )
            }
            (Some(col), None) => {
                write!(f, "Line {}, column '{}': {}", self.line, col, self.message)
            }
            _ if self.line == 0 => write!(f, "{}", self.message),
            _ => {
                write!(f, "Line {}: {}", self.line, self.message)
            }
        }
    }
}

impl std::error::Error for CsvError {}

impl CsvError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column: None,
            value: None,
            message: message.into(),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
///
/// Unknown encodings fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        // windows-1252 agrees with Latin-1 on every printable code point
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Detect the delimiter by counting occurrences in the first line
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Load and validate every match in a season file.
///
/// # Example
/// ```ignore
/// let matches = load_matches("data/epl_2023_2024.csv")?;
/// println!("Loaded {} matches", matches.len());
/// ```
pub fn load_matches<P: AsRef<Path>>(path: P) -> Result<Vec<MatchRecord>, CsvError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| CsvError::new(0, format!("Cannot read file '{}': {}", path.display(), e)))?;

    let matches = parse_bytes(&bytes)?;
    log_success(format!("Loaded {} matches from {}", matches.len(), path.display()));
    Ok(matches)
}

/// Parse season CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<MatchRecord>, CsvError> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = detect_delimiter(&content);

    log_info_indent(
        format!(
            "Encoding: {}, delimiter: '{}'",
            encoding,
            format_delimiter(delimiter)
        ),
        1,
    );

    parse_str(&content, delimiter)
}

/// Parse season CSV text with an explicit delimiter.
///
/// The first line is the header and is skipped. Blank lines are ignored.
pub fn parse_str(content: &str, delimiter: char) -> Result<Vec<MatchRecord>, CsvError> {
    let delimiter = u8::try_from(delimiter)
        .map_err(|_| CsvError::new(0, format!("Unsupported delimiter '{}'", delimiter)))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut matches = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line() as usize).unwrap_or(idx + 2);
            CsvError::new(line, format!("Invalid CSV format: {}", e))
        })?;

        // +1 for 0-index, +1 for header
        let line = record.position().map(|p| p.line() as usize).unwrap_or(idx + 2);
        let fields: Vec<&str> = record.iter().collect();

        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }

        let parsed = parse_match_row(&fields, line)?;
        validate_match(&parsed).map_err(|errors| CsvError::new(line, errors.join("; ")))?;
        matches.push(parsed);
    }

    if matches.is_empty() {
        return Err(CsvError::new(0, "CSV file is empty or contains only headers"));
    }

    Ok(matches)
}

/// Convert one positional row into a [`MatchRecord`].
pub fn parse_match_row(fields: &[&str], line: usize) -> Result<MatchRecord, CsvError> {
    if fields.len() < EXPECTED_COLUMNS {
        return Err(CsvError::new(
            line,
            format!("Expected {} columns, got {}", EXPECTED_COLUMNS, fields.len()),
        ));
    }

    let count = |idx: usize, column: &str| -> Result<u32, CsvError> {
        fields[idx].parse::<u32>().map_err(|_| {
            CsvError::new(line, "must be a non-negative integer")
                .with_column(column)
                .with_value(fields[idx])
        })
    };

    let result = |idx: usize, column: &str| -> Result<MatchResult, CsvError> {
        MatchResult::from_code(fields[idx]).ok_or_else(|| {
            CsvError::new(line, "must be one of H, A, D")
                .with_column(column)
                .with_value(fields[idx])
        })
    };

    let date = NaiveDate::parse_from_str(fields[1], DATE_FORMAT).map_err(|e| {
        CsvError::new(line, format!("Invalid date format: {}", e))
            .with_column("Date")
            .with_value(fields[1])
    })?;

    Ok(MatchRecord {
        season: fields[0].to_string(),
        date,
        home_team: fields[2].to_string(),
        away_team: fields[3].to_string(),
        full_time_home_goals: count(4, "FullTimeHomeGoals")?,
        full_time_away_goals: count(5, "FullTimeAwayGoals")?,
        full_time_result: result(6, "FullTimeResult")?,
        half_time_home_goals: count(7, "HalfTimeHomeGoals")?,
        half_time_away_goals: count(8, "HalfTimeAwayGoals")?,
        half_time_result: result(9, "HalfTimeResult")?,
        home_shots: count(10, "HomeShots")?,
        away_shots: count(11, "AwayShots")?,
        home_shots_on_target: count(12, "HomeShotsOnTarget")?,
        away_shots_on_target: count(13, "AwayShotsOnTarget")?,
        home_fouls: count(16, "HomeFouls")?,
        away_fouls: count(17, "AwayFouls")?,
        home_yellow_cards: count(18, "HomeYellowCards")?,
        away_yellow_cards: count(19, "AwayYellowCards")?,
        home_red_cards: count(20, "HomeRedCards")?,
        away_red_cards: count(21, "AwayRedCards")?,
    })
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}
