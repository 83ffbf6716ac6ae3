use crate::collect::JobRole;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

/// One successfully scraped job posting. Immutable once created; postings
/// with an empty skill set are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub job_role: JobRole,
    pub company: String,
    pub title: String,
    pub skills: BTreeSet<String>,
}

#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Csv(csv::Error),
    Skills(serde_json::Error),
    UnknownRole(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(err) => write!(f, "failed to access postings file: {}", err),
            DatasetError::Csv(err) => write!(f, "invalid postings CSV: {}", err),
            DatasetError::Skills(err) => write!(f, "unparseable skills column: {}", err),
            DatasetError::UnknownRole(label) => {
                write!(f, "unknown job_role label '{}'", label)
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(err) => Some(err),
            DatasetError::Csv(err) => Some(err),
            DatasetError::Skills(err) => Some(err),
            DatasetError::UnknownRole(_) => None,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Skills(err)
    }
}

#[derive(Debug, Serialize)]
struct PostingRow<'a> {
    job_role: &'a str,
    company: &'a str,
    title: &'a str,
    skills: String,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    job_role: String,
    company: String,
    title: String,
    skills: String,
}

/// The `skills` cell is a JSON array of strings so the column re-parses into
/// a native list; plain UTF-8 keeps the Korean labels intact.
pub fn write_postings<W: Write>(writer: W, postings: &[Posting]) -> Result<(), DatasetError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for posting in postings {
        let skills: Vec<&str> = posting.skills.iter().map(String::as_str).collect();
        csv_writer.serialize(PostingRow {
            job_role: posting.job_role.label(),
            company: &posting.company,
            title: &posting.title,
            skills: serde_json::to_string(&skills)?,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_postings_to_path<P: AsRef<Path>>(
    path: P,
    postings: &[Posting],
) -> Result<(), DatasetError> {
    let file = std::fs::File::create(path)?;
    write_postings(file, postings)
}

pub fn read_postings<R: Read>(reader: R) -> Result<Vec<Posting>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut postings = Vec::new();

    for record in csv_reader.deserialize::<RawRow>() {
        let row = record?;
        let job_role = JobRole::from_label(&row.job_role)
            .ok_or_else(|| DatasetError::UnknownRole(row.job_role.clone()))?;
        let skills: Vec<String> = serde_json::from_str(&row.skills)?;

        postings.push(Posting {
            job_role,
            company: row.company,
            title: row.title,
            skills: skills.into_iter().collect(),
        });
    }

    Ok(postings)
}

/// A missing input file is fatal for the analysis run, surfaced as `Io`.
pub fn read_postings_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Posting>, DatasetError> {
    let file = std::fs::File::open(path)?;
    read_postings(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_posting() -> Posting {
        Posting {
            job_role: JobRole::ServerDeveloper,
            company: "원티드랩".to_string(),
            title: "백엔드 엔지니어 (신입)".to_string(),
            skills: ["Spring Boot", "Java", "MySQL"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    #[test]
    fn postings_round_trip_through_csv() {
        let postings = vec![
            sample_posting(),
            Posting {
                job_role: JobRole::DataScientist,
                company: "N/A".to_string(),
                title: "데이터 사이언티스트".to_string(),
                skills: ["Python", "Pandas", "R"]
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            },
        ];

        let mut buffer = Vec::new();
        write_postings(&mut buffer, &postings).expect("write succeeds");
        let restored = read_postings(buffer.as_slice()).expect("read succeeds");

        assert_eq!(restored, postings);
    }

    #[test]
    fn skills_cell_parses_back_into_a_list() {
        let mut buffer = Vec::new();
        write_postings(&mut buffer, &[sample_posting()]).expect("write succeeds");

        let mut csv_reader = csv::Reader::from_reader(buffer.as_slice());
        let record = csv_reader
            .records()
            .next()
            .expect("one row")
            .expect("valid row");
        let parsed: Vec<String> = serde_json::from_str(&record[3]).expect("json list");
        assert_eq!(parsed, vec!["Java", "MySQL", "Spring Boot"]);
    }

    #[test]
    fn unknown_role_label_is_rejected() {
        let csv = "job_role,company,title,skills\n기획자,A,B,\"[]\"\n";
        let error = read_postings(csv.as_bytes()).expect_err("expected unknown role");
        assert!(matches!(error, DatasetError::UnknownRole(label) if label == "기획자"));
    }

    #[test]
    fn missing_input_file_propagates_io_error() {
        let error =
            read_postings_from_path("./does-not-exist.csv").expect_err("expected io error");
        match error {
            DatasetError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
