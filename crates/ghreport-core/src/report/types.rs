//! Classified report structures
//!
//! Bucket counts are derived from the bucket lengths when serialized; they are
//! never stored next to the items.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::records::{timestamp_cell, IssueRecord, PullRequestRecord};

/// Open and resolved items of one category (bug or non-bug)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBuckets {
    pub open: Vec<IssueRecord>,
    pub resolved: Vec<IssueRecord>,
}

impl CategoryBuckets {
    pub fn open_total(&self) -> usize {
        self.open.len()
    }

    pub fn resolved_total(&self) -> usize {
        self.resolved.len()
    }

    pub fn total(&self) -> usize {
        self.open_total() + self.resolved_total()
    }
}

impl Serialize for CategoryBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CategoryBuckets", 4)?;
        s.serialize_field("aperti", &self.open)?;
        s.serialize_field("risolti", &self.resolved)?;
        s.serialize_field("totale_aperti", &self.open_total())?;
        s.serialize_field("totale_risolti", &self.resolved_total())?;
        s.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Period {
    #[serde(rename = "da")]
    pub from: String,
    #[serde(rename = "a")]
    pub to: String,
}

/// Bug/non-bug report for an organization and period
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct BugReport {
    pub bug: CategoryBuckets,
    pub non_bug: CategoryBuckets,
    #[serde(rename = "periodo")]
    pub period: Period,
}

impl BugReport {
    /// Buckets in output order, with their CSV type and state labels
    pub fn buckets(&self) -> [(&'static str, &'static str, &[IssueRecord]); 4] {
        [
            ("Bug", "Aperto", self.bug.open.as_slice()),
            ("Bug", "Risolto", self.bug.resolved.as_slice()),
            ("Non-Bug", "Aperto", self.non_bug.open.as_slice()),
            ("Non-Bug", "Risolto", self.non_bug.resolved.as_slice()),
        ]
    }

    pub fn item_count(&self) -> usize {
        self.bug.total() + self.non_bug.total()
    }
}

/// Merged pull requests split by whether changes were ever requested
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewReport {
    pub without_rejections: Vec<PullRequestRecord>,
    pub rejected_then_approved: Vec<PullRequestRecord>,
}

impl ReviewReport {
    pub fn total(&self) -> usize {
        self.without_rejections.len() + self.rejected_then_approved.len()
    }

    pub fn buckets(&self) -> [(&'static str, &[PullRequestRecord]); 2] {
        [
            ("Approvata senza bocciature", self.without_rejections.as_slice()),
            ("Bocciata e poi approvata", self.rejected_then_approved.as_slice()),
        ]
    }
}

#[derive(serde::Serialize)]
struct ReviewStats {
    senza_bocciature: usize,
    bocciate_poi_approvate: usize,
    totale: usize,
}

impl Serialize for ReviewReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let stats = ReviewStats {
            senza_bocciature: self.without_rejections.len(),
            bocciate_poi_approvate: self.rejected_then_approved.len(),
            totale: self.total(),
        };
        let mut s = serializer.serialize_struct("ReviewReport", 4)?;
        s.serialize_field("senza_bocciature", self.without_rejections.as_slice())?;
        s.serialize_field("bocciate_poi_approvate", self.rejected_then_approved.as_slice())?;
        s.serialize_field("totale", &self.total())?;
        s.serialize_field("statistiche", &stats)?;
        s.end()
    }
}

/// Flattened, one-row-per-item view of a report
pub trait TabularExport: Serialize {
    fn csv_header(&self) -> &'static [&'static str];

    fn csv_rows(&self) -> Vec<Vec<String>>;

    /// File written when CSV output is requested without a path
    fn default_csv_path(&self) -> &'static str;
}

impl TabularExport for BugReport {
    fn csv_header(&self) -> &'static [&'static str] {
        &[
            "Tipo",
            "Stato",
            "Numero",
            "Titolo",
            "Repository",
            "URL",
            "Data Creazione",
            "Data Chiusura",
            "Labels",
        ]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.item_count());
        for (kind, state, records) in self.buckets() {
            for r in records {
                rows.push(vec![
                    kind.to_string(),
                    state.to_string(),
                    r.number.to_string(),
                    r.title.clone(),
                    r.repo.clone(),
                    r.url.clone(),
                    timestamp_cell(r.created_at),
                    timestamp_cell(r.closed_at),
                    r.labels.join(", "),
                ]);
            }
        }
        rows
    }

    fn default_csv_path(&self) -> &'static str {
        "bug_results.csv"
    }
}

impl TabularExport for ReviewReport {
    fn csv_header(&self) -> &'static [&'static str] {
        &["Categoria", "Numero PR", "Titolo", "Repository", "URL", "Data Merge"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.buckets()
            .into_iter()
            .flat_map(|(category, records)| {
                records.iter().map(move |pr| {
                    vec![
                        category.to_string(),
                        pr.number.to_string(),
                        pr.title.clone(),
                        pr.repo.clone(),
                        pr.url.clone(),
                        timestamp_cell(pr.merged_at),
                    ]
                })
            })
            .collect()
    }

    fn default_csv_path(&self) -> &'static str {
        "pr_results.csv"
    }
}
