use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document metadata extracted from HTML or URL input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Author>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeds: Option<Vec<Feed>>,
}

impl MetadataResult {
    // The service emits timestamps both with and without a zone designator;
    // zone-less values are taken as UTC.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.publication_date.as_deref()?;

        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }

        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::results::metadata::MetadataResult;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_published_at_parses_the_formats_the_service_emits() {
        let cases = vec![
            (
                "2016-10-04T15:58:00Z",
                Some(Utc.with_ymd_and_hms(2016, 10, 4, 15, 58, 0).unwrap()),
            ),
            (
                "2016-10-04T15:58:00+02:00",
                Some(Utc.with_ymd_and_hms(2016, 10, 4, 13, 58, 0).unwrap()),
            ),
            (
                "2016-10-04T15:58:00",
                Some(Utc.with_ymd_and_hms(2016, 10, 4, 15, 58, 0).unwrap()),
            ),
            ("a few days ago", None),
            ("", None),
        ];

        for (raw, expected) in cases {
            let metadata = MetadataResult {
                publication_date: Some(raw.to_string()),
                ..Default::default()
            };

            assert_eq!(expected, metadata.published_at(), "input: {raw}");
        }
    }

    #[test]
    fn test_published_at_is_absent_without_a_date() {
        assert_eq!(None, MetadataResult::default().published_at());
    }
}
