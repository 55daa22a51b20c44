use serde::{Deserialize, Serialize};

/// Riders ranked below this in a non-participation class do not qualify.
const QUALIFYING_RANK: u32 = 8;

/// Qualification status as Sqorz reports it. Codes outside 1..=3 are kept
/// as `Other` and never qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum SeriesStatus {
    Unqualified,
    SemiQualified,
    Qualified,
    Other(u8),
}

impl From<u8> for SeriesStatus {
    fn from(value: u8) -> Self {
        match value {
            1 => SeriesStatus::Unqualified,
            2 => SeriesStatus::SemiQualified,
            3 => SeriesStatus::Qualified,
            other => SeriesStatus::Other(other),
        }
    }
}

impl From<SeriesStatus> for u8 {
    fn from(status: SeriesStatus) -> Self {
        match status {
            SeriesStatus::Unqualified => 1,
            SeriesStatus::SemiQualified => 2,
            SeriesStatus::Qualified => 3,
            SeriesStatus::Other(code) => code,
        }
    }
}

// Response from GET /series/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesResponse {
    #[serde(rename = "seriesId", default)]
    pub series_id: Option<String>,
    #[serde(rename = "seriesDescription")]
    pub series_description: SeriesDescription,
    #[serde(rename = "seriesRankClasses", default)]
    pub series_rank_classes: Vec<SqorzSeriesClass>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesDescription {
    #[serde(rename = "seriesName")]
    pub series_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqorzSeriesClass {
    #[serde(rename = "className")]
    pub class_name: String,
    #[serde(rename = "participationOnly", default)]
    pub participation_only: bool,
    #[serde(rename = "seriesRankCompetitors", default)]
    pub series_rank_competitors: Vec<SeriesCompetitor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesCompetitor {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "seriesQualificationStatus")]
    pub series_qualification_status: SeriesStatus,
    #[serde(rename = "seriesRank")]
    pub series_rank: u32,
}

impl SqorzSeriesClass {
    fn qualifies(&self, rider: &SeriesCompetitor) -> bool {
        rider.series_qualification_status == SeriesStatus::Qualified
            && (self.participation_only || rider.series_rank <= QUALIFYING_RANK)
    }

    /// Qualified riders in rank order. Ranked classes are renumbered 1..N;
    /// participation-only classes keep the series rank.
    pub fn qualified_riders(&self) -> Vec<QualifiedRider> {
        let mut riders: Vec<&SeriesCompetitor> = self
            .series_rank_competitors
            .iter()
            .filter(|r| self.qualifies(r))
            .collect();
        riders.sort_by_key(|r| r.series_rank);

        riders
            .into_iter()
            .enumerate()
            .map(|(i, r)| QualifiedRider {
                first_name: r.first_name.clone(),
                last_name: r.last_name.clone(),
                rank: if self.participation_only {
                    r.series_rank
                } else {
                    i as u32 + 1
                },
            })
            .collect()
    }

    pub fn to_class_result(&self) -> SeriesClassResult {
        SeriesClassResult {
            class_name: self.class_name.clone(),
            qualified_riders: self.qualified_riders(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesResult {
    pub id: String,
    pub name: String,
    pub classes: Vec<SeriesClassResult>,
}

impl SeriesResult {
    pub fn from_response(id: &str, response: &SeriesResponse) -> Self {
        Self {
            id: id.to_string(),
            name: response.series_description.series_name.clone(),
            classes: response
                .series_rank_classes
                .iter()
                .map(|c| c.to_class_result())
                .collect(),
        }
    }

    pub fn rider_count(&self) -> usize {
        self.classes.iter().map(|c| c.qualified_riders.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesClassResult {
    pub class_name: String,
    pub qualified_riders: Vec<QualifiedRider>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualifiedRider {
    pub first_name: String,
    pub last_name: String,
    pub rank: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rider(first: &str, status: u8, rank: u32) -> SeriesCompetitor {
        SeriesCompetitor {
            first_name: first.to_string(),
            last_name: "Rider".to_string(),
            series_qualification_status: SeriesStatus::from(status),
            series_rank: rank,
        }
    }

    fn class(participation_only: bool, riders: Vec<SeriesCompetitor>) -> SqorzSeriesClass {
        SqorzSeriesClass {
            class_name: "Boys 10".to_string(),
            participation_only,
            series_rank_competitors: riders,
        }
    }

    #[test]
    fn test_ranked_class_is_renumbered() {
        let c = class(
            false,
            vec![
                rider("C", 3, 5),
                rider("A", 3, 1),
                rider("B", 2, 2), // semi-qualified
                rider("D", 3, 9), // outside the top 8
            ],
        );
        let riders = c.qualified_riders();
        let got: Vec<(&str, u32)> = riders.iter().map(|r| (r.first_name.as_str(), r.rank)).collect();
        assert_eq!(got, vec![("A", 1), ("C", 2)]);
    }

    #[test]
    fn test_participation_class_keeps_series_rank() {
        let c = class(true, vec![rider("Z", 3, 12), rider("Y", 3, 4), rider("X", 1, 1)]);
        let riders = c.qualified_riders();
        let got: Vec<(&str, u32)> = riders.iter().map(|r| (r.first_name.as_str(), r.rank)).collect();
        assert_eq!(got, vec![("Y", 4), ("Z", 12)]);
    }

    #[test]
    fn test_parse_series_response() {
        let json = r#"{"seriesId": "abc","seriesDescription": {"seriesName": "Winter Series"},"seriesRankClasses": [{"className": "Sprockets","participationOnly": true,"seriesRankCompetitors": [{"firstName": "Sam","lastName": "Jones","seriesQualificationStatus": 3,"seriesRank": 2}]}]}"#;
        let resp: SeriesResponse = serde_json::from_str(json).expect("Failed to parse series test JSON");
        let result = SeriesResult::from_response("abc", &resp);
        assert_eq!(result.name, "Winter Series");
        assert_eq!(result.classes.len(), 1);
        assert_eq!(result.rider_count(), 1);
        assert_eq!(result.classes[0].qualified_riders[0].rank, 2);
    }

    #[test]
    fn test_unknown_status_excludes_only_that_rider() {
        let json = r#"{"seriesDescription": {"seriesName": "Summer Series"},"seriesRankClasses": [{"className": "Girls 12","participationOnly": false,"seriesRankCompetitors": [{"firstName": "Ava","lastName": "Reid","seriesQualificationStatus": 3,"seriesRank": 2},{"firstName": "Mia","lastName": "Shaw","seriesQualificationStatus": 0,"seriesRank": 1}]}]}"#;
        let resp: SeriesResponse = serde_json::from_str(json).expect("Failed to parse series test JSON");
        assert_eq!(
            resp.series_rank_classes[0].series_rank_competitors[1].series_qualification_status,
            SeriesStatus::Other(0)
        );

        let result = SeriesResult::from_response("s-2", &resp);
        let riders = &result.classes[0].qualified_riders;
        assert_eq!(riders.len(), 1);
        assert_eq!(riders[0].first_name, "Ava");
        assert_eq!(riders[0].rank, 1);
    }
}
