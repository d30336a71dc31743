//! Simulated import payloads for each built-in data source.
//!
//! Connecting a source during the assessment does not reach any real
//! network integration; instead a representative payload is merged into
//! the session's imported-data bag so pre-population and skip logic can
//! run against realistic shapes.

use serde_json::{json, Value};

use crate::domain::foundation::SourceId;

/// Returns the simulated payload for a source, or None for sources the
/// simulation does not cover.
pub fn simulated_import(id: &SourceId) -> Option<Value> {
    let payload = match id.as_str() {
        "linkedin" => json!({
            "work_experience": [
                {
                    "company": "Meridian Labs",
                    "title": "Senior Product Manager",
                    "years": 4
                },
                {
                    "company": "Brightwave",
                    "title": "Software Engineer",
                    "years": 3
                }
            ],
            "industry": {
                "primary": "Technology/Software",
                "secondary": "Financial Services"
            },
            "skills": ["Product Management", "Data Analysis", "Team Leadership"],
            "education": [
                {
                    "school": "State University",
                    "degree": "BSc Computer Science"
                }
            ]
        }),
        "resume_upload" => json!({
            "work_experience": [
                {
                    "company": "Meridian Labs",
                    "title": "Senior Product Manager",
                    "years": 4
                }
            ],
            "education": [
                {
                    "school": "State University",
                    "degree": "BSc Computer Science"
                }
            ],
            "skills": ["Product Management", "Public Speaking"]
        }),
        "crunchbase" => json!({
            "competitors": ["Foundly", "LaunchPath", "VentureKit"],
            "funding_rounds": [
                { "stage": "Seed", "typical_raise_usd": 1_500_000 }
            ],
            "market_segment": "B2B SaaS"
        }),
        "quickbooks" => json!({
            "revenue_streams": ["Subscriptions", "Professional Services"],
            "expenses": {
                "monthly_usd": 18_500
            },
            "customers": {
                "count": 42
            }
        }),
        "google_analytics" => json!({
            "traffic": {
                "monthly_visits": 12_400
            },
            "audience": {
                "top_segment": "Early-stage founders"
            },
            "conversion_rates": {
                "signup": 0.034
            }
        }),
        _ => return None,
    };
    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::SourceRegistry;

    #[test]
    fn every_builtin_source_has_a_simulated_payload() {
        for source in SourceRegistry::builtin().list_sources() {
            assert!(
                simulated_import(&source.id).is_some(),
                "missing simulated payload for {}",
                source.id
            );
        }
    }

    #[test]
    fn unknown_source_has_no_payload() {
        let id = SourceId::new("myspace").unwrap();
        assert!(simulated_import(&id).is_none());
    }

    #[test]
    fn linkedin_payload_carries_primary_industry() {
        let id = SourceId::new("linkedin").unwrap();
        let payload = simulated_import(&id).unwrap();
        assert_eq!(
            payload["industry"]["primary"],
            Value::String("Technology/Software".to_string())
        );
    }

    #[test]
    fn payloads_are_json_objects() {
        for source in SourceRegistry::builtin().list_sources() {
            let payload = simulated_import(&source.id).unwrap();
            assert!(payload.is_object(), "{} payload must be an object", source.id);
        }
    }
}
