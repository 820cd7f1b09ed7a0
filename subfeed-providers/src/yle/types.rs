//! Yle Areena response payloads

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Canonical outlet id carried on publication events; only events on this
/// service make a program watchable in Areena.
pub const AREENA_SERVICE_ID: &str = "yle-areena";

/// Every Yle endpoint wraps its payload in a `data` field.
#[derive(Debug, Clone, Deserialize)]
pub struct YleEnvelope<T> {
    pub data: T,
}

/// Localized text; the Finnish variant is the one the catalog keys on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YleLocalized {
    #[serde(default)]
    pub fi: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YleImage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub available: bool,
}

impl YleImage {
    /// Image URL derived from the image id via the fixed CDN template.
    /// Unavailable images (or images without an id) yield none.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        if !self.available {
            return None;
        }
        self.id
            .as_ref()
            .map(|id| format!("http://images.cdn.yle.fi/image/upload/{id}.jpg"))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YleSeason {
    #[serde(default)]
    pub season_number: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YleSeries {
    pub id: String,
    #[serde(default)]
    pub title: YleLocalized,
    #[serde(default)]
    pub image: Option<YleImage>,
    #[serde(default)]
    pub season: Option<Vec<YleSeason>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YleServiceRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YlePublicationEvent {
    pub service: YleServiceRef,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YleProgram {
    pub id: String,
    #[serde(default)]
    pub title: YleLocalized,
    #[serde(default)]
    pub part_of_season: Option<YleSeason>,
    #[serde(default)]
    pub part_of_series: Option<YleSeries>,
    #[serde(default)]
    pub episode_number: Option<i32>,
    #[serde(default)]
    pub publication_event: Vec<YlePublicationEvent>,
    #[serde(default)]
    pub image: Option<YleImage>,
}

/// `0` means "no number" in the Yle catalog.
fn sanitize_number(num: Option<i32>) -> Option<i32> {
    match num {
        Some(0) | None => None,
        other => other,
    }
}

impl YleProgram {
    /// A program is watchable iff it has an areena publication event whose
    /// start time is at or before `now`.
    #[must_use]
    pub fn is_available(&self, now: DateTime<Utc>) -> bool {
        self.publication_event
            .iter()
            .any(|event| event.service.id == AREENA_SERVICE_ID && event.start_time <= now)
    }

    /// Start time of the first areena publication event, if any.
    #[must_use]
    pub fn available_from(&self) -> Option<DateTime<Utc>> {
        self.publication_event
            .iter()
            .find(|event| event.service.id == AREENA_SERVICE_ID)
            .map(|event| event.start_time)
    }

    #[must_use]
    pub fn episode(&self) -> Option<i32> {
        sanitize_number(self.episode_number)
    }

    /// Season number preference: explicit season association on the item,
    /// else the first season listed on the parent series, else none.
    #[must_use]
    pub fn season(&self) -> Option<i32> {
        if let Some(season) = &self.part_of_season {
            return sanitize_number(season.season_number);
        }
        self.part_of_series
            .as_ref()
            .and_then(|series| series.season.as_ref())
            .and_then(|seasons| seasons.first())
            .and_then(|season| sanitize_number(season.season_number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(service: &str, start: DateTime<Utc>) -> YlePublicationEvent {
        YlePublicationEvent {
            service: YleServiceRef { id: service.to_string() },
            start_time: start,
        }
    }

    fn program() -> YleProgram {
        YleProgram {
            id: "1-111".to_string(),
            title: YleLocalized { fi: "Ohjelma".to_string() },
            part_of_season: None,
            part_of_series: None,
            episode_number: None,
            publication_event: Vec::new(),
            image: None,
        }
    }

    #[test]
    fn test_availability_requires_areena_event_in_the_past() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let past = Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let mut p = program();
        assert!(!p.is_available(now));

        p.publication_event = vec![event("yle-tv1", past)];
        assert!(!p.is_available(now));

        p.publication_event = vec![event(AREENA_SERVICE_ID, future)];
        assert!(!p.is_available(now));

        p.publication_event = vec![event(AREENA_SERVICE_ID, past)];
        assert!(p.is_available(now));
        assert_eq!(p.available_from(), Some(past));
    }

    #[test]
    fn test_episode_zero_normalizes_to_none() {
        let mut p = program();
        p.episode_number = Some(0);
        assert_eq!(p.episode(), None);

        p.episode_number = Some(3);
        assert_eq!(p.episode(), Some(3));

        p.episode_number = None;
        assert_eq!(p.episode(), None);
    }

    #[test]
    fn test_season_preference_order() {
        let mut p = program();
        assert_eq!(p.season(), None);

        // Fall back to the first season listed on the parent series.
        p.part_of_series = Some(YleSeries {
            id: "1-222".to_string(),
            title: YleLocalized::default(),
            image: None,
            season: Some(vec![
                YleSeason { season_number: Some(2) },
                YleSeason { season_number: Some(5) },
            ]),
        });
        assert_eq!(p.season(), Some(2));

        // Explicit season association wins.
        p.part_of_season = Some(YleSeason { season_number: Some(4) });
        assert_eq!(p.season(), Some(4));

        // Zero normalizes to none even on the explicit association.
        p.part_of_season = Some(YleSeason { season_number: Some(0) });
        assert_eq!(p.season(), None);
    }

    #[test]
    fn test_image_url_template() {
        let image = YleImage { id: Some("13-1-123".to_string()), available: true };
        assert_eq!(
            image.url().as_deref(),
            Some("http://images.cdn.yle.fi/image/upload/13-1-123.jpg")
        );

        let unavailable = YleImage { id: Some("13-1-123".to_string()), available: false };
        assert_eq!(unavailable.url(), None);

        let missing_id = YleImage { id: None, available: true };
        assert_eq!(missing_id.url(), None);
    }
}
