use serde::{Deserialize, Serialize};

/// Historia tal como la devuelve `GET /stories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub name: String,
    pub description: String,
    pub photo_url: String,
    pub created_at: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl Story {
    pub fn has_location(&self) -> bool {
        self.lat.is_some() && self.lon.is_some()
    }

    /// Fecha corta "2024-01-31" a partir de `createdAt` (ISO 8601)
    pub fn created_date(&self) -> &str {
        self.created_at.split('T').next().unwrap_or(self.created_at.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoriesResponse {
    pub error: bool,
    pub message: String,
    #[serde(default)]
    pub list_story: Vec<Story>,
}

/// Filtro de `GET /stories?location=`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryFilter {
    All,
    WithLocation,
}

impl StoryFilter {
    pub fn location_param(&self) -> u8 {
        match self {
            StoryFilter::All => 0,
            StoryFilter::WithLocation => 1,
        }
    }
}

/// Marcador enviado al mapa
#[derive(Debug, Clone, Serialize)]
pub struct StoryMarker<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub lat: f64,
    pub lon: f64,
}

pub fn markers_for(stories: &[Story]) -> Vec<StoryMarker<'_>> {
    stories
        .iter()
        .filter(|s| s.has_location())
        .filter_map(|s| {
            Some(StoryMarker {
                id: &s.id,
                name: &s.name,
                description: &s.description,
                lat: s.lat?,
                lon: s.lon?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "error": false,
        "message": "Stories fetched successfully",
        "listStory": [
            {
                "id": "story-1",
                "name": "Dimas",
                "description": "Lorem ipsum",
                "photoUrl": "https://example.com/1.jpg",
                "createdAt": "2022-01-08T06:34:18.598Z",
                "lat": -10.212,
                "lon": -16.002
            },
            {
                "id": "story-2",
                "name": "Ayu",
                "description": "Tanpa lokasi",
                "photoUrl": "https://example.com/2.jpg",
                "createdAt": "2022-01-09T06:34:18.598Z",
                "lat": null,
                "lon": null
            }
        ]
    }"#;

    #[test]
    fn parses_story_list_with_optional_coordinates() {
        let response: StoriesResponse = serde_json::from_str(SAMPLE).unwrap();
        assert!(!response.error);
        assert_eq!(response.list_story.len(), 2);
        assert!(response.list_story[0].has_location());
        assert!(!response.list_story[1].has_location());
        assert_eq!(response.list_story[0].created_date(), "2022-01-08");
    }

    #[test]
    fn only_located_stories_become_markers() {
        let response: StoriesResponse = serde_json::from_str(SAMPLE).unwrap();
        let markers = markers_for(&response.list_story);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id, "story-1");
        assert_eq!(markers[0].lat, -10.212);
    }

    #[test]
    fn filter_maps_to_location_query_param() {
        assert_eq!(StoryFilter::All.location_param(), 0);
        assert_eq!(StoryFilter::WithLocation.location_param(), 1);
    }

    #[test]
    fn missing_list_story_defaults_to_empty() {
        let response: StoriesResponse =
            serde_json::from_str(r#"{"error": true, "message": "Missing authentication"}"#).unwrap();
        assert!(response.error);
        assert!(response.list_story.is_empty());
    }
}
