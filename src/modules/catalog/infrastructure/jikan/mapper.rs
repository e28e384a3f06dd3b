//! Conversion from Jikan wire models to detail-view domain entities

use super::models::{Anime, AnimeCharacterEdge, Images, RecommendationEdge};
use crate::modules::detail_view::domain::{
    AnimeDetail, AnimeId, CastEntry, RecommendationEntry,
};
use crate::shared::errors::{AppError, AppResult};

pub struct JikanMapper;

impl JikanMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a Jikan anime record to the domain detail entity
    pub fn map_detail(&self, source: Anime) -> AppResult<AnimeDetail> {
        let title = source
            .title
            .or(source.title_english)
            .ok_or_else(|| {
                AppError::MappingError(format!("Anime {} has no title", source.mal_id))
            })?;

        let genres = source
            .genres
            .unwrap_or_default()
            .into_iter()
            .map(|genre| genre.name)
            .collect();

        Ok(AnimeDetail {
            title,
            score: source.score,
            episodes: source.episodes,
            status: source.status,
            kind: source.r#type,
            genres,
            aired: source.aired.and_then(|aired| aired.string),
            duration: source.duration,
            synopsis: source.synopsis,
            trailer_embed_url: source.trailer.and_then(|trailer| trailer.embed_url),
            poster_url: source.images.as_ref().and_then(Self::large_or_default_url),
            popularity: source.popularity,
        })
    }

    /// Map a character edge to a cast entry
    pub fn map_cast_entry(&self, source: AnimeCharacterEdge) -> CastEntry {
        CastEntry {
            character_image_url: source
                .character
                .images
                .as_ref()
                .and_then(Self::default_url),
            character_name: source.character.name,
            role: source.role,
        }
    }

    /// Map a recommendation edge to a recommendation entry
    pub fn map_recommendation(&self, source: RecommendationEdge) -> RecommendationEntry {
        RecommendationEntry {
            id: AnimeId::new(source.entry.mal_id),
            image_url: source.entry.images.as_ref().and_then(Self::default_url),
            title: source.entry.title,
        }
    }

    fn large_or_default_url(images: &Images) -> Option<String> {
        let jpg = images.jpg.as_ref()?;
        jpg.large_image_url.clone().or_else(|| jpg.image_url.clone())
    }

    fn default_url(images: &Images) -> Option<String> {
        images.jpg.as_ref()?.image_url.clone()
    }
}

impl Default for JikanMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::infrastructure::jikan::models::*;

    fn minimal_anime() -> Anime {
        Anime {
            mal_id: 1,
            url: None,
            images: None,
            trailer: None,
            title: Some("Cowboy Bebop".to_string()),
            title_english: None,
            r#type: Some("TV".to_string()),
            episodes: Some(26),
            status: Some("Finished Airing".to_string()),
            aired: None,
            duration: None,
            score: Some(8.75),
            popularity: Some(43),
            synopsis: None,
            genres: None,
        }
    }

    #[test]
    fn maps_detail_with_genres_in_order() {
        let mut anime = minimal_anime();
        anime.genres = Some(vec![
            MalEntity {
                mal_id: 1,
                r#type: "anime".to_string(),
                name: "Action".to_string(),
                url: String::new(),
            },
            MalEntity {
                mal_id: 24,
                r#type: "anime".to_string(),
                name: "Sci-Fi".to_string(),
                url: String::new(),
            },
        ]);

        let detail = JikanMapper::new().map_detail(anime).unwrap();
        assert_eq!(detail.genres, vec!["Action", "Sci-Fi"]);
        assert_eq!(detail.title, "Cowboy Bebop");
    }

    #[test]
    fn missing_title_is_a_mapping_error() {
        let mut anime = minimal_anime();
        anime.title = None;
        let result = JikanMapper::new().map_detail(anime);
        assert!(matches!(result, Err(AppError::MappingError(_))));
    }

    #[test]
    fn english_title_is_a_fallback() {
        let mut anime = minimal_anime();
        anime.title = None;
        anime.title_english = Some("Cowboy Bebop".to_string());
        let detail = JikanMapper::new().map_detail(anime).unwrap();
        assert_eq!(detail.title, "Cowboy Bebop");
    }

    #[test]
    fn trailer_and_aired_flatten_to_strings() {
        let mut anime = minimal_anime();
        anime.trailer = Some(Trailer {
            youtube_id: Some("abc".to_string()),
            url: None,
            embed_url: Some("https://www.youtube.com/embed/abc".to_string()),
        });
        anime.aired = Some(Aired {
            from: None,
            to: None,
            string: Some("Apr 3, 1998 to Apr 24, 1999".to_string()),
        });

        let detail = JikanMapper::new().map_detail(anime).unwrap();
        assert_eq!(
            detail.trailer_embed_url.as_deref(),
            Some("https://www.youtube.com/embed/abc")
        );
        assert_eq!(
            detail.aired.as_deref(),
            Some("Apr 3, 1998 to Apr 24, 1999")
        );
        assert!(detail.has_trailer());
    }

    #[test]
    fn poster_prefers_large_image() {
        let mut anime = minimal_anime();
        anime.images = Some(Images {
            jpg: Some(ImageUrls {
                image_url: Some("small.jpg".to_string()),
                small_image_url: None,
                large_image_url: Some("large.jpg".to_string()),
            }),
            webp: None,
        });
        let detail = JikanMapper::new().map_detail(anime).unwrap();
        assert_eq!(detail.poster_url.as_deref(), Some("large.jpg"));
    }

    #[test]
    fn maps_cast_entry_without_images() {
        let edge = AnimeCharacterEdge {
            character: MalEntityWithImages {
                mal_id: 1,
                url: None,
                images: None,
                name: "Spike Spiegel".to_string(),
            },
            role: "Main".to_string(),
        };
        let entry = JikanMapper::new().map_cast_entry(edge);
        assert_eq!(entry.character_name, "Spike Spiegel");
        assert_eq!(entry.role, "Main");
        assert!(entry.character_image_url.is_none());
    }

    #[test]
    fn maps_recommendation_identifier() {
        let edge = RecommendationEdge {
            entry: RecommendationTarget {
                mal_id: 205,
                url: None,
                images: None,
                title: "Samurai Champloo".to_string(),
            },
            votes: Some(120),
        };
        let entry = JikanMapper::new().map_recommendation(edge);
        assert_eq!(entry.id, AnimeId::new(205));
        assert_eq!(entry.title, "Samurai Champloo");
    }
}
