//! Pure queries over the catalog snapshot.

use crate::model::{Catalog, Creator, CreatorId, Video, VideoId};

impl Catalog {
    /// Looks up a video by id.
    pub fn video(&self, id: VideoId) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    /// Looks up a creator by id.
    pub fn creator(&self, id: CreatorId) -> Option<&Creator> {
        self.creators.iter().find(|c| c.id == id)
    }

    /// Videos flagged for the trending row.
    pub fn trending(&self) -> Vec<&Video> {
        self.videos.iter().filter(|v| v.trending).collect()
    }

    /// Videos flagged for the new-releases row.
    pub fn new_releases(&self) -> Vec<&Video> {
        self.videos.iter().filter(|v| v.new).collect()
    }

    /// Case-insensitive substring search over title and creator display name.
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Video> {
        let needle = query.to_lowercase();
        self.videos
            .iter()
            .filter(|v| {
                v.title.to_lowercase().contains(&needle)
                    || v.creator.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Resolves the creator a video card should link to.
    ///
    /// The display name on the video is authoritative: a case-insensitive
    /// match on creator name or username wins over the record's declared
    /// `creator_id`, which tolerates stale ids in source data. The fallback
    /// id lookup only applies when no name matches.
    pub fn resolve_creator(&self, video: &Video) -> Option<&Creator> {
        self.creators
            .iter()
            .find(|c| {
                c.name.eq_ignore_ascii_case(&video.creator)
                    || c.username.eq_ignore_ascii_case(&video.creator)
            })
            .or_else(|| video.creator_id.and_then(|id| self.creator(id)))
    }

    /// Videos attributed to a creator, most-viewed first.
    ///
    /// Attribution matches on the declared `creator_id` or, as with card
    /// resolution, on a case-insensitive display-name match.
    pub fn videos_by(&self, creator: &Creator) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self
            .videos
            .iter()
            .filter(|v| {
                v.creator_id == Some(creator.id) || v.creator.eq_ignore_ascii_case(&creator.name)
            })
            .collect();
        videos.sort_by(|a, b| {
            parse_views(&b.views)
                .partial_cmp(&parse_views(&a.views))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        videos
    }

    /// Videos selected by the favorites set, in catalog order.
    pub fn favorites(&self, ids: &[VideoId]) -> Vec<&Video> {
        self.videos.iter().filter(|v| ids.contains(&v.id)).collect()
    }
}

/// Parses a display view count (`"890K"`, `"1.2M"`, `"15,300"`) into a
/// comparable number of views.
///
/// The leading decimal number is read the way `parseFloat` would (commas
/// terminate it, so they are stripped first), then a `K`/`M`/`B` suffix
/// scales it. Unparseable input counts as zero.
pub fn parse_views(text: &str) -> f64 {
    let cleaned = text.trim().replace(',', "");
    let digits_end = cleaned
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || (*c == '.' && !cleaned[..*i].contains('.')))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    let Ok(value) = cleaned[..digits_end].parse::<f64>() else {
        return 0.0;
    };
    let multiplier = match cleaned[digits_end..].trim_start().chars().next() {
        Some('k') | Some('K') => 1_000.0,
        Some('m') | Some('M') => 1_000_000.0,
        Some('b') | Some('B') => 1_000_000_000.0,
        _ => 1.0,
    };
    value * multiplier
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Category, Photo};

    fn video(id: u32, title: &str, creator: &str, views: &str) -> Video {
        Video {
            id: VideoId(id),
            title: title.to_string(),
            creator: creator.to_string(),
            creator_id: None,
            thumbnail: format!("https://img.example/{id}.jpg"),
            duration: "10:00".to_string(),
            views: views.to_string(),
            trending: false,
            new: false,
            video_url: format!("https://cdn.example/{id}.mp4"),
            desc: None,
        }
    }

    fn creator(id: u32, name: &str, username: &str) -> Creator {
        Creator {
            id: CreatorId(id),
            name: name.to_string(),
            username: username.to_string(),
            avatar: format!("https://img.example/avatar{id}.jpg"),
            cover: None,
            subscribers: "10K".to_string(),
            views: "1M".to_string(),
        }
    }

    fn sample_catalog() -> Catalog {
        let mut night_drive = video(1, "Night Drive", "Luna Vale", "1.2M");
        night_drive.trending = true;
        let mut morning_loop = video(2, "Morning Loop", "Atlas Rowe", "540K");
        morning_loop.new = true;
        // Stale id pointing at the wrong creator; the name should win.
        let mut misfiled = video(3, "Harbor Lights", "luna vale", "88K");
        misfiled.creator_id = Some(CreatorId(2));

        Catalog {
            videos: vec![night_drive, morning_loop, misfiled],
            categories: vec![Category {
                name: "Ambient".to_string(),
                image: "https://img.example/cat.jpg".to_string(),
            }],
            photos: vec![Photo {
                url: "https://img.example/p1.jpg".to_string(),
                title: "Dawn".to_string(),
                creator: "Luna Vale".to_string(),
            }],
            creators: vec![creator(1, "Luna Vale", "lunavale"), creator(2, "Atlas Rowe", "atlasrowe")],
        }
    }

    #[test]
    fn flag_filters_select_expected_rows() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.trending().iter().map(|v| v.id).collect::<Vec<_>>(),
            vec![VideoId(1)]
        );
        assert_eq!(
            catalog
                .new_releases()
                .iter()
                .map(|v| v.id)
                .collect::<Vec<_>>(),
            vec![VideoId(2)]
        );
    }

    #[test]
    fn search_matches_title_and_creator_case_insensitively() {
        let catalog = sample_catalog();
        let by_title: Vec<VideoId> = catalog.search("harbor").iter().map(|v| v.id).collect();
        assert_eq!(by_title, vec![VideoId(3)]);

        let by_creator: Vec<VideoId> = catalog.search("ATLAS").iter().map(|v| v.id).collect();
        assert_eq!(by_creator, vec![VideoId(2)]);

        assert_eq!(catalog.search("").len(), 3);
        assert!(catalog.search("no such thing").is_empty());
    }

    #[test]
    fn creator_resolution_prefers_name_match_over_stale_id() {
        let catalog = sample_catalog();
        let misfiled = catalog.video(VideoId(3)).expect("video");
        let resolved = catalog.resolve_creator(misfiled).expect("creator");
        assert_eq!(resolved.id, CreatorId(1));
    }

    #[test]
    fn creator_resolution_falls_back_to_declared_id() {
        let mut catalog = sample_catalog();
        catalog.videos.push({
            let mut v = video(4, "Untitled", "Ghost Name", "1K");
            v.creator_id = Some(CreatorId(2));
            v
        });
        let ghost = catalog.video(VideoId(4)).expect("video");
        assert_eq!(catalog.resolve_creator(ghost).expect("creator").id, CreatorId(2));
    }

    #[test]
    fn creator_videos_match_by_id_or_name_and_sort_by_views() {
        let catalog = sample_catalog();
        let luna = catalog.creator(CreatorId(1)).expect("creator");
        let ids: Vec<VideoId> = catalog.videos_by(luna).iter().map(|v| v.id).collect();
        // 1.2M ranks above 88K even though the raw leading floats would not.
        assert_eq!(ids, vec![VideoId(1), VideoId(3)]);
    }

    #[test]
    fn favorites_selection_preserves_catalog_order() {
        let catalog = sample_catalog();
        let ids: Vec<VideoId> = catalog
            .favorites(&[VideoId(3), VideoId(1)])
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![VideoId(1), VideoId(3)]);
    }

    #[test]
    fn parse_views_handles_suffixes_and_garbage() {
        assert_eq!(parse_views("1.2M"), 1_200_000.0);
        assert_eq!(parse_views("540K"), 540_000.0);
        assert_eq!(parse_views("2B"), 2_000_000_000.0);
        assert_eq!(parse_views("15,300"), 15_300.0);
        assert_eq!(parse_views(" 7 "), 7.0);
        assert_eq!(parse_views("n/a"), 0.0);
        assert_eq!(parse_views(""), 0.0);
    }

    #[test]
    fn catalog_parses_from_external_document() {
        let raw = r#"{
            "videos": [{
                "id": 9,
                "title": "Skyline",
                "creator": "Luna Vale",
                "creatorId": 1,
                "thumbnail": "https://img.example/9.jpg",
                "duration": "3:21",
                "views": "12K",
                "trending": true,
                "new": false,
                "videoUrl": "https://cdn.example/9.mp4",
                "desc": "City pass"
            }],
            "creators": [{
                "id": 1,
                "name": "Luna Vale",
                "username": "lunavale",
                "avatar": "https://img.example/a.jpg",
                "subscribers": "10K",
                "views": "1M"
            }]
        }"#;
        let catalog = Catalog::from_json(raw).expect("parse");
        assert_eq!(catalog.videos.len(), 1);
        assert_eq!(catalog.videos[0].creator_id, Some(CreatorId(1)));
        assert_eq!(catalog.videos[0].video_url, "https://cdn.example/9.mp4");
        assert!(catalog.categories.is_empty());
        assert!(Catalog::from_json("not json").is_err());
    }
}
