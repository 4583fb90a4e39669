use chrono::NaiveDate;

#[derive(Clone, Debug, PartialEq)]
pub struct Story {
    pub id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    /// ISO `YYYY-MM-DD`.
    pub date: &'static str,
    pub href: &'static str,
    pub image_src: &'static str,
    pub featured: bool,
}

const TOP_STORIES: &[Story] = &[
    Story {
        id: "story-1",
        category: "Pre-academy",
        title: "Manchester United Win the Christmas Cup",
        author: "Controllah Gabi",
        date: "2025-12-22",
        href: "/stories/pre-academy-grind",
        image_src: "/img/pakistaniplayer.jpg",
        featured: true,
    },
    Story {
        id: "story-2",
        category: "Foundation Phase",
        title: "Manchester City Lech Cup Winners",
        author: "Controllah Gabi",
        date: "2025-12-12",
        href: "/stories/decision-speed",
        image_src: "/img/masonnews3.jpg",
        featured: false,
    },
    Story {
        id: "story-3",
        category: "Pathway",
        title: "Scholarships Explained: What Actually Changes At U16",
        author: "The Phases",
        date: "2025-12-20",
        href: "/stories/u16-scholarship-explained",
        image_src: "/img/charlieburnet.jpg",
        featured: false,
    },
    Story {
        id: "story-4",
        category: "Scouting",
        title: "What Scouts Notice In The First 5 Minutes (And What They Don’t)",
        author: "The Phases",
        date: "2025-12-19",
        href: "/stories/scouts-first-5-minutes",
        image_src: "/img/stories/story-4.jpg",
        featured: false,
    },
];

pub const MAX_ROWS: usize = 4;

pub fn top_stories() -> Vec<Story> {
    TOP_STORIES.to_vec()
}

/// First story flagged featured (or simply the first one) plus up to
/// `MAX_ROWS` of the others, in their original order.
pub fn split_featured(stories: &[Story]) -> Option<(&Story, Vec<&Story>)> {
    let featured = stories
        .iter()
        .find(|s| s.featured)
        .or_else(|| stories.first())?;
    let rest = stories
        .iter()
        .filter(|s| s.id != featured.id)
        .take(MAX_ROWS)
        .collect();
    Some((featured, rest))
}

/// `2025-12-22` -> `22 Dec 2025`. Unparseable dates are shown as written.
pub fn display_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &'static str, featured: bool) -> Story {
        Story {
            id,
            featured,
            ..TOP_STORIES[1].clone()
        }
    }

    #[test]
    fn flagged_story_is_featured_and_excluded_from_rows() {
        let stories = top_stories();
        let (featured, rest) = split_featured(&stories).unwrap();
        assert_eq!(featured.id, "story-1");
        let ids: Vec<&str> = rest.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["story-2", "story-3", "story-4"]);
    }

    #[test]
    fn falls_back_to_first_story() {
        let stories = vec![story("a", false), story("b", false)];
        let (featured, rest) = split_featured(&stories).unwrap();
        assert_eq!(featured.id, "a");
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn first_flagged_wins_and_rows_are_capped() {
        let stories: Vec<Story> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .enumerate()
            .map(|(i, id)| story(*id, i == 2 || i == 4))
            .collect();
        let (featured, rest) = split_featured(&stories).unwrap();
        assert_eq!(featured.id, "c");
        let ids: Vec<&str> = rest.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["a", "b", "d", "e"]);
    }

    #[test]
    fn empty_list_has_nothing_to_show() {
        assert!(split_featured(&[]).is_none());
    }

    #[test]
    fn dates_render_editorially() {
        assert_eq!(display_date("2025-12-22"), "22 Dec 2025");
        assert_eq!(display_date("2025-01-05"), "05 Jan 2025");
        assert_eq!(display_date("soon"), "soon");
    }
}
