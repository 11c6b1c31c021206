use folio_model::{BlogPost, Video};

use super::format_date;
use crate::catalog::Catalog;

pub const CONTENT_HEADING: &str = "Content & Tutorials";
pub const CONTENT_INTRO: &str = "Sharing knowledge through video tutorials and in-depth blog posts. Learn DevOps concepts, best practices, and hands-on implementations.";

/// Which list the content section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentTab {
    #[default]
    Videos,
    Blogs,
}

impl ContentTab {
    pub const ALL: [ContentTab; 2] = [ContentTab::Videos, ContentTab::Blogs];

    pub fn label(self) -> &'static str {
        match self {
            ContentTab::Videos => "YouTube Videos",
            ContentTab::Blogs => "Blog Posts",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VideoCard<'a> {
    pub video: &'a Video,
}

impl<'a> VideoCard<'a> {
    pub fn views_label(&self) -> String {
        format!("{} views", self.video.views)
    }

    pub fn length_label(&self) -> String {
        self.video.length.to_string()
    }

    pub fn date_label(&self) -> String {
        format_date(self.video.published_at)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BlogCard<'a> {
    pub post: &'a BlogPost,
}

impl<'a> BlogCard<'a> {
    pub fn views_label(&self) -> String {
        format!("{} views", self.post.views)
    }

    pub fn read_time_label(&self) -> String {
        self.post.read_time.to_string()
    }

    pub fn date_label(&self) -> String {
        format_date(self.post.published_at)
    }
}

/// Cards for one tab.
#[derive(Debug, Clone)]
pub enum ContentCards<'a> {
    Videos(Vec<VideoCard<'a>>),
    Blogs(Vec<BlogCard<'a>>),
}

impl ContentCards<'_> {
    pub fn len(&self) -> usize {
        match self {
            ContentCards::Videos(cards) => cards.len(),
            ContentCards::Blogs(cards) => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ContentSection<'a> {
    videos: &'a [Video],
    blogs: &'a [BlogPost],
}

impl<'a> ContentSection<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::from_lists(catalog.videos(), catalog.blogs())
    }

    /// Content lists that do not come from the home catalog, such as the
    /// related content on a skill page.
    pub fn from_lists(videos: &'a [Video], blogs: &'a [BlogPost]) -> Self {
        Self { videos, blogs }
    }

    pub fn cards(&self, tab: ContentTab) -> ContentCards<'a> {
        match tab {
            ContentTab::Videos => {
                ContentCards::Videos(self.videos.iter().map(|video| VideoCard { video }).collect())
            }
            ContentTab::Blogs => {
                ContentCards::Blogs(self.blogs.iter().map(|post| BlogCard { post }).collect())
            }
        }
    }

    pub fn video_cards(&self) -> impl Iterator<Item = VideoCard<'a>> + 'a {
        self.videos.iter().map(|video| VideoCard { video })
    }

    pub fn blog_cards(&self) -> impl Iterator<Item = BlogCard<'a>> + 'a {
        self.blogs.iter().map(|post| BlogCard { post })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_default_to_videos() {
        let catalog = Catalog::builtin().unwrap();
        let section = ContentSection::new(&catalog);
        assert_eq!(ContentTab::default(), ContentTab::Videos);
        assert!(matches!(section.cards(ContentTab::default()), ContentCards::Videos(_)));
        assert_eq!(section.cards(ContentTab::Blogs).len(), 3);
    }

    #[test]
    fn cards_format_counters_like_the_site() {
        let catalog = Catalog::builtin().unwrap();
        let section = ContentSection::new(&catalog);

        let video = section.video_cards().next().unwrap();
        assert_eq!(video.views_label(), "2.3K views");
        assert_eq!(video.length_label(), "15:32");
        assert_eq!(video.date_label(), "Jan 15, 2024");

        let blog = section.blog_cards().nth(1).unwrap();
        assert_eq!(blog.read_time_label(), "12 min read");
        assert_eq!(blog.views_label(), "2.8K views");
    }
}
