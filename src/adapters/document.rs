use crate::domain::ports::{DocumentHead, ScrollBehavior, Viewport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// 記憶體中的 `<head>`；終端前端與匯出器都用它產生 meta 標籤
#[derive(Debug, Clone, Default)]
pub struct InMemoryHead {
    tags: Vec<MetaTag>,
}

impl InMemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[MetaTag] {
        &self.tags
    }

    pub fn count(&self, name: &str) -> usize {
        self.tags.iter().filter(|tag| tag.name == name).count()
    }

    pub fn content(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.name == name)
            .map(|tag| tag.content.as_str())
    }
}

impl DocumentHead for InMemoryHead {
    fn has_meta(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == name)
    }

    fn meta_entries(&self) -> Vec<(&str, &str)> {
        self.tags
            .iter()
            .map(|tag| (tag.name.as_str(), tag.content.as_str()))
            .collect()
    }

    fn append_meta(&mut self, name: &str, content: &str) {
        self.tags.push(MetaTag {
            name: name.to_string(),
            content: content.to_string(),
        });
    }

    fn remove_meta(&mut self, name: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.name != name);
        self.tags.len() != before
    }
}

/// 只記錄捲動請求的視窗
#[derive(Debug, Clone, Default)]
pub struct RecordingViewport {
    scrolls: Vec<ScrollBehavior>,
}

impl RecordingViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scrolls(&self) -> &[ScrollBehavior] {
        &self.scrolls
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        tracing::trace!("Viewport scroll to top ({:?})", behavior);
        self.scrolls.push(behavior);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_meta_reports_change() {
        let mut head = InMemoryHead::new();
        assert!(!head.remove_meta("robots"));

        head.append_meta("robots", "noindex, nofollow");
        head.append_meta("viewport", "width=device-width");
        assert!(head.has_meta("robots"));
        assert!(head.remove_meta("robots"));
        assert_eq!(head.count("robots"), 0);
        assert_eq!(head.tags().len(), 1);
    }
}
