use chrono::NaiveDate;
use contracts::domain::a001_article::{
    ArticleListItem, ArticleListQuery, ArticleListResponse, ArticleStatus,
};
use contracts::domain::common::ChannelId;
use leptos::prelude::*;

/// Filter form of the article list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub channel_id: Option<ChannelId>,
    pub begin_pubdate: Option<NaiveDate>,
    pub end_pubdate: Option<NaiveDate>,
}

/// Server-paginated article list: applied filter, current page and the
/// last loaded page of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleListState {
    filter: ArticleFilter,
    page: u32,
    per_page: u32,
    items: Vec<ArticleListItem>,
    total_count: u64,
}

impl ArticleListState {
    pub fn new(per_page: u32) -> Self {
        Self {
            filter: ArticleFilter::default(),
            page: 1,
            per_page: per_page.max(1),
            items: Vec::new(),
            total_count: 0,
        }
    }

    pub fn filter(&self) -> &ArticleFilter {
        &self.filter
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn items(&self) -> &[ArticleListItem] {
        &self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u32 {
        let per_page = u64::from(self.per_page);
        self.total_count.div_ceil(per_page) as u32
    }

    pub fn to_query(&self) -> ArticleListQuery {
        ArticleListQuery {
            status: self.filter.status,
            channel_id: self.filter.channel_id,
            begin_pubdate: self.filter.begin_pubdate,
            end_pubdate: self.filter.end_pubdate,
            page: self.page,
            per_page: self.per_page,
        }
    }

    /// A new filter always starts from the first page
    pub fn apply_filter(&mut self, filter: ArticleFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_per_page(&mut self, per_page: u32) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    pub fn receive(&mut self, response: ArticleListResponse) {
        self.total_count = response.total_count;
        self.items = response.results;
    }

    /// Bookkeeping after a row was deleted on the server. Removing the last
    /// row of a page other than the first steps back one page.
    pub fn after_delete(&mut self) {
        if self.items.len() <= 1 && self.page > 1 {
            self.page -= 1;
        }
        self.total_count = self.total_count.saturating_sub(1);
    }
}

pub fn create_state() -> RwSignal<ArticleListState> {
    RwSignal::new(ArticleListState::new(crate::config::config().ui.default_page_size))
}
