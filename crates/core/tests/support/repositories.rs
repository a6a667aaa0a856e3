//! In-memory repository implementations for testing
//!
//! One shared state backs every repository port so that cross-entity
//! queries (author name search, comment writer names) behave like the
//! database adapters.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use folio_core::{
    CommentRepository, ImageRepository, PortfolioFilter, PortfolioRepository, SkillRepository, ThumbnailRepository,
    UserRepository,
};
use folio_domain::{
    CommentId, CommentView, ContentImage, FolioError, NewComment, Page, PageRequest, Portfolio, PortfolioDraft,
    PortfolioId, PortfolioSkill, PortfolioSort, Result as DomainResult, Skill, SkillId, Thumbnail, User,
    UserComment, UserId,
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    portfolios: Vec<Portfolio>,
    skills: Vec<Skill>,
    comments: Vec<UserComment>,
    images: Vec<ContentImage>,
    next_id: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Case-insensitive get-or-create for each name, in order.
    fn link_skills(&mut self, names: &[String]) -> Vec<PortfolioSkill> {
        names
            .iter()
            .map(|name| {
                if let Some(skill) = self.skills.iter().find(|s| s.name.eq_ignore_ascii_case(name)) {
                    return PortfolioSkill::from(skill.clone());
                }
                let skill = Skill { id: self.next_id(), name: name.clone() };
                self.skills.push(skill.clone());
                PortfolioSkill::from(skill)
            })
            .collect()
    }
}

/// Clock that advances one second per generated timestamp.
fn tick(seq: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(seq)
}

/// In-memory implementation of every core repository port.
#[derive(Default)]
pub struct InMemoryRepositories {
    state: Mutex<State>,
    fail_inserts: AtomicBool,
    fail_updates: AtomicBool,
    fail_thumbnail_swaps: AtomicBool,
    /// Image records fail once this many have been stored
    image_record_limit: Mutex<Option<usize>>,
    comment_queries: AtomicUsize,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user with the given ID and display name.
    pub fn with_user(self, id: UserId, name: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.users.push(User {
                id,
                email: format!("{name}@example.com"),
                name: name.to_string(),
                profile_img: Some(format!("https://img.example/{id}.png")),
                git_link: None,
                blog_link: None,
                about: None,
                created_at: tick(0),
            });
            state.next_id = state.next_id.max(id);
        }
        self
    }

    pub fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::SeqCst);
    }

    pub fn fail_updates(&self) {
        self.fail_updates.store(true, Ordering::SeqCst);
    }

    pub fn fail_thumbnail_swaps(&self) {
        self.fail_thumbnail_swaps.store(true, Ordering::SeqCst);
    }

    pub fn limit_image_records(&self, limit: usize) {
        *self.image_record_limit.lock().unwrap() = Some(limit);
    }

    pub fn image_urls(&self) -> Vec<String> {
        self.state.lock().unwrap().images.iter().map(|i| i.image_url.clone()).collect()
    }

    pub fn portfolio(&self, id: PortfolioId) -> Option<Portfolio> {
        self.state.lock().unwrap().portfolios.iter().find(|p| p.id == id).cloned()
    }

    pub fn portfolio_count(&self) -> usize {
        self.state.lock().unwrap().portfolios.len()
    }

    pub fn skill_count(&self) -> usize {
        self.state.lock().unwrap().skills.len()
    }

    pub fn comment(&self, id: CommentId) -> Option<UserComment> {
        self.state.lock().unwrap().comments.iter().find(|c| c.id == id).cloned()
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    /// Number of comment listing queries executed
    pub fn comment_queries(&self) -> usize {
        self.comment_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for InMemoryRepositories {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl SkillRepository for InMemoryRepositories {
    async fn find_id_by_name(&self, name: &str) -> DomainResult<Option<SkillId>> {
        let state = self.state.lock().unwrap();
        Ok(state.skills.iter().find(|s| s.name.eq_ignore_ascii_case(name)).map(|s| s.id))
    }
}

#[async_trait]
impl ThumbnailRepository for InMemoryRepositories {
    async fn find_by_portfolio(&self, portfolio_id: PortfolioId) -> DomainResult<Option<Thumbnail>> {
        let state = self.state.lock().unwrap();
        Ok(state.portfolios.iter().find(|p| p.id == portfolio_id).map(|p| p.thumbnail.clone()))
    }

    async fn replace(&self, portfolio_id: PortfolioId, image_url: &str) -> DomainResult<Thumbnail> {
        if self.fail_thumbnail_swaps.load(Ordering::SeqCst) {
            return Err(FolioError::Database("thumbnail swap failed".into()));
        }
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let portfolio = state
            .portfolios
            .iter_mut()
            .find(|p| p.id == portfolio_id)
            .ok_or(FolioError::PortfolioNotFound(portfolio_id))?;
        portfolio.thumbnail = Thumbnail { id, portfolio_id, image_url: image_url.to_string() };
        Ok(portfolio.thumbnail.clone())
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryRepositories {
    async fn find_by_id(&self, id: PortfolioId) -> DomainResult<Option<Portfolio>> {
        Ok(self.portfolio(id))
    }

    async fn insert(&self, draft: PortfolioDraft) -> DomainResult<Portfolio> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(FolioError::Database("insert failed".into()));
        }
        let mut state = self.state.lock().unwrap();
        let skills = state.link_skills(&draft.skill_names);
        let id = state.next_id();
        let thumbnail_id = state.next_id();
        let portfolio = Portfolio {
            id,
            owner_id: draft.owner_id,
            title: draft.title,
            description: draft.description,
            content: draft.content,
            git_link: draft.git_link,
            distribution_link: draft.distribution_link,
            view_count: 0,
            likes_count: 0,
            skills,
            thumbnail: Thumbnail { id: thumbnail_id, portfolio_id: id, image_url: draft.thumbnail_url },
            created_at: tick(id),
            updated_at: tick(id),
        };
        state.portfolios.push(portfolio.clone());
        Ok(portfolio)
    }

    async fn update(&self, portfolio: &Portfolio, skill_names: &[String]) -> DomainResult<Portfolio> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(FolioError::Database("update failed".into()));
        }
        let mut state = self.state.lock().unwrap();
        if !state.portfolios.iter().any(|p| p.id == portfolio.id) {
            return Err(FolioError::PortfolioNotFound(portfolio.id));
        }
        let skills = state.link_skills(skill_names);
        let seq = state.next_id();
        let stored = state
            .portfolios
            .iter_mut()
            .find(|p| p.id == portfolio.id)
            .ok_or(FolioError::PortfolioNotFound(portfolio.id))?;
        stored.title = portfolio.title.clone();
        stored.description = portfolio.description.clone();
        stored.content = portfolio.content.clone();
        stored.git_link = portfolio.git_link.clone();
        stored.distribution_link = portfolio.distribution_link.clone();
        stored.skills = skills;
        stored.updated_at = tick(seq);
        Ok(stored.clone())
    }

    async fn delete(&self, id: PortfolioId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.portfolios.len();
        state.portfolios.retain(|p| p.id != id);
        Ok(state.portfolios.len() != before)
    }

    async fn increment_views(&self, id: PortfolioId) -> DomainResult<Option<i64>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.portfolios.iter_mut().find(|p| p.id == id).map(|p| {
            p.view_count = p.view_count.saturating_add(1);
            p.view_count
        }))
    }

    async fn adjust_likes(&self, id: PortfolioId, delta: i64) -> DomainResult<Option<i64>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.portfolios.iter_mut().find(|p| p.id == id).map(|p| {
            p.likes_count = p.likes_count.saturating_add(delta).max(0);
            p.likes_count
        }))
    }

    async fn find_page(
        &self,
        filter: PortfolioFilter,
        sort: PortfolioSort,
        page: PageRequest,
    ) -> DomainResult<Page<Portfolio>> {
        let state = self.state.lock().unwrap();
        let mut matched: Vec<Portfolio> = state
            .portfolios
            .iter()
            .filter(|p| match &filter {
                PortfolioFilter::All => true,
                PortfolioFilter::Owner(owner) => p.owner_id == *owner,
                PortfolioFilter::AuthorName(name) => {
                    state.users.iter().any(|u| u.id == p.owner_id && &u.name == name)
                }
                PortfolioFilter::TitleContains(term) => p.title.contains(term.as_str()),
                PortfolioFilter::Skill(skill_id) => p.skills.iter().any(|s| s.skill_id == *skill_id),
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| {
            let key = |p: &Portfolio| match sort {
                PortfolioSort::CreatedAt => p.created_at.timestamp_millis(),
                PortfolioSort::Views => p.view_count,
                PortfolioSort::Likes => p.likes_count,
            };
            key(b).cmp(&key(a)).then(b.id.cmp(&a.id))
        });

        let total = matched.len() as u64;
        let content = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .collect();
        Ok(Page::new(content, page, total))
    }
}

impl InMemoryRepositories {
    fn comment_page(
        &self,
        page: PageRequest,
        keep: impl Fn(&UserComment) -> bool,
    ) -> Page<CommentView> {
        self.comment_queries.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        let mut matched: Vec<&UserComment> = state.comments.iter().filter(|c| keep(c)).collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matched.len() as u64;
        let content = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .map(|c| {
                let writer = state.users.iter().find(|u| u.id == c.writer_id);
                CommentView::new(
                    c.clone(),
                    writer.map(|u| u.name.clone()).unwrap_or_default(),
                    writer.and_then(|u| u.profile_img.clone()),
                )
            })
            .collect();
        Page::new(content, page, total)
    }
}

#[async_trait]
impl CommentRepository for InMemoryRepositories {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<UserComment>> {
        Ok(self.comment(id))
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<UserComment> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let stored = UserComment {
            id,
            recipient_id: comment.recipient_id,
            writer_id: comment.writer_id,
            content: comment.content,
            status: comment.status,
            created_at: tick(id),
            updated_at: tick(id),
        };
        state.comments.push(stored.clone());
        Ok(stored)
    }

    async fn update_content(
        &self,
        id: CommentId,
        content: &str,
    ) -> DomainResult<Option<UserComment>> {
        let mut state = self.state.lock().unwrap();
        let seq = state.next_id();
        Ok(state.comments.iter_mut().find(|c| c.id == id).map(|c| {
            c.content = content.to_string();
            c.updated_at = tick(seq);
            c.clone()
        }))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.comments.len();
        state.comments.retain(|c| c.id != id);
        Ok(state.comments.len() != before)
    }

    async fn find_by_recipient(
        &self,
        recipient_id: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<CommentView>> {
        Ok(self.comment_page(page, |c| c.recipient_id == recipient_id))
    }

    async fn find_by_writer(
        &self,
        writer_id: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<CommentView>> {
        Ok(self.comment_page(page, |c| c.writer_id == writer_id))
    }
}

#[async_trait]
impl ImageRepository for InMemoryRepositories {
    async fn insert(&self, image_url: &str) -> DomainResult<ContentImage> {
        let limit = *self.image_record_limit.lock().unwrap();
        let mut state = self.state.lock().unwrap();
        if limit.is_some_and(|limit| state.images.len() >= limit) {
            return Err(FolioError::Database("image record rejected".into()));
        }
        let id = state.next_id();
        let image = ContentImage { id, image_url: image_url.to_string(), created_at: tick(id) };
        state.images.push(image.clone());
        Ok(image)
    }

    async fn delete_by_url(&self, image_url: &str) -> DomainResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.images.len();
        state.images.retain(|i| i.image_url != image_url);
        Ok(state.images.len() != before)
    }

    async fn list(&self) -> DomainResult<Vec<ContentImage>> {
        let state = self.state.lock().unwrap();
        let mut images = state.images.clone();
        images.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(images)
    }
}
