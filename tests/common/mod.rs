#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use blog_api::domain::entities::{
    Article, ArticlePatch, Comment, CommentPatch, NewArticle, NewComment, NewUser, User, UserPatch,
};
use blog_api::domain::repositories::{ArticleRepository, CommentRepository, UserRepository};
use blog_api::error::AppError;
use blog_api::routes::{app_router, build_router};
use blog_api::state::AppState;
use chrono::{TimeZone, Utc};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the three tables.
///
/// Ids start at 1 per table, foreign keys are checked on insert and deletes
/// cascade the same way the migrations declare.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    articles: Mutex<Vec<Article>>,
    comments: Mutex<Vec<Comment>>,
    next_ids: Mutex<[i64; 3]>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn next_id(&self, table: usize) -> i64 {
        let mut ids = self.next_ids.lock().unwrap();
        ids[table] += 1;
        ids[table]
    }

    fn fk_violation(table: &str, column: &str) -> AppError {
        AppError::internal(format!(
            "insert or update on table \"{table}\" violates foreign key constraint \"{table}_{column}_fkey\""
        ))
    }

    pub fn seed_user(&self, name: &str) -> User {
        let user = User {
            id: self.next_id(0),
            name: name.to_string(),
            writer: true,
            admin: false,
            password: "password".to_string(),
            date_created: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn seed_article(&self, title: &str, authorid: i64) -> Article {
        let article = Article {
            id: self.next_id(1),
            title: title.to_string(),
            content: format!("{title} content"),
            modified: Utc.with_ymd_and_hms(2018, 3, 3, 0, 0, 0).unwrap(),
            authorid,
        };
        self.articles.lock().unwrap().push(article.clone());
        article
    }

    pub fn seed_comment(&self, content: &str, articleid: i64, commentorid: i64) -> Comment {
        let comment = Comment {
            id: self.next_id(2),
            content: content.to_string(),
            articleid,
            commentorid,
            date_created: Utc::now(),
        };
        self.comments.lock().unwrap().push(comment.clone());
        comment
    }

    pub fn article_count(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = User {
            id: self.next_id(0),
            name: new_user.name,
            writer: new_user.writer,
            admin: new_user.admin,
            password: new_user.password,
            date_created: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<(), AppError> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == id) {
            if let Some(name) = patch.name {
                user.name = name;
            }
            if let Some(writer) = patch.writer {
                user.writer = writer;
            }
            if let Some(admin) = patch.admin {
                user.admin = admin;
            }
            if let Some(password) = patch.password {
                user.password = password;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.users.lock().unwrap().retain(|u| u.id != id);

        let mut articles = self.articles.lock().unwrap();
        articles.retain(|a| a.authorid != id);
        let remaining: Vec<i64> = articles.iter().map(|a| a.id).collect();

        self.comments
            .lock()
            .unwrap()
            .retain(|c| c.commentorid != id && remaining.contains(&c.articleid));
        Ok(())
    }
}

#[async_trait]
impl ArticleRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Article>, AppError> {
        Ok(self.articles.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn create(&self, new_article: NewArticle) -> Result<Article, AppError> {
        let author_exists = self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.id == new_article.authorid);
        if !author_exists {
            return Err(Self::fk_violation("articles", "authorid"));
        }

        let article = Article {
            id: self.next_id(1),
            title: new_article.title,
            content: new_article.content,
            modified: new_article.modified,
            authorid: new_article.authorid,
        };
        self.articles.lock().unwrap().push(article.clone());
        Ok(article)
    }

    async fn update(&self, id: i64, patch: ArticlePatch) -> Result<(), AppError> {
        if let Some(article) = self
            .articles
            .lock()
            .unwrap()
            .iter_mut()
            .find(|a| a.id == id)
        {
            if let Some(title) = patch.title {
                article.title = title;
            }
            if let Some(content) = patch.content {
                article.content = content;
            }
            if let Some(modified) = patch.modified {
                article.modified = modified;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.articles.lock().unwrap().retain(|a| a.id != id);
        self.comments.lock().unwrap().retain(|c| c.articleid != id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Comment>, AppError> {
        Ok(self.comments.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let article_exists = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.id == new_comment.articleid);
        if !article_exists {
            return Err(Self::fk_violation("comments", "articleid"));
        }

        let commentor_exists = self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.id == new_comment.commentorid);
        if !commentor_exists {
            return Err(Self::fk_violation("comments", "commentorid"));
        }

        let comment = Comment {
            id: self.next_id(2),
            content: new_comment.content,
            articleid: new_comment.articleid,
            commentorid: new_comment.commentorid,
            date_created: Utc::now(),
        };
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn update(&self, id: i64, patch: CommentPatch) -> Result<(), AppError> {
        if let Some(comment) = self
            .comments
            .lock()
            .unwrap()
            .iter_mut()
            .find(|c| c.id == id)
        {
            if let Some(content) = patch.content {
                comment.content = content;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.comments.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

/// Repository whose every call fails as if the pool were exhausted.
pub struct FailingStore;

fn pool_timeout<T>() -> Result<T, AppError> {
    Err(AppError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl UserRepository for FailingStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        pool_timeout()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<User>, AppError> {
        pool_timeout()
    }

    async fn create(&self, _new_user: NewUser) -> Result<User, AppError> {
        pool_timeout()
    }

    async fn update(&self, _id: i64, _patch: UserPatch) -> Result<(), AppError> {
        pool_timeout()
    }

    async fn delete(&self, _id: i64) -> Result<(), AppError> {
        pool_timeout()
    }
}

#[async_trait]
impl ArticleRepository for FailingStore {
    async fn list(&self) -> Result<Vec<Article>, AppError> {
        pool_timeout()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Article>, AppError> {
        pool_timeout()
    }

    async fn create(&self, _new_article: NewArticle) -> Result<Article, AppError> {
        pool_timeout()
    }

    async fn update(&self, _id: i64, _patch: ArticlePatch) -> Result<(), AppError> {
        pool_timeout()
    }

    async fn delete(&self, _id: i64) -> Result<(), AppError> {
        pool_timeout()
    }
}

#[async_trait]
impl CommentRepository for FailingStore {
    async fn list(&self) -> Result<Vec<Comment>, AppError> {
        pool_timeout()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Comment>, AppError> {
        pool_timeout()
    }

    async fn create(&self, _new_comment: NewComment) -> Result<Comment, AppError> {
        pool_timeout()
    }

    async fn update(&self, _id: i64, _patch: CommentPatch) -> Result<(), AppError> {
        pool_timeout()
    }

    async fn delete(&self, _id: i64) -> Result<(), AppError> {
        pool_timeout()
    }
}

pub fn create_test_state(store: Arc<MemoryStore>, expose_error_details: bool) -> AppState {
    AppState::new(store.clone(), store.clone(), store, expose_error_details)
}

pub fn make_server(store: Arc<MemoryStore>) -> TestServer {
    let app = build_router(create_test_state(store, true), &[]);
    TestServer::new(app).unwrap()
}

/// Server over the production stack, trailing-slash normalisation included.
pub fn make_normalized_server(store: Arc<MemoryStore>) -> TestServer {
    let app = app_router(create_test_state(store, true), &[]);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn make_failing_server(expose_error_details: bool) -> TestServer {
    let store = Arc::new(FailingStore);
    let state = AppState::new(store.clone(), store.clone(), store, expose_error_details);
    TestServer::new(build_router(state, &[])).unwrap()
}
