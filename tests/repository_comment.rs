use blog_api::domain::entities::{CommentPatch, NewArticle, NewComment, NewUser};
use blog_api::domain::repositories::{ArticleRepository, CommentRepository, UserRepository};
use blog_api::infrastructure::persistence::{
    PgArticleRepository, PgCommentRepository, PgUserRepository,
};
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

/// Inserts a user and an article by them, returning `(user_id, article_id)`.
async fn seed(pool: &Arc<PgPool>) -> (i64, i64) {
    let user = PgUserRepository::new(pool.clone())
        .create(NewUser {
            name: "commentor".to_string(),
            writer: false,
            admin: false,
            password: "password".to_string(),
        })
        .await
        .unwrap();

    let article = PgArticleRepository::new(pool.clone())
        .create(NewArticle {
            title: "title".to_string(),
            content: "content".to_string(),
            modified: Utc::now(),
            authorid: user.id,
        })
        .await
        .unwrap();

    (user.id, article.id)
}

#[sqlx::test]
async fn test_create_and_update_comment(pool: PgPool) {
    let pool = Arc::new(pool);
    let (user_id, article_id) = seed(&pool).await;
    let repo = PgCommentRepository::new(pool);

    let comment = repo
        .create(NewComment {
            content: "Test new comment".to_string(),
            articleid: article_id,
            commentorid: user_id,
        })
        .await
        .unwrap();

    repo.update(
        comment.id,
        CommentPatch {
            content: Some("updated comment content".to_string()),
        },
    )
    .await
    .unwrap();

    let updated = repo.find_by_id(comment.id).await.unwrap().unwrap();
    assert_eq!(updated.content, "updated comment content");
    assert_eq!(updated.articleid, article_id);
    assert_eq!(updated.date_created, comment.date_created);
}

#[sqlx::test]
async fn test_deleting_user_removes_their_comments(pool: PgPool) {
    let pool = Arc::new(pool);
    let (user_id, article_id) = seed(&pool).await;
    let users = PgUserRepository::new(pool.clone());
    let comments = PgCommentRepository::new(pool);

    comments
        .create(NewComment {
            content: "first".to_string(),
            articleid: article_id,
            commentorid: user_id,
        })
        .await
        .unwrap();

    users.delete(user_id).await.unwrap();

    assert!(comments.list().await.unwrap().is_empty());
}
