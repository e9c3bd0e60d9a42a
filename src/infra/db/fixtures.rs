//! Development fixtures loaded by the `seed` command.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use sea_orm::ColumnTrait;

use crate::config::{
    SeedConfig, FIXTURE_ARTICLE_DESCRIPTION, FIXTURE_COMMENT_CONTENT, FIXTURE_COUNT,
};
use crate::domain::{ArticleDraft, AuthorDraft, CategoryDraft, CommentDraft, NewUser, Password};
use crate::errors::AppResult;
use crate::infra::entities::{article, author, category, comment, user};
use crate::infra::UnitOfWork;

/// Counts of what a fixture run inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureReport {
    pub categories: usize,
    pub authors: usize,
    pub articles: usize,
    pub comments: usize,
    /// False when the admin email was already taken
    pub admin_created: bool,
}

/// Sample blog content plus one administrator.
pub struct Fixtures {
    admin: NewUser,
}

impl Fixtures {
    /// Hashes the configured admin password up front.
    pub fn from_config(seed: &SeedConfig) -> AppResult<Self> {
        let password = Password::new(seed.admin_password())?;
        Ok(Self {
            admin: NewUser::admin(seed.admin_email.clone(), password),
        })
    }

    /// Insert everything in a single transaction.
    pub async fn load<U: UnitOfWork>(self, uow: &U) -> AppResult<FixtureReport> {
        let admin = self.admin;

        let report = uow
            .transaction(|ctx| {
                Box::pin(async move {
                    let mut report = FixtureReport::default();

                    let mut category_ids = Vec::with_capacity(FIXTURE_COUNT);
                    for i in 0..FIXTURE_COUNT {
                        let draft = CategoryDraft {
                            name: Some(format!("Category{}", i)),
                        };
                        let model = ctx.insert(category::ActiveModel::from(draft)).await?;
                        category_ids.push(model.id);
                        report.categories += 1;
                    }

                    let mut article_ids = Vec::with_capacity(FIXTURE_COUNT);
                    for i in 0..FIXTURE_COUNT {
                        let author = ctx
                            .insert(author::ActiveModel::from(AuthorDraft {
                                firstname: Some(format!("Firstname{}", i)),
                                lastname: Some(format!("Lastname{}", i)),
                            }))
                            .await?;
                        report.authors += 1;

                        let article = ctx
                            .insert(article::ActiveModel::from(ArticleDraft {
                                name: Some(format!("Article{}", i)),
                                description: Some(FIXTURE_ARTICLE_DESCRIPTION.to_string()),
                                category: pick(&category_ids),
                                author: Some(author.id),
                            }))
                            .await?;
                        article_ids.push(article.id);
                        report.articles += 1;
                    }

                    for _ in 0..FIXTURE_COUNT {
                        ctx.insert(comment::ActiveModel::from(CommentDraft {
                            content: Some(FIXTURE_COMMENT_CONTENT.to_string()),
                            article: pick(&article_ids),
                        }))
                        .await?;
                        report.comments += 1;
                    }

                    let existing = ctx
                        .find_by::<user::Entity, _>(user::Column::Email.eq(admin.email.clone()))
                        .await?;
                    if existing.is_empty() {
                        ctx.insert(user::ActiveModel::from(admin)).await?;
                        report.admin_created = true;
                    } else {
                        tracing::warn!(email = %admin.email, "Admin user already exists, skipping");
                    }

                    Ok(report)
                })
            })
            .await?;

        tracing::info!(
            categories = report.categories,
            authors = report.authors,
            articles = report.articles,
            comments = report.comments,
            admin_created = report.admin_created,
            "Fixtures loaded"
        );

        Ok(report)
    }
}

/// Random element of `ids`, `None` when empty.
fn pick(ids: &[i32]) -> Option<i32> {
    if ids.is_empty() {
        return None;
    }
    // argon2 already re-exports OsRng; modulo bias is irrelevant for sample data
    let index = OsRng.next_u32() as usize % ids.len();
    ids.get(index).copied()
}
