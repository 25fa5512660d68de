//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use board_core::domain::{NewPost, NewUser, Page, PageRequest, Post, PostChanges, Sort, User};

use crate::validation::{Validate, Violations, is_not_blank, messages};

/// Request to create a user.
///
/// Fields are optional on the wire so that a missing or `null` value is a
/// validation failure rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub hobby: Option<String>,
}

impl Validate for CreateUserRequest {
    type Valid = NewUser;

    fn validate(self) -> Result<NewUser, Violations> {
        let mut violations = Violations::new();
        violations.check(is_not_blank(self.name.as_deref()), "name", messages::BLANK_NAME);
        match self.age {
            Some(age) => {
                violations.check(age >= 0, "age", messages::NEGATIVE_AGE);
            }
            None => violations.push("age", Some(messages::NULL_AGE.to_string())),
        }

        match (self.name, self.age) {
            (Some(name), Some(age)) if violations.is_empty() => {
                Ok(NewUser::new(name, age, self.hobby))
            }
            _ => Err(violations),
        }
    }
}

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub user_id: Option<i64>,
}

impl Validate for CreatePostRequest {
    type Valid = NewPost;

    fn validate(self) -> Result<NewPost, Violations> {
        let mut violations = Violations::new();
        violations
            .check(is_not_blank(self.title.as_deref()), "title", messages::BLANK_TITLE)
            .check(is_not_blank(self.content.as_deref()), "content", messages::BLANK_CONTENT)
            .check(self.user_id.is_some(), "userId", messages::NULL_USER_ID);

        match (self.title, self.content, self.user_id) {
            (Some(title), Some(content), Some(user_id)) if violations.is_empty() => {
                Ok(NewPost::new(user_id, title, content))
            }
            _ => Err(violations),
        }
    }
}

/// Request to replace a post's title and content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Validate for UpdatePostRequest {
    type Valid = PostChanges;

    fn validate(self) -> Result<PostChanges, Violations> {
        let mut violations = Violations::new();
        violations
            .check(is_not_blank(self.title.as_deref()), "title", messages::BLANK_TITLE)
            .check(is_not_blank(self.content.as_deref()), "content", messages::BLANK_CONTENT);

        match (self.title, self.content) {
            (Some(title), Some(content)) if violations.is_empty() => {
                Ok(PostChanges { title, content })
            }
            _ => Err(violations),
        }
    }
}

/// Query string of the post list: `?page=3&size=10&sort=createdAt,desc`.
///
/// `page` and `size` are read leniently. A value that is not a 32-bit
/// integer falls back to its default, a negative page reads as the first
/// page, and a size below one reads as `PageRequest::DEFAULT_SIZE`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
    pub sort: Option<String>,
}

/// Parses a paging parameter, reading negative values as zero.
fn paging_value(raw: Option<&str>) -> Option<u64> {
    let parsed: i32 = raw?.parse().ok()?;
    Some(u64::try_from(parsed).unwrap_or(0))
}

impl Validate for PageQuery {
    type Valid = PageRequest;

    fn validate(self) -> Result<PageRequest, Violations> {
        let sort = match self.sort.as_deref() {
            None | Some("") => Sort::default(),
            Some(expr) => expr.parse::<Sort>().map_err(|_| {
                let mut violations = Violations::new();
                violations.push("sort", Some(messages::UNSUPPORTED_SORT.to_string()));
                violations
            })?,
        };

        Ok(PageRequest::new(
            paging_value(self.page.as_deref()).unwrap_or(0),
            paging_value(self.size.as_deref()).unwrap_or(PageRequest::DEFAULT_SIZE),
            sort,
        ))
    }
}

/// Response containing a user's public information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub hobby: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
            hobby: user.hobby,
            created_at: user.created_at,
        }
    }
}

/// Post summary, used on create and in list pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl PostResponse {
    pub fn new(post: Post, author_name: String) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author_name,
            created_at: post.created_at,
        }
    }
}

/// Full post view, including the last update time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostDetailResponse {
    pub fn new(post: Post, author_name: String) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author_name,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// A page of results with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub is_empty: bool,
    pub total_pages: u64,
    pub total_elements: u64,
    pub content: Vec<T>,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            is_empty: page.is_empty(),
            total_pages: page.total_pages,
            total_elements: page.total_elements,
            content: page.content,
        }
    }
}
