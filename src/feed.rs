use chrono::Utc;
use uuid::Uuid;

use crate::fixtures::CLUB_GRADIENTS;
use crate::models::{Club, Post, User, Visibility};
use crate::storage::DataStore;
use crate::validation::{self, FieldErrors};

/// 动态排序方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedSort {
    /// 最新发布在前
    #[default]
    Latest,
    /// 点赞数多的在前
    Popular,
}

/// 动态列表查询
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    /// 只显示某个社团的帖子
    pub club_id: Option<String>,
    pub sort: FeedSort,
}

/// 新帖子的输入
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub club_id: String,
    pub content: String,
    pub visibility: Visibility,
    /// 使用社团的占位渐变作为配图
    pub with_image: bool,
}

/// 帖子操作
pub struct FeedOperations {
    store: DataStore,
}

impl FeedOperations {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    pub fn list(&self, query: &FeedQuery) -> Vec<Post> {
        let mut posts: Vec<Post> = self.store.read();

        if let Some(club_id) = query.club_id.as_deref() {
            posts.retain(|p| p.club_id.as_deref() == Some(club_id));
        }

        match query.sort {
            FeedSort::Latest => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            FeedSort::Popular => posts.sort_by(|a, b| b.likes.cmp(&a.likes)),
        }
        posts
    }

    /// 以作者身份发帖，作者必须是所选社团的成员，新帖插入到最前面
    pub fn create_post(&self, author: &User, draft: &PostDraft) -> Result<Post, FieldErrors> {
        let mut errors = FieldErrors::new();
        let content = validation::post_content(&draft.content, &mut errors);

        let clubs: Vec<Club> = self.store.read();
        let position = clubs
            .iter()
            .position(|c| c.id == draft.club_id)
            .filter(|_| author.is_member_of(&draft.club_id));
        let Some(index) = position else {
            errors.insert("club", "Please select a club");
            return Err(errors);
        };
        errors.into_result(())?;
        let club = &clubs[index];

        let post = Post {
            id: format!("post-{}", Uuid::new_v4().simple()),
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            author_role: "member".into(),
            author_avatar: author.avatar.clone(),
            club_id: Some(club.id.clone()),
            club_name: club.name.clone(),
            content,
            visibility: draft.visibility,
            image: draft
                .with_image
                .then(|| CLUB_GRADIENTS[index % CLUB_GRADIENTS.len()].to_string()),
            likes: 0,
            is_liked: false,
            comments: 0,
            created_at: Utc::now(),
        };

        self.store.prepend(post.clone());
        tracing::info!("Post {} created in {}", post.id, club.id);
        Ok(post)
    }

    /// 切换点赞状态，返回更新后的帖子
    pub fn toggle_like(&self, post_id: &str) -> Option<Post> {
        self.store.update(post_id, |post: &mut Post| {
            if post.is_liked {
                post.likes = post.likes.saturating_sub(1);
            } else {
                post.likes += 1;
            }
            post.is_liked = !post.is_liked;
        })
    }

    /// 编辑内容和可见范围，其余字段不变
    ///
    /// 帖子不存在时返回 `Ok(None)`。
    pub fn edit_post(
        &self,
        post_id: &str,
        content: &str,
        visibility: Visibility,
    ) -> Result<Option<Post>, FieldErrors> {
        let mut errors = FieldErrors::new();
        let content = validation::post_content(content, &mut errors);
        errors.into_result(())?;

        Ok(self.store.update(post_id, |post: &mut Post| {
            post.content = content;
            post.visibility = visibility;
        }))
    }

    pub fn delete_post(&self, post_id: &str) -> bool {
        let removed = self.store.remove::<Post>(post_id);
        if removed {
            tracing::info!("Post {} deleted", post_id);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::Role;
    use crate::storage::MemoryStore;

    fn feed() -> FeedOperations {
        let store = DataStore::new(MemoryStore::new());
        store.initialize();
        FeedOperations::new(store)
    }

    fn draft(club_id: &str, content: &str) -> PostDraft {
        PostDraft {
            club_id: club_id.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    #[test]
    fn latest_and_popular_ordering() {
        let feed = feed();
        let latest = feed.list(&FeedQuery::default());
        assert_eq!(latest[0].id, "post-1");
        assert!(latest.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        let popular = feed.list(&FeedQuery {
            sort: FeedSort::Popular,
            ..Default::default()
        });
        assert_eq!(popular[0].id, "post-2");
        assert!(popular.windows(2).all(|w| w[0].likes >= w[1].likes));
    }

    #[test]
    fn filters_by_club() {
        let feed = feed();
        let posts = feed.list(&FeedQuery {
            club_id: Some("robotics".into()),
            ..Default::default()
        });
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].club_name, "Robotics Club");
    }

    #[test]
    fn create_post_snapshots_author_and_club() {
        let feed = feed();
        let author = fixtures::demo_user(Role::Student);
        let post = feed
            .create_post(
                &author,
                &PostDraft {
                    with_image: true,
                    ..draft("robotics", "  Who is coming to the open lab?  ")
                },
            )
            .unwrap();

        assert_eq!(post.content, "Who is coming to the open lab?");
        assert_eq!(post.author_name, "Jane Doe");
        assert_eq!(post.club_name, "Robotics Club");
        assert_eq!(post.image.as_deref(), Some(CLUB_GRADIENTS[1]));
        assert_eq!(feed.list(&FeedQuery::default())[0], post);
    }

    #[test]
    fn create_post_requires_content_and_own_club() {
        let feed = feed();
        let author = fixtures::demo_user(Role::Student);

        let errors = feed.create_post(&author, &draft("debate", "tiny")).unwrap_err();
        assert_eq!(errors.get("content"), Some("Post must be at least 10 characters"));
        assert_eq!(errors.get("club"), Some("Please select a club"));

        let errors = feed
            .create_post(&author, &draft("", "Long enough to be a post"))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(feed.list(&FeedQuery::default()).len(), fixtures::posts().len());
    }

    #[test]
    fn toggle_like_round_trip() {
        let feed = feed();
        let liked = feed.toggle_like("post-1").unwrap();
        assert!(liked.is_liked);
        assert_eq!(liked.likes, 25);

        let unliked = feed.toggle_like("post-1").unwrap();
        assert!(!unliked.is_liked);
        assert_eq!(unliked.likes, 24);

        assert!(feed.toggle_like("post-missing").is_none());
    }

    #[test]
    fn edit_changes_only_content_and_visibility() {
        let feed = feed();
        let original = fixtures::posts().remove(0);
        let edited = feed
            .edit_post("post-1", " Registration closes Friday! ", Visibility::Private)
            .unwrap()
            .unwrap();

        assert_eq!(edited.content, "Registration closes Friday!");
        assert_eq!(edited.visibility, Visibility::Private);
        assert_eq!(edited.likes, original.likes);
        assert_eq!(edited.created_at, original.created_at);

        assert!(feed.edit_post("post-1", "short", Visibility::Public).is_err());
        assert_eq!(
            feed.edit_post("post-missing", "Long enough content", Visibility::Public),
            Ok(None)
        );
    }

    #[test]
    fn delete_removes_post() {
        let feed = feed();
        assert!(feed.delete_post("post-3"));
        assert!(!feed.delete_post("post-3"));
        assert!(
            feed.list(&FeedQuery::default())
                .iter()
                .all(|p| p.id != "post-3")
        );
    }
}
