use serde::Serialize;
use serde::de::DeserializeOwned;

use super::keys::Collection;
use crate::fixtures;
use crate::models::{Club, Event, Post, Request, User};

/// 可按集合整体持久化的记录类型
pub trait Record: Serialize + DeserializeOwned + Clone {
    const COLLECTION: Collection;

    /// 集合内唯一的记录ID
    fn id(&self) -> &str;

    /// 集合缺失或损坏时使用的种子数据
    fn seed() -> Vec<Self>;
}

impl Record for Club {
    const COLLECTION: Collection = Collection::Clubs;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        fixtures::clubs()
    }
}

impl Record for Post {
    const COLLECTION: Collection = Collection::Posts;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        fixtures::posts()
    }
}

impl Record for Request {
    const COLLECTION: Collection = Collection::Requests;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        fixtures::requests()
    }
}

impl Record for Event {
    const COLLECTION: Collection = Collection::Events;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        fixtures::events()
    }
}

impl Record for User {
    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        fixtures::users()
    }
}
