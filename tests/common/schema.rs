use serde::Deserialize;
use sorm::query::QueryTable;
use sorm::relation;
use sorm::types::RecordId;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub id: RecordId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PartialCompany {
    pub id: Option<RecordId>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub age: i64,
    pub company: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PartialUser {
    pub id: Option<RecordId>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub company: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: RecordId,
    pub title: String,
    pub author: RecordId,
    #[serde(default)]
    pub tags: Vec<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PartialPost {
    pub id: Option<RecordId>,
    pub title: Option<String>,
    pub author: Option<RecordId>,
    #[serde(default)]
    pub tags: Vec<RecordId>,
}

impl QueryTable for Company {
    type Partial = PartialCompany;
    const TABLE_NAME: &'static str = "company";
    const FIELD_NAMES: &'static [&'static str] = &["id", "title"];
}

impl QueryTable for User {
    type Partial = PartialUser;
    const TABLE_NAME: &'static str = "user";
    const FIELD_NAMES: &'static [&'static str] = &["id", "name", "age", "company"];
}

impl QueryTable for Post {
    type Partial = PartialPost;
    const TABLE_NAME: &'static str = "post";
    const FIELD_NAMES: &'static [&'static str] = &["id", "title", "author", "tags"];
}

relation!(pub PostAuthor: Post => User, One, "author");
relation!(pub PostTags: Post => Company, Many, "tags");
relation!(pub UserCompany: User => Company, OptionalOne, "company");
