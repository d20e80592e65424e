mod common;

use common::MockClient;
use common::schema::{Company, Post, PostAuthor, PostTags, User, UserCompany};
use serde_json::json;
use sorm::Sorm;
use sorm::error::SormError;
use sorm::query::{Fetched, FindMany};
use sorm::types::RecordId;

fn post_row() -> serde_json::Value {
    json!({
        "id": "post:1",
        "title": "Hello",
        "author": {
            "id": "user:1",
            "name": "Ada",
            "age": 36,
            "company": { "id": "company:1", "title": "Acme" }
        },
        "tags": [
            { "id": "company:2", "title": "News" },
            { "id": "company:3", "title": "Tech" }
        ]
    })
}

#[tokio::test]
async fn without_includes_relations_stay_references() {
    let db = Sorm::new(MockClient::new().rows(json!([
        { "id": "post:1", "title": "Hello", "author": "user:1", "tags": ["company:2"] }
    ])));

    let posts = db.fetch_many(FindMany::<Post>::new()).await.unwrap();

    assert_eq!(db.client().unwrap().last(), "SELECT * FROM post;");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author, RecordId::new("user", "1"));
    assert_eq!(posts[0].tags, [RecordId::new("company", "2")]);
}

#[tokio::test]
async fn nested_includes_resolve() {
    let db = Sorm::new(MockClient::new().rows(json!([post_row()])));

    let query = FindMany::<Post>::new()
        .filter("title", "Hello")
        .order_by(["-title"])
        .limit(10)
        .with(PostAuthor::include().with(UserCompany::include()))
        .with(PostTags::include());
    let posts = db.fetch_many(query).await.unwrap();

    assert_eq!(
        db.client().unwrap().last(),
        r#"SELECT * FROM post WHERE title = <string>"Hello" ORDER BY title DESC LIMIT 10 FETCH author, author.company, tags;"#
    );

    let post = &posts[0];
    assert_eq!(post.title, "Hello");
    assert_eq!(post.author, RecordId::new("user", "1"));

    let author: &Fetched<User, _> = post.get::<PostAuthor, _>();
    assert_eq!(author.name, "Ada");
    assert_eq!(author.company, Some(RecordId::new("company", "1")));

    let company: &Option<Fetched<Company>> = author.get::<UserCompany, _>();
    assert_eq!(company.as_ref().map(|c| c.title.as_str()), Some("Acme"));

    let tags: &Vec<Fetched<Company>> = post.get::<PostTags, _>();
    let titles: Vec<&str> = tags.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["News", "Tech"]);
}

#[tokio::test]
async fn partial_columns_decode_into_partial_models() {
    let db = Sorm::new(MockClient::new().rows(json!([{
        "id": "post:1",
        "title": "Hello",
        "author": { "id": "user:1", "name": "Ada" }
    }])));

    let query = FindMany::<Post>::new()
        .columns(["title"])
        .with(PostAuthor::include().columns(["name"]));
    let posts = db.fetch_many(query).await.unwrap();

    assert_eq!(
        db.client().unwrap().last(),
        "SELECT title, author.name, author.id FROM post FETCH author;"
    );

    let post = &posts[0];
    assert_eq!(post.title.as_deref(), Some("Hello"));
    assert_eq!(post.author, Some(RecordId::new("user", "1")));
    let author = post.get::<PostAuthor, _>();
    assert_eq!(author.name.as_deref(), Some("Ada"));
    assert_eq!(author.age, None);
}

#[tokio::test]
async fn fetch_one_limits_and_decodes() {
    let db = Sorm::new(MockClient::new().rows(json!([post_row()])));

    let post = db
        .fetch_one(
            FindMany::<Post>::new()
                .filter("id", "post:1")
                .with(PostTags::include()),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        db.client().unwrap().last(),
        r#"SELECT * FROM post WHERE id = <record>"post:1" LIMIT 1 FETCH tags;"#
    );
    assert_eq!(post.get::<PostTags, _>().len(), 2);
    assert_eq!(
        post.tags,
        [RecordId::new("company", "2"), RecordId::new("company", "3")]
    );
}

#[tokio::test]
async fn fetch_one_keeps_ordering_and_offset() {
    let db = Sorm::new(MockClient::new().rows(json!([
        { "id": "user:2", "name": "Grace", "age": 45 }
    ])));

    let oldest = db
        .fetch_one(FindMany::<User>::new().order_by(["-age"]))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        db.client().unwrap().last(),
        "SELECT * FROM user ORDER BY age DESC LIMIT 1;"
    );
    assert_eq!(oldest.name, "Grace");

    db.fetch_one(FindMany::<User>::new().order_by(["name"]).offset(3).limit(20))
        .await
        .unwrap();
    assert_eq!(
        db.client().unwrap().last(),
        "SELECT * FROM user ORDER BY name ASC START 3 LIMIT 1;"
    );
}

#[tokio::test]
async fn fetch_one_without_rows_is_none() {
    let db = Sorm::new(MockClient::new());
    let user = db.fetch_one(FindMany::<User>::new()).await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn unexpected_row_shape_is_mapping_error() {
    let db = Sorm::new(MockClient::new().rows(json!([{ "id": "post:1" }])));

    let err = db.fetch_many(FindMany::<Post>::new()).await.unwrap_err();
    assert!(matches!(err, SormError::Mapping(_)));
}
