//! Integration tests for content image commands over a fully wired context.

mod support;

use folio_api::commands::{delete_image, list_images, upload_images};
use folio_domain::constants::DEFAULT_THUMBNAIL_URL;
use folio_domain::ImageUpload;
use support::{png, TestApp};

#[tokio::test(flavor = "multi_thread")]
async fn uploaded_images_are_stored_and_listed_newest_first() {
    let app = TestApp::new().await;

    let first = upload_images(&app.ctx, vec![png("diagram.png")]).await.expect("upload");
    let second = upload_images(&app.ctx, vec![png("screen..shot.png"), ImageUpload::new("empty.png", Vec::new())])
        .await
        .expect("upload");

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1, "files without content are skipped");
    assert!(app.blob_path(&first[0]).is_file());
    assert!(app.blob_path(&second[0]).is_file());

    let listed = list_images(&app.ctx).await.expect("list");
    assert_eq!(listed, vec![second[0].clone(), first[0].clone()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_blob_and_listing() {
    let app = TestApp::new().await;
    let urls = upload_images(&app.ctx, vec![png("a..b.png")]).await.expect("upload");
    let path = app.blob_path(&urls[0]);

    delete_image(&app.ctx, urls[0].clone()).await.expect("delete");

    assert!(!path.exists());
    assert!(list_images(&app.ctx).await.expect("list").is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn default_image_cannot_be_deleted() {
    let app = TestApp::new().await;

    let err = delete_image(&app.ctx, DEFAULT_THUMBNAIL_URL.to_string()).await.unwrap_err();

    assert_eq!(err.status, 400);
}

#[tokio::test(flavor = "multi_thread")]
async fn foreign_url_is_rejected_as_internal_error() {
    let app = TestApp::new().await;

    let err = delete_image(&app.ctx, "https://elsewhere.test/images/x.png".to_string())
        .await
        .unwrap_err();

    assert_eq!(err.status, 500);
    assert_eq!(err.message, "internal server error");
}
