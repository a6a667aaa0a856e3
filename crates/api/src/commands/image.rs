//! Content image commands

use folio_domain::ImageUpload;

use super::response::ApiResult;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Upload images for portfolio content and return their URLs in order.
/// Files without content are skipped.
pub async fn upload_images(ctx: &AppContext, images: Vec<ImageUpload>) -> ApiResult<Vec<String>> {
    execute_command("image::upload_images", async { ctx.images.upload_images(&images).await })
        .await
}

/// Delete a content image by URL. The default thumbnail is refused.
pub async fn delete_image(ctx: &AppContext, image_url: String) -> ApiResult<()> {
    execute_command("image::delete_image", async { ctx.images.delete_image(&image_url).await })
        .await
}

pub async fn list_images(ctx: &AppContext) -> ApiResult<Vec<String>> {
    execute_command("image::list_images", async { ctx.images.list_images().await }).await
}
