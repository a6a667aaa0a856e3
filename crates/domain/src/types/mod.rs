//! Domain types and models

pub mod actor;
pub mod attachment;
pub mod comment;
pub mod page;
pub mod patch;
pub mod portfolio;
pub mod skill;
pub mod user;

pub use actor::Actor;
pub use attachment::{ContentImage, ImageUpload, Thumbnail};
pub use comment::{CommentPatch, CommentStatus, CommentView, NewComment, UserComment};
pub use page::{Page, PageInfo, PageRequest, ResponseList};
pub use patch::Patch;
pub use portfolio::{
    NewPortfolio, Portfolio, PortfolioDraft, PortfolioPatch, PortfolioSort, SearchCategory,
};
pub use skill::{PortfolioSkill, Skill};
pub use user::{NewUser, User};

pub type UserId = i64;
pub type PortfolioId = i64;
pub type ThumbnailId = i64;
pub type ImageId = i64;
pub type SkillId = i64;
pub type CommentId = i64;
