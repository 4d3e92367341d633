//! Block id helpers and asset URL normalization.
//!
//! Records fetched from Notion reference assets in three shapes:
//! - Signed S3 URLs that expire and must be routed through the `signed/` proxy
//! - Relative `/image` or `/images` paths served from the canonical host
//! - Absolute external URLs, which are left alone
//!
//! Block ids appear both with dashes (`8-4-4-4-12`) and without. The helpers
//! in [`id`] convert between the two forms.
//!
//! # Example
//!
//! ```
//! use nast_url::{normalize_image_url, to_dash_id};
//!
//! assert_eq!(
//!     normalize_image_url("b1", "/images/emoji.png", None),
//!     "https://www.notion.so/images/emoji.png"
//! );
//! assert_eq!(
//!     to_dash_id("0eeee000ccccbbbbaaaa123450000000"),
//!     "0eeee000-cccc-bbbb-aaaa-123450000000"
//! );
//! ```

mod asset;
pub mod id;

pub use asset::{
    NOTION_HOST, is_relative_path, is_secure_url, normalize_file_url, normalize_image_url,
    to_local_anchor,
};
pub use id::{block_uri, is_valid_dash_id, to_dash_id, to_no_dash_id};
